//! Bounded log ring for the log screen
//!
//! Keeps the most recent handful of messages, each stamped with the
//! local time it arrived (or a placeholder before the first sync).
//! Oldest entries are evicted first; messages that do not fit a line
//! are truncated.

use core::fmt::Write;

use heapless::{Deque, String};

use crate::clock::civil::CivilTime;

/// Lines kept on screen
pub const MAX_LOG_LINES: usize = 5;

/// Maximum characters per line, timestamp prefix included
pub const LOG_LINE_LEN: usize = 48;

/// A bounded, timestamped message ring
#[derive(Debug)]
pub struct LogRing {
    entries: Deque<String<LOG_LINE_LEN>, MAX_LOG_LINES>,
}

impl Default for LogRing {
    fn default() -> Self {
        Self::new()
    }
}

impl LogRing {
    pub const fn new() -> Self {
        Self {
            entries: Deque::new(),
        }
    }

    /// Append a message, evicting the oldest entry if full
    ///
    /// `now` is the local time to stamp with; `None` renders the
    /// placeholder stamp used before the clock is first synced.
    pub fn push(&mut self, now: Option<&CivilTime>, msg: &str) {
        let mut line: String<LOG_LINE_LEN> = String::new();
        match now {
            Some(t) => {
                let _ = write!(line, "[{:02}:{:02}:{:02}] ", t.hour, t.minute, t.second);
            }
            None => {
                let _ = line.push_str("[--:--:--] ");
            }
        }
        // Truncate rather than drop a message that does not fit
        let room = LOG_LINE_LEN - line.len();
        let take = msg.len().min(room);
        let _ = line.push_str(&msg[..take]);

        if self.entries.is_full() {
            self.entries.pop_front();
        }
        let _ = self.entries.push_back(line);
    }

    /// Entries, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::civil::UtcInstant;

    #[test]
    fn test_placeholder_stamp() {
        let mut log = LogRing::new();
        log.push(None, "System booting...");
        assert_eq!(log.iter().next(), Some("[--:--:--] System booting..."));
    }

    #[test]
    fn test_timestamp_stamp() {
        let t = CivilTime::from_instant(UtcInstant::from_secs(1_751_238_000));
        let mut log = LogRing::new();
        log.push(Some(&t), "NTP sync OK");
        assert_eq!(log.iter().next(), Some("[23:00:00] NTP sync OK"));
    }

    #[test]
    fn test_eviction_keeps_newest() {
        let mut log = LogRing::new();
        for i in 0..7 {
            let mut msg: String<16> = String::new();
            let _ = write!(msg, "message {}", i);
            log.push(None, &msg);
        }
        assert_eq!(log.len(), MAX_LOG_LINES);
        // Oldest two were evicted
        assert_eq!(log.iter().next(), Some("[--:--:--] message 2"));
        assert_eq!(log.iter().last(), Some("[--:--:--] message 6"));
    }

    #[test]
    fn test_truncates_long_messages() {
        let mut log = LogRing::new();
        let long = "0123456789012345678901234567890123456789012345678901234567890";
        log.push(None, long);
        let entry = log.iter().next().unwrap();
        assert_eq!(entry.len(), LOG_LINE_LEN);
        assert!(entry.starts_with("[--:--:--] 0123456789"));
    }
}
