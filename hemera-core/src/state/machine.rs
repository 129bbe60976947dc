//! Screen state machine
//!
//! Mirrors the device's modes: boot, the three user screens, and the
//! two boot-failure screens. Error screens are sticky - A and B re-show
//! the error, C opens the log for details. A sync failure after boot is
//! non-fatal and does not change the screen; the device keeps showing
//! the previously known time.

use super::events::{Button, Event};

/// The screens the device can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Power-on: config load, WiFi association, first sync
    Boot,
    /// Main date/time screen
    DateTime,
    /// Placeholder picture screen
    Picture,
    /// Scrolling log screen
    Log,
    /// WiFi association failed at boot
    WifiError,
    /// First time sync failed at boot
    SyncError,
}

impl Screen {
    /// Is this one of the boot-failure screens?
    pub fn is_error(&self) -> bool {
        matches!(self, Screen::WifiError | Screen::SyncError)
    }

    /// Does this screen show the clock (and need minute-level refresh)?
    pub fn shows_time(&self) -> bool {
        matches!(self, Screen::DateTime)
    }

    /// Short label for logging
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Boot => "boot",
            Screen::DateTime => "date/time",
            Screen::Picture => "picture",
            Screen::Log => "log",
            Screen::WifiError => "wifi error",
            Screen::SyncError => "sync error",
        }
    }

    /// Process an event and return the next screen
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Screen::*;

        match (self, event) {
            // Boot transitions
            (Boot, BootComplete) => DateTime,
            (Boot, WifiFailed) => WifiError,
            (Boot, SyncFailed) => SyncError,

            // Error screens: C opens the log for details, A/B re-show
            // the error banner
            (WifiError | SyncError, Press(Button::C)) => Log,
            (WifiError, Press(_)) => WifiError,
            (SyncError, Press(_)) => SyncError,

            // Normal cycling between the user screens
            (DateTime | Picture | Log, Press(Button::A)) => DateTime,
            (DateTime | Picture | Log, Press(Button::B)) => Picture,
            (DateTime | Picture | Log, Press(Button::C)) => Log,

            // A sync failure after boot is non-fatal: stay put
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_to_datetime() {
        assert_eq!(Screen::Boot.transition(Event::BootComplete), Screen::DateTime);
    }

    #[test]
    fn test_boot_failures() {
        assert_eq!(Screen::Boot.transition(Event::WifiFailed), Screen::WifiError);
        assert_eq!(Screen::Boot.transition(Event::SyncFailed), Screen::SyncError);
        assert!(Screen::WifiError.is_error());
        assert!(Screen::SyncError.is_error());
    }

    #[test]
    fn test_button_cycling() {
        let screens = [Screen::DateTime, Screen::Picture, Screen::Log];
        for screen in screens {
            assert_eq!(screen.transition(Event::Press(Button::A)), Screen::DateTime);
            assert_eq!(screen.transition(Event::Press(Button::B)), Screen::Picture);
            assert_eq!(screen.transition(Event::Press(Button::C)), Screen::Log);
        }
    }

    #[test]
    fn test_error_screens_sticky() {
        assert_eq!(
            Screen::WifiError.transition(Event::Press(Button::A)),
            Screen::WifiError
        );
        assert_eq!(
            Screen::WifiError.transition(Event::Press(Button::C)),
            Screen::Log
        );
        assert_eq!(
            Screen::SyncError.transition(Event::Press(Button::B)),
            Screen::SyncError
        );
        assert_eq!(
            Screen::SyncError.transition(Event::Press(Button::C)),
            Screen::Log
        );
    }

    #[test]
    fn test_runtime_sync_failure_keeps_screen() {
        // After boot, a failed resync must not hijack the display
        assert_eq!(Screen::DateTime.transition(Event::SyncFailed), Screen::DateTime);
        assert_eq!(Screen::Picture.transition(Event::SyncFailed), Screen::Picture);
        assert_eq!(Screen::Log.transition(Event::SyncFailed), Screen::Log);
    }

    #[test]
    fn test_shows_time() {
        assert!(Screen::DateTime.shows_time());
        assert!(!Screen::Log.shows_time());
        assert!(!Screen::Picture.shows_time());
    }
}
