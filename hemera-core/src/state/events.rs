//! Input and system events

/// The three front buttons of the Inky Pack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Date/time screen (also forces a refresh when already there)
    A,
    /// Picture screen
    B,
    /// Log screen
    C,
}

impl Button {
    /// Short label for logging
    pub const fn name(self) -> &'static str {
        match self {
            Button::A => "A",
            Button::B => "B",
            Button::C => "C",
        }
    }
}

/// Events that can change the active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// WiFi association and the first time sync both succeeded
    BootComplete,
    /// A debounced button press
    Press(Button),
    /// WiFi association failed during boot
    WifiFailed,
    /// The first time sync failed during boot
    SyncFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_names() {
        assert_eq!(Button::A.name(), "A");
        assert_eq!(Button::B.name(), "B");
        assert_eq!(Button::C.name(), "C");
    }
}
