//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary,
//! so the form logic and its tests never depend on crossterm.

/// Keys the form and review screens react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character (already shifted)
    Char(char),
    /// Character with Ctrl held (Ctrl+s, Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

impl InputKey {
    /// Printable character carried by this key, if any
    pub fn printable(self) -> Option<char> {
        match self {
            InputKey::Char(c) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::CharCtrl('s'), InputKey::Char('s'));
    }

    #[test]
    fn test_printable() {
        assert_eq!(InputKey::Char('ã').printable(), Some('ã'));
        assert_eq!(InputKey::Char(' ').printable(), Some(' '));
        assert_eq!(InputKey::CharCtrl('s').printable(), None);
        assert_eq!(InputKey::Enter.printable(), None);
    }
}
