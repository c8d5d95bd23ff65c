#![forbid(unsafe_code)]

//! Key codes and modifiers for cursorless devices.
//!
//! The inventory is the key set of a feature-phone style handset: a D-pad,
//! Enter, Backspace, the two soft keys under the screen, and the `*`/`#`
//! keys of the numeric pad. Anything else arrives as [`KeyCode::Char`].

// ---------------------------------------------------------------------------
// KeyCode
// ---------------------------------------------------------------------------

/// A decoded key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyCode {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Backspace,
    /// Left soft key (below the screen).
    SoftLeft,
    /// Right soft key (below the screen).
    SoftRight,
    /// The `*` key of the numeric pad.
    Star,
    /// The `#` key of the numeric pad.
    Hash,
    /// Any other printable key.
    Char(char),
}

impl KeyCode {
    /// Fold the `Char` spellings of the pad keys into their dedicated
    /// codes, so platform adapters that only report characters still hit
    /// the default bindings.
    #[must_use]
    pub const fn normalized(self) -> Self {
        match self {
            Self::Char('*') => Self::Star,
            Self::Char('#') => Self::Hash,
            other => other,
        }
    }
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

bitflags::bitflags! {
    /// Modifier keys held during a press.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// A key press with its modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A press with no modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
        }
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::plain(code)
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_chars_normalize_to_dedicated_codes() {
        assert_eq!(KeyCode::Char('*').normalized(), KeyCode::Star);
        assert_eq!(KeyCode::Char('#').normalized(), KeyCode::Hash);
        assert_eq!(KeyCode::Char('q').normalized(), KeyCode::Char('q'));
        assert_eq!(KeyCode::Enter.normalized(), KeyCode::Enter);
    }

    #[test]
    fn plain_event_has_no_modifiers() {
        let e = KeyEvent::plain(KeyCode::Up);
        assert!(e.modifiers.is_empty());
        assert_eq!(KeyEvent::from(KeyCode::Up), e);
    }
}
