#![forbid(unsafe_code)]

//! Directional commands and the navigation state value.
//!
//! [`NavState`] is plain `Copy` data: every operation in
//! [`crate::navigator`] consumes a state and returns a new one, so two focus
//! regions on the same screen can never interfere through shared mutable
//! state.

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// A directional navigation command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Step to the following item, wrapping within the active group.
    Next,
    /// Step to the preceding item, wrapping within the active group.
    Previous,
    /// Jump to the first item of the following group.
    GroupNext,
    /// Jump to the first item of the preceding group.
    GroupPrevious,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Next,
        Direction::Previous,
        Direction::GroupNext,
        Direction::GroupPrevious,
    ];

    /// Returns the stable string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
            Self::GroupNext => "group-next",
            Self::GroupPrevious => "group-previous",
        }
    }
}

// ---------------------------------------------------------------------------
// NavState
// ---------------------------------------------------------------------------

/// Navigation state for one focus region.
///
/// `cursor` is `None` until the first directional input arrives; `suspended`
/// drops directional input while an asynchronous collection replacement is
/// in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavState {
    /// Currently focused index, or `None` when nothing has focus yet.
    pub cursor: Option<usize>,
    /// Whether directional input is currently ignored.
    pub suspended: bool,
}

impl NavState {
    /// Create an unfocused, unsuspended state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cursor: None,
            suspended: false,
        }
    }

    /// Whether any item has focus.
    #[inline]
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.cursor.is_some()
    }

    /// Copy of this state with the cursor moved.
    #[must_use]
    pub(crate) const fn with_cursor(self, cursor: usize) -> Self {
        Self {
            cursor: Some(cursor),
            suspended: self.suspended,
        }
    }

    /// Copy of this state with focus cleared.
    #[must_use]
    pub(crate) const fn unfocused(self) -> Self {
        Self {
            cursor: None,
            suspended: self.suspended,
        }
    }

    /// Copy of this state with input suspended. Idempotent.
    #[must_use]
    pub const fn suspended(self) -> Self {
        Self {
            cursor: self.cursor,
            suspended: true,
        }
    }

    /// Copy of this state with input resumed. Idempotent.
    #[must_use]
    pub const fn resumed(self) -> Self {
        Self {
            cursor: self.cursor,
            suspended: false,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_unfocused_and_live() {
        let s = NavState::new();
        assert_eq!(s.cursor, None);
        assert!(!s.suspended);
        assert!(!s.is_focused());
    }

    #[test]
    fn suspend_resume_are_idempotent() {
        let s = NavState::new().suspended();
        assert!(s.suspended);
        assert_eq!(s.suspended(), s);

        let r = s.resumed();
        assert!(!r.suspended);
        assert_eq!(r.resumed(), r);
    }

    #[test]
    fn suspend_preserves_cursor() {
        let s = NavState::new().with_cursor(3).suspended();
        assert_eq!(s.cursor, Some(3));
        assert_eq!(s.resumed().cursor, Some(3));
    }

    #[test]
    fn direction_round_trips_as_str() {
        for dir in Direction::ALL {
            assert!(!dir.as_str().is_empty());
        }
    }
}
