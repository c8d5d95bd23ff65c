#![forbid(unsafe_code)]

//! Commands produced by the adapter for the host application.

use padnav_core::Direction;

/// What a key press asks the application to do.
///
/// `Move` and `Confirm` drive the focus navigator. The rest are host-level
/// actions the adapter surfaces but does not act on: `Cancel` backs out of
/// the current view, `Compose` focuses the message composer, `Voice`
/// launches voice input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavCommand {
    Move(Direction),
    Confirm,
    Cancel,
    Compose,
    Voice,
}

impl NavCommand {
    /// The direction carried by a `Move`, if any.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Move(dir) => Some(dir),
            _ => None,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
