#![forbid(unsafe_code)]

//! Focus transitions: the pure step/confirm layer and a stateful
//! coordinator that owns one region's [`NavState`].
//!
//! The pure functions are the contract; [`FocusNavigator`] packages them
//! with event emission for renderers that want to be told about focus
//! changes instead of diffing indices.
//!
//! # Invariants
//!
//! 1. `step` never yields an out-of-range cursor on a non-empty collection.
//! 2. A suspended state absorbs every directional command unchanged.
//! 3. The first directional input on an unfocused state always lands on
//!    index 0, regardless of direction.
//! 4. `Next`/`Previous` never cross a group boundary; only group commands
//!    move between groups.
//! 5. No operation panics or allocates; all edge cases degrade to no-ops
//!    or `None` because these paths run inside host event handlers.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | Empty collection | `step` clears focus, `confirm` returns `None` |
//! | Cursor past a shrunk collection | Clamped to the last item first |
//! | Command while suspended | Dropped (state returned unchanged) |
//! | Command while unfocused | Focuses index 0 |

use tracing::{debug, trace};

use crate::collection::{FocusCollection, Group};
use crate::state::{Direction, NavState};

// ---------------------------------------------------------------------------
// Pure transitions
// ---------------------------------------------------------------------------

/// Compute the state following one directional command.
///
/// The collection is re-supplied on every call because it may have changed
/// size since the last one; a cursor left past the end by a deletion is
/// clamped before the move is applied.
#[must_use = "step returns the new state; it does not mutate the input"]
pub fn step<T>(
    state: NavState,
    collection: &FocusCollection<T>,
    direction: Direction,
) -> NavState {
    if state.suspended {
        trace!(direction = direction.as_str(), "directional input dropped: suspended");
        return state;
    }
    if collection.is_empty() {
        return state.unfocused();
    }
    let Some(cursor) = state.cursor else {
        // First keypress focuses the first item whatever the direction.
        return state.with_cursor(0);
    };
    let cursor = cursor.min(collection.len() - 1);

    let next = match direction {
        Direction::Next => wrap_step(collection.span_of(cursor), cursor, true),
        Direction::Previous => wrap_step(collection.span_of(cursor), cursor, false),
        Direction::GroupNext => group_jump(collection, cursor, true),
        Direction::GroupPrevious => group_jump(collection, cursor, false),
    };
    trace!(from = cursor, to = next, direction = direction.as_str(), "focus step");
    state.with_cursor(next)
}

/// The focused item, if any.
///
/// `None` when unfocused or when the collection is empty. A cursor stranded
/// past a shrunk collection is clamped, consistent with [`step`].
#[must_use = "use the confirmed item (if any)"]
pub fn confirm<'a, T>(state: NavState, collection: &'a FocusCollection<T>) -> Option<&'a T> {
    let cursor = state.cursor?;
    if collection.is_empty() {
        return None;
    }
    collection.get(cursor.min(collection.len() - 1))
}

/// One step within a wrap span, in either direction.
fn wrap_step(span: Group, cursor: usize, forward: bool) -> usize {
    let offset = cursor - span.start;
    let next = if forward {
        (offset + 1) % span.len
    } else {
        (offset + span.len - 1) % span.len
    };
    span.start + next
}

/// Jump to the first index of the adjacent group, wrapping across the group
/// list. Flat collections degrade to a plain step.
fn group_jump<T>(collection: &FocusCollection<T>, cursor: usize, forward: bool) -> usize {
    let count = collection.group_count();
    if count == 0 {
        return wrap_step(collection.span_of(cursor), cursor, forward);
    }
    let group = collection.group_of(cursor).unwrap_or(0);
    let target = if forward {
        (group + 1) % count
    } else {
        (group + count - 1) % count
    };
    collection.groups()[target].start
}

// ---------------------------------------------------------------------------
// FocusEvent
// ---------------------------------------------------------------------------

/// Focus change events emitted by [`FocusNavigator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    /// Focus arrived on an item from the unfocused state.
    Gained { index: usize },
    /// Focus moved between items.
    Moved { from: usize, to: usize },
    /// Focus was cleared (reset or empty collection).
    Cleared,
}

// ---------------------------------------------------------------------------
// FocusNavigator
// ---------------------------------------------------------------------------

/// Stateful coordinator for one focus region.
///
/// Owns the region's [`NavState`] exclusively; collaborators read the
/// cursor (or consume [`FocusEvent`]s) and feed commands through the
/// methods here, never mutating the state directly. Multiple independent
/// regions are just multiple navigators.
#[derive(Debug, Default)]
pub struct FocusNavigator {
    state: NavState,
    last_event: Option<FocusEvent>,
}

impl FocusNavigator {
    /// Create a navigator in the unfocused state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state value.
    #[inline]
    #[must_use]
    pub fn state(&self) -> NavState {
        self.state
    }

    /// Currently focused index.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.state.cursor
    }

    /// Whether directional input is currently dropped.
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.state.suspended
    }

    /// Index of the group the cursor sits in, for grouped collections.
    #[must_use]
    pub fn active_group<T>(&self, collection: &FocusCollection<T>) -> Option<usize> {
        self.state.cursor.and_then(|c| collection.group_of(c))
    }

    /// Apply one directional command. Returns the new cursor.
    pub fn step<T>(
        &mut self,
        collection: &FocusCollection<T>,
        direction: Direction,
    ) -> Option<usize> {
        let prev = self.state;
        self.state = step(prev, collection, direction);
        self.record_transition(prev);
        self.state.cursor
    }

    /// The focused item, if any. See [`confirm`].
    #[must_use = "use the confirmed item (if any)"]
    pub fn confirm<'a, T>(&self, collection: &'a FocusCollection<T>) -> Option<&'a T> {
        confirm(self.state, collection)
    }

    /// Drop directional input until [`resume`](Self::resume).
    ///
    /// Call before initiating any asynchronous operation that will replace
    /// the collection, so no step executes against a collection
    /// mid-replacement.
    pub fn suspend(&mut self) {
        if !self.state.suspended {
            debug!("focus navigation suspended");
        }
        self.state = self.state.suspended();
    }

    /// Accept directional input again.
    pub fn resume(&mut self) {
        if self.state.suspended {
            debug!("focus navigation resumed");
        }
        self.state = self.state.resumed();
    }

    /// Discard all state: unfocused, not suspended.
    ///
    /// Call when the collection is replaced wholesale (new screen, new data
    /// set). There is no pending work to cancel; prior state is simply
    /// dropped.
    pub fn reset(&mut self) {
        if self.state.is_focused() {
            self.last_event = Some(FocusEvent::Cleared);
        }
        self.state = NavState::new();
        debug!("focus navigation reset");
    }

    /// The last focus change, if any.
    #[must_use]
    pub fn focus_event(&self) -> Option<&FocusEvent> {
        self.last_event.as_ref()
    }

    /// Take and clear the last focus change.
    pub fn take_event(&mut self) -> Option<FocusEvent> {
        self.last_event.take()
    }

    fn record_transition(&mut self, prev: NavState) {
        self.last_event = match (prev.cursor, self.state.cursor) {
            (None, Some(to)) => Some(FocusEvent::Gained { index: to }),
            (Some(from), Some(to)) if from != to => Some(FocusEvent::Moved { from, to }),
            (Some(_), None) => Some(FocusEvent::Cleared),
            _ => self.last_event.take(),
        };
    }
}

// =========================================================================
// Tests
// =========================================================================
