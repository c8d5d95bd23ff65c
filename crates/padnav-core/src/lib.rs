#![forbid(unsafe_code)]

//! Core: the pure focus-navigation state machine.
//!
//! # Role in padnav
//! `padnav-core` tracks which item in an ordered, possibly grouped
//! collection has focus and computes the next focus index in response to
//! directional commands. It is independent of any rendering technology and
//! has no side effects beyond `tracing` diagnostics.
//!
//! # Primary responsibilities
//! - **FocusCollection**: ordered item handles with validated, contiguous
//!   grouping (carousel slides, menu sections).
//! - **NavState**: plain-data navigation state (`cursor`, `suspended`);
//!   every operation consumes a state and returns a new one.
//! - **step / confirm**: the pure transition layer — wrap-around within the
//!   active group, group jumps, shrink clamping, absorbing suspension.
//! - **FocusNavigator**: a stateful wrapper that owns one region's state
//!   and emits [`FocusEvent`]s for renderers.
//!
//! # How it fits in the system
//! An input adapter (`padnav-input`) translates raw key events into
//! [`Direction`]s and confirm/cancel commands; a renderer reads the cursor
//! (or consumes focus events) and applies the visual selected state. Both
//! stay outside this crate: the navigator neither reads keys nor touches
//! the screen.

pub mod collection;
pub mod error;
pub mod navigator;
pub mod state;


pub use collection::{FocusCollection, Group};
pub use error::CollectionError;
pub use navigator::{FocusEvent, FocusNavigator, confirm, step};
pub use state::{Direction, NavState};
