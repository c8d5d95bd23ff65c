#![forbid(unsafe_code)]

//! Input adapter: raw key events in, navigation commands out.
//!
//! # Role in padnav
//! `padnav-input` is the thin glue between a platform's key events and the
//! pure navigator in `padnav-core`. It owns nothing but a lookup table:
//! translation is synchronous, allocation-free, and side-effect free, so it
//! can run inside any event handler.
//!
//! # How it fits in the system
//! The host decodes platform input into [`KeyEvent`]s, asks the [`Keymap`]
//! for a [`NavCommand`], and feeds `Move` directions into a
//! `FocusNavigator`. `Confirm`, `Cancel`, `Compose`, and `Voice` are
//! returned to the host to act on.

pub mod command;
pub mod keycode;
pub mod keymap;

pub use command::NavCommand;
pub use keycode::{KeyCode, KeyEvent, Modifiers};
pub use keymap::Keymap;
