#![forbid(unsafe_code)]

//! The remappable key → command table.
//!
//! The default map reproduces the original handset bindings: the D-pad
//! steps and changes groups, Enter confirms, Backspace and the left soft
//! key go back, `#` jumps to the composer, `*` starts voice input.
//! Unknown keys and modified keys translate to nothing — dropped input is
//! not an error inside a key handler.

use std::collections::HashMap;

use tracing::trace;

use padnav_core::Direction;

use crate::command::NavCommand;
use crate::keycode::{KeyCode, KeyEvent};

/// Key → command bindings for one focus region.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<KeyCode, NavCommand>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut map = Self::empty();
        map.bind(KeyCode::Down, NavCommand::Move(Direction::Next));
        map.bind(KeyCode::Up, NavCommand::Move(Direction::Previous));
        map.bind(KeyCode::Right, NavCommand::Move(Direction::GroupNext));
        map.bind(KeyCode::Left, NavCommand::Move(Direction::GroupPrevious));
        map.bind(KeyCode::Enter, NavCommand::Confirm);
        map.bind(KeyCode::SoftRight, NavCommand::Confirm);
        map.bind(KeyCode::Backspace, NavCommand::Cancel);
        map.bind(KeyCode::SoftLeft, NavCommand::Cancel);
        map.bind(KeyCode::Hash, NavCommand::Compose);
        map.bind(KeyCode::Star, NavCommand::Voice);
        map
    }
}

impl Keymap {
    /// A map with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `key` to `command`, replacing any existing binding.
    pub fn bind(&mut self, key: KeyCode, command: NavCommand) {
        self.bindings.insert(key.normalized(), command);
    }

    /// Remove the binding for `key`, returning it if present.
    pub fn unbind(&mut self, key: KeyCode) -> Option<NavCommand> {
        self.bindings.remove(&key.normalized())
    }

    /// Number of bound keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no keys are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Translate a key event.
    ///
    /// Modified presses translate to `None`: the original UI had no
    /// modified-key bindings, and swallowing e.g. Ctrl+arrows here would
    /// shadow host shortcuts.
    #[must_use = "use the translated command (if any)"]
    pub fn command_for(&self, event: KeyEvent) -> Option<NavCommand> {
        if !event.modifiers.is_empty() {
            trace!(?event.code, "modified key press ignored");
            return None;
        }
        self.bindings.get(&event.code.normalized()).copied()
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode::Modifiers;

    // --- Default bindings ---

    #[test]
    fn default_map_covers_the_handset_keys() {
        let map = Keymap::default();
        let expect = [
            (KeyCode::Down, NavCommand::Move(Direction::Next)),
            (KeyCode::Up, NavCommand::Move(Direction::Previous)),
            (KeyCode::Right, NavCommand::Move(Direction::GroupNext)),
            (KeyCode::Left, NavCommand::Move(Direction::GroupPrevious)),
            (KeyCode::Enter, NavCommand::Confirm),
            (KeyCode::SoftRight, NavCommand::Confirm),
            (KeyCode::Backspace, NavCommand::Cancel),
            (KeyCode::SoftLeft, NavCommand::Cancel),
            (KeyCode::Hash, NavCommand::Compose),
            (KeyCode::Star, NavCommand::Voice),
        ];
        for (key, command) in expect {
            assert_eq!(
                map.command_for(KeyEvent::plain(key)),
                Some(command),
                "binding for {key:?}"
            );
        }
        assert_eq!(map.len(), expect.len());
    }

    #[test]
    fn pad_char_spellings_hit_the_default_bindings() {
        let map = Keymap::default();
        assert_eq!(
            map.command_for(KeyEvent::plain(KeyCode::Char('#'))),
            Some(NavCommand::Compose)
        );
        assert_eq!(
            map.command_for(KeyEvent::plain(KeyCode::Char('*'))),
            Some(NavCommand::Voice)
        );
    }

    #[test]
    fn unknown_keys_translate_to_nothing() {
        let map = Keymap::default();
        assert_eq!(map.command_for(KeyEvent::plain(KeyCode::Char('q'))), None);
    }

    #[test]
    fn modified_presses_are_dropped() {
        let map = Keymap::default();
        let event = KeyEvent::new(KeyCode::Down, Modifiers::CTRL);
        assert_eq!(map.command_for(event), None);
    }

    // --- Rebinding ---

    #[test]
    fn rebinding_replaces_and_unbinding_removes() {
        let mut map = Keymap::default();
        map.bind(KeyCode::Down, NavCommand::Cancel);
        assert_eq!(
            map.command_for(KeyEvent::plain(KeyCode::Down)),
            Some(NavCommand::Cancel)
        );

        assert_eq!(map.unbind(KeyCode::Down), Some(NavCommand::Cancel));
        assert_eq!(map.command_for(KeyEvent::plain(KeyCode::Down)), None);
        assert_eq!(map.unbind(KeyCode::Down), None);
    }

    #[test]
    fn empty_map_translates_nothing() {
        let map = Keymap::empty();
        assert!(map.is_empty());
        assert_eq!(map.command_for(KeyEvent::plain(KeyCode::Enter)), None);
    }
}
