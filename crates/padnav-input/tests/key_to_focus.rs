//! Adapter-to-navigator integration: a key-event stream driving a focus
//! region the way a host event loop would.

use padnav_core::{FocusCollection, FocusNavigator, Group};
use padnav_input::{KeyCode, KeyEvent, Keymap, NavCommand};

/// Feed one key press through the keymap into the navigator, returning any
/// host-level command back to the caller.
fn dispatch<T>(
    map: &Keymap,
    nav: &mut FocusNavigator,
    coll: &FocusCollection<T>,
    key: KeyCode,
) -> Option<NavCommand> {
    match map.command_for(KeyEvent::plain(key))? {
        NavCommand::Move(dir) => {
            nav.step(coll, dir);
            None
        }
        other => Some(other),
    }
}

#[test]
fn arrow_keys_walk_a_quick_reply_list() {
    let map = Keymap::default();
    let mut nav = FocusNavigator::new();
    let replies = FocusCollection::flat(vec!["help", "pnr status", "fares"]);

    dispatch(&map, &mut nav, &replies, KeyCode::Down);
    dispatch(&map, &mut nav, &replies, KeyCode::Down);
    assert_eq!(nav.cursor(), Some(1));

    dispatch(&map, &mut nav, &replies, KeyCode::Up);
    assert_eq!(nav.cursor(), Some(0));

    assert_eq!(
        dispatch(&map, &mut nav, &replies, KeyCode::Enter),
        Some(NavCommand::Confirm)
    );
    assert_eq!(nav.confirm(&replies), Some(&"help"));
}

#[test]
fn left_right_change_carousel_slides() {
    let map = Keymap::default();
    let mut nav = FocusNavigator::new();
    let cards = FocusCollection::grouped(
        vec!["book", "status", "cancel", "recharge", "plans"],
        vec![Group::new(0, 3), Group::new(3, 2)],
    )
    .unwrap();

    dispatch(&map, &mut nav, &cards, KeyCode::Down);
    dispatch(&map, &mut nav, &cards, KeyCode::Down);
    assert_eq!(nav.cursor(), Some(1));

    dispatch(&map, &mut nav, &cards, KeyCode::Right);
    assert_eq!(nav.cursor(), Some(3));
    assert_eq!(nav.active_group(&cards), Some(1));

    dispatch(&map, &mut nav, &cards, KeyCode::Left);
    assert_eq!(nav.cursor(), Some(0));
}

#[test]
fn host_level_keys_pass_through_without_moving_focus() {
    let map = Keymap::default();
    let mut nav = FocusNavigator::new();
    let replies = FocusCollection::flat(vec!["a", "b"]);
    dispatch(&map, &mut nav, &replies, KeyCode::Down);

    for (key, expected) in [
        (KeyCode::Hash, NavCommand::Compose),
        (KeyCode::Star, NavCommand::Voice),
        (KeyCode::SoftLeft, NavCommand::Cancel),
        (KeyCode::Backspace, NavCommand::Cancel),
    ] {
        assert_eq!(dispatch(&map, &mut nav, &replies, key), Some(expected));
        assert_eq!(nav.cursor(), Some(0), "{key:?} must not move focus");
    }
}

#[test]
fn unbound_keys_are_inert() {
    let map = Keymap::default();
    let mut nav = FocusNavigator::new();
    let replies = FocusCollection::flat(vec!["a", "b"]);

    assert_eq!(dispatch(&map, &mut nav, &replies, KeyCode::Char('5')), None);
    assert_eq!(nav.cursor(), None);
}
