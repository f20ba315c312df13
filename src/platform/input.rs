//! Keyboard mapping
//!
//! Keys are identified by the DOM `KeyboardEvent.key` string. Arrows and WASD
//! steer, space fires; everything else is ignored.

use crate::sim::{Direction, InputAction};

/// Decode a key identifier into a logical action
pub fn action_for_key(key: &str) -> Option<InputAction> {
    let action = match key {
        "ArrowUp" | "w" | "W" => InputAction::Move(Direction::Up),
        "ArrowRight" | "d" | "D" => InputAction::Move(Direction::Right),
        "ArrowDown" | "s" | "S" => InputAction::Move(Direction::Down),
        "ArrowLeft" | "a" | "A" => InputAction::Move(Direction::Left),
        " " => InputAction::Fire,
        _ => return None,
    };
    Some(action)
}
