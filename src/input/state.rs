//! Per-tick input snapshots
//!
//! `sample()` polls macroquad once and freezes the result. Movement uses
//! held keys; jumping uses the key-press edge, so holding space does not
//! auto-hop every frame.

use macroquad::prelude::*;

use super::Action;

/// One tick's worth of input, sampled at the top of the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    /// Run left is held
    pub move_left: bool,
    /// Run right is held
    pub move_right: bool,
    /// Jump was pressed this frame (edge, not hold)
    pub jump: bool,
}

/// Check if an action's keys are currently held down
fn action_down(action: Action) -> bool {
    match action {
        Action::MoveLeft => is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
        Action::MoveRight => is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
        Action::Jump => is_key_down(KeyCode::Space),
    }
}

/// Check if an action's keys were pressed this frame
fn action_pressed(action: Action) -> bool {
    match action {
        Action::MoveLeft => is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A),
        Action::MoveRight => is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D),
        Action::Jump => is_key_pressed(KeyCode::Space),
    }
}

/// Read the keyboard into a fresh snapshot. Call once per frame.
pub fn sample() -> InputSnapshot {
    InputSnapshot {
        move_left: action_down(Action::MoveLeft),
        move_right: action_down(Action::MoveRight),
        jump: action_pressed(Action::Jump),
    }
}
