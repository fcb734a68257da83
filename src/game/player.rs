//! Player state and movement intents
//!
//! The avatar is an axis-aligned square driven by held movement keys and an
//! edge-triggered jump. Horizontal motion is direct (no horizontal
//! velocity); vertical motion goes through the physics step.

use crate::config::GameConfig;

/// Where new players appear, in playfield pixels
const SPAWN_X: f32 = 100.0;
const SPAWN_Y: f32 = 0.0;

/// The player avatar, centered on (x, y).
///
/// Spawns in the air near the top-left and falls onto the ground strip.
/// `grounded` reflects ground contact as of the last physics step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Center position
    pub x: f32,
    pub y: f32,
    /// Vertical velocity, positive points down
    pub vy: f32,
    /// Standing on the ground as of the last physics step
    pub grounded: bool,
    /// Half of the square's side length
    pub half_size: f32,
    /// Horizontal run speed (pixels per second)
    pub move_speed: f32,
    /// Upward velocity applied when a jump starts (pixels per second)
    pub jump_force: f32,
}

impl Player {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            x: SPAWN_X,
            y: SPAWN_Y,
            vy: 0.0,
            grounded: false,
            half_size: config.player_size / 2.0,
            move_speed: config.move_speed,
            jump_force: config.jump_force,
        }
    }

    /// Bottom edge of the avatar
    pub fn bottom(&self) -> f32 {
        self.y + self.half_size
    }

    pub fn move_left(&mut self, dt: f32) {
        self.x -= self.move_speed * dt;
    }

    pub fn move_right(&mut self, dt: f32) {
        self.x += self.move_speed * dt;
    }

    /// Start a jump if standing on the ground, otherwise do nothing.
    /// Sets (rather than adds) the upward velocity, so repeated triggers
    /// within one tick come out the same as a single one.
    pub fn jump(&mut self) {
        if self.grounded {
            self.vy = -self.jump_force;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grounded_player() -> Player {
        let mut player = Player::from_config(&GameConfig::default());
        player.grounded = true;
        player.vy = 0.0;
        player
    }

    #[test]
    fn test_spawns_airborne_at_start_position() {
        let player = Player::from_config(&GameConfig::default());
        assert_eq!(player.x, 100.0);
        assert_eq!(player.y, 0.0);
        assert_eq!(player.vy, 0.0);
        assert!(!player.grounded);
        assert_eq!(player.half_size, 12.0);
    }

    #[test]
    fn test_move_scales_with_dt() {
        let mut player = grounded_player();
        player.move_right(0.5);
        assert_eq!(player.x, 100.0 + 220.0 * 0.5);
        player.move_left(0.5);
        assert_eq!(player.x, 100.0);
    }

    #[test]
    fn test_jump_requires_ground_contact() {
        let mut player = grounded_player();
        player.jump();
        assert_eq!(player.vy, -420.0);

        let mut airborne = Player::from_config(&GameConfig::default());
        airborne.vy = 33.0;
        airborne.jump();
        assert_eq!(airborne.vy, 33.0);
    }

    #[test]
    fn test_double_jump_trigger_equals_single() {
        let mut once = grounded_player();
        once.jump();

        let mut twice = grounded_player();
        twice.jump();
        twice.jump();

        assert_eq!(once.vy, twice.vy);
    }
}
