//! Playfield geometry
//!
//! One fixed, non-scrolling screen: sky above, a solid ground strip along
//! the bottom edge, walls at the left and right borders. Everything that
//! needs bounds or the ground line asks this struct instead of reading the
//! window size.

use crate::config::GameConfig;

/// Static playfield bounds. Origin is the top-left corner, y grows down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    /// Playfield width (pixels)
    pub width: f32,
    /// Playfield height (pixels)
    pub height: f32,
    /// Height of the solid ground strip at the bottom (pixels)
    pub ground_height: f32,
}

impl Playfield {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            width: config.world_width,
            height: config.world_height,
            ground_height: config.ground_height,
        }
    }

    /// Y coordinate of the walkable ground surface
    pub fn ground_top(&self) -> f32 {
        self.height - self.ground_height
    }

    /// Clamp a center x so a body of the given half-width stays between the walls
    pub fn clamp_x(&self, x: f32, half_width: f32) -> f32 {
        x.clamp(half_width, self.width - half_width)
    }
}
