//! Game configuration loading and validation
//!
//! All gameplay tunables live in one RON file (`assets/config.ron`).
//! A missing file means the built-in defaults; a file that is present but
//! malformed or out of range is rejected at startup instead of being
//! silently patched up.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Validation limits to reject absurd values from hand-edited files
pub mod limits {
    /// Maximum playfield dimension or body size (pixels)
    pub const MAX_DIMENSION: f32 = 16_384.0;
    /// Maximum speed, impulse, or acceleration magnitude
    pub const MAX_RATE: f32 = 100_000.0;
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// Every gameplay tunable in one place.
///
/// All fields default individually, so a config file only has to name the
/// values it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield width (pixels)
    pub world_width: f32,
    /// Playfield height (pixels)
    pub world_height: f32,
    /// Height of the solid ground strip along the bottom edge (pixels)
    pub ground_height: f32,
    /// Downward acceleration while airborne (pixels per second squared)
    pub gravity: f32,
    /// Horizontal run speed (pixels per second)
    pub move_speed: f32,
    /// Upward velocity applied when a jump starts (pixels per second)
    pub jump_force: f32,
    /// Player square side length (pixels)
    pub player_size: f32,
    /// Coin square side length (pixels)
    pub coin_size: f32,
    /// Minimum distance between a spawned coin's center and either side wall (pixels)
    pub spawn_margin: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 400.0,
            ground_height: 40.0,
            gravity: 1200.0,
            move_speed: 220.0,
            jump_force: 420.0,      // Initial upward velocity for jump
            player_size: 24.0,
            coin_size: 16.0,
            spawn_margin: 40.0,     // Keeps coins out of the corners
        }
    }
}

/// Check if a float is a usable positive quantity
fn is_positive(f: f32, max: f32) -> bool {
    f.is_finite() && f > 0.0 && f <= max
}

fn validate_fields(config: &GameConfig) -> Result<(), String> {
    if !is_positive(config.world_width, limits::MAX_DIMENSION) {
        return Err(format!("world_width out of range: {}", config.world_width));
    }
    if !is_positive(config.world_height, limits::MAX_DIMENSION) {
        return Err(format!("world_height out of range: {}", config.world_height));
    }
    if !is_positive(config.ground_height, limits::MAX_DIMENSION) {
        return Err(format!("ground_height out of range: {}", config.ground_height));
    }
    if config.ground_height >= config.world_height {
        return Err(format!(
            "ground_height {} leaves no sky (world_height {})",
            config.ground_height, config.world_height
        ));
    }

    if !is_positive(config.gravity, limits::MAX_RATE) {
        return Err(format!("gravity out of range: {}", config.gravity));
    }
    if !is_positive(config.move_speed, limits::MAX_RATE) {
        return Err(format!("move_speed out of range: {}", config.move_speed));
    }
    if !is_positive(config.jump_force, limits::MAX_RATE) {
        return Err(format!("jump_force out of range: {}", config.jump_force));
    }

    if !is_positive(config.player_size, limits::MAX_DIMENSION) {
        return Err(format!("player_size out of range: {}", config.player_size));
    }
    if config.player_size > config.world_width {
        return Err(format!(
            "player_size {} does not fit between the walls (world_width {})",
            config.player_size, config.world_width
        ));
    }
    if !is_positive(config.coin_size, limits::MAX_DIMENSION) {
        return Err(format!("coin_size out of range: {}", config.coin_size));
    }

    if !config.spawn_margin.is_finite() || config.spawn_margin < 0.0 {
        return Err(format!("spawn_margin out of range: {}", config.spawn_margin));
    }
    if config.spawn_margin * 2.0 >= config.world_width {
        return Err(format!(
            "spawn_margin {} leaves no room to spawn coins (world_width {})",
            config.spawn_margin, config.world_width
        ));
    }

    Ok(())
}

/// Validate a config, rejecting values the simulation cannot run with
pub fn validate_config(config: &GameConfig) -> Result<(), ConfigError> {
    validate_fields(config).map_err(ConfigError::ValidationError)
}

/// Load and validate a config from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GameConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents)
}

/// Load and validate a config from RON text
pub fn load_config_from_str(contents: &str) -> Result<GameConfig, ConfigError> {
    let config: GameConfig = ron::from_str(contents)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load the config file if present, fall back to defaults when missing.
/// A file that exists but fails to parse or validate is a hard error.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<GameConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(GameConfig::default());
    }
    load_config(path)
}
