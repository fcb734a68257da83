//! Coin Dash: a tiny single-screen coin collector
//!
//! One player, one coin at a time. Run with the arrow keys (or A/D), jump
//! with space, touch coins to score. Tunables load from `assets/config.ron`
//! when that file exists; otherwise the built-in defaults apply.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod game;
mod input;

use macroquad::prelude::*;

use config::{load_config_or_default, GameConfig};
use game::{draw_game, GameState};

/// Runtime config location, relative to the working directory
const CONFIG_PATH: &str = "assets/config.ron";

/// Load the config, exiting the process on a file that exists but is bad.
/// Called from `window_conf`, so a rejected config never opens a window.
fn load_config_or_die() -> GameConfig {
    match load_config_or_default(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}: {}", CONFIG_PATH, e);
            std::process::exit(1);
        }
    }
}

fn window_conf() -> Conf {
    // The config decides the canvas size, so it loads before the window opens
    let config = load_config_or_die();
    Conf {
        window_title: format!("Coin Dash v{}", VERSION),
        window_width: config.world_width as i32,
        window_height: config.world_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    // Loads again after window_conf; same file, same result, no shared state
    let config = load_config_or_die();

    // Wall-clock seed; runs only need coin placement to differ between them
    let seed = miniquad::date::now().to_bits();

    let mut state = match GameState::new(&config, seed) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to start game: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Coin Dash v{} ({}x{} playfield)",
        VERSION, config.world_width, config.world_height
    );

    loop {
        let snapshot = input::sample();
        state.tick(&snapshot, get_frame_time());
        draw_game(&state);
        next_frame().await;
    }
}
