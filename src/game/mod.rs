//! Game Simulation Module
//!
//! Everything the game loop touches lives here: a fixed playfield, one
//! player, one live coin, and the score. Systems communicate through event
//! queues instead of calling each other.
//!
//! Key concepts:
//! - Playfield: static bounds and the ground line
//! - Player: kinematics driven by one input snapshot per tick
//! - Coin: identity-tagged so stale collection events can be ignored
//! - GameState: owns all of the above; ticks run stages in a fixed order
//!
//! Nothing in this module reads globals or the window, so tests can run
//! many isolated simulations side by side.

pub mod coin;
pub mod events;
pub mod physics;
pub mod player;
pub mod playfield;
pub mod render;
pub mod score;
pub mod state;

// Re-export main types
pub use render::draw_game;
pub use state::GameState;
