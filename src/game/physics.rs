//! Vertical physics and contact tests
//!
//! The only solid surface is the ground strip, so collision resolution is
//! a single snap: a body that ends the step at or below the ground line is
//! placed exactly on it.

use super::coin::Coin;
use super::player::Player;
use super::playfield::Playfield;

/// Advance the player's vertical motion by one step.
///
/// Gravity accelerates only while airborne, the position integrates, then
/// ground contact is resolved and `grounded` re-derived from where the
/// avatar actually ended up. A jump that was triggered this tick therefore
/// lifts off before gravity starts pulling on it.
pub fn step(player: &mut Player, playfield: &Playfield, gravity: f32, dt: f32) {
    if !player.grounded {
        player.vy += gravity * dt;
    }

    player.y += player.vy * dt;

    if player.bottom() >= playfield.ground_top() {
        // Landed (or never left): snap the bottom edge onto the ground line
        player.y = playfield.ground_top() - player.half_size;
        player.vy = 0.0;
        player.grounded = true;
    } else {
        player.grounded = false;
    }
}

/// Axis-aligned overlap test between the player and a coin.
/// Touching edges count as contact.
pub fn player_touches_coin(player: &Player, coin: &Coin) -> bool {
    (player.x - coin.x).abs() <= player.half_size + coin.half_size()
        && (player.y - coin.y).abs() <= player.half_size + coin.half_size()
}
