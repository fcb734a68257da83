//! Playfield drawing
//!
//! Immediate-mode drawing with macroquad primitives. Reads the simulation
//! state and never writes it, so simulation tests run without a window.

use macroquad::prelude::*;

use super::state::GameState;

/// HUD text size in pixels
const HUD_FONT_SIZE: u16 = 18;
/// HUD anchor (top-left corner of the score text)
const HUD_POS: (f32, f32) = (12.0, 12.0);

/// Draw one frame of the playfield
pub fn draw_game(state: &GameState) {
    // Flat arcade palette
    let sky = Color::from_rgba(135, 206, 235, 255);
    let grass = Color::from_rgba(34, 139, 34, 255);
    let crimson = Color::from_rgba(220, 20, 60, 255);
    let gold = Color::from_rgba(255, 215, 0, 255);

    clear_background(sky);

    // Ground strip across the bottom edge
    draw_rectangle(
        0.0,
        state.playfield.ground_top(),
        state.playfield.width,
        state.playfield.ground_height,
        grass,
    );

    // Coin before player, so the player overdraws it mid-collection
    draw_rectangle(
        state.coin.x - state.coin.half_size(),
        state.coin.y - state.coin.half_size(),
        state.coin.size,
        state.coin.size,
        gold,
    );

    draw_rectangle(
        state.player.x - state.player.half_size,
        state.player.y - state.player.half_size,
        state.player.half_size * 2.0,
        state.player.half_size * 2.0,
        crimson,
    );

    draw_score(state);
}

/// Score readout pinned to the top-left corner, above everything else
fn draw_score(state: &GameState) {
    let label = state.score.label();
    // draw_text anchors on the baseline; offset_y moves the anchor so the
    // text's top-left corner lands on HUD_POS
    let dims = measure_text(label, None, HUD_FONT_SIZE, 1.0);
    draw_text(
        label,
        HUD_POS.0,
        HUD_POS.1 + dims.offset_y,
        HUD_FONT_SIZE as f32,
        BLACK,
    );
}
