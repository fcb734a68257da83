//! Game simulation state and the per-tick update
//!
//! One `GameState` owns everything the simulation touches; nothing reads
//! or writes globals. The stages inside `tick` run in a fixed order, so a
//! frame is fully described by the previous state, one input snapshot, and
//! the frame's dt.

use crate::config::{validate_config, ConfigError, GameConfig};
use crate::input::InputSnapshot;

use super::coin::{Coin, CoinSpawner};
use super::events::{CoinCollectedEvent, Events};
use super::physics;
use super::player::Player;
use super::playfield::Playfield;
use super::score::Score;

/// Everything the simulation owns. Built once at startup.
pub struct GameState {
    pub playfield: Playfield,
    /// Downward acceleration applied while airborne
    pub gravity: f32,
    pub player: Player,
    /// The one coin currently in play. Held by value rather than `Option`,
    /// so "exactly one live coin" is true by construction.
    pub coin: Coin,
    pub spawner: CoinSpawner,
    pub score: Score,
    pub events: Events,
}

impl GameState {
    /// Build the initial state: player in the air at the spawn point, the
    /// first coin already on the ground. Rejects configs the simulation
    /// cannot run with.
    pub fn new(config: &GameConfig, seed: u64) -> Result<Self, ConfigError> {
        validate_config(config)?;

        let playfield = Playfield::from_config(config);
        let mut spawner = CoinSpawner::new(config, seed);
        let coin = spawner.spawn(&playfield);

        Ok(Self {
            playfield,
            gravity: config.gravity,
            player: Player::from_config(config),
            coin,
            spawner,
            score: Score::new(),
            events: Events::new(),
        })
    }

    /// Advance the simulation by one tick
    pub fn tick(&mut self, input: &InputSnapshot, dt: f32) {
        // =====================================================================
        // Input: apply this tick's snapshot to the player
        // =====================================================================
        if input.move_left {
            self.player.move_left(dt);
        }
        if input.move_right {
            self.player.move_right(dt);
        }
        if input.jump {
            self.player.jump();
        }

        // =====================================================================
        // Physics: gravity, integration, ground contact
        // =====================================================================
        physics::step(&mut self.player, &self.playfield, self.gravity, dt);

        // Keep the player between the side walls no matter how it moved
        self.player.x = self
            .playfield
            .clamp_x(self.player.x, self.player.half_size);

        // =====================================================================
        // Collision: report player/coin contact
        // =====================================================================
        if physics::player_touches_coin(&self.player, &self.coin) {
            self.events.coin_collected.send(CoinCollectedEvent {
                coin: self.coin.id,
            });
        }

        // =====================================================================
        // Collection: score and respawn for contacts with the live coin
        // =====================================================================
        // Collect drained events first to avoid holding the queue borrow
        let collected: Vec<CoinCollectedEvent> = self.events.coin_collected.drain().collect();
        for event in collected {
            // Ids from an earlier, already-replaced coin are stale; skip them
            if event.coin != self.coin.id {
                continue;
            }
            self.score.increment();
            self.coin = self.spawner.spawn(&self.playfield);
        }

        // Clear events for next tick
        self.events.clear_all();
    }
}
