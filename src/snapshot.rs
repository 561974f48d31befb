use serde::Serialize;

use crate::game::{DeathReason, Engine, GameStatus};
use crate::input::Direction;
use crate::snake::Position;

/// Read-only copy of the observable engine state.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Snapshot {
    pub rows: u16,
    pub cols: u16,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pub score: u32,
    pub tick_count: u64,
    pub direction: Direction,
    /// Head first.
    pub snake: Vec<Position>,
    pub food: Option<Position>,
}

impl Snapshot {
    #[must_use]
    pub fn capture<R>(engine: &Engine<R>) -> Self {
        let size = engine.size();
        Self {
            rows: size.rows(),
            cols: size.cols(),
            status: engine.status(),
            death_reason: engine.death_reason(),
            score: engine.score(),
            tick_count: engine.tick_count(),
            direction: engine.current_direction(),
            snake: engine.snake_cells().collect(),
            food: engine.food_position(),
        }
    }

    /// Serializes the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
