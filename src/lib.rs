//! Deterministic grid-based Snake engine.
//!
//! [`game::Engine`] owns the board, the snake and the pending direction
//! queue. A front-end drives it with [`game::Engine::change_direction`] and
//! [`game::Engine::advance`], then reads state back through its accessors.

pub mod board;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod snake;
pub mod snapshot;

pub use board::CellState;
pub use error::EngineError;
pub use game::{DeathReason, Engine, GameStatus};
pub use input::Direction;
pub use snake::Position;
