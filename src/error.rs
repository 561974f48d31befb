use thiserror::Error;

/// Errors raised while setting up an engine.
///
/// Nothing inside a running game produces an error: rejected direction
/// changes are dropped and collisions end the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum EngineError {
    #[error("grid {rows}x{cols} is too small, need at least {min_rows} rows and {min_cols} columns")]
    GridTooSmall {
        rows: u16,
        cols: u16,
        min_rows: u16,
        min_cols: u16,
    },
}

/// Errors raised while parsing a move script.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum MoveParseError {
    #[error("unknown move symbol {symbol:?} at index {index}")]
    UnknownSymbol { symbol: char, index: usize },
}
