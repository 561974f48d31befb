use log::{debug, warn};
use rand::Rng;

use crate::board::{Board, CellState};
use crate::snake::Position;

/// Picks a uniformly random empty cell on `board`.
///
/// Candidates are enumerated row-major so a given RNG stream always yields
/// the same cell. Returns `None` when the board has no empty cell left.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> Option<Position> {
    let candidates: Vec<Position> = board.empty_positions().collect();

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

/// Marks a random empty cell as food and returns it.
///
/// A full board is not an error: nothing is placed and `None` comes back.
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, board: &mut Board) -> Option<Position> {
    let Some(position) = spawn_position(rng, board) else {
        warn!("no empty cell left for food");
        return None;
    };

    board.set(position, CellState::Food);
    debug!("food placed at ({}, {})", position.row, position.col);
    Some(position)
}
