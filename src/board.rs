use std::fmt;

use serde::Serialize;

use crate::config::GridSize;
use crate::snake::Position;

/// State of a single board cell, or the result of a collision lookup.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum CellState {
    Empty,
    Snake,
    Food,
    /// Beyond the board edge. Returned by lookups, never stored.
    Outside,
}

impl CellState {
    fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Snake => '#',
            Self::Food => '*',
            Self::Outside => ' ',
        }
    }
}

/// Row-major matrix of cell states with fixed dimensions.
#[derive(Debug, Clone)]
pub struct Board {
    size: GridSize,
    cells: Vec<CellState>,
}

impl Board {
    /// Creates an all-empty board.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![CellState::Empty; size.total_cells()],
        }
    }

    /// Returns the stored state at `position`, or `Outside` off the board.
    #[must_use]
    pub fn get(&self, position: Position) -> CellState {
        self.index_of(position)
            .map_or(CellState::Outside, |index| self.cells[index])
    }

    /// Stores `state` at `position`. Off-board writes are ignored.
    pub(crate) fn set(&mut self, position: Position, state: CellState) {
        debug_assert_ne!(state, CellState::Outside);

        if let Some(index) = self.index_of(position) {
            self.cells[index] = state;
        }
    }

    /// Iterates over empty cells, top-to-bottom then left-to-right.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions_with(CellState::Empty)
    }

    /// Iterates over cells holding `state` in row-major order.
    pub fn positions_with(&self, state: CellState) -> impl Iterator<Item = Position> + '_ {
        let cols = usize::from(self.size.cols);
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == state)
            .map(move |(index, _)| Position {
                row: (index / cols) as i32,
                col: (index % cols) as i32,
            })
    }

    /// Returns how many cells hold `state`.
    #[must_use]
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|cell| **cell == state).count()
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        if !self.size.contains(position) {
            return None;
        }

        let row = usize::try_from(position.row).ok()?;
        let col = usize::try_from(position.col).ok()?;
        Some(row * usize::from(self.size.cols) + col)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.size.cols == 0 {
            return Ok(());
        }

        for row in self.cells.chunks(usize::from(self.size.cols)) {
            let line: String = row.iter().map(|cell| cell.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::snake::Position;

    use super::{Board, CellState};

    fn board_3x4() -> Board {
        Board::new(GridSize { rows: 3, cols: 4 })
    }

    #[test]
    fn new_board_is_empty() {
        let board = board_3x4();

        assert_eq!(board.count(CellState::Empty), 12);
        assert_eq!(board.get(Position::new(2, 3)), CellState::Empty);
    }

    #[test]
    fn lookups_off_the_board_are_outside() {
        let board = board_3x4();

        assert_eq!(board.get(Position::new(-1, 0)), CellState::Outside);
        assert_eq!(board.get(Position::new(3, 0)), CellState::Outside);
        assert_eq!(board.get(Position::new(0, 4)), CellState::Outside);
    }

    #[test]
    fn empty_positions_are_row_major() {
        let mut board = board_3x4();
        for row in 0..3 {
            for col in 0..4 {
                board.set(Position::new(row, col), CellState::Snake);
            }
        }
        board.set(Position::new(2, 1), CellState::Empty);
        board.set(Position::new(0, 3), CellState::Empty);

        let empty: Vec<_> = board.empty_positions().collect();
        assert_eq!(empty, vec![Position::new(0, 3), Position::new(2, 1)]);
    }

    #[test]
    fn display_draws_one_line_per_row() {
        let mut board = board_3x4();
        board.set(Position::new(1, 0), CellState::Snake);
        board.set(Position::new(1, 1), CellState::Snake);
        board.set(Position::new(2, 3), CellState::Food);

        assert_eq!(board.to_string(), "....\n##..\n...*\n");
    }

    #[test]
    fn display_of_a_zero_width_board_is_empty() {
        let board = Board::new(GridSize { rows: 2, cols: 0 });

        assert_eq!(board.to_string(), "");
        assert_eq!(board.get(Position::new(0, 0)), CellState::Outside);
    }
}
