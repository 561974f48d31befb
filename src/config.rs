use crate::error::EngineError;
use crate::snake::Position;

/// Logical grid dimensions passed through the engine as a named type.
///
/// Rows grow downwards and columns grow to the right, matching the
/// `(row, col)` order used by [`Position`]. Outside this crate the only way
/// to get one is the validated [`GridSize::new`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub(crate) rows: u16,
    pub(crate) cols: u16,
}

impl GridSize {
    /// Validates dimensions large enough to host the initial snake.
    pub fn new(rows: u16, cols: u16) -> Result<Self, EngineError> {
        if rows < MIN_GRID_ROWS || cols < MIN_GRID_COLS {
            return Err(EngineError::GridTooSmall {
                rows,
                cols,
                min_rows: MIN_GRID_ROWS,
                min_cols: MIN_GRID_COLS,
            });
        }

        Ok(Self { rows, cols })
    }

    #[must_use]
    pub fn rows(self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn cols(self) -> u16 {
        self.cols
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }

    /// Returns true when `position` lies inside `[0, rows) x [0, cols)`.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && position.row < i32::from(self.rows)
            && position.col < i32::from(self.cols)
    }
}

/// Default board height.
pub const DEFAULT_ROWS: u16 = 15;

/// Default board width.
pub const DEFAULT_COLS: u16 = 15;

/// Number of segments in a freshly spawned snake.
pub const INITIAL_SNAKE_LENGTH: u16 = 3;

/// Smallest accepted row count.
pub const MIN_GRID_ROWS: u16 = 3;

/// Smallest accepted column count. The initial snake starts one cell in
/// from the left wall, so it needs one spare column.
pub const MIN_GRID_COLS: u16 = INITIAL_SNAKE_LENGTH + 1;

/// Maximum number of direction changes buffered between ticks.
pub const DIRECTION_QUEUE_CAPACITY: usize = 2;

#[cfg(test)]
mod tests {
    use crate::error::EngineError;
    use crate::snake::Position;

    use super::{GridSize, MIN_GRID_COLS, MIN_GRID_ROWS};

    #[test]
    fn grid_size_rejects_degenerate_dimensions() {
        assert_eq!(
            GridSize::new(2, 10),
            Err(EngineError::GridTooSmall {
                rows: 2,
                cols: 10,
                min_rows: MIN_GRID_ROWS,
                min_cols: MIN_GRID_COLS,
            })
        );
        assert!(GridSize::new(10, 0).is_err());
        assert!(GridSize::new(3, 3).is_err());
        assert!(GridSize::new(3, 4).is_ok());
    }

    #[test]
    fn validated_size_exposes_its_dimensions() {
        let size = GridSize::new(5, 7).expect("5x7 is valid");

        assert_eq!(size.rows(), 5);
        assert_eq!(size.cols(), 7);
    }

    #[test]
    fn contains_checks_both_axes() {
        let size = GridSize { rows: 4, cols: 6 };

        assert!(size.contains(Position::new(0, 0)));
        assert!(size.contains(Position::new(3, 5)));
        assert!(!size.contains(Position::new(4, 0)));
        assert!(!size.contains(Position::new(0, 6)));
        assert!(!size.contains(Position::new(-1, 2)));
        assert_eq!(size.total_cells(), 24);
    }
}
