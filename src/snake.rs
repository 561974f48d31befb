use std::collections::VecDeque;

use serde::Serialize;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the neighbouring position one step in `direction`.
    ///
    /// The result may lie outside the board; callers classify it.
    #[must_use]
    pub fn translate(self, direction: Direction) -> Self {
        let (row_offset, col_offset) = direction.offset();
        Self {
            row: self.row + row_offset,
            col: self.col + col_offset,
        }
    }
}

/// Ordered snake body, head at the front and tail at the back.
///
/// The body only knows about its own cells. Keeping the board in step is the
/// engine's job, which is why the mutators are crate-private.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a snake with no segments; the engine seeds it immediately.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            body: VecDeque::new(),
        }
    }

    pub(crate) fn push_head(&mut self, position: Position) {
        self.body.push_front(position);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Position> {
        self.body.pop_back()
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }
}
