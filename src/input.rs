use std::collections::VecDeque;

use serde::Serialize;

use crate::config::DIRECTION_QUEUE_CAPACITY;
use crate::error::MoveParseError;

/// Canonical movement directions on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the unit `(row_offset, col_offset)` vector for this direction.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Maps a key symbol to a direction.
    ///
    /// Accepts `w`/`a`/`s`/`d` in either case and the arrow-like glyphs
    /// `^`, `v`, `<`, `>`.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'w' | 'W' | '^' => Some(Self::Up),
            's' | 'S' | 'v' => Some(Self::Down),
            'a' | 'A' | '<' => Some(Self::Left),
            'd' | 'D' | '>' => Some(Self::Right),
            _ => None,
        }
    }
}

/// Returns whether `next` may follow `reference`.
///
/// Repeating the reference direction is pointless and reversing it would
/// drive the head straight into the neck, so both are rejected.
#[must_use]
pub fn direction_change_is_valid(reference: Direction, next: Direction) -> bool {
    next != reference && next != reference.opposite()
}

/// Bounded FIFO of accepted but not yet applied direction changes.
#[derive(Debug, Clone, Default)]
pub struct DirectionQueue {
    pending: VecDeque<Direction>,
}

impl DirectionQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(DIRECTION_QUEUE_CAPACITY),
        }
    }

    /// Appends `requested` when the queue has room and the change is valid
    /// relative to the last queued direction (or `current` when empty).
    ///
    /// Returns whether the direction was accepted.
    pub fn try_push(&mut self, requested: Direction, current: Direction) -> bool {
        if self.pending.len() >= DIRECTION_QUEUE_CAPACITY {
            return false;
        }

        if !direction_change_is_valid(self.last_or(current), requested) {
            return false;
        }

        self.pending.push_back(requested);
        true
    }

    /// Removes and returns the earliest queued direction.
    pub fn pop(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    /// Returns the most recently queued direction, or `current` when empty.
    #[must_use]
    pub fn last_or(&self, current: Direction) -> Direction {
        self.pending.back().copied().unwrap_or(current)
    }

    /// Returns the number of queued directions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Iterates over queued directions in application order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.pending.iter().copied()
    }
}

/// One step of a scripted simulation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MoveCommand {
    /// Request a direction change, then advance one tick.
    Turn(Direction),
    /// Advance one tick without input.
    Wait,
}

/// Parses a move script such as `"..ws.d"`.
///
/// Direction keys become [`MoveCommand::Turn`], `.` becomes
/// [`MoveCommand::Wait`], and whitespace is ignored.
pub fn parse_moves(script: &str) -> Result<Vec<MoveCommand>, MoveParseError> {
    script
        .chars()
        .enumerate()
        .filter(|(_, symbol)| !symbol.is_whitespace())
        .map(|(index, symbol)| match symbol {
            '.' => Ok(MoveCommand::Wait),
            other => Direction::from_key(other)
                .map(MoveCommand::Turn)
                .ok_or(MoveParseError::UnknownSymbol {
                    symbol: other,
                    index,
                }),
        })
        .collect()
}
