use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::board::{Board, CellState};
use crate::config::{GridSize, INITIAL_SNAKE_LENGTH};
use crate::error::EngineError;
use crate::food::place_food;
use crate::input::{Direction, DirectionQueue};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// What ended the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Complete mutable state for one game, plus the rules that advance it.
///
/// The board matrix and the ordered snake body describe the same cells.
/// Every mutation goes through `add_head` or `remove_tail` so the two never
/// drift apart.
///
/// A finished game is never reset: build a new engine to play again.
#[derive(Debug, Clone)]
pub struct Engine<R = StdRng> {
    size: GridSize,
    board: Board,
    snake: Snake,
    directions: DirectionQueue,
    direction: Direction,
    food: Option<Position>,
    score: u32,
    tick_count: u64,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    rng: R,
}

impl Engine<StdRng> {
    /// Creates an engine whose food placement is seeded from OS entropy.
    pub fn new(rows: u16, cols: u16) -> Result<Self, EngineError> {
        Self::with_rng(rows, cols, StdRng::from_entropy())
    }

    /// Creates a deterministic engine for tests and reproducible simulations.
    pub fn new_with_seed(rows: u16, cols: u16, seed: u64) -> Result<Self, EngineError> {
        Self::with_rng(rows, cols, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Engine<R> {
    /// Creates an engine that draws food positions from `rng`.
    ///
    /// The snake starts on the middle row in columns `1..=3`, heading right
    /// with its head in column 3. Fails when the grid cannot hold it.
    pub fn with_rng(rows: u16, cols: u16, rng: R) -> Result<Self, EngineError> {
        let size = GridSize::new(rows, cols)?;

        let mut engine = Self {
            size,
            board: Board::new(size),
            snake: Snake::new(),
            directions: DirectionQueue::new(),
            direction: Direction::Right,
            food: None,
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            death_reason: None,
            rng,
        };

        let row = i32::from(rows / 2);
        for col in 1..=i32::from(INITIAL_SNAKE_LENGTH) {
            engine.add_head(Position::new(row, col));
        }
        engine.food = place_food(&mut engine.rng, &mut engine.board);

        debug!("engine created on a {rows}x{cols} grid");
        Ok(engine)
    }

    /// Queues a direction change for an upcoming tick.
    ///
    /// Dropped without error when two changes are already pending, or when
    /// `requested` repeats or reverses the last queued direction (the current
    /// direction when nothing is queued). Ignored once the game is over.
    pub fn change_direction(&mut self, requested: Direction) {
        if self.status == GameStatus::GameOver {
            return;
        }

        if self.directions.try_push(requested, self.direction) {
            debug!("queued direction {requested:?}");
        } else {
            debug!("dropped direction {requested:?}");
        }
    }

    /// Advances the simulation by one tick. Does nothing once the game is over.
    pub fn advance(&mut self) {
        if self.status == GameStatus::GameOver {
            return;
        }

        self.tick_count += 1;
        if let Some(next) = self.directions.pop() {
            self.direction = next;
        }

        let new_head = self.head().translate(self.direction);
        match self.will_hit(new_head) {
            CellState::Outside => self.end_game(DeathReason::WallCollision),
            CellState::Snake => self.end_game(DeathReason::SelfCollision),
            CellState::Empty => {
                self.remove_tail();
                self.add_head(new_head);
            }
            CellState::Food => {
                self.add_head(new_head);
                self.score += 1;
                info!("food eaten, score {}", self.score);
                self.food = place_food(&mut self.rng, &mut self.board);
            }
        }
    }

    /// Classifies the cell the head is about to enter.
    ///
    /// The current tail counts as empty because it vacates on the same tick.
    fn will_hit(&self, new_head: Position) -> CellState {
        if !self.size.contains(new_head) {
            return CellState::Outside;
        }

        if new_head == self.tail() {
            return CellState::Empty;
        }

        self.board.get(new_head)
    }

    fn end_game(&mut self, reason: DeathReason) {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        info!(
            "game over after {} ticks: {reason:?}, score {}",
            self.tick_count, self.score
        );
    }
}

impl<R> Engine<R> {
    fn add_head(&mut self, position: Position) {
        self.snake.push_head(position);
        self.board.set(position, CellState::Snake);
    }

    fn remove_tail(&mut self) {
        if let Some(tail) = self.snake.pop_tail() {
            self.board.set(tail, CellState::Empty);
        }
    }

    #[must_use]
    pub fn head(&self) -> Position {
        self.snake.head()
    }

    #[must_use]
    pub fn tail(&self) -> Position {
        self.snake.tail()
    }

    /// Iterates over the snake from head to tail.
    pub fn snake_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.snake.segments()
    }

    #[must_use]
    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    /// Returns the state of `(row, col)`, or `Outside` beyond the edges.
    #[must_use]
    pub fn cell_state(&self, row: i32, col: i32) -> CellState {
        self.board.get(Position::new(row, col))
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns why the game ended, or `None` while it is still running.
    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    #[must_use]
    pub fn current_direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over queued direction changes in the order they will apply.
    pub fn pending_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.directions.iter()
    }

    /// Number of ticks simulated, including the one that ended the game.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Returns the food cell, or `None` when the board had no room for one.
    #[must_use]
    pub fn food_position(&self) -> Option<Position> {
        self.food
    }

    /// Returns true when the snake covers every cell of the board.
    #[must_use]
    pub fn is_board_full(&self) -> bool {
        self.snake.len() == self.size.total_cells()
    }
}
