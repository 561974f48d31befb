use grid_snake::board::CellState;
use grid_snake::game::{DeathReason, Engine, GameStatus};
use grid_snake::input::{parse_moves, Direction, MoveCommand};
use grid_snake::snake::Position;
use grid_snake::snapshot::Snapshot;
use rand::rngs::mock::StepRng;

#[test]
fn stepwise_food_collection_and_wall_collision() {
    // A zero RNG stream always drops food in the first empty cell, row-major.
    let mut engine = Engine::with_rng(5, 6, StepRng::new(0, 0)).expect("5x6 is valid");
    assert_eq!(engine.food_position(), Some(Position::new(0, 0)));
    assert_eq!(engine.head(), Position::new(2, 3));

    engine.change_direction(Direction::Up);
    engine.change_direction(Direction::Left);

    engine.advance();
    assert_eq!(engine.head(), Position::new(1, 3));
    engine.advance();
    assert_eq!(engine.head(), Position::new(1, 2));

    engine.change_direction(Direction::Up);
    engine.advance();
    assert_eq!(engine.head(), Position::new(0, 2));

    engine.change_direction(Direction::Left);
    engine.advance();
    engine.advance();
    assert_eq!(engine.status(), GameStatus::Running);
    assert_eq!(engine.head(), Position::new(0, 0));
    assert_eq!(engine.score(), 1);
    assert_eq!(engine.snake_len(), 4);
    // The next free cell after (0, 0), (0, 1), (0, 2) are taken is (0, 3).
    assert_eq!(engine.food_position(), Some(Position::new(0, 3)));

    engine.advance();
    assert!(engine.is_game_over());
    assert_eq!(engine.death_reason(), Some(DeathReason::WallCollision));
    assert_eq!(engine.head(), Position::new(0, 0));
    assert_eq!(engine.tick_count(), 6);
}

#[test]
fn seeded_engines_replay_identically() {
    let script = parse_moves("..w.a..s..d.w.a.s.d......").expect("script should parse");

    let run = |seed: u64| {
        let mut engine = Engine::new_with_seed(15, 15, seed).expect("15x15 is valid");
        for command in &script {
            if let MoveCommand::Turn(direction) = *command {
                engine.change_direction(direction);
            }
            engine.advance();
        }
        Snapshot::capture(&engine)
    };

    assert_eq!(run(21), run(21));
}

#[test]
fn board_and_body_agree_after_every_tick() {
    let mut engine = Engine::new_with_seed(8, 8, 13).expect("8x8 is valid");
    let script = parse_moves("s.a.w.d.s.a.w.d.s.a.w.d").expect("script should parse");

    for command in script {
        if let MoveCommand::Turn(direction) = command {
            engine.change_direction(direction);
        }
        engine.advance();

        let mut marked = Vec::new();
        for row in 0..8 {
            for col in 0..8 {
                if engine.cell_state(row, col) == CellState::Snake {
                    marked.push(Position::new(row, col));
                }
            }
        }
        let mut body: Vec<_> = engine.snake_cells().collect();
        body.sort_by_key(|position| (position.row, position.col));

        assert_eq!(marked, body);
    }
}
