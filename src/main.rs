use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use grid_snake::config::{DEFAULT_COLS, DEFAULT_ROWS};
use grid_snake::game::Engine;
use grid_snake::input::{parse_moves, MoveCommand};
use grid_snake::snapshot::Snapshot;
use log::info;
use rand::Rng;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Headless Snake simulator: replays a move script and reports the outcome.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Board height in cells.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: u16,

    /// Board width in cells.
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: u16,

    /// Seed for food placement. A random seed is drawn when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Move script: w/a/s/d or ^/</v/> turn then tick, `.` ticks only.
    #[arg(long, default_value = "")]
    moves: String,

    /// Print the final state as JSON instead of a summary line.
    #[arg(long)]
    json: bool,

    /// Draw the final board after the summary.
    #[arg(long = "show-board")]
    show_board: bool,

    /// Diagnostics written to stderr.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = TermLogger::init(
        cli.log_level.into(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let moves = parse_moves(&cli.moves)?;
    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    let mut engine = Engine::new_with_seed(cli.rows, cli.cols, seed)?;
    info!(
        "simulating {} moves on {}x{} with seed {seed}",
        moves.len(),
        cli.rows,
        cli.cols
    );

    for command in moves {
        if engine.is_game_over() {
            break;
        }

        if let MoveCommand::Turn(direction) = command {
            engine.change_direction(direction);
        }
        engine.advance();
    }

    if cli.json {
        println!("{}", Snapshot::capture(&engine).to_json()?);
    } else {
        println!("{}", summary_line(&engine, seed));
    }

    if cli.show_board {
        print!("{}", engine.board());
    }

    Ok(())
}

fn summary_line<R>(engine: &Engine<R>, seed: u64) -> String {
    let outcome = match engine.death_reason() {
        Some(reason) => format!("game over ({reason:?})"),
        None => "running".to_owned(),
    };

    format!(
        "seed {seed}: {outcome}, score {}, length {}, ticks {}",
        engine.score(),
        engine.snake_len(),
        engine.tick_count()
    )
}
