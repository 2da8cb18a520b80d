use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use knight_paths::{
    find_all_shortest_paths, init_logging, path_listing, write_artifacts, Board, Config, LogSink,
    Session, SessionEvent,
};

/// Find all shortest knight paths on a chessboard.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.jsonc")]
    config: PathBuf,
    /// Start position (e.g. "a1"); overrides the configured one.
    #[arg(long)]
    start: Option<String>,
    /// End position (e.g. "h8"); overrides the configured one.
    #[arg(long)]
    end: Option<String>,
    /// Directory for rendered artifacts.
    #[arg(long, default_value = "output")]
    output: PathBuf,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            error!("Failed to load config: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let board = Board::new(config.board_size);
    let start = cli.start.or(config.start_position);
    let end = cli.end.or(config.end_position);

    let result = match (start, end) {
        (Some(start), Some(end)) => run_batch(&board, &start, &end, &cli.output),
        _ => run_interactive(board, &cli.output),
    };
    match result {
        Ok(code) => code,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// One-shot mode: both positions known up front.
fn run_batch(
    board: &Board,
    start: &str,
    end: &str,
    output: &std::path::Path,
) -> anyhow::Result<ExitCode> {
    let from = match board.from_notation(start) {
        Ok(cell) => cell,
        Err(err) => {
            error!("Invalid position format: {}", err);
            return Ok(ExitCode::FAILURE);
        }
    };
    let to = match board.from_notation(end) {
        Ok(cell) => cell,
        Err(err) => {
            error!("Invalid position format: {}", err);
            return Ok(ExitCode::FAILURE);
        }
    };

    info!("Finding paths from {} to {}", start, end);
    let paths = find_all_shortest_paths(board, from, to);
    if paths.is_empty() {
        error!("No valid paths found");
        return Ok(ExitCode::FAILURE);
    }
    info!("Found {} shortest paths", paths.len());

    write_artifacts(output, board, &paths)?;
    print!("{}", path_listing(board, &paths));
    Ok(ExitCode::SUCCESS)
}

/// Prompt loop mode: read positions from stdin until the user declines to
/// continue or input ends.
fn run_interactive(board: Board, output: &std::path::Path) -> anyhow::Result<ExitCode> {
    let mut session = Session::new(board);
    let mut sink = LogSink;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", session.prompt());
        io::stdout().flush()?;
        let line = lines.next().transpose()?;

        match session.offer(line.as_deref(), &mut sink) {
            SessionEvent::Prompt | SessionEvent::Invalid(_) => continue,
            SessionEvent::Cancelled => break,
            SessionEvent::NoPath { .. } => {}
            SessionEvent::Found { paths, .. } => {
                write_artifacts(output, session.board(), &paths)?;
                print!("{}", path_listing(session.board(), &paths));
            }
        }

        print!("Search again? [y/N] ");
        io::stdout().flush()?;
        match lines.next().transpose()? {
            Some(answer) if matches!(answer.trim(), "y" | "Y" | "yes") => session.reset(),
            _ => break,
        }
    }
    Ok(ExitCode::SUCCESS)
}
