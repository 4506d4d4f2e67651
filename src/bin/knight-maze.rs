//! Command line front end for the `knight_maze` crate. It can solve a board
//! read from a map file and print the board itself.

use anyhow::{Context, Result};

use clap::{Args, Parser, Subcommand};

use knight_maze::Board;
use knight_maze::error::KnightError;
use knight_maze::render;
use knight_maze::solver::{BacktrackingSolver, SearchMode, Solver};

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const MAP_HELP: &str = "There must be at least 5 rows, at least 5 \
    characters wide, and all rows must have the same length. The key is as \
    follows:\n  . = void square, the knight may never enter it\n  X = \
    passable square\n  S = starting location\n  E = ending location";

/// Finds paths for a chess knight across a partially blocked board.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global_opts: GlobalOpts,

    #[command(subcommand)]
    command: Command
}

#[derive(Args, Debug)]
struct GlobalOpts {

    /// Set the log filter, e.g. `debug` or `knight_maze=trace`. If absent,
    /// `RUST_LOG` is used, falling back to `warn`.
    #[arg(global = true, long)]
    log_level: Option<String>
}

#[derive(Debug, Subcommand)]
enum Command {

    /// Solve the given board and output the solution(s).
    #[command(after_help = MAP_HELP)]
    Solve(SolveArgs),

    /// Output the given board.
    #[command(alias = "display-board")]
    Display(DisplayArgs)
}

#[derive(Args, Debug)]
struct SolveArgs {

    /// The file containing the board map.
    #[arg(short, long = "file")]
    file: PathBuf,

    /// Find all solutions.
    #[arg(short, long, conflicts_with = "shortest")]
    all: bool,

    /// Find all shortest solutions.
    #[arg(short, long)]
    shortest: bool,

    /// Output the board before the solutions.
    #[arg(short, long)]
    board: bool,

    /// Output the board without distinguishing square colours.
    #[arg(short, long)]
    monochrome: bool,

    /// Output the search result as JSON.
    #[arg(long, conflicts_with_all = ["board", "monochrome"])]
    json: bool,

    /// The file to write the output to instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>
}

impl SolveArgs {
    fn mode(&self) -> SearchMode {
        if self.all {
            SearchMode::Full
        }
        else if self.shortest {
            SearchMode::Shortest
        }
        else {
            SearchMode::First
        }
    }
}

#[derive(Args, Debug)]
struct DisplayArgs {

    /// The file containing the board map.
    #[arg(short, long = "file")]
    file: PathBuf,

    /// Output the board without distinguishing square colours.
    #[arg(short, long)]
    monochrome: bool,

    /// The file to write the output to instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>
}

fn init_logging(global_opts: &GlobalOpts) {
    let filter = match &global_opts.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_board(path: &Path) -> Result<Board> {
    let board = Board::from_file(path)
        .with_context(|| format!("failed to load board from {}",
            path.display()))?;
    board.validate().map_err(KnightError::InvalidBoard)?;
    info!(path = %path.display(), width = board.width(),
        height = board.height(), "loaded board");
    Ok(board)
}

fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("failed to write output to {}",
                path.display())),
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}

fn solve(args: SolveArgs) -> Result<()> {
    let board = load_board(&args.file)?;
    let mode = args.mode();
    let result = BacktrackingSolver.solve(&board, mode)
        .with_context(|| format!("failed to solve {}", args.file.display()))?;
    info!(%mode, solutions = result.solutions().len(), "solved board");

    let text = if args.json {
        serde_json::to_string_pretty(&result)? + "\n"
    }
    else {
        let mut text = String::new();

        if args.board {
            text.push_str(&render::board(&board, args.monochrome));
            text.push('\n');
        }

        text.push_str(&render::solutions(result.solutions()));
        text.push_str(&render::summary(&result));
        text
    };

    write_output(args.output.as_deref(), &text)
}

fn display(args: DisplayArgs) -> Result<()> {
    let board = load_board(&args.file)?;
    write_output(args.output.as_deref(),
        &render::board(&board, args.monochrome))
}

fn run(cli: Cli) -> Result<()> {
    debug!(?cli, "parsed arguments");

    match cli.command {
        Command::Solve(args) => solve(args),
        Command::Display(args) => display(args)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.global_opts);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn command_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn solve_defaults_to_first() {
        match parse(&["knight-maze", "solve", "-f", "maze.txt"]).command {
            Command::Solve(args) => {
                assert_eq!(SearchMode::First, args.mode());
                assert_eq!(PathBuf::from("maze.txt"), args.file);
                assert!(args.output.is_none());
            },
            command => panic!("Unexpected command {:?}.", command)
        }
    }

    #[test]
    fn solve_modes() {
        let mode = |flag: &str| match parse(
                &["knight-maze", "solve", "-f", "maze.txt", flag]).command {
            Command::Solve(args) => args.mode(),
            command => panic!("Unexpected command {:?}.", command)
        };

        assert_eq!(SearchMode::Full, mode("--all"));
        assert_eq!(SearchMode::Full, mode("-a"));
        assert_eq!(SearchMode::Shortest, mode("--shortest"));
        assert_eq!(SearchMode::Shortest, mode("-s"));
    }

    #[test]
    fn all_and_shortest_conflict() {
        assert!(Cli::try_parse_from(
            &["knight-maze", "solve", "-f", "maze.txt", "-a", "-s"]).is_err());
    }

    #[test]
    fn file_required() {
        assert!(Cli::try_parse_from(&["knight-maze", "display"]).is_err());
    }

    #[test]
    fn global_log_level() {
        let cli = parse(&["knight-maze", "display", "-f", "maze.txt", "-m",
            "--log-level", "debug"]);

        assert_eq!(Some("debug"), cli.global_opts.log_level.as_deref());
        assert!(matches!(cli.command,
            Command::Display(DisplayArgs { monochrome: true, .. })));
    }
}
