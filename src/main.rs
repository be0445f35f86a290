//! Command line harness around the solving engine.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use sudoku_engine::{Grid, Solver, Verdict};
use tracing_subscriber::EnvFilter;

/// Solve a sudoku puzzle given as a whitespace-separated matrix.
///
/// Cells are decimal values; `0`, `.` and `_` all mean "empty". The side
/// length must be a perfect square (4, 9, 16, ...).
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the puzzle file; reads stdin when omitted.
    puzzle: Option<PathBuf>,

    /// Stop after constraint propagation instead of falling back to
    /// backtracking search.
    #[arg(long)]
    propagate_only: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let input = match &args.puzzle {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            buffer
        }
    };

    let grid = Grid::from_rows(parse_rows(&input)?)?;
    println!("{}", grid);

    let mut solver = Solver::new(grid).context("puzzle rejected up front")?;
    let verdict = if args.propagate_only {
        solver.propagate()
    } else {
        solver.solve()
    };

    tracing::info!(?verdict, "finished");
    println!("{}", solver.grid());

    match verdict {
        Verdict::Solved => Ok(()),
        _ => process::exit(1),
    }
}

fn parse_rows(input: &str) -> Result<Vec<Vec<u16>>> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split_whitespace().map(parse_cell).collect())
        .collect()
}

fn parse_cell(token: &str) -> Result<u16> {
    match token {
        "." | "_" => Ok(0),
        _ => token
            .parse()
            .with_context(|| format!("invalid cell {:?}", token)),
    }
}
