use std::path::{Path, PathBuf};

use aoc2025::{Outcome, Registry, RunError};
use clap::Parser;
use miette::*;

#[derive(Parser)]
#[command(name = "aoc2025")]
#[command(about = "Run Advent of Code 2025 puzzles", long_about = None)]
#[command(version)]
struct Cli {
    /// Day of the calendar to run
    day: u8,

    /// Only run this part; both parts run when omitted
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,

    /// Puzzle input, defaults to the day's input1.txt
    #[arg(long)]
    input: Option<PathBuf>,
}

fn default_input(day: u8) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(format!("day-{day}"))
        .join("input1.txt")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let registry = Registry::standard()?;
    let day = registry.get(cli.day).ok_or(RunError::UnknownDay(cli.day))?;

    let path = cli.input.unwrap_or_else(|| default_input(cli.day));
    let input = std::fs::read_to_string(&path)
        .into_diagnostic()
        .wrap_err_with(|| format!("reading puzzle input from {}", path.display()))?;

    println!("Day {}: {}", day.number, day.title);
    let parts = match cli.part {
        Some(part) => vec![part],
        None => vec![1, 2],
    };
    for part in parts {
        match registry.run(day.number, part, &input)? {
            Outcome::Answer(answer) => println!("  Part {part}: {answer}"),
            Outcome::NotUnlocked => println!("  Part {part}: not unlocked yet"),
        }
    }
    Ok(())
}
