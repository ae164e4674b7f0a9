//! Day registration and dispatch for the 2025 puzzles.
//!
//! A [`Registry`] is built once at startup and handed to whatever runs the
//! puzzles. It never changes afterwards.

use std::collections::BTreeMap;

use miette::{Diagnostic, Result, WrapErr};
use thiserror::Error;

/// A puzzle solver: raw input in, printable answer out.
pub type EntryPoint = fn(&str) -> Result<String>;

/// One half of a day's puzzle.
#[derive(Debug, Clone, Copy)]
pub enum Part {
    /// The part exists on the calendar but has no solver yet.
    NotUnlocked,
    Available(EntryPoint),
}

#[derive(Debug, Clone, Copy)]
pub struct Day {
    pub number: u8,
    pub title: &'static str,
    pub part1: Part,
    pub part2: Part,
}

impl Day {
    pub fn part(&self, part: u8) -> Option<Part> {
        match part {
            1 => Some(self.part1),
            2 => Some(self.part2),
            _ => None,
        }
    }
}

/// What running a single part produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Answer(String),
    NotUnlocked,
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum RegistryError {
    #[error("day {0} is registered more than once")]
    #[diagnostic(code(aoc2025::registry::duplicate_day))]
    DuplicateDay(u8),
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum RunError {
    #[error("day {0} has no registered puzzle")]
    #[diagnostic(
        code(aoc2025::registry::unknown_day),
        help("registered days are listed by `aoc2025 --help`")
    )]
    UnknownDay(u8),

    #[error("day {day} has no part {part}")]
    #[diagnostic(code(aoc2025::registry::unknown_part), help("every day has parts 1 and 2"))]
    UnknownPart { day: u8, part: u8 },
}

#[derive(Debug, Clone)]
pub struct Registry {
    days: BTreeMap<u8, Day>,
}

impl Registry {
    pub fn new(days: impl IntoIterator<Item = Day>) -> Result<Self, RegistryError> {
        let mut registered = BTreeMap::new();
        for day in days {
            if registered.insert(day.number, day).is_some() {
                return Err(RegistryError::DuplicateDay(day.number));
            }
        }
        Ok(Self { days: registered })
    }

    /// Every day solved in this workspace.
    pub fn standard() -> Result<Self, RegistryError> {
        Self::new([
            Day {
                number: 1,
                title: aoc2025_day_1::TITLE,
                part1: Part::Available(aoc2025_day_1::part1::process),
                part2: Part::Available(aoc2025_day_1::part2::process),
            },
            Day {
                number: 2,
                title: aoc2025_day_2::TITLE,
                part1: Part::Available(aoc2025_day_2::part1::process),
                part2: Part::Available(aoc2025_day_2::part2::process),
            },
            Day {
                number: 3,
                title: aoc2025_day_3::TITLE,
                part1: Part::Available(aoc2025_day_3::part1::process),
                part2: Part::Available(aoc2025_day_3::part2::process),
            },
        ])
    }

    pub fn get(&self, day: u8) -> Option<&Day> {
        self.days.get(&day)
    }

    /// Registered days in ascending order.
    pub fn days(&self) -> impl Iterator<Item = &Day> {
        self.days.values()
    }

    #[tracing::instrument(skip(self, input))]
    pub fn run(&self, day: u8, part: u8, input: &str) -> Result<Outcome> {
        let entry = self.get(day).ok_or(RunError::UnknownDay(day))?;
        match entry
            .part(part)
            .ok_or(RunError::UnknownPart { day, part })?
        {
            Part::NotUnlocked => Ok(Outcome::NotUnlocked),
            Part::Available(process) => process(input)
                .map(Outcome::Answer)
                .wrap_err_with(|| format!("day {day} part {part} failed")),
        }
    }
}
