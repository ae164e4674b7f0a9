use std::ops::RangeInclusive;

use chumsky::prelude::*;
use itertools::Itertools;

/// Checks if an ID is a digit sequence repeated exactly twice (e.g., 55, 123123).
pub fn is_doubled(id: u64) -> bool {
    let s = id.to_string();
    if s.len() % 2 != 0 {
        return false;
    }

    let (left, right) = s.split_at(s.len() / 2);
    left == right
}

/// Checks if an ID is a digit sequence repeated at least twice.
/// # Examples:
/// ```text
/// 11 (1 repeated 2 times) -> repeated
/// 121212 (12 repeated 3 times) -> repeated
/// 1213 -> not repeated
/// ```
pub fn is_repeated(id: u64) -> bool {
    let s = id.to_string();
    let bytes = s.as_bytes();
    let len = bytes.len();

    // The block has to tile the whole ID, so only divisors of the length qualify.
    (1..=len / 2)
        .filter(|block| len % block == 0)
        .any(|block| bytes.chunks(block).all_equal())
}

/// Sum of every ID across `ranges` that `is_of_concern` flags.
///
/// Each range is scanned on its own, so an ID shared by two overlapping
/// ranges is counted once per range.
pub fn sum_matching(
    ranges: &[RangeInclusive<u64>],
    is_of_concern: impl Fn(u64) -> bool,
) -> u64 {
    ranges
        .iter()
        .flat_map(|range| range.clone())
        .filter(|&id| is_of_concern(id))
        .sum()
}

fn id<'a>() -> impl Parser<'a, &'a str, u64, extra::Err<Rich<'a, char>>> {
    text::int(10).try_map(|digits: &str, span| {
        digits
            .parse::<u64>()
            .map_err(|error| Rich::custom(span, error))
    })
}

/// Parses a list of ranges "start-end" separated by commas.
pub fn parser<'a>(
) -> impl Parser<'a, &'a str, Vec<RangeInclusive<u64>>, extra::Err<Rich<'a, char>>> {
    let range = id()
        .then_ignore(just('-'))
        .then(id())
        .try_map(|(start, end), span| {
            if start > end {
                Err(Rich::custom(
                    span,
                    format!("range starts at {start} but ends at {end}"),
                ))
            } else {
                Ok(start..=end)
            }
        })
        .padded(); // Handles whitespace around tokens, newlines included

    range.separated_by(just(',')).allow_trailing().collect().padded()
}
