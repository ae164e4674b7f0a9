use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Widest selection whose value always fits in a `u64` (`10^19 - 1 < u64::MAX`).
pub const MAX_WIDTH: usize = 19;

/// A line of input that is not made only of decimal digits.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
#[error("bank contains non-digit character {found:?}")]
#[diagnostic(
    code(aoc2025::day3::validation),
    help("a bank is a single line of the characters 0-9")
)]
pub struct ValidationError {
    pub found: char,
    #[label("not a digit")]
    pub span: SourceSpan,
}

/// One line of batteries, each rated with a single decimal digit.
///
/// Immutable once parsed. An empty line is a valid, empty bank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bank {
    digits: Vec<u8>,
}

impl FromStr for Bank {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((offset, found)) = s.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ValidationError {
                found,
                span: (offset, found.len_utf8()).into(),
            });
        }

        Ok(Self {
            digits: s.bytes().map(|b| b - b'0').collect(),
        })
    }
}

impl Bank {
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.digits.get(index).copied()
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Largest two-digit number made from a pair of digits in order.
    ///
    /// The first digit is the leftmost maximum of every position but the
    /// last, the second is the maximum of everything after it. Returns 0 for
    /// banks shorter than two digits.
    ///
    /// ```
    /// use aoc2025_day_3::bank::Bank;
    ///
    /// let bank: Bank = "987654321111111".parse().unwrap();
    /// assert_eq!(bank.max_pair(), 98);
    /// ```
    pub fn max_pair(&self) -> u64 {
        let len = self.digits.len();
        if len < 2 {
            return 0;
        }

        let Some((first, tens)) = leftmost_max(&self.digits[..len - 1]) else {
            return 0;
        };
        let Some((_, units)) = leftmost_max(&self.digits[first + 1..]) else {
            return 0;
        };

        u64::from(tens) * 10 + u64::from(units)
    }

    /// Largest number made from `n` digits picked in order.
    ///
    /// Returns 0 when no selection exists (`n == 0`, `n` longer than the
    /// bank) or when `n` exceeds [`MAX_WIDTH`]. A bank whose best selection
    /// is all zeros (`"000"` with `n == 3`) also yields 0; callers cannot tell
    /// the two apart from the return value alone. Use [`Bank::select`] when
    /// the difference matters.
    pub fn max_n(&self, n: usize) -> u64 {
        if n > MAX_WIDTH {
            return 0;
        }

        self.select(n)
            .and_then(|selection| selection.value())
            .unwrap_or(0)
    }

    /// Picks the `n` digits forming the largest number, keeping their order.
    ///
    /// Greedy: the digit at pick `k` may sit no further right than
    /// `len - (n - k)`, otherwise the remaining picks could not be filled.
    /// Within that window the largest digit wins and ties go to the leftmost
    /// occurrence, which leaves the widest window for the picks that follow.
    pub fn select(&self, n: usize) -> Option<Selection> {
        let len = self.digits.len();
        if n == 0 || n > len {
            return None;
        }

        let mut positions = Vec::with_capacity(n);
        let mut start = 0;

        for remaining in (1..=n).rev() {
            let end = len - remaining;
            let (offset, _) = leftmost_max(&self.digits[start..=end])?;
            let position = start + offset;
            positions.push(position);
            start = position + 1;
        }

        let digits = positions.iter().map(|&i| self.digits[i]).collect();
        Some(Selection { positions, digits })
    }
}

/// Index and value of the first occurrence of the largest digit.
fn leftmost_max(window: &[u8]) -> Option<(usize, u8)> {
    // Nothing beats a 9, and the first one found is the leftmost.
    if let Some(index) = window.iter().position(|&d| d == 9) {
        return Some((index, 9));
    }

    window
        .iter()
        .copied()
        .enumerate()
        .max_by_key(|&(index, digit)| (digit, Reverse(index)))
}

/// The digits picked out of a [`Bank`], in their original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    positions: Vec<usize>,
    digits: Vec<u8>,
}

impl Selection {
    /// Indices into the bank the digits were taken from, strictly increasing.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn width(&self) -> usize {
        self.digits.len()
    }

    /// Positional value of the picked digits, `None` if it overflows a `u64`.
    pub fn value(&self) -> Option<u64> {
        self.digits.iter().try_fold(0u64, |acc, &digit| {
            acc.checked_mul(10)?.checked_add(u64::from(digit))
        })
    }
}

impl fmt::Display for Selection {
    /// Writes the digits as picked, leading zeros included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.digits
            .iter()
            .try_for_each(|digit| write!(f, "{digit}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn bank(s: &str) -> Bank {
        s.parse().expect("valid bank")
    }

    #[test]
    fn parses_digits_in_order() {
        let bank = bank("12345");
        assert_eq!(bank.len(), 5);
        assert_eq!(bank.digits(), &[1, 2, 3, 4, 5]);
        assert_eq!(bank.get(0), Some(1));
        assert_eq!(bank.get(4), Some(5));
        assert_eq!(bank.get(5), None);
    }

    #[test]
    fn empty_line_is_an_empty_bank() {
        let bank = bank("");
        assert!(bank.is_empty());
        assert_eq!(bank.len(), 0);
        assert_eq!(bank.max_n(0), 0);
        assert_eq!(bank.max_pair(), 0);
    }

    #[rstest]
    #[case("123abc", 'a', 3)]
    #[case("abc123", 'a', 0)]
    #[case("12-34", '-', 2)]
    #[case("12 34", ' ', 2)]
    #[case("9é", 'é', 1)]
    fn rejects_non_digits(#[case] input: &str, #[case] found: char, #[case] offset: usize) {
        let err = input.parse::<Bank>().unwrap_err();
        assert_eq!(err.found, found);
        assert_eq!(err.span.offset(), offset);
        assert_eq!(err.span.len(), found.len_utf8());
    }

    #[rstest]
    #[case("1234", 34)]
    #[case("987654321111111", 98)]
    #[case("1111", 11)]
    #[case("123456789", 89)]
    #[case("987654321", 98)]
    #[case("42", 42)]
    #[case("1", 0)]
    #[case("811111111111119", 89)]
    #[case("234234234234278", 78)]
    #[case("818181911112111", 92)]
    #[case("05", 5)]
    fn max_pair(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(bank(input).max_pair(), expected);
    }

    #[rstest]
    #[case("12345", 1, 5)]
    #[case("12345", 2, 45)]
    #[case("12345", 5, 12345)]
    #[case("987654321111111", 3, 987)]
    #[case("987654321111111", 12, 987654321111)]
    #[case("811111111111119", 12, 811111111119)]
    #[case("234234234234278", 12, 434234234278)]
    #[case("818181911112111", 12, 888911112111)]
    #[case("98765432101234567890", 12, 987654567890)]
    fn max_n(#[case] input: &str, #[case] n: usize, #[case] expected: u64) {
        assert_eq!(bank(input).max_n(n), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[case(10)]
    fn max_n_out_of_range_is_zero(#[case] n: usize) {
        assert_eq!(bank("12345").max_n(n), 0);
        assert_eq!(bank("12345").select(n), None);
    }

    #[test]
    fn ties_pick_the_leftmost_digit() {
        let selection = bank("5515").select(2).unwrap();
        assert_eq!(selection.positions(), &[0, 1]);
        assert_eq!(selection.value(), Some(55));

        let selection = bank("3939").select(1).unwrap();
        assert_eq!(selection.positions(), &[1]);

        let selection = bank("7177").select(2).unwrap();
        assert_eq!(selection.positions(), &[0, 2]);
    }

    #[test]
    fn all_zero_selection_matches_the_sentinel() {
        let bank = bank("000");
        assert_eq!(bank.max_n(3), 0);
        assert_eq!(bank.max_n(4), 0);

        let selection = bank.select(3).unwrap();
        assert_eq!(selection.to_string(), "000");
        assert_eq!(selection.value(), Some(0));
    }

    #[test]
    fn selection_keeps_leading_zeros() {
        let selection = bank("05").select(2).unwrap();
        assert_eq!(selection.to_string(), "05");
        assert_eq!(selection.value(), Some(5));
        assert_eq!(selection.width(), 2);
    }

    #[test]
    fn widths_past_u64_are_not_computable() {
        let bank = bank(&"9".repeat(25));
        assert_eq!(bank.max_n(MAX_WIDTH), 9_999_999_999_999_999_999);
        assert_eq!(bank.max_n(MAX_WIDTH + 1), 0);
        assert_eq!(bank.select(MAX_WIDTH + 1).map(|s| s.width()), Some(20));
    }

    #[test]
    fn widths_past_max_width_are_zero_even_when_they_fit() {
        let bank = bank(&format!("1{}", "0".repeat(19)));
        assert_eq!(bank.max_n(MAX_WIDTH + 1), 0);
        let selection = bank.select(MAX_WIDTH + 1).unwrap();
        assert_eq!(selection.value(), Some(10_000_000_000_000_000_000));
    }

    #[test]
    fn selection_is_idempotent() {
        let bank = bank("3141592653589793");
        assert_eq!(bank.select(7), bank.select(7));
        assert_eq!(bank.max_n(7), bank.max_n(7));
    }
}
