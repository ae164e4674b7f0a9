use crate::bank::Bank;

/// Only ASCII blanks are stripped; any other whitespace makes the line invalid.
const BLANKS: [char; 4] = [' ', '\t', '\r', '\n'];

/// Every line of `input` that parses as a [`Bank`], in order.
///
/// Lines are trimmed and blank ones ignored. Lines holding anything other
/// than digits are skipped without failing the rest of the input.
pub fn banks(input: &str) -> impl Iterator<Item = Bank> + '_ {
    input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim_matches(BLANKS)))
        .filter(|(_, line)| !line.is_empty())
        .filter_map(|(line_number, line)| match line.parse::<Bank>() {
            Ok(bank) => Some(bank),
            Err(error) => {
                tracing::debug!(line_number, %error, "skipping invalid bank");
                None
            }
        })
}

/// Sum of the best `width`-digit joltage of every bank in `input`.
///
/// Banks shorter than `width` contribute nothing.
#[tracing::instrument(skip(input))]
pub fn total_joltage(input: &str, width: usize) -> u64 {
    banks(input).map(|bank| bank.max_n(width)).sum()
}
