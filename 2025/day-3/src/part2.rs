use miette::*;

use crate::aggregate::total_joltage;

/// Each bank turns on twelve batteries once the safety override is engaged.
const WIDTH: usize = 12;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    Ok(total_joltage(input, WIDTH).to_string())
}
