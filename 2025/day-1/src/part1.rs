use chumsky::prelude::*;
use miette::*;

use crate::dial::{parser, CountMode, Dial};

/// Counts the rotations that leave the dial pointing at 0.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rotations = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed with errors: {:?}", e))?;

    let zeros = Dial::default().count_zeros(&rotations, CountMode::EndAtZero);

    Ok(zeros.to_string())
}
