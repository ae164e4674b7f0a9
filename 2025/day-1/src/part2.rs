use chumsky::prelude::*;
use miette::*;

use crate::dial::{parser, CountMode, Dial};

/// Counts every click that points the dial at 0, mid-rotation included.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rotations = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed with errors: {:?}", e))?;

    let zeros = Dial::default().count_zeros(&rotations, CountMode::PassZero);

    Ok(zeros.to_string())
}
