use chumsky::prelude::*;
use miette::*;

use crate::ranges::{is_repeated, parser, sum_matching};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let ranges = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    Ok(sum_matching(&ranges, is_repeated).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,
1698522-1698528,446443-446449,38593856-38593862,565653-565659,
824824821-824824827,2121212118-2121212124";
        assert_eq!("4174379265", process(input)?);
        Ok(())
    }

    #[test]
    fn triple_repeats_count() -> Result<()> {
        // 111 and 999 repeat a single digit three times
        assert_eq!("1110", process("100-120,990-1000")?);
        Ok(())
    }
}
