pub mod part1;
pub mod part2;
pub mod ranges;

pub const TITLE: &str = "Gift Shop";
