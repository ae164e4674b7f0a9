pub mod aggregate;
pub mod bank;
pub mod part1;
pub mod part2;

pub const TITLE: &str = "Lobby";
