use chumsky::prelude::*;

/// Number of marks on the dial, numbered `0..POSITIONS`.
pub const POSITIONS: u32 = 100;

/// Where the dial points before the first rotation.
pub const START: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards lower numbers.
    Left,
    /// Towards higher numbers.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    pub direction: Direction,
    pub steps: u32,
}

/// What a single rotation did to the dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    /// Position after the rotation.
    pub position: u32,
    /// Clicks during the rotation that left the dial pointing at 0, the last
    /// one included.
    pub zero_hits: u64,
}

/// Which zero events are counted over a sequence of rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountMode {
    /// Rotations that finish pointing at 0.
    EndAtZero,
    /// Every click that points at 0, including mid-rotation ones.
    PassZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    position: u32,
}

impl Default for Dial {
    fn default() -> Self {
        Self { position: START }
    }
}

impl Dial {
    /// A dial pointing at `position`, wrapped onto the dial face.
    pub fn at(position: u32) -> Self {
        Self {
            position: position % POSITIONS,
        }
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn rotate(&mut self, rotation: Rotation) -> Click {
        let modulus = i64::from(POSITIONS);
        let position = i64::from(self.position);
        let steps = i64::from(rotation.steps);

        let (zero_hits, new_position) = match rotation.direction {
            Direction::Left => {
                // Multiples of the modulus in [position - steps, position - 1].
                let upper = position - 1;
                let lower_minus_1 = position - steps - 1;
                let hits = upper.div_euclid(modulus) - lower_minus_1.div_euclid(modulus);
                (hits, (position - steps).rem_euclid(modulus))
            }
            Direction::Right => {
                // position is always normalized, so plain division counts the wraps.
                let end = position + steps;
                (end / modulus, end % modulus)
            }
        };

        self.position = new_position as u32;
        Click {
            position: self.position,
            zero_hits: zero_hits as u64,
        }
    }

    /// Applies every rotation in order and counts the zero events `mode` selects.
    pub fn count_zeros(&mut self, rotations: &[Rotation], mode: CountMode) -> u64 {
        rotations
            .iter()
            .map(|&rotation| {
                let click = self.rotate(rotation);
                match mode {
                    CountMode::EndAtZero => u64::from(click.position == 0),
                    CountMode::PassZero => click.zero_hits,
                }
            })
            .sum()
    }
}

/// One rotation per line, `L<steps>` or `R<steps>`, with at least one step.
pub fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Rotation>, extra::Err<Rich<'a, char>>> {
    let direction = choice((
        just('L').to(Direction::Left),
        just('R').to(Direction::Right),
    ));

    // Leading zeros are allowed, "L05" is five clicks.
    let steps = text::digits(10)
        .to_slice()
        .try_map(|digits: &str, span| match digits.parse::<u32>() {
            Ok(0) => Err(Rich::custom(
                span,
                "a rotation must move the dial at least one click",
            )),
            Ok(steps) => Ok(steps),
            Err(error) => Err(Rich::custom(span, error)),
        });

    let rotation = direction
        .then(steps)
        .map(|(direction, steps)| Rotation { direction, steps });

    rotation
        .separated_by(text::whitespace().at_least(1))
        .allow_trailing()
        .collect()
        .padded()
}
