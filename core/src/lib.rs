#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use outcome::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod outcome;
mod types;

/// Named board configuration: dimensions plus the number of mines to place.
/// Input to mine generation and board construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    width: Coord,
    height: Coord,
    mine_count: CellCount,
    label: String,
}

impl Level {
    pub fn new(width: Coord, height: Coord, mine_count: CellCount, label: impl Into<String>) -> Self {
        Self {
            width,
            height,
            mine_count,
            label: label.into(),
        }
    }

    pub fn custom(width: Coord, height: Coord, mine_count: CellCount) -> Self {
        Self::new(width, height, mine_count, "Custom")
    }

    pub fn beginner() -> Self {
        Self::new(9, 9, 10, "Beginner")
    }

    pub fn intermediate() -> Self {
        Self::new(16, 16, 40, "Intermediate")
    }

    pub fn expert() -> Self {
        Self::new(30, 16, 99, "Expert")
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}x{}, {} mines)",
            self.label, self.width, self.height, self.mine_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn stock_levels_carry_the_classic_configurations() {
        let beginner = Level::beginner();
        assert_eq!((beginner.width(), beginner.height()), (9, 9));
        assert_eq!(beginner.mine_count(), 10);

        let intermediate = Level::intermediate();
        assert_eq!((intermediate.width(), intermediate.height()), (16, 16));
        assert_eq!(intermediate.mine_count(), 40);

        let expert = Level::expert();
        assert_eq!((expert.width(), expert.height()), (30, 16));
        assert_eq!(expert.mine_count(), 99);
        assert_eq!(expert.total_cells(), 480);
    }

    #[test]
    fn display_names_the_configuration() {
        assert_eq!(Level::beginner().to_string(), "Beginner (9x9, 10 mines)");
        assert_eq!(Level::custom(4, 5, 6).to_string(), "Custom (4x5, 6 mines)");
    }
}
