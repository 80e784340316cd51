use alloc::vec::Vec;

use crate::{Coord2, Level};

pub use random::*;

mod random;

/// Produces the mine coordinate set for a board configuration. The board
/// constructor accepts whatever set it is handed; generators exist to make
/// handing it one convenient.
pub trait MineGenerator {
    fn generate(self, level: &Level) -> Vec<Coord2>;
}
