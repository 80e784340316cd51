use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::prelude::*;

use super::*;
use crate::{CellCount, Coord2, Level};

/// Seeded uniform placement. Draws coordinates until the requested number
/// of distinct positions is placed, so the generated count always matches
/// the level unless the board cannot fit it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, level: &Level) -> Vec<Coord2> {
        let total = level.total_cells();

        // optimize for full boards
        if level.mine_count() >= total {
            if level.mine_count() > total {
                log::warn!(
                    "requested {} mines but the board only fits {}",
                    level.mine_count(),
                    total
                );
            }
            return (0..level.width())
                .flat_map(|x| (0..level.height()).map(move |y| (x, y)))
                .collect();
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed: BTreeSet<Coord2> = BTreeSet::new();
        while (placed.len() as CellCount) < level.mine_count() {
            let x = rng.random_range(0..level.width());
            let y = rng.random_range(0..level.height());
            placed.insert((x, y));
        }
        placed.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exactly_the_requested_count_in_bounds() {
        let level = Level::custom(9, 7, 15);
        let mines = RandomMineGenerator::new(42).generate(&level);

        assert_eq!(mines.len(), 15);
        for &(x, y) in &mines {
            assert!(x < 9 && y < 7);
        }

        let mut deduped = mines.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), mines.len());
    }

    #[test]
    fn same_seed_reproduces_the_same_layout() {
        let level = Level::custom(16, 16, 40);

        let first = RandomMineGenerator::new(7).generate(&level);
        let second = RandomMineGenerator::new(7).generate(&level);

        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let level = Level::custom(16, 16, 40);

        let first = RandomMineGenerator::new(1).generate(&level);
        let second = RandomMineGenerator::new(2).generate(&level);

        assert_ne!(first, second);
    }

    #[test]
    fn overfull_level_fills_the_whole_board() {
        let level = Level::custom(3, 3, 50);
        let mines = RandomMineGenerator::new(0).generate(&level);

        assert_eq!(mines.len(), 9);
    }

    #[test]
    fn exactly_full_level_fills_the_whole_board() {
        let level = Level::custom(2, 2, 4);
        let mines = RandomMineGenerator::new(0).generate(&level);

        assert_eq!(mines.len(), 4);
    }
}
