use serde::{Deserialize, Serialize};

use crate::Coord2;

/// Per-position state owned by the [`Board`](crate::Board): mine content,
/// visibility, flag marker, and the precomputed neighbour mine count.
///
/// All mutation goes through the board; callers only ever observe cells.
/// `opened` is monotonic and a cell is never opened and flagged at once.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coords: Coord2,
    has_mine: bool,
    opened: bool,
    flagged: bool,
    neighbour_mine_count: u8,
}

impl Cell {
    pub(crate) const fn new(coords: Coord2) -> Self {
        Self {
            coords,
            has_mine: false,
            opened: false,
            flagged: false,
            neighbour_mine_count: 0,
        }
    }

    pub const fn coords(self) -> Coord2 {
        self.coords
    }

    pub const fn has_mine(self) -> bool {
        self.has_mine
    }

    pub const fn is_opened(self) -> bool {
        self.opened
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Number of mined Moore neighbours. Meaningless for mine cells, which
    /// keep the initial zero; the board never consults it for them.
    pub const fn neighbour_mine_count(self) -> u8 {
        self.neighbour_mine_count
    }

    /// Whether the cell still hides its content (unopened, flag or not).
    pub const fn is_closed(self) -> bool {
        !self.opened
    }

    pub(crate) fn place_mine(&mut self) {
        self.has_mine = true;
    }

    pub(crate) fn open(&mut self) {
        self.opened = true;
    }

    pub(crate) fn set_flagged(&mut self, flagged: bool) {
        self.flagged = flagged;
    }

    pub(crate) fn set_neighbour_mine_count(&mut self, count: u8) {
        self.neighbour_mine_count = count;
    }
}
