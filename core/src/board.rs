use alloc::collections::VecDeque;
use alloc::vec::Vec;
use hashbrown::HashSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::generator::MineGenerator;
use crate::{
    mult, Cell, CellCount, Coord, Coord2, GameError, Level, NeighbourIterExt, Result,
    RevealOutcome, RevealState, ToNdIndex,
};

/// The rule engine: owns every [`Cell`] of a rectangular grid and applies
/// the player actions (reveal, chord, flag) to them.
///
/// The board is synchronous and single-threaded; each action completes
/// before returning and describes everything it touched in its outcome.
/// It keeps no session state beyond the cells themselves: whether to stop
/// playing after a mine hit is the caller's call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    safe_opened: CellCount,
    flag_count: CellCount,
}

impl Board {
    /// Builds a board of `width * height` cells with mines at the given
    /// coordinates. Out-of-bounds mine coordinates are skipped and
    /// duplicates collapse; neither is an error. Fails only on a zero
    /// dimension.
    pub fn new(width: Coord, height: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions { width, height });
        }

        let mut cells = Array2::from_shape_fn((width.into(), height.into()), |(x, y)| {
            Cell::new((x as Coord, y as Coord))
        });

        let mut mine_count = 0;
        for &coords in mine_coords {
            if coords.0 >= width || coords.1 >= height {
                log::debug!("skipping out-of-bounds mine at {:?}", coords);
                continue;
            }
            let cell = &mut cells[coords.to_nd_index()];
            if !cell.has_mine() {
                cell.place_mine();
                mine_count += 1;
            }
        }

        for x in 0..width {
            for y in 0..height {
                let coords = (x, y);
                if cells[coords.to_nd_index()].has_mine() {
                    continue;
                }
                let count = cells
                    .iter_neighbours(coords)
                    .filter(|&pos| cells[pos.to_nd_index()].has_mine())
                    .count()
                    .try_into()
                    .unwrap();
                cells[coords.to_nd_index()].set_neighbour_mine_count(count);
            }
        }

        Ok(Self {
            cells,
            mine_count,
            safe_opened: 0,
            flag_count: 0,
        })
    }

    /// Builds a board for a level, with the mine set drawn by `generator`.
    pub fn from_level(level: &Level, generator: impl MineGenerator) -> Result<Self> {
        let mines = generator.generate(level);
        Self::new(level.width(), level.height(), &mines)
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        let (width, height) = self.size();
        mult(width, height)
    }

    /// The cell at `coords`, or `None` when out of bounds.
    pub fn cell(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    /// All cells, in no guaranteed order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The mined cells, in no guaranteed order.
    pub fn mines(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| cell.has_mine())
    }

    /// How many mines have not been flagged yet. Negative when the player
    /// placed more flags than there are mines; callers render it as-is.
    pub fn remaining_mines(&self) -> i64 {
        i64::from(self.mine_count) - i64::from(self.flag_count)
    }

    /// True once every safe cell is opened. Flag placement plays no part:
    /// a fully flagged board with closed safe cells is not yet won.
    pub fn has_won(&self) -> bool {
        self.safe_opened == self.safe_cell_count()
    }

    /// Toggles the flag at `coords`. Out-of-bounds and opened cells are
    /// left alone.
    pub fn flag(&mut self, coords: Coord2) {
        let Some(cell) = self.cells.get_mut(coords.to_nd_index()) else {
            return;
        };
        if cell.is_opened() {
            return;
        }

        let flagged = !cell.is_flagged();
        cell.set_flagged(flagged);
        if flagged {
            self.flag_count += 1;
        } else {
            self.flag_count -= 1;
        }
        log::debug!("flag at {:?} now {}", coords, flagged);
    }

    /// Reveals the cell at `coords`, flood-filling outward through
    /// zero-count cells.
    ///
    /// Out-of-bounds, flagged, and already-opened targets are no-ops. A
    /// mined target is opened alone and reported as a hit; the flood never
    /// reaches a mine on its own because expansion stops at any cell with
    /// a non-zero count.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let Some(&cell) = self.cell(coords) else {
            return RevealOutcome::no_change();
        };
        if cell.is_flagged() || cell.is_opened() {
            return RevealOutcome::no_change();
        }

        if cell.has_mine() {
            let opened = self.open_cell(coords);
            log::debug!("mine hit at {:?}", coords);
            return RevealOutcome::new(alloc::vec![opened], RevealState::HitMine);
        }

        let mut revealed = Vec::new();
        self.flood_reveal(coords, &mut revealed);
        RevealOutcome::new(revealed, RevealState::Revealed)
    }

    /// Reveals all unflagged closed neighbours of an already-open cell,
    /// provided exactly as many neighbours are flagged as the cell counts
    /// mines. Only the count matters; wrong flags make the chord hit a
    /// mine, at which point traversal stops and the outcome carries the
    /// mine plus whatever opened before it.
    pub fn chord(&mut self, coords: Coord2) -> RevealOutcome {
        let Some(&cell) = self.cell(coords) else {
            return RevealOutcome::no_change();
        };
        if !cell.is_opened() {
            return RevealOutcome::no_change();
        }
        if self.count_flagged_neighbours(coords) != cell.neighbour_mine_count() {
            return RevealOutcome::no_change();
        }

        let neighbours: SmallVec<[Coord2; 8]> = self.cells.iter_neighbours(coords).collect();
        let mut revealed = Vec::new();
        let mut state = RevealState::NoChange;

        for pos in neighbours {
            let neighbour = self.cells[pos.to_nd_index()];
            if neighbour.is_flagged() || neighbour.is_opened() {
                continue;
            }

            if neighbour.has_mine() {
                let opened = self.open_cell(pos);
                revealed.push(opened);
                log::debug!("chord at {:?} hit mine at {:?}", coords, pos);
                return RevealOutcome::new(revealed, RevealState::HitMine);
            }

            self.flood_reveal(pos, &mut revealed);
            state = state | RevealState::Revealed;
        }

        RevealOutcome::new(revealed, state)
    }

    /// Opens `start` and every cell reachable from it through zero-count
    /// cells, appending a copy of each newly opened cell to `revealed`.
    /// Explicit work queue; each cell is entered at most once.
    fn flood_reveal(&mut self, start: Coord2, revealed: &mut Vec<Cell>) {
        let mut visited: HashSet<Coord2> = HashSet::new();
        let mut to_visit: VecDeque<Coord2> = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            if !visited.insert(coords) {
                continue;
            }

            let cell = self.cells[coords.to_nd_index()];
            if cell.is_opened() || cell.is_flagged() {
                continue;
            }

            let opened = self.open_cell(coords);
            revealed.push(opened);
            log::trace!(
                "flood opened {:?}, neighbour mines: {}",
                coords,
                opened.neighbour_mine_count()
            );

            if opened.neighbour_mine_count() == 0 {
                to_visit.extend(
                    self.cells
                        .iter_neighbours(coords)
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }

    /// Opens a single cell, keeps the win counter current, and returns a
    /// copy of its state after opening.
    fn open_cell(&mut self, coords: Coord2) -> Cell {
        let cell = &mut self.cells[coords.to_nd_index()];
        cell.open();
        if !cell.has_mine() {
            self.safe_opened += 1;
        }
        *cell
    }

    fn count_flagged_neighbours(&self, coords: Coord2) -> u8 {
        self.cells
            .iter_neighbours(coords)
            .filter(|&pos| self.cells[pos.to_nd_index()].is_flagged())
            .count()
            .try_into()
            .unwrap()
    }

    fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }
}
