use alloc::vec::Vec;
use core::ops::BitOr;
use serde::{Deserialize, Serialize};

use crate::{Cell, Coord2};

/// Terminal tag of a reveal or chord action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    NoChange,
    Revealed,
    HitMine,
}

impl RevealState {
    /// Whether this outcome could have caused an update to the board.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::NoChange
    }
}

/// Used to merge per-neighbour states when chord-revealing.
impl BitOr for RevealState {
    type Output = RevealState;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealState::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

/// Result of a reveal or chord action: the cells newly opened by the call
/// (copied at open time, duplicate-free, unordered) and the terminal tag.
///
/// The outcome owns its cell copies, so a presentation layer can redraw
/// from it without re-inspecting the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealOutcome {
    revealed: Vec<Cell>,
    state: RevealState,
}

impl RevealOutcome {
    /// Outcome carrying an explicit state; the board always uses this.
    pub const fn new(revealed: Vec<Cell>, state: RevealState) -> Self {
        Self { revealed, state }
    }

    pub const fn no_change() -> Self {
        Self::new(Vec::new(), RevealState::NoChange)
    }

    /// Infers the state from the cells alone: empty means no change, any
    /// mine among them means a hit, anything else is a plain reveal. Safety
    /// net for callers assembling outcomes by hand.
    pub fn from_cells(revealed: Vec<Cell>) -> Self {
        let state = if revealed.is_empty() {
            RevealState::NoChange
        } else if revealed.iter().any(|cell| cell.has_mine()) {
            RevealState::HitMine
        } else {
            RevealState::Revealed
        };
        Self::new(revealed, state)
    }

    pub const fn state(&self) -> RevealState {
        self.state
    }

    pub fn revealed(&self) -> &[Cell] {
        &self.revealed
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.revealed.iter().any(|cell| cell.coords() == coords)
    }
}
