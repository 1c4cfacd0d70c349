use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Bomb,
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Empty
    }
}

/// One board position with its hidden content and player-visible marks.
///
/// `kind` and `adjacent_bombs` are fixed once the board is generated. `revealed` only ever
/// goes from `false` to `true`, and `flagged` can only change while the cell is unrevealed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    row: Coord,
    col: Coord,
    kind: CellKind,
    adjacent_bombs: u8,
    revealed: bool,
    flagged: bool,
}

impl Cell {
    pub const fn new((row, col): Coord2) -> Self {
        Self {
            row,
            col,
            kind: CellKind::Empty,
            adjacent_bombs: 0,
            revealed: false,
            flagged: false,
        }
    }

    pub const fn row(&self) -> Coord {
        self.row
    }

    pub const fn col(&self) -> Coord {
        self.col
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }

    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    pub const fn is_bomb(&self) -> bool {
        matches!(self.kind, CellKind::Bomb)
    }

    /// Number of bombs among the neighbors, only meaningful for empty cells.
    pub const fn adjacent_bombs(&self) -> u8 {
        self.adjacent_bombs
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Hidden and unflagged, i.e. a flood fill may open it.
    pub const fn is_hidden(&self) -> bool {
        !self.revealed && !self.flagged
    }

    pub(crate) fn make_bomb(&mut self) {
        self.kind = CellKind::Bomb;
    }

    pub(crate) fn add_adjacent_bomb(&mut self) {
        self.adjacent_bombs += 1;
    }

    pub(crate) fn reveal(&mut self) {
        self.flagged = false;
        self.revealed = true;
    }

    pub(crate) fn set_flagged(&mut self, flagged: bool) {
        debug_assert!(!self.revealed);
        self.flagged = flagged;
    }
}
