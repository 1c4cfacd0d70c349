use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Dense square board owning every [`Cell`], indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    cells: Array2<Cell>,
}

/// Unchecked wire form of a [`Grid`].
#[derive(Deserialize)]
struct RawGrid {
    cells: Array2<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GameError;

    /// Only square boards whose cells sit at their own coordinates, with counts that match
    /// the bombs around them, are accepted.
    fn try_from(RawGrid { cells }: RawGrid) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows != cols || Coord::try_from(rows).is_err() {
            return Err(GameError::InvalidBoardShape);
        }

        let grid = Self { cells };
        for ((row, col), cell) in grid.cells.indexed_iter() {
            if (usize::from(cell.row()), usize::from(cell.col())) != (row, col) {
                return Err(GameError::InvalidBoardShape);
            }
            if cell.is_bomb() {
                continue;
            }
            let bombs = grid
                .iter_neighbors(cell.coords())
                .filter(|&pos| grid[pos].is_bomb())
                .count();
            if usize::from(cell.adjacent_bombs()) != bombs {
                return Err(GameError::InvalidBoardShape);
            }
        }
        Ok(grid)
    }
}

impl Grid {
    /// Board of `side` x `side` empty, hidden cells with zero adjacency counts.
    pub fn new(side: Coord) -> Self {
        let len = usize::from(side);
        let cells = Array2::from_shape_fn((len, len), |(row, col)| {
            // both indices are below `side`, which is a `Coord`
            Cell::new((row as Coord, col as Coord))
        });
        Self { cells }
    }

    pub fn side(&self) -> Coord {
        // the shape is built from a `Coord`, so it always fits
        self.cells.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.side(), self.side())
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let side = self.side();
        row < side && col < side
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub(crate) fn get_mut(&mut self, coords: Coord2) -> Option<&mut Cell> {
        self.cells.get_mut(coords.to_nd_index())
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// One row of the board, left to right.
    pub fn row(&self, row: Coord) -> impl Iterator<Item = &Cell> {
        self.cells.row(row.into()).into_iter()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.side())
    }

    pub fn bomb_count(&self) -> CellCount {
        self.count_where(Cell::is_bomb)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_where(Cell::is_revealed)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_where(Cell::is_flagged)
    }

    /// Empty cells the player still has to open.
    pub fn unrevealed_safe_count(&self) -> CellCount {
        self.count_where(|cell| !cell.is_bomb() && !cell.is_revealed())
    }

    /// Turns the cell at `coords` into a bomb and bumps the count of every neighbor.
    ///
    /// Returns `false` without touching anything when the cell already holds a bomb.
    pub(crate) fn place_bomb(&mut self, coords: Coord2) -> bool {
        match self.get_mut(coords) {
            Some(cell) if !cell.is_bomb() => cell.make_bomb(),
            _ => return false,
        }

        for pos in self.iter_neighbors(coords) {
            self.cells[pos.to_nd_index()].add_adjacent_bomb();
        }
        true
    }

    fn count_where(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        // at most `side * side` cells, which fits a `CellCount`
        self.cells.iter().filter(|&cell| predicate(cell)).count() as CellCount
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
