/// One axis of the board: the side length, or a row or column index.
pub type Coord = u16;

/// Bomb, flag and cell totals. A full `Coord::MAX` x `Coord::MAX` board still fits.
pub type CellCount = u32;

/// A board position as `(row, col)`, both counted from 0 at the top-left corner.
pub type Coord2 = (Coord, Coord);

/// Converts a board position into the `[row, col]` index `ndarray` expects.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        let (row, col) = self;
        [row.into(), col.into()]
    }
}

/// Cell count of a `rows` x `cols` board, saturating instead of overflowing.
pub const fn mult(rows: Coord, cols: Coord) -> CellCount {
    (rows as CellCount).saturating_mul(cols as CellCount)
}

/// Inclusive `(first, last)` span of indices within one step of `center`, or `None` when
/// nothing of it lies on a board of `side` cells.
fn span(center: Coord, side: Coord) -> Option<(Coord, Coord)> {
    let last = side.checked_sub(1)?;
    let first = center.saturating_sub(1);
    let end = center.saturating_add(1).min(last);
    (first <= end).then_some((first, end))
}

/// Walks the up to 8 positions touching `center` by an edge or a corner, row by row from
/// the top-left, skipping positions off the board.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    cols: (Coord, Coord),
    last_row: Coord,
    cursor: Option<Coord2>,
}

impl NeighborIter {
    pub fn new(center: Coord2, side: Coord) -> Self {
        let (row, col) = center;
        let (rows, cols) = match (span(row, side), span(col, side)) {
            (Some(rows), Some(cols)) => (rows, cols),
            _ => {
                return Self {
                    center,
                    cols: (0, 0),
                    last_row: 0,
                    cursor: None,
                };
            }
        };
        Self {
            center,
            cols,
            last_row: rows.1,
            cursor: Some((rows.0, cols.0)),
        }
    }

    fn step(&self, (row, col): Coord2) -> Option<Coord2> {
        if col < self.cols.1 {
            Some((row, col + 1))
        } else if row < self.last_row {
            Some((row + 1, self.cols.0))
        } else {
            None
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(pos) = self.cursor {
            self.cursor = self.step(pos);
            if pos != self.center {
                return Some(pos);
            }
        }
        None
    }
}
