use alloc::collections::BTreeSet;

use super::*;

/// Places bombs at a fixed set of coordinates, for tests and deterministic replays.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedBoardGenerator {
    bombs: BTreeSet<Coord2>,
}

impl FixedBoardGenerator {
    pub fn new(bombs: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            bombs: bombs.into_iter().collect(),
        }
    }

    /// Distinct bomb coordinates in this layout.
    pub fn bomb_count(&self) -> CellCount {
        self.bombs.len() as CellCount
    }

    /// Configuration matching this layout on a `size` x `size` board.
    pub fn config(&self, size: Coord) -> Result<GameConfig> {
        GameConfig::new(size, self.bomb_count())
    }
}

impl BoardGenerator for FixedBoardGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Grid> {
        let config = GameConfig::new(config.size, config.bombs)?;
        if self.bomb_count() != config.bombs {
            return Err(ConfigProblem::LayoutMismatch {
                expected: config.bombs,
                actual: self.bomb_count(),
            }
            .into());
        }

        let mut grid = Grid::new(config.size);
        for &coords in &self.bombs {
            if !grid.place_bomb(coords) {
                return Err(GameError::InvalidCoords);
            }
        }
        Ok(grid)
    }
}
