use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Density above which bombs are drawn from a shuffled list of free cells instead of by
/// rejection sampling, whose expected number of draws grows without bound as the board fills.
const SHUFFLE_DENSITY: f64 = 0.5;

/// Uniform bomb placement driven by a seeded PRNG, so a seed always reproduces the same
/// sequence of boards.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator {
    seed: u64,
    rng: SmallRng,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws random coordinates and discards the ones already holding a bomb.
    fn place_by_rejection(&mut self, grid: &mut Grid, bombs: CellCount) {
        let side = grid.side();
        let mut placed = 0;
        let mut draws: u64 = 0;
        while placed < bombs {
            let coords = (
                self.rng.random_range(0..side),
                self.rng.random_range(0..side),
            );
            draws += 1;
            if grid.place_bomb(coords) {
                placed += 1;
            }
        }
        log::trace!("Placed {} bombs in {} draws", bombs, draws);
    }

    /// Partial Fisher-Yates over every coordinate, terminates for any density.
    fn place_by_shuffle(&mut self, grid: &mut Grid, bombs: CellCount) {
        let side = grid.side();
        let mut all_coords: Vec<Coord2> = (0..side)
            .flat_map(|row| (0..side).map(move |col| (row, col)))
            .collect();
        let (chosen, _) = all_coords.partial_shuffle(&mut self.rng, bombs as usize);
        for &coords in chosen.iter() {
            grid.place_bomb(coords);
        }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Grid> {
        let config = GameConfig::new(config.size, config.bombs)?;
        let mut grid = Grid::new(config.size);

        let density = f64::from(config.bombs) / f64::from(config.total_cells());
        if density > SHUFFLE_DENSITY {
            log::warn!(
                "Bomb density {:.2} too high for rejection sampling, shuffling instead",
                density
            );
            self.place_by_shuffle(&mut grid, config.bombs);
        } else {
            self.place_by_rejection(&mut grid, config.bombs);
        }

        // double check bomb count
        let count = grid.bomb_count();
        if count != config.bombs {
            log::warn!(
                "Generated board bomb count mismatch, actual: {}, requested: {}",
                count,
                config.bombs
            );
        }
        Ok(grid)
    }
}
