use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Produces a fully populated [`Grid`]: bombs placed and adjacency counts computed.
pub trait BoardGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Grid>;
}

#[cfg(test)]
pub(crate) fn assert_adjacency_consistent(grid: &Grid) {
    for cell in grid.iter().filter(|cell| !cell.is_bomb()) {
        let expected = grid
            .iter_neighbors(cell.coords())
            .filter(|&pos| grid[pos].is_bomb())
            .count();
        assert_eq!(
            usize::from(cell.adjacent_bombs()),
            expected,
            "wrong count at {:?}",
            cell.coords()
        );
    }
}
