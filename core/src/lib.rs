//! Minesweeper engine: board generation, flood-fill reveal, flag accounting and win/loss
//! tracking for square boards.
//!
//! The engine is deterministic once a board is generated and never touches any rendering
//! surface. A presentation layer drives a [`GameState`] with coordinates and reads back
//! [`GameSnapshot`]s, optionally reacting to [`GameEvent`]s through a [`GameListener`].
#![cfg_attr(not(test), no_std)]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use event::*;
pub use flag::*;
pub use generator::*;
pub use grid::*;
pub use reveal::*;
pub use state::*;
pub use types::*;

mod cell;
mod error;
mod event;
mod flag;
mod generator;
mod grid;
mod reveal;
mod state;
mod types;

/// Side length and bomb count of a square board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub bombs: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, bombs: CellCount) -> Self {
        Self { size, bombs }
    }

    /// Fails with [`GameError::InvalidConfiguration`] for an empty board or more bombs than cells.
    pub fn new(size: Coord, bombs: CellCount) -> Result<Self> {
        if size == 0 {
            return Err(ConfigProblem::ZeroSize.into());
        }
        let capacity = mult(size, size);
        if bombs > capacity {
            return Err(ConfigProblem::TooManyBombs { bombs, capacity }.into());
        }
        Ok(Self::new_unchecked(size, bombs))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.bombs)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Difficulty::default().config()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    pub const fn config(self) -> GameConfig {
        match self {
            Self::Easy => GameConfig::new_unchecked(9, 10),
            Self::Medium => GameConfig::new_unchecked(16, 40),
            Self::Hard => GameConfig::new_unchecked(30, 99),
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}
