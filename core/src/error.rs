use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(ConfigProblem),
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match its cells")]
    InvalidBoardShape,
}

/// Reason a board configuration was refused.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigProblem {
    #[error("board size must be positive")]
    ZeroSize,
    #[error("{bombs} bombs do not fit on {capacity} cells")]
    TooManyBombs {
        bombs: CellCount,
        capacity: CellCount,
    },
    #[error("layout has {actual} bombs but {expected} were requested")]
    LayoutMismatch {
        expected: CellCount,
        actual: CellCount,
    },
}

impl From<ConfigProblem> for GameError {
    fn from(problem: ConfigProblem) -> Self {
        Self::InvalidConfiguration(problem)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
