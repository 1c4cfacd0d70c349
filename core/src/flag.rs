use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagOutcome {
    /// Revealed or out-of-range cell.
    NoChange,
    Placed,
    Removed,
    /// Every flag is already in use, only removing one is allowed.
    LimitReached,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Placed | Self::Removed)
    }
}

/// Running flag count for one board, capped at the number of bombs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagTracker {
    flagged: CellCount,
    max_flags: CellCount,
}

impl FlagTracker {
    pub const fn new(max_flags: CellCount) -> Self {
        Self {
            flagged: 0,
            max_flags,
        }
    }

    pub const fn flagged(&self) -> CellCount {
        self.flagged
    }

    pub const fn max_flags(&self) -> CellCount {
        self.max_flags
    }

    pub const fn remaining(&self) -> CellCount {
        self.max_flags.saturating_sub(self.flagged)
    }

    /// Flags or unflags an unrevealed cell. Placing is refused once `max_flags` flags are
    /// down, removing always succeeds.
    ///
    /// The count is taken from `grid` first, so flags this tracker did not place still
    /// count against the cap.
    pub fn toggle(&mut self, grid: &mut Grid, coords: Coord2) -> FlagOutcome {
        use FlagOutcome::*;

        let on_grid = grid.flagged_count();
        if on_grid != self.flagged {
            log::debug!(
                "Flag count out of sync, tracked: {}, on grid: {}",
                self.flagged,
                on_grid
            );
            self.flagged = on_grid;
        }

        let Some(cell) = grid.get_mut(coords) else {
            return NoChange;
        };
        if cell.is_revealed() {
            return NoChange;
        }

        if cell.is_flagged() {
            cell.set_flagged(false);
            self.flagged = self.flagged.saturating_sub(1);
            Removed
        } else if self.flagged >= self.max_flags {
            log::debug!(
                "Refusing flag at {:?}, all {} flags in use",
                coords,
                self.max_flags
            );
            LimitReached
        } else {
            cell.set_flagged(true);
            self.flagged += 1;
            Placed
        }
    }
}
