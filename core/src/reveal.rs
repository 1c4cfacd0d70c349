use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cells opened by a single reveal, in the order they were opened.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealReport {
    pub opened: Vec<Coord2>,
    /// Set when the revealed cell was a bomb, which is then the only opened cell.
    pub trigger: Option<Coord2>,
}

impl RevealReport {
    pub fn is_empty(&self) -> bool {
        self.opened.is_empty()
    }

    pub fn hit_bomb(&self) -> bool {
        self.trigger.is_some()
    }
}

/// Opens the cell at `coords`, flooding through the connected zero region and its border.
///
/// Already revealed, flagged or out-of-range targets are left alone and produce an empty
/// report. A bomb is opened on its own and never cascades. The flood uses an explicit queue
/// and a visited set so each cell is looked at once, whatever the size of the region, and
/// it never opens a flagged cell.
pub fn reveal(grid: &mut Grid, coords: Coord2) -> RevealReport {
    let mut report = RevealReport::default();

    let Some(cell) = grid.get_mut(coords) else {
        return report;
    };
    if !cell.is_hidden() {
        return report;
    }

    cell.reveal();
    report.opened.push(coords);
    if cell.is_bomb() {
        log::debug!("Bomb revealed at {:?}", coords);
        report.trigger = Some(coords);
        return report;
    }

    let count = cell.adjacent_bombs();
    log::debug!("Revealed cell at {:?}, bomb count: {}", coords, count);
    if count > 0 {
        return report;
    }

    let mut visited = BTreeSet::from([coords]);
    let mut to_visit: VecDeque<_> = grid
        .iter_neighbors(coords)
        .filter(|&pos| grid[pos].is_hidden())
        .collect();
    log::trace!(
        "Starting flood-fill from {:?}, initial neighbors: {:?}",
        coords,
        to_visit
    );

    while let Some(visit_coords) = to_visit.pop_front() {
        if !visited.insert(visit_coords) {
            continue;
        }

        let Some(visit_cell) = grid.get_mut(visit_coords) else {
            continue;
        };
        // neighbors of a zero cell are never bombs, flagged cells stay closed
        if !visit_cell.is_hidden() || visit_cell.is_bomb() {
            log::trace!("Skipping cell at {:?}", visit_coords);
            continue;
        }

        visit_cell.reveal();
        report.opened.push(visit_coords);
        let visit_count = visit_cell.adjacent_bombs();
        log::trace!(
            "Flood revealed cell at {:?}, bomb count: {}",
            visit_coords,
            visit_count
        );

        if visit_count == 0 {
            to_visit.extend(
                grid.iter_neighbors(visit_coords)
                    .filter(|&pos| grid[pos].is_hidden())
                    .filter(|pos| !visited.contains(pos)),
            );
        }
    }

    report
}
