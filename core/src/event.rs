use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Advisory notification emitted after a state change, e.g. to play a sound.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Revealed { cells: Vec<Coord2> },
    BombHit { at: Coord2 },
    Won,
    FlagChanged {
        at: Coord2,
        flagged: bool,
        remaining: CellCount,
    },
}

/// Receives [`GameEvent`]s. The engine never waits on or inspects delivery, so an
/// implementation that cannot keep up should drop events rather than block.
pub trait GameListener {
    fn notify(&mut self, event: &GameEvent);
}

impl GameListener for () {
    fn notify(&mut self, _event: &GameEvent) {}
}

impl<L: GameListener + ?Sized> GameListener for &mut L {
    fn notify(&mut self, event: &GameEvent) {
        (**self).notify(event)
    }
}

/// Keeps every event, mostly useful in tests.
impl GameListener for Vec<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}
