use serde::{Deserialize, Serialize};

use crate::Coord2;

/// State of a single board position as tracked by the engine.
///
/// Position and mine placement are fixed when the board is built. `revealed` only ever goes from `false` to
/// `true`, and `adjacent` is filled in once on first use and then kept for the rest of the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coords: Coord2,
    is_mine: bool,
    pub(crate) adjacent: Option<u8>,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
}

impl Cell {
    pub const fn new(coords: Coord2, is_mine: bool) -> Self {
        Self {
            coords,
            is_mine,
            adjacent: None,
            revealed: false,
            flagged: false,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    /// Cached neighbor-mine count, `None` while not computed yet and always `None` for mines.
    pub const fn adjacent(&self) -> Option<u8> {
        self.adjacent
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Hidden and not flagged, the only state a reveal or cascade may open.
    pub const fn is_openable(&self) -> bool {
        !self.revealed && !self.flagged
    }
}
