use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer needs to draw one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub coords: Coord2,
    pub is_mine: bool,
    pub revealed: bool,
    pub flagged: bool,
    /// Neighbor-mine count, `None` for mines and for safe cells nobody has opened yet.
    pub adjacent: Option<u8>,
}

impl From<&Cell> for CellView {
    fn from(cell: &Cell) -> Self {
        Self {
            coords: cell.coords(),
            is_mine: cell.is_mine(),
            revealed: cell.is_revealed(),
            flagged: cell.is_flagged(),
            adjacent: cell.adjacent(),
        }
    }
}

/// Read-only copy of a game taken after an action settled, indexed `[x, y]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Coord2,
    pub phase: Phase,
    pub mines_left: isize,
    pub cells: Array2<CellView>,
}

impl BoardSnapshot {
    pub fn from_engine(engine: &PlayEngine) -> Self {
        let board = engine.board();
        let size = board.size();
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            CellView::from(&board[(x as Coord, y as Coord)])
        });

        Self {
            size,
            phase: engine.phase(),
            mines_left: engine.mines_left(),
            cells,
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<&CellView> {
        self.cells.get(coords.to_nd_index())
    }
}
