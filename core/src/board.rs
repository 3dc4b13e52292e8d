use core::ops::Index;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular minefield with per-cell play state, addressed by `(x, y)`.
///
/// Mines are fixed at construction. The board also keeps running counts of revealed safe cells and flags so
/// that the win check never has to scan the whole grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    size: Coord2,
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_safe_count: CellCount,
    flagged_count: CellCount,
}

impl Board {
    /// Builds a board of `size`, asking `is_mine` once per coordinate.
    pub fn from_fn(size: Coord2, mut is_mine: impl FnMut(Coord2) -> bool) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize { size });
        }

        let mut mine_count = 0;
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            // dimensions come from `Coord`, so the casts are lossless
            let coords = (x as Coord, y as Coord);
            let mine = is_mine(coords);
            if mine {
                mine_count += 1;
            }
            Cell::new(coords, mine)
        });

        Ok(Self {
            size,
            cells,
            mine_count,
            revealed_safe_count: 0,
            flagged_count: 0,
        })
    }

    /// Builds a board with mines exactly at `mine_coords`, bypassing random placement.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if let Some(&coords) = mine_coords
            .iter()
            .find(|&&(x, y)| x >= size.0 || y >= size.1)
        {
            return Err(GameError::OutOfRange { coords, size });
        }

        Self::from_fn(size, |coords| mine_coords.contains(&coords))
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Whether every cell without a mine has been opened.
    pub fn all_safe_revealed(&self) -> bool {
        self.revealed_safe_count == self.safe_cell_count()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size.0 && coords.1 < self.size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange {
                coords,
                size: self.size,
            })
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self[coords])
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size)
    }

    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        iter_coords(self.size)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    /// Opens a single cell, returning `false` if it was already open.
    pub(crate) fn mark_revealed(&mut self, coords: Coord2) -> bool {
        let cell = self.cell_mut(coords);
        if cell.revealed {
            return false;
        }

        cell.revealed = true;
        if !cell.is_mine() {
            self.revealed_safe_count += 1;
        }
        true
    }

    pub(crate) fn set_flagged(&mut self, coords: Coord2, flagged: bool) {
        let cell = self.cell_mut(coords);
        if cell.flagged == flagged {
            return;
        }

        cell.flagged = flagged;
        if flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_mine_coords_places_exactly_the_given_mines() {
        let board = Board::from_mine_coords((3, 2), &[(0, 0), (2, 1)]).unwrap();

        assert_eq!(board.size(), (3, 2));
        assert_eq!(board.total_cells(), 6);
        assert_eq!(board.mine_count(), 2);
        assert_eq!(board.safe_cell_count(), 4);
        assert!(board.contains_mine((0, 0)));
        assert!(board.contains_mine((2, 1)));
        assert!(!board.contains_mine((1, 0)));
    }

    #[test]
    fn duplicate_mine_coords_count_once() {
        let board = Board::from_mine_coords((2, 2), &[(1, 1), (1, 1)]).unwrap();

        assert_eq!(board.mine_count(), 1);
    }

    #[test]
    fn every_cell_knows_its_own_coords() {
        let board = Board::from_mine_coords((4, 3), &[]).unwrap();

        for coords in board.iter_coords() {
            assert_eq!(board[coords].coords(), coords);
        }
        assert_eq!(board.cells().count(), 12);
    }

    #[test]
    fn from_mine_coords_rejects_mine_outside_board() {
        let err = Board::from_mine_coords((2, 2), &[(2, 0)]).unwrap_err();

        assert_eq!(
            err,
            GameError::OutOfRange {
                coords: (2, 0),
                size: (2, 2)
            }
        );
    }

    #[test]
    fn zero_sized_board_is_rejected() {
        assert_eq!(
            Board::from_mine_coords((0, 3), &[]),
            Err(GameError::InvalidSize { size: (0, 3) })
        );
        assert_eq!(
            Board::from_mine_coords((3, 0), &[]),
            Err(GameError::InvalidSize { size: (3, 0) })
        );
    }

    #[test]
    fn cell_at_rejects_out_of_range_coords() {
        let board = Board::from_mine_coords((2, 3), &[]).unwrap();

        assert!(board.cell_at((1, 2)).is_ok());
        assert_eq!(
            board.cell_at((2, 0)),
            Err(GameError::OutOfRange {
                coords: (2, 0),
                size: (2, 3)
            })
        );
        assert!(board.cell_at((0, 3)).is_err());
    }

    #[test]
    fn counters_follow_reveals_and_flags() {
        let mut board = Board::from_mine_coords((2, 1), &[(0, 0)]).unwrap();

        assert!(board.mark_revealed((1, 0)));
        assert!(!board.mark_revealed((1, 0)));
        assert_eq!(board.revealed_safe_count(), 1);
        assert!(board.all_safe_revealed());

        board.set_flagged((0, 0), true);
        board.set_flagged((0, 0), true);
        assert_eq!(board.flagged_count(), 1);
        board.set_flagged((0, 0), false);
        assert_eq!(board.flagged_count(), 0);
    }

    #[test]
    fn revealing_a_mine_does_not_count_as_safe_progress() {
        let mut board = Board::from_mine_coords((2, 1), &[(0, 0)]).unwrap();

        board.mark_revealed((0, 0));

        assert_eq!(board.revealed_safe_count(), 0);
        assert!(!board.all_safe_revealed());
    }
}
