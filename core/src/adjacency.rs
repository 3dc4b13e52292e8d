use crate::*;

/// Counts the mines among the cells at Chebyshev distance 1 from `coords`.
///
/// Mines never get a count, they report `None` instead so callers can't show one by accident.
pub fn count_adjacent_mines(board: &Board, coords: Coord2) -> Option<u8> {
    if board.contains_mine(coords) {
        return None;
    }

    let count = board
        .neighbors(coords)
        .filter(|&pos| board.contains_mine(pos))
        .count();
    // at most 8 neighbors
    Some(count as u8)
}

impl Board {
    /// Returns the cached neighbor-mine count of `coords`, computing and storing it on first use.
    ///
    /// Mine placement never changes during a game, so a stored count is never stale.
    pub fn adjacent_count(&mut self, coords: Coord2) -> Option<u8> {
        if let Some(count) = self[coords].adjacent() {
            return Some(count);
        }

        let count = count_adjacent_mines(self, coords)?;
        self.cell_mut(coords).adjacent = Some(count);
        Some(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(size: Coord2, mines: &[Coord2]) -> Board {
        Board::from_mine_coords(size, mines).unwrap()
    }

    /// Counts by scanning the full board for mines within distance 1.
    fn brute_force_count(board: &Board, (x, y): Coord2) -> u8 {
        board
            .iter_coords()
            .filter(|&(ox, oy)| (ox, oy) != (x, y))
            .filter(|&(ox, oy)| ox.abs_diff(x) <= 1 && oy.abs_diff(y) <= 1)
            .filter(|&pos| board.contains_mine(pos))
            .count() as u8
    }

    #[test]
    fn center_mine_counts_once_for_every_neighbor() {
        let board = layout((3, 3), &[(1, 1)]);

        for coords in board.iter_coords().filter(|&c| c != (1, 1)) {
            assert_eq!(count_adjacent_mines(&board, coords), Some(1));
        }
    }

    #[test]
    fn mine_reports_sentinel() {
        let board = layout((3, 3), &[(1, 1), (0, 0)]);

        assert_eq!(count_adjacent_mines(&board, (1, 1)), None);
        assert_eq!(count_adjacent_mines(&board, (0, 0)), None);
    }

    #[test]
    fn cell_surrounded_by_mines_counts_eight() {
        let mines = [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)];
        let board = layout((3, 3), &mines);

        assert_eq!(count_adjacent_mines(&board, (1, 1)), Some(8));
    }

    #[test]
    fn counts_match_brute_force_on_irregular_layout() {
        let mines = [(0, 0), (3, 1), (4, 1), (1, 3), (4, 4), (2, 2)];
        let board = layout((5, 5), &mines);

        for coords in board.iter_coords() {
            let expected = (!board.contains_mine(coords)).then(|| brute_force_count(&board, coords));
            assert_eq!(count_adjacent_mines(&board, coords), expected, "at {coords:?}");
        }
    }

    #[test]
    fn adjacent_count_is_cached_on_the_cell() {
        let mut board = layout((2, 2), &[(0, 0)]);

        assert_eq!(board[(1, 1)].adjacent(), None);
        assert_eq!(board.adjacent_count((1, 1)), Some(1));
        assert_eq!(board[(1, 1)].adjacent(), Some(1));
        assert_eq!(board.adjacent_count((1, 1)), Some(1));
    }

    #[test]
    fn adjacent_count_leaves_mines_uncached() {
        let mut board = layout((2, 2), &[(0, 0)]);

        assert_eq!(board.adjacent_count((0, 0)), None);
        assert_eq!(board[(0, 0)].adjacent(), None);
    }
}
