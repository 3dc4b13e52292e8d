use alloc::collections::{BTreeSet, VecDeque};

use crate::*;

/// Opens the cell at `coords`, flooding outwards through zero-count cells.
///
/// Flagged and already opened cells are left alone. Hitting a mine opens the whole board and reports
/// [`RevealOutcome::Detonated`]. Otherwise the outcome lists every cell opened by this call.
pub fn reveal(board: &mut Board, coords: Coord2) -> Result<RevealOutcome> {
    let coords = board.validate_coords(coords)?;
    let cell = board[coords];

    if !cell.is_openable() {
        log::trace!("Ignoring reveal of closed-off cell at {:?}", coords);
        return Ok(RevealOutcome::NoOp);
    }

    if cell.is_mine() {
        log::debug!("Mine detonated at {:?}", coords);
        reveal_all(board);
        return Ok(RevealOutcome::Detonated);
    }

    let mut opened = BTreeSet::new();
    open_safe_cell(board, coords, &mut opened);

    if board.adjacent_count(coords) == Some(0) {
        let mut to_expand = VecDeque::from([coords]);
        log::trace!("Starting flood-fill from {:?}", coords);

        // `revealed` doubles as the visited marker, a cell is only queued by the call that opens it
        while let Some(expand_coords) = to_expand.pop_front() {
            for pos in board.neighbors(expand_coords) {
                let neighbor = board[pos];
                if !neighbor.is_openable() || neighbor.is_mine() {
                    continue;
                }

                open_safe_cell(board, pos, &mut opened);
                if board.adjacent_count(pos) == Some(0) {
                    to_expand.push_back(pos);
                }
            }
        }
    }

    log::debug!("Opened {} cells from {:?}", opened.len(), coords);
    Ok(RevealOutcome::Opened(opened))
}

fn open_safe_cell(board: &mut Board, coords: Coord2, opened: &mut BTreeSet<Coord2>) {
    let count = board.adjacent_count(coords);
    board.mark_revealed(coords);
    opened.insert(coords);
    log::trace!("Opened cell at {:?}, mine count: {:?}", coords, count);
}

/// Forces every cell open, filling in the neighbor count of each safe cell on the way.
pub fn reveal_all(board: &mut Board) {
    for coords in board.iter_coords() {
        board.adjacent_count(coords);
        board.mark_revealed(coords);
    }
}
