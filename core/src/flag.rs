use crate::*;

/// Flips the flag on a hidden cell. Opened cells cannot carry a flag and are left unchanged.
pub fn toggle_flag(board: &mut Board, coords: Coord2) -> Result<MarkOutcome> {
    let coords = board.validate_coords(coords)?;
    let cell = board[coords];

    if cell.is_revealed() {
        return Ok(MarkOutcome::NoChange);
    }

    board.set_flagged(coords, !cell.is_flagged());
    log::trace!("Flag at {:?} set to {}", coords, !cell.is_flagged());
    Ok(MarkOutcome::Changed)
}
