use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Phase {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game: the board plus the phase it is in.
///
/// The engine is the only owner of its board. Actions are rejected with an error only for coordinates outside
/// the board; once the game is over every action is accepted and ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    board: Board,
    phase: Phase,
    triggered_mine: Option<Coord2>,
}

impl PlayEngine {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            phase: Phase::default(),
            triggered_mine: None,
        }
    }

    /// Starts a game on a freshly generated random board.
    pub fn from_config(config: GameConfig, seed: u64) -> Result<Self> {
        let board = RandomMinefieldGenerator::new(seed).generate(config)?;
        Ok(Self::new(board))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        self.board.cell_at(coords)
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// Mines minus flags placed, negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.board.mine_count() as isize) - (self.board.flagged_count() as isize)
    }

    /// The mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        if !self.phase.is_playing() {
            log::trace!("Game over, ignoring reveal at {:?}", coords);
            return Ok(RevealOutcome::NoOp);
        }

        let outcome = reveal(&mut self.board, coords)?;
        match outcome {
            RevealOutcome::Detonated => {
                self.triggered_mine = Some(coords);
                self.end_game(Phase::Lost);
            }
            RevealOutcome::Opened(_) if self.board.all_safe_revealed() => {
                self.end_game(Phase::Won);
            }
            RevealOutcome::Opened(_) | RevealOutcome::NoOp => {}
        }
        Ok(outcome)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;
        if !self.phase.is_playing() {
            log::trace!("Game over, ignoring flag at {:?}", coords);
            return Ok(MarkOutcome::NoChange);
        }

        toggle_flag(&mut self.board, coords)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_engine(self)
    }

    fn end_game(&mut self, phase: Phase) {
        if self.phase.is_finished() {
            return;
        }

        self.phase = phase;
        if phase == Phase::Won {
            reveal_all(&mut self.board);
            for coords in self.board.iter_coords() {
                self.board.set_flagged(coords, false);
            }
        }
        log::debug!("Game ended: {:?}", phase);
    }
}
