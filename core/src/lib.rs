#![no_std]

extern crate alloc;

use alloc::collections::BTreeSet;
use serde::{Deserialize, Serialize};

pub use adjacency::*;
pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use flag::*;
pub use generator::*;
pub use reveal::*;
pub use snapshot::*;
pub use types::*;

mod adjacency;
mod board;
mod cell;
mod engine;
mod error;
mod flag;
mod generator;
mod reveal;
mod snapshot;
mod types;

/// Smallest accepted density denominator, anything below makes every cell a mine or can't be drawn at all.
pub const MIN_MINE_DENSITY: u32 = 2;

/// Board dimensions and how densely mines are scattered.
///
/// Each cell becomes a mine independently with probability `1 / mine_density`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mine_density: u32,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mine_density: u32) -> Self {
        Self { size, mine_density }
    }

    pub fn new(size: Coord2, mine_density: u32) -> Result<Self> {
        let config = Self::new_unchecked(size, mine_density);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(GameError::InvalidSize { size: self.size });
        }
        if self.mine_density < MIN_MINE_DENSITY {
            return Err(GameError::InvalidDensity {
                density: self.mine_density,
            });
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Mean mine count of boards built from this config, rounded down.
    pub fn expected_mines(&self) -> CellCount {
        let expected = u32::from(self.total_cells()) / self.mine_density.max(1);
        // never above total_cells, which fits
        expected as CellCount
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((20, 20), 7)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Result of a single reveal action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Target was flagged, already open, or the game is over.
    NoOp,
    /// Every cell opened by this action, the target included.
    Opened(BTreeSet<Coord2>),
    Detonated,
}

impl RevealOutcome {
    pub fn has_update(&self) -> bool {
        use RevealOutcome::*;
        match self {
            NoOp => false,
            Opened(_) => true,
            Detonated => true,
        }
    }
}
