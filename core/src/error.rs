use thiserror::Error;

use crate::Coord2;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board size {size:?}, both dimensions must be positive")]
    InvalidSize { size: Coord2 },
    #[error("Invalid mine density 1/{density}, the denominator must be at least 2")]
    InvalidDensity { density: u32 },
    #[error("Coordinates {coords:?} are outside of the {size:?} board")]
    OutOfRange { coords: Coord2, size: Coord2 },
}

pub type Result<T> = core::result::Result<T, GameError>;
