use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Generation strategy where every cell independently becomes a mine with probability `1 / mine_density`.
///
/// The total mine count is not fixed: two boards generated from the same config with different seeds will
/// usually carry different numbers of mines.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        generate_with_rng(config, &mut rng)
    }
}

/// Places mines by density using `rng`, after validating `config`.
pub fn generate_with_rng<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Board> {
    config.validate()?;

    let density = config.mine_density;
    let board = Board::from_fn(config.size, |_| rng.random_range(0..density) == 0)?;

    let mines = board.mine_count();
    log::debug!(
        "Generated {:?} board with {} mines, expected about {}",
        config.size,
        mines,
        config.expected_mines()
    );
    if mines == 0 {
        log::warn!("Generated board has no mines, the first reveal will win");
    } else if mines == board.total_cells() {
        log::warn!("Generated board is all mines, it cannot be won");
    }

    Ok(board)
}
