use std::io::{BufRead, Write};

use crate::error::GameError;
use crate::game::{self, Game, GameSummary};
use crate::range::GuessRange;
use crate::target::{RandomTarget, TargetSource};

/// Settings for one game session.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub range: GuessRange,
    /// Fixes the target for reproducible runs. `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(min: i64, max: i64) -> Result<Self, GameError> {
        Ok(GameConfig {
            range: GuessRange::new(min, max)?,
            seed: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn target_source(&self) -> Box<dyn TargetSource> {
        match self.seed {
            Some(seed) => Box::new(RandomTarget::seeded(seed)),
            None => Box::new(RandomTarget::from_thread_rng()),
        }
    }
}

/// Plays one full game with `config` over the given input and output.
pub fn play<R: BufRead, W: Write>(
    config: &GameConfig,
    input: R,
    output: W,
) -> Result<GameSummary, GameError> {
    let mut source = config.target_source();
    let mut game = Game::new(config.range, source.as_mut());
    game::run(&mut game, input, output)
}
