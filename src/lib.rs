pub mod config;
pub mod error;
pub mod game;
pub mod range;
pub mod target;

pub use config::{play, GameConfig};
pub use error::GameError;
pub use game::{Feedback, Game, GameSummary, State};
pub use range::GuessRange;
pub use target::{FixedTarget, RandomTarget, TargetSource};
