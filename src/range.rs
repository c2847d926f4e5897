use std::fmt;
use std::ops::RangeInclusive;

use crate::error::GameError;

/// Inclusive bounds the target is drawn from. Always `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRange {
    min: i64,
    max: i64,
}

impl GuessRange {
    pub fn new(min: i64, max: i64) -> Result<Self, GameError> {
        if min > max {
            return Err(GameError::InvalidRange { min, max });
        }
        Ok(GuessRange { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn as_inclusive(&self) -> RangeInclusive<i64> {
        self.min..=self.max
    }
}

impl Default for GuessRange {
    fn default() -> Self {
        GuessRange { min: 1, max: 100 }
    }
}

impl fmt::Display for GuessRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
