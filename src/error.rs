use std::num::ParseIntError;

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Invalid range: min ({min}) is greater than max ({max})")]
    InvalidRange { min: i64, max: i64 },
    #[error("Invalid input '{input}' (error: {source})")]
    InvalidInput { input: String, source: ParseIntError },
    #[error("Input closed before the number was guessed")]
    InputClosed,
    #[error("The number has already been guessed")]
    AlreadyWon,
    #[error("I/O error (error: {0})")]
    Io(#[from] std::io::Error),
}
