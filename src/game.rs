use std::cmp::Ordering;
use std::io::{BufRead, Write};

use log::{debug, info};

use crate::error::GameError;
use crate::range::GuessRange;
use crate::target::TargetSource;

pub const PROMPT: &str = "Enter your guess: ";
pub const INVALID_INPUT: &str = "Invalid input, please enter a whole number.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    TooLow,
    TooHigh,
    Correct,
}

impl Feedback {
    /// Line shown after a wrong guess. `Correct` has no fixed text, see `Game::win_message`.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Feedback::TooLow => Some("Too low! Try again."),
            Feedback::TooHigh => Some("Too high! Try again."),
            Feedback::Correct => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingGuess,
    Won,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub target: i64,
    pub attempts: u32,
    /// Evaluated guesses in submission order, winning guess last.
    pub history: Vec<i64>,
}

/// One game session: the target, the attempt counter and the guesses so far.
#[derive(Debug)]
pub struct Game {
    range: GuessRange,
    target: i64,
    attempts: u32,
    history: Vec<i64>,
    state: State,
}

impl Game {
    pub fn new<S: TargetSource + ?Sized>(range: GuessRange, source: &mut S) -> Self {
        let target = source.pick(&range);
        debug!("Picked target {} in {}", target, range);
        Game {
            range,
            target,
            attempts: 0,
            history: Vec::new(),
            state: State::AwaitingGuess,
        }
    }

    pub fn range(&self) -> GuessRange {
        self.range
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn history(&self) -> &[i64] {
        &self.history
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state == State::Won
    }

    pub fn evaluate(&mut self, guess: i64) -> Result<Feedback, GameError> {
        if self.is_won() {
            return Err(GameError::AlreadyWon);
        }
        self.attempts += 1;
        self.history.push(guess);
        let feedback = match guess.cmp(&self.target) {
            Ordering::Less => Feedback::TooLow,
            Ordering::Greater => Feedback::TooHigh,
            Ordering::Equal => {
                self.state = State::Won;
                Feedback::Correct
            }
        };
        debug!("Attempt {}: guess {} -> {:?}", self.attempts, guess, feedback);
        Ok(feedback)
    }

    /// `None` until the number has been guessed.
    pub fn summary(&self) -> Option<GameSummary> {
        self.is_won().then(|| self.build_summary())
    }

    fn build_summary(&self) -> GameSummary {
        GameSummary {
            target: self.target,
            attempts: self.attempts,
            history: self.history.clone(),
        }
    }

    pub fn welcome_message(&self) -> String {
        format!(
            "Welcome to the Guess the Number game! Try to guess the number between {} and {}.",
            self.range.min(),
            self.range.max()
        )
    }

    /// `None` until the number has been guessed.
    pub fn win_message(&self) -> Option<String> {
        self.is_won().then(|| self.render_win())
    }

    fn render_win(&self) -> String {
        format!(
            "Congratulations! You've guessed the number {} in {} tries!",
            self.target, self.attempts
        )
    }
}

pub fn parse_guess(line: &str) -> Result<i64, GameError> {
    let trimmed = line.trim();
    trimmed.parse().map_err(|source| GameError::InvalidInput {
        input: trimmed.to_string(),
        source,
    })
}

/// Prompts until a line parses as an integer. Malformed lines are reported and skipped.
fn read_guess<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<i64, GameError> {
    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Err(GameError::InputClosed);
        }
        // Bytes that are not UTF-8 fall through to the parse error like any other typo.
        match parse_guess(&String::from_utf8_lossy(&buf)) {
            Ok(guess) => return Ok(guess),
            Err(err) => {
                debug!("Rejected guess: {}", err);
                writeln!(output, "{}", INVALID_INPUT)?;
            }
        }
    }
}

/// Drives `game` to completion, reading guesses from `input` and writing the transcript to `output`.
pub fn run<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    mut output: W,
) -> Result<GameSummary, GameError> {
    if game.is_won() {
        return Err(GameError::AlreadyWon);
    }
    info!("Starting game in {}", game.range());
    writeln!(output, "{}", game.welcome_message())?;
    loop {
        let guess = read_guess(&mut input, &mut output)?;
        match game.evaluate(guess)? {
            Feedback::Correct => break,
            wrong => {
                if let Some(msg) = wrong.message() {
                    writeln!(output, "{}", msg)?;
                }
            }
        }
    }
    writeln!(output, "{}", game.render_win())?;
    output.flush()?;
    info!("Game won after {} attempts", game.attempts());
    Ok(game.build_summary())
}
