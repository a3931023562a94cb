//! Error types for guess validation and session play.

use thiserror::Error;

use crate::code::Code;
use crate::feedback::Feedback;

/// Why a submitted guess was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess must be exactly 4 digits, got {found}")]
    WrongLength { found: usize },
    #[error("'{symbol}' at position {position} is not a digit 0-9")]
    NonDigitCharacter { position: usize, symbol: String },
    #[error("digit {digit} appears more than once")]
    DuplicateDigit { digit: u8 },
}

/// Errors returned by [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    InvalidGuess(#[from] GuessError),
    #[error("the game is already won after {attempts} attempts")]
    AlreadyWon { attempts: u32 },
    /// The candidate set would become empty while the game is in progress.
    /// The secret always survives its own feedback, so this means the scorer
    /// and the secret disagree.
    #[error("internal inconsistency: no candidates remain after {guess} scored {feedback}")]
    InternalInconsistency { guess: Code, feedback: Feedback },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown advisor mode '{0}' (expected 'random' or 'entropy')")]
    UnknownAdvisor(String),
}
