//! # Bulls and Cows
//!
//! Guess/feedback/elimination engine for the Bulls and Cows code-breaking game.
//!
//! A session holds a secret 4-digit code with distinct digits. Every guess is
//! scored in bulls (right digit, right place) and cows (right digit, wrong
//! place), the set of codes still consistent with all feedback is pruned, and
//! the Shannon entropy of that set is tracked under a uniform posterior.

pub mod advisor;
pub mod autoplay;
pub mod candidates;
pub mod code;
pub mod config;
pub mod error;
pub mod feedback;
pub mod metrics;
pub mod session;

pub use advisor::{AdvisorMode, GuessAdvisor, GuessAnalysis};
pub use candidates::CandidateSet;
pub use code::{Code, CodeSpace};
pub use config::GameConfig;
pub use error::{ConfigError, EngineError, GuessError};
pub use feedback::Feedback;
pub use session::{GameSession, GameState, GuessOutcome, GuessRecord};

/// Number of digits in a code
pub const CODE_LENGTH: usize = 4;

/// Size of the digit alphabet (0-9)
pub const NUM_DIGITS: u8 = 10;

/// Number of distinct codes: 10 * 9 * 8 * 7
pub const NUM_CODES: usize = 5040;
