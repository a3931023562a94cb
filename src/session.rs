//! One playthrough of the game.
//!
//! A [`GameSession`] owns the secret, the live candidate set, the attempt
//! counter and the entropy histories. Guesses are applied atomically: a
//! rejected guess leaves every field exactly as it was.
//!
//! ```text
//! InProgress --submit (bulls < 4)--> InProgress
//! InProgress --submit (bulls = 4)--> Won
//! ```
//!
//! `reset` replaces the whole session with a fresh one.

use std::fmt;

use rand::Rng;
use tracing::{debug, error, info, warn};

use crate::advisor::GuessAdvisor;
use crate::candidates::CandidateSet;
use crate::code::{Code, CodeSpace};
use crate::config::GameConfig;
use crate::error::EngineError;
use crate::feedback::Feedback;
use crate::metrics::{candidate_entropy, entropy_reduction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    /// Terminal; further guesses are rejected
    Won,
}

/// An accepted guess, as recorded in the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Code,
    pub feedback: Feedback,
    /// Candidates left after this guess was applied
    pub remaining: usize,
}

/// What the caller gets back for an accepted guess.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    /// Entropy of the candidate set after the guess, in bits
    pub entropy: f64,
    /// `None` when reduction tracking is disabled
    pub entropy_reduction: Option<f64>,
    /// Empty once the game is won
    pub suggestions: Vec<Code>,
    pub remaining: usize,
    pub won: bool,
}

#[derive(Clone)]
pub struct GameSession {
    config: GameConfig,
    secret: Code,
    candidates: CandidateSet,
    attempts: u32,
    entropy_history: Vec<f64>,
    reduction_history: Vec<f64>,
    guesses: Vec<GuessRecord>,
    state: GameState,
}

impl GameSession {
    /// Start a session with a uniformly random secret.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        Self::with_secret(config, CodeSpace::random_secret(rng))
    }

    /// Start a session with a chosen secret, for scripted play.
    pub fn with_secret(config: GameConfig, secret: Code) -> Self {
        let candidates = CandidateSet::full();
        let initial_entropy = candidate_entropy(&candidates);

        info!(
            candidates = candidates.len(),
            entropy = initial_entropy,
            suggestions = config.suggestion_count,
            advisor = %config.advisor,
            "new session"
        );

        let reduction_history = if config.track_reduction {
            vec![0.0]
        } else {
            Vec::new()
        };

        Self {
            config,
            secret,
            candidates,
            attempts: 0,
            entropy_history: vec![initial_entropy],
            reduction_history,
            guesses: Vec::new(),
            state: GameState::InProgress,
        }
    }

    /// Replace this session wholesale with a fresh one under the same config.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new(self.config, rng);
    }

    /// Submit a guess given as a digit sequence.
    pub fn submit_guess<R: Rng + ?Sized>(
        &mut self,
        guess: &[u8],
        rng: &mut R,
    ) -> Result<GuessOutcome, EngineError> {
        self.ensure_in_progress()?;
        let code = Code::from_digits(guess).inspect_err(|err| {
            warn!(error = %err, "rejected guess");
        })?;
        self.submit_code(code, rng)
    }

    /// Submit a guess typed as text, e.g. `"0912"`.
    pub fn submit_input<R: Rng + ?Sized>(
        &mut self,
        input: &str,
        rng: &mut R,
    ) -> Result<GuessOutcome, EngineError> {
        self.ensure_in_progress()?;
        let code = Code::parse(input).inspect_err(|err| {
            warn!(error = %err, "rejected guess");
        })?;
        self.submit_code(code, rng)
    }

    /// Apply an already validated guess.
    pub fn submit_code<R: Rng + ?Sized>(
        &mut self,
        guess: Code,
        rng: &mut R,
    ) -> Result<GuessOutcome, EngineError> {
        self.ensure_in_progress()?;

        let feedback = Feedback::calculate(&guess, &self.secret);
        let candidates = self.candidates.filter(&guess, feedback);

        if candidates.is_empty() {
            error!(
                %guess,
                %feedback,
                attempts = self.attempts,
                "candidate set emptied while the game is in progress"
            );
            return Err(EngineError::InternalInconsistency { guess, feedback });
        }

        let entropy = candidate_entropy(&candidates);
        let reduction = entropy_reduction(self.current_entropy(), entropy);

        self.attempts += 1;
        self.candidates = candidates;
        self.entropy_history.push(entropy);
        if self.config.track_reduction {
            self.reduction_history.push(reduction);
        }
        self.guesses.push(GuessRecord {
            guess,
            feedback,
            remaining: self.candidates.len(),
        });

        debug!(
            attempt = self.attempts,
            %guess,
            bulls = feedback.bulls,
            cows = feedback.cows,
            remaining = self.candidates.len(),
            entropy,
            "guess applied"
        );

        let won = feedback.is_win();
        let suggestions = if won {
            self.state = GameState::Won;
            info!(attempts = self.attempts, "secret found");
            Vec::new()
        } else {
            self.advisor().suggest(&self.candidates, rng)
        };

        Ok(GuessOutcome {
            feedback,
            entropy,
            entropy_reduction: self.config.track_reduction.then_some(reduction),
            suggestions,
            remaining: self.candidates.len(),
            won,
        })
    }

    /// Suggestions for the current candidate set, e.g. before the first guess.
    pub fn suggestions<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Code> {
        match self.state {
            GameState::Won => Vec::new(),
            GameState::InProgress => self.advisor().suggest(&self.candidates, rng),
        }
    }

    fn ensure_in_progress(&self) -> Result<(), EngineError> {
        match self.state {
            GameState::InProgress => Ok(()),
            GameState::Won => Err(EngineError::AlreadyWon {
                attempts: self.attempts,
            }),
        }
    }

    fn advisor(&self) -> GuessAdvisor {
        self.config.advisor()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state == GameState::Won
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn current_entropy(&self) -> f64 {
        self.entropy_history.last().copied().unwrap_or_default()
    }

    /// Initial entropy followed by one entry per accepted guess.
    pub fn entropy_history(&self) -> &[f64] {
        &self.entropy_history
    }

    /// `0.0` followed by one entry per accepted guess, or empty when
    /// reduction tracking is disabled.
    pub fn reduction_history(&self) -> &[f64] {
        &self.reduction_history
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// The secret, once it has been guessed.
    pub fn revealed_secret(&self) -> Option<Code> {
        match self.state {
            GameState::Won => Some(self.secret),
            GameState::InProgress => None,
        }
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("config", &self.config)
            .field("secret", &self.revealed_secret())
            .field("remaining", &self.candidates.len())
            .field("attempts", &self.attempts)
            .field("entropy_history", &self.entropy_history)
            .field("reduction_history", &self.reduction_history)
            .field("state", &self.state)
            .finish()
    }
}
