//! Per-session game settings.

use crate::advisor::{AdvisorMode, GuessAdvisor};

/// Settings fixed for the lifetime of a session and carried over on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Maximum number of suggestions returned after each guess
    pub suggestion_count: usize,
    /// Keep a per-guess entropy reduction history
    pub track_reduction: bool,
    pub advisor: AdvisorMode,
}

impl GameConfig {
    pub const DEFAULT_SUGGESTIONS: usize = 10;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suggestion_count(mut self, count: usize) -> Self {
        self.suggestion_count = count;
        self
    }

    pub fn with_reduction_tracking(mut self, enabled: bool) -> Self {
        self.track_reduction = enabled;
        self
    }

    pub fn with_advisor(mut self, mode: AdvisorMode) -> Self {
        self.advisor = mode;
        self
    }

    pub fn advisor(&self) -> GuessAdvisor {
        GuessAdvisor::new(self.advisor, self.suggestion_count)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            suggestion_count: Self::DEFAULT_SUGGESTIONS,
            track_reduction: true,
            advisor: AdvisorMode::Random,
        }
    }
}
