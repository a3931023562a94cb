//! Next-guess suggestions drawn from the candidate set.
//!
//! The reference behaviour is a uniform random sample of the remaining
//! candidates with no ranking. [`AdvisorMode::MaxEntropy`] is an alternative
//! that ranks candidates by the entropy of their feedback distribution.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rayon::prelude::*;

use crate::candidates::CandidateSet;
use crate::code::{Code, CodeSpace};
use crate::error::ConfigError;
use crate::metrics::expected_information;
use crate::NUM_CODES;

/// How suggestions are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdvisorMode {
    /// Uniform random sample without replacement
    #[default]
    Random,
    /// Highest expected information first
    MaxEntropy,
}

impl fmt::Display for AdvisorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvisorMode::Random => write!(f, "random"),
            AdvisorMode::MaxEntropy => write!(f, "entropy"),
        }
    }
}

impl FromStr for AdvisorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" | "uniform" => Ok(AdvisorMode::Random),
            "entropy" | "max-entropy" => Ok(AdvisorMode::MaxEntropy),
            _ => Err(ConfigError::UnknownAdvisor(s.to_string())),
        }
    }
}

/// Result of analyzing a potential guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub code: Code,
    /// Entropy of the feedback distribution, in bits
    pub expected_information: f64,
    pub expected_remaining: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessAdvisor {
    mode: AdvisorMode,
    count: usize,
}

impl GuessAdvisor {
    pub fn new(mode: AdvisorMode, count: usize) -> Self {
        Self { mode, count }
    }

    pub fn mode(&self) -> AdvisorMode {
        self.mode
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Up to `count` distinct members of `candidates`.
    ///
    /// Returns every candidate when fewer than `count` remain and nothing
    /// when the set is empty.
    pub fn suggest<R: Rng + ?Sized>(&self, candidates: &CandidateSet, rng: &mut R) -> Vec<Code> {
        match self.mode {
            AdvisorMode::Random => CodeSpace::sample(candidates.as_slice(), self.count, rng),
            AdvisorMode::MaxEntropy => rank_candidates(candidates, self.count)
                .into_iter()
                .map(|analysis| analysis.code)
                .collect(),
        }
    }
}

/// Rank candidates by expected information, best first, keeping at most
/// `limit`. Ties keep enumeration order.
pub fn rank_candidates(candidates: &CandidateSet, limit: usize) -> Vec<GuessAnalysis> {
    let codes = candidates.as_slice();
    let n = codes.len();

    let Some(first) = codes.first() else {
        return vec![];
    };

    // On the untouched code space every guess is a relabeling of every other,
    // so they all score the same.
    if n == NUM_CODES {
        let information = expected_information(first, candidates);
        return codes
            .iter()
            .take(limit)
            .map(|&code| analyze(code, information, n))
            .collect();
    }

    let mut analyses: Vec<GuessAnalysis> = codes
        .par_iter()
        .map(|&code| analyze(code, expected_information(&code, candidates), n))
        .collect();

    analyses.sort_by(|a, b| {
        b.expected_information
            .partial_cmp(&a.expected_information)
            .unwrap_or(Ordering::Equal)
    });

    analyses.truncate(limit);
    analyses
}

fn analyze(code: Code, information: f64, remaining: usize) -> GuessAnalysis {
    GuessAnalysis {
        code,
        expected_information: information,
        expected_remaining: remaining as f64 / 2_f64.powf(information),
    }
}
