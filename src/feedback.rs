//! Feedback calculation for Bulls and Cows guesses.
//!
//! This module handles computing the bulls/cows score for a guess against a
//! code.

use std::fmt;

use crate::code::Code;
use crate::CODE_LENGTH;

/// Bulls and cows for one guess.
/// Always satisfies `bulls + cows <= 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    /// Right digit in the right position
    pub bulls: u8,
    /// Right digit in the wrong position
    pub cows: u8,
}

impl Feedback {
    /// The feedback indicating all bulls (winning)
    pub const WIN: Self = Self {
        bulls: CODE_LENGTH as u8,
        cows: 0,
    };

    /// Number of slots in a `(bulls, cows)` table indexed by [`Feedback::index`].
    /// Some slots (e.g. 3 bulls + 1 cow) never occur.
    pub const NUM_PATTERNS: usize = (CODE_LENGTH + 1) * (CODE_LENGTH + 1);

    /// Returns `None` when the pair is not a possible score.
    pub fn new(bulls: u8, cows: u8) -> Option<Self> {
        if (bulls as usize) + (cows as usize) > CODE_LENGTH {
            return None;
        }
        Some(Self { bulls, cows })
    }

    /// Score a guess against a code.
    ///
    /// Bulls count positional matches. Cows are the digit values the two
    /// codes share, minus the bulls. Shared values come from intersecting
    /// the digit masks, so no digit is ever counted twice on either side.
    pub fn calculate(guess: &Code, code: &Code) -> Self {
        let bulls = guess
            .digits()
            .iter()
            .zip(code.digits().iter())
            .filter(|(g, c)| g == c)
            .count() as u8;

        let shared = (guess.digit_mask() & code.digit_mask()).count_ones() as u8;

        Self {
            bulls,
            cows: shared - bulls,
        }
    }

    /// Check if this feedback represents a win (all bulls)
    pub fn is_win(self) -> bool {
        self == Self::WIN
    }

    /// Dense index in `0..NUM_PATTERNS`, for histogramming feedback outcomes.
    pub fn index(self) -> usize {
        self.bulls as usize * (CODE_LENGTH + 1) + self.cows as usize
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bulls: {}, Cows: {}", self.bulls, self.cows)
    }
}
