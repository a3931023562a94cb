//! The shrinking set of codes still consistent with observed feedback.

use crate::code::{Code, CodeSpace};
use crate::feedback::Feedback;

/// Codes that could still be the secret.
///
/// Starts as the full code space and only ever shrinks: [`CandidateSet::filter`]
/// returns a subset and never adds codes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    codes: Vec<Code>,
}

impl CandidateSet {
    /// A working copy of every code in the code space.
    pub fn full() -> Self {
        Self {
            codes: CodeSpace::all_codes().to_vec(),
        }
    }

    pub fn from_codes(codes: Vec<Code>) -> Self {
        Self { codes }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn contains(&self, code: &Code) -> bool {
        self.codes.contains(code)
    }

    pub fn as_slice(&self) -> &[Code] {
        &self.codes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Code> {
        self.codes.iter()
    }

    /// Keep the candidates that would have produced `feedback` for `guess`.
    ///
    /// Works on `self` as a snapshot of the pre-guess set and leaves it
    /// untouched, so the caller decides when to commit the result.
    pub fn filter(&self, guess: &Code, feedback: Feedback) -> CandidateSet {
        let codes = self
            .codes
            .iter()
            .filter(|candidate| Feedback::calculate(guess, candidate) == feedback)
            .copied()
            .collect();
        Self { codes }
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::full()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}
