//! Entropy of the candidate set.
//!
//! Every surviving candidate is treated as equally likely to be the secret,
//! so the entropy of `n` candidates is `log2(n)` bits. The reported
//! "entropy reduction" is the post-hoc drop from one state to the next for
//! the guess actually played. It is an informal proxy for the information a
//! guess yielded, not the mutual information between the guess's feedback
//! and the secret, which [`expected_information`] computes instead.

use crate::candidates::CandidateSet;
use crate::code::Code;
use crate::feedback::Feedback;

/// Entropy in bits of a uniform distribution over `candidate_count` codes.
/// Zero candidates yields zero; callers that are mid-game treat that as an
/// inconsistency rather than "no information left".
pub fn entropy(candidate_count: usize) -> f64 {
    if candidate_count == 0 {
        return 0.0;
    }
    (candidate_count as f64).log2()
}

pub fn candidate_entropy(candidates: &CandidateSet) -> f64 {
    entropy(candidates.len())
}

/// Drop in entropy from `prev` to `curr`.
pub fn entropy_reduction(prev: f64, curr: f64) -> f64 {
    prev - curr
}

/// Shannon entropy of the feedback distribution `guess` would produce over
/// `candidates`. This is the expected information gain of playing `guess`
/// before its feedback is known.
pub fn expected_information(guess: &Code, candidates: &CandidateSet) -> f64 {
    let n = candidates.len() as f64;
    if n <= 1.0 {
        return 0.0;
    }

    let mut pattern_counts = [0u32; Feedback::NUM_PATTERNS];
    for candidate in candidates {
        pattern_counts[Feedback::calculate(guess, candidate).index()] += 1;
    }

    let mut information = 0.0;
    for &count in &pattern_counts {
        if count > 0 {
            let p = count as f64 / n;
            information -= p * p.log2();
        }
    }

    information
}
