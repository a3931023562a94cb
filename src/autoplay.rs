//! Self-play: let the advisor guess until the secret is found.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::code::{Code, CodeSpace};
use crate::config::GameConfig;
use crate::error::EngineError;
use crate::session::{GameSession, GuessRecord};

/// Give up after this many guesses. The advisor always plays a live
/// candidate, so every game ends well before this.
pub const MAX_AUTOPLAY_TURNS: u32 = 32;

/// Play the advisor's top suggestion every turn against `secret`.
/// Returns the sequence of guesses made; the last one is the win.
pub fn autoplay<R: Rng + ?Sized>(
    secret: Code,
    config: GameConfig,
    rng: &mut R,
) -> Result<Vec<GuessRecord>, EngineError> {
    let mut session = GameSession::with_secret(config.with_suggestion_count(1), secret);
    let mut next = session.suggestions(rng).first().copied();

    while let Some(guess) = next {
        if session.attempts() >= MAX_AUTOPLAY_TURNS {
            break;
        }
        let outcome = session.submit_code(guess, rng)?;
        next = outcome.suggestions.first().copied();
    }

    Ok(session.history().to_vec())
}

/// Self-play against every secret in the code space, in parallel.
///
/// Game `i` uses its own RNG seeded with `seed + i`, so the result does not
/// depend on thread scheduling. Returns `(guesses, games)` pairs sorted by
/// guess count.
pub fn benchmark_distribution(
    config: GameConfig,
    seed: u64,
) -> Result<Vec<(u32, usize)>, EngineError> {
    let guess_counts = CodeSpace::all_codes()
        .par_iter()
        .enumerate()
        .map(|(i, &secret)| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            autoplay(secret, config, &mut rng).map(|records| records.len() as u32)
        })
        .collect::<Result<Vec<u32>, EngineError>>()?;

    let max_guesses = guess_counts.iter().copied().max().unwrap_or(0) as usize;
    let mut distribution = vec![0usize; max_guesses + 1];

    for count in guess_counts {
        distribution[count as usize] += 1;
    }

    Ok(distribution
        .into_iter()
        .enumerate()
        .filter(|(_, games)| *games > 0)
        .map(|(guesses, games)| (guesses as u32, games))
        .collect())
}

/// Mean number of guesses over a distribution from [`benchmark_distribution`].
pub fn average_guesses(distribution: &[(u32, usize)]) -> f64 {
    let games: usize = distribution.iter().map(|(_, c)| c).sum();
    if games == 0 {
        return 0.0;
    }
    let total: usize = distribution.iter().map(|(g, c)| *g as usize * c).sum();
    total as f64 / games as f64
}
