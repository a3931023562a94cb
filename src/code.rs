//! Codes and the code space.
//!
//! A code is an ordered sequence of four pairwise-distinct digits. The code
//! space is the fixed universe of all 5040 such codes, enumerated in
//! lexicographic order.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use rand::seq::index;
use rand::Rng;

use crate::error::GuessError;
use crate::{CODE_LENGTH, NUM_CODES, NUM_DIGITS};

/// Four distinct digits in positional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([u8; CODE_LENGTH]);

impl Code {
    /// Build a code from exactly four digits, validating range and distinctness.
    pub fn new(digits: [u8; CODE_LENGTH]) -> Result<Self, GuessError> {
        Self::from_digits(&digits)
    }

    /// Validate an arbitrary digit sequence.
    ///
    /// Checks run in order: length, then each digit's range, then distinctness.
    pub fn from_digits(digits: &[u8]) -> Result<Self, GuessError> {
        if digits.len() != CODE_LENGTH {
            return Err(GuessError::WrongLength {
                found: digits.len(),
            });
        }

        if let Some((position, value)) = digits
            .iter()
            .enumerate()
            .find(|(_, &d)| d >= NUM_DIGITS)
        {
            return Err(GuessError::NonDigitCharacter {
                position,
                symbol: value.to_string(),
            });
        }

        let mut seen: u16 = 0;
        for &d in digits {
            let bit = 1u16 << d;
            if seen & bit != 0 {
                return Err(GuessError::DuplicateDigit { digit: d });
            }
            seen |= bit;
        }

        let mut arr = [0u8; CODE_LENGTH];
        arr.copy_from_slice(digits);
        Ok(Self(arr))
    }

    /// Parse text input such as `"1234"`.
    ///
    /// Length is counted in characters, so multi-byte input reports the
    /// number of symbols the player typed.
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        let symbols: Vec<char> = input.chars().collect();
        if symbols.len() != CODE_LENGTH {
            return Err(GuessError::WrongLength {
                found: symbols.len(),
            });
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (position, (slot, &symbol)) in digits.iter_mut().zip(&symbols).enumerate() {
            let value = symbol
                .to_digit(10)
                .ok_or_else(|| GuessError::NonDigitCharacter {
                    position,
                    symbol: symbol.to_string(),
                })?;
            *slot = value as u8;
        }

        Self::from_digits(&digits)
    }

    pub fn digits(&self) -> [u8; CODE_LENGTH] {
        self.0
    }

    /// Bitmask with bit `d` set for every digit `d` in the code.
    pub fn digit_mask(&self) -> u16 {
        self.0.iter().fold(0u16, |mask, &d| mask | (1u16 << d))
    }
}

impl FromStr for Code {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.0.iter().map(|&d| char::from(b'0' + d)).collect();
        f.pad(&text)
    }
}

/// The universe of valid codes.
pub struct CodeSpace;

impl CodeSpace {
    /// All 5040 codes in lexicographic order. Built once and shared.
    pub fn all_codes() -> &'static [Code] {
        static ALL_CODES: OnceLock<Vec<Code>> = OnceLock::new();
        ALL_CODES.get_or_init(enumerate_codes)
    }

    /// Draw `n` codes uniformly without replacement, in random order.
    /// `n` is clamped to `codes.len()`.
    pub fn sample<R: Rng + ?Sized>(codes: &[Code], n: usize, rng: &mut R) -> Vec<Code> {
        let amount = n.min(codes.len());
        index::sample(rng, codes.len(), amount)
            .iter()
            .map(|i| codes[i])
            .collect()
    }

    /// Draw four distinct digits in random order, which is uniform over the
    /// 5040 codes.
    pub fn random_secret<R: Rng + ?Sized>(rng: &mut R) -> Code {
        let picks = index::sample(rng, NUM_DIGITS as usize, CODE_LENGTH);
        let mut digits = [0u8; CODE_LENGTH];
        for (slot, i) in digits.iter_mut().zip(picks.iter()) {
            *slot = i as u8;
        }
        Code(digits)
    }
}

fn enumerate_codes() -> Vec<Code> {
    let mut codes = Vec::with_capacity(NUM_CODES);
    for a in 0..NUM_DIGITS {
        for b in (0..NUM_DIGITS).filter(|&b| b != a) {
            for c in (0..NUM_DIGITS).filter(|&c| c != a && c != b) {
                for d in (0..NUM_DIGITS).filter(|&d| d != a && d != b && d != c) {
                    codes.push(Code([a, b, c, d]));
                }
            }
        }
    }
    codes
}
