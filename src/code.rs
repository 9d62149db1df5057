//! Secret codes, the shared code validator and guess scoring.
//!
//! A code is stored as its digit values rather than as text, so a
//! `SecretCode` always satisfies the length, range and uniqueness rules.
//! No heap allocation is needed.

use core::{fmt, str::FromStr};

use rand::Rng;

use crate::{
    common::CodeError,
    config::{CODE_LENGTH, DIGIT_POOL, MAX_DIGIT},
};

/// Returns `true` iff `s` is exactly `CODE_LENGTH` unique digits from 0 to
/// `MAX_DIGIT`. Used for both the configured secret and every guess.
pub fn is_valid_code(s: &str) -> bool {
    SecretCode::parse(s).is_ok()
}

/// A code of `CODE_LENGTH` distinct digits in `0..=MAX_DIGIT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SecretCode {
    digits: [u8; CODE_LENGTH],
}

impl SecretCode {
    /// Parse a code from text, reporting the first rule it breaks.
    pub fn parse(s: &str) -> Result<Self, CodeError> {
        let len = s.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::WrongLength(len));
        }
        let mut digits = [0u8; CODE_LENGTH];
        for (i, ch) in s.chars().enumerate() {
            let digit = match ch.to_digit(10) {
                Some(d) if d <= MAX_DIGIT as u32 => d as u8,
                _ => return Err(CodeError::DigitOutOfRange(ch)),
            };
            if digits[..i].contains(&digit) {
                return Err(CodeError::RepeatedDigit(ch));
            }
            digits[i] = digit;
        }
        Ok(Self { digits })
    }

    /// Draw a random code by sampling the digit pool without replacement.
    /// Digits are placed left to right in the order they are drawn.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pool = DIGIT_POOL;
        let mut remaining = pool.len();
        let mut digits = [0u8; CODE_LENGTH];
        for slot in digits.iter_mut() {
            let idx = rng.random_range(0..remaining);
            *slot = pool[idx];
            pool.copy_within(idx + 1..remaining, idx);
            remaining -= 1;
        }
        Self { digits }
    }

    /// Digit values in position order.
    pub fn digits(&self) -> [u8; CODE_LENGTH] {
        self.digits
    }

    /// Whether `digit` appears anywhere in the code.
    pub fn contains(&self, digit: u8) -> bool {
        self.digits.contains(&digit)
    }

    /// Score `guess` against this code.
    ///
    /// A misplaced digit is one that differs from the secret at its own
    /// position but occurs somewhere in the secret. Since both codes hold
    /// distinct digits this agrees with classic Mastermind scoring.
    pub fn score(&self, guess: &SecretCode) -> Feedback {
        let mut feedback = Feedback::default();
        for (&secret, &guessed) in self.digits.iter().zip(guess.digits.iter()) {
            if secret == guessed {
                feedback.well_placed += 1;
            } else if self.contains(guessed) {
                feedback.misplaced += 1;
            }
        }
        feedback
    }
}

impl FromStr for SecretCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &digit in self.digits.iter() {
            write!(f, "{}", digit_char(digit))?;
        }
        Ok(())
    }
}

fn digit_char(digit: u8) -> char {
    char::from_digit(digit as u32, 10).unwrap_or('?')
}

/// Result of scoring one guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Feedback {
    /// Digits matching the secret at the same position.
    pub well_placed: usize,
    /// Digits present in the secret at another position.
    pub misplaced: usize,
}

impl Feedback {
    pub fn is_solved(&self) -> bool {
        self.well_placed == CODE_LENGTH
    }
}
