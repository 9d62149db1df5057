//! Common types for Mastermind: code, configuration and game errors.

use crate::config::{CODE_LENGTH, MAX_ATTEMPTS, MAX_DIGIT, MIN_ATTEMPTS};

/// Startup flags understood by the configuration prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// `-c <code>`: choose the secret code.
    Code,
    /// `-t <attempts>`: set the attempt limit.
    Attempts,
}

impl Flag {
    /// Match a token against the flag names, ignoring ASCII case.
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("-c") {
            Some(Flag::Code)
        } else if token.eq_ignore_ascii_case("-t") {
            Some(Flag::Attempts)
        } else {
            None
        }
    }
}

impl core::fmt::Display for Flag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Flag::Code => write!(f, "-c"),
            Flag::Attempts => write!(f, "-t"),
        }
    }
}

/// Reasons a string is not a valid code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    /// Code does not have exactly `CODE_LENGTH` characters.
    WrongLength(usize),
    /// Character is not a digit between 0 and `MAX_DIGIT`.
    DigitOutOfRange(char),
    /// Digit appears more than once.
    RepeatedDigit(char),
}

impl core::fmt::Display for CodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CodeError::WrongLength(len) => {
                write!(f, "code has {} characters, expected {}", len, CODE_LENGTH)
            }
            CodeError::DigitOutOfRange(ch) => {
                write!(f, "'{}' is not a digit from 0 to {}", ch, MAX_DIGIT)
            }
            CodeError::RepeatedDigit(ch) => write!(f, "digit '{}' is repeated", ch),
        }
    }
}

/// Errors returned when parsing a startup configuration line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Token is neither a known flag nor a flag value.
    UnknownToken,
    /// Flag was the last token and has no value.
    MissingValue(Flag),
    /// Same flag given more than once on one line.
    DuplicateFlag(Flag),
    /// `-c` value is not a valid code.
    InvalidCode(CodeError),
    /// `-t` value is not an integer within the allowed range.
    InvalidAttempts,
}

impl From<CodeError> for ConfigError {
    fn from(err: CodeError) -> Self {
        ConfigError::InvalidCode(err)
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::UnknownToken => write!(f, "unrecognized token"),
            ConfigError::MissingValue(flag) => write!(f, "flag {} is missing its value", flag),
            ConfigError::DuplicateFlag(flag) => write!(f, "flag {} given more than once", flag),
            ConfigError::InvalidCode(e) => write!(f, "invalid secret code: {}", e),
            ConfigError::InvalidAttempts => write!(
                f,
                "attempts must be a number from {} to {}",
                MIN_ATTEMPTS, MAX_ATTEMPTS
            ),
        }
    }
}

/// Errors returned by game engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A guess was submitted after the game was already won or lost.
    GameOver,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::GameOver => write!(f, "Game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodeError {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidCode(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
