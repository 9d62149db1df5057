//! Parsing of the startup configuration line.
//!
//! A line is either blank (play with defaults), a help request, or a set
//! of `-c <code>` / `-t <attempts>` flags. Parsing is all-or-nothing: a
//! line with any problem yields an error and no configuration at all.

use crate::{
    code::SecretCode,
    common::{ConfigError, Flag},
    config::{DEFAULT_ATTEMPTS, MAX_ATTEMPTS, MIN_ATTEMPTS},
};

/// Settings for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    /// Fixed secret, or `None` to draw a random one when the game starts.
    pub secret_code: Option<SecretCode>,
    pub attempt_limit: u8,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            secret_code: None,
            attempt_limit: DEFAULT_ATTEMPTS,
        }
    }
}

/// What a startup line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Blank line: random code and default attempts.
    Defaults,
    /// `-h` or `--help`.
    Help,
    /// Valid flag combination.
    Configure(Configuration),
}

/// Whether a trimmed line is `-h` or `--help`, ignoring ASCII case.
pub fn is_help(line: &str) -> bool {
    line.eq_ignore_ascii_case("-h") || line.eq_ignore_ascii_case("--help")
}

/// Parse an attempt limit, accepting integers from `MIN_ATTEMPTS` to `MAX_ATTEMPTS`.
pub fn parse_attempts(value: &str) -> Result<u8, ConfigError> {
    match value.parse::<u8>() {
        Ok(n) if (MIN_ATTEMPTS..=MAX_ATTEMPTS).contains(&n) => Ok(n),
        _ => Err(ConfigError::InvalidAttempts),
    }
}

/// Interpret one line typed at the startup prompt.
pub fn parse_request(line: &str) -> Result<Request, ConfigError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Request::Defaults);
    }
    if is_help(line) {
        return Ok(Request::Help);
    }

    let mut code_value = None;
    let mut attempts_value = None;
    let mut tokens = line.split_whitespace();
    while let Some(token) = tokens.next() {
        let flag = Flag::from_token(token).ok_or(ConfigError::UnknownToken)?;
        let value = tokens.next().ok_or(ConfigError::MissingValue(flag))?;
        let slot = match flag {
            Flag::Code => &mut code_value,
            Flag::Attempts => &mut attempts_value,
        };
        if slot.replace(value).is_some() {
            return Err(ConfigError::DuplicateFlag(flag));
        }
    }

    let mut config = Configuration::default();
    if let Some(value) = code_value {
        config.secret_code = Some(SecretCode::parse(value)?);
    }
    if let Some(value) = attempts_value {
        config.attempt_limit = parse_attempts(value)?;
    }
    Ok(Request::Configure(config))
}
