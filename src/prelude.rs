//! Commonly used types and utilities for ease of import.

pub use crate::{
    is_valid_code, parse_request, Configuration, Feedback, GameEngine, GameStatus, Outcome,
    Request, SecretCode, Turn,
};

#[cfg(feature = "std")]
pub use crate::{
    input::{LineInput, LineSource},
    session::{play, resolve_configuration, run},
    Console, TerminalConsole, Tone,
};
