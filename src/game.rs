use rand::Rng;

use crate::{
    code::{Feedback, SecretCode},
    common::GameError,
    config::MIN_ATTEMPTS,
    options::Configuration,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// How a play session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    /// The player signalled end-of-input before the game was decided.
    Aborted,
}

/// Result of submitting one valid guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Guess matched the secret.
    Won,
    /// Guess was wrong and used the last attempt. No feedback is given.
    Lost,
    /// Guess was wrong and attempts remain.
    Feedback(Feedback),
}

/// Core game logic holding the secret and the attempt budget.
#[derive(Debug, Clone)]
pub struct GameEngine {
    secret: SecretCode,
    attempt_limit: u8,
    attempts_used: u8,
    status: GameStatus,
}

impl GameEngine {
    /// Create an engine for `secret`. A zero limit is raised to `MIN_ATTEMPTS`.
    pub fn new(secret: SecretCode, attempt_limit: u8) -> Self {
        Self {
            secret,
            attempt_limit: attempt_limit.max(MIN_ATTEMPTS),
            attempts_used: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Create an engine from a resolved configuration, drawing a random
    /// secret from `rng` when none was chosen.
    pub fn from_configuration<R: Rng + ?Sized>(config: &Configuration, rng: &mut R) -> Self {
        let secret = config
            .secret_code
            .unwrap_or_else(|| SecretCode::random(rng));
        Self::new(secret, config.attempt_limit)
    }

    pub fn secret(&self) -> &SecretCode {
        &self.secret
    }

    pub fn attempt_limit(&self) -> u8 {
        self.attempt_limit
    }

    /// Wrong guesses counted so far. Doubles as the zero-based round index.
    pub fn attempts_used(&self) -> u8 {
        self.attempts_used
    }

    pub fn attempts_remaining(&self) -> u8 {
        self.attempt_limit - self.attempts_used
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Submit a validated guess.
    ///
    /// A correct guess wins without using an attempt. A wrong guess uses
    /// one; if that was the last, the game is lost.
    pub fn submit(&mut self, guess: &SecretCode) -> Result<Turn, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        if *guess == self.secret {
            self.status = GameStatus::Won;
            return Ok(Turn::Won);
        }
        self.attempts_used += 1;
        if self.attempts_used >= self.attempt_limit {
            self.status = GameStatus::Lost;
            return Ok(Turn::Lost);
        }
        Ok(Turn::Feedback(self.secret.score(guess)))
    }
}
