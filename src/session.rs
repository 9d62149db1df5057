#![cfg(feature = "std")]

//! Interactive flow: the configuration prompt followed by the guessing loop.

use std::io;

use log::{debug, info, trace};
use rand::Rng;

use crate::{
    code::SecretCode,
    game::{GameEngine, Outcome, Turn},
    input::LineInput,
    options::{is_help, parse_request, Configuration, Request},
    ui::{Console, Tone},
};

const WRONG_INPUT: &str = "Wrong input!";

const INSTRUCTIONS: &[&str] = &[
    "Use -c to choose your secret code (4 unique digits from 0 to 8).",
    "Use -t to set number of attempts (from 1 to 20).",
    "Press Enter to play with a random code and default attempts.",
    "Use -h or --help for instructions and help.",
    "Press Ctrl+D to exit the game.",
    "",
];

const FULL_HELP: &[&str] = &[
    "Options:",
    "  -c <code>       Choose your secret code (4 unique digits 0–8)",
    "  -t <attempts>   Set number of attempts (1–20)",
    "  [ENTER]         Play with random code and default attempts",
    "  -h, --help      Show help message",
    "  Ctrl+D          Exit the game",
    "",
];

const SHORT_HELP: &[&str] = &[
    "Options:",
    "  -h, --help      Show help message",
    "  Ctrl+D          Exit the game",
    "",
];

const BANNER: &[&str] = &["", "Will you find the secret code?", "Please enter a valid guess:"];

/// Prompt until a valid configuration line is entered.
///
/// Returns `None` if the player ends input instead.
pub fn resolve_configuration<C: Console + ?Sized>(
    console: &mut C,
) -> io::Result<Option<Configuration>> {
    console.say_all(Tone::Instructions, INSTRUCTIONS)?;
    loop {
        console.prompt("Enter your choice: ")?;
        let line = match console.read_line()? {
            LineInput::Line(line) => line,
            LineInput::EndOfInput => {
                info!("End of input at configuration prompt");
                return Ok(None);
            }
        };
        match parse_request(&line) {
            Ok(Request::Defaults) => return Ok(Some(Configuration::default())),
            Ok(Request::Configure(config)) => return Ok(Some(config)),
            Ok(Request::Help) => console.say_all(Tone::Help, FULL_HELP)?,
            Err(e) => {
                debug!("Rejected configuration {:?}: {}", line.trim(), e);
                console.say(Tone::Error, WRONG_INPUT)?;
                console.say(Tone::Plain, "")?;
            }
        }
    }
}

/// Run the guessing loop for one game.
pub fn play<C: Console + ?Sized, R: Rng + ?Sized>(
    console: &mut C,
    config: &Configuration,
    rng: &mut R,
) -> io::Result<Outcome> {
    let mut engine = GameEngine::from_configuration(config, rng);
    trace!("Secret code is {}", engine.secret());
    debug!(
        "Game started with {} attempts, {} secret",
        engine.attempt_limit(),
        if config.secret_code.is_some() { "chosen" } else { "random" }
    );
    console.say_all(Tone::Banner, BANNER)?;

    loop {
        console.say(Tone::Plain, "")?;
        console.say(Tone::Round, &format!("Round {}:", engine.attempts_used()))?;

        let line = match console.read_line()? {
            LineInput::Line(line) => line,
            LineInput::EndOfInput => return Ok(Outcome::Aborted),
        };
        let line = line.trim();
        if is_help(line) {
            console.say_all(Tone::Help, SHORT_HELP)?;
            continue;
        }
        let guess = match SecretCode::parse(line) {
            Ok(guess) => guess,
            Err(e) => {
                debug!("Rejected guess {:?}: {}", line, e);
                console.say(Tone::Error, WRONG_INPUT)?;
                continue;
            }
        };

        match engine.submit(&guess) {
            Ok(Turn::Won) => {
                console.say(Tone::Success, "Congratz! You did it!")?;
                return Ok(Outcome::Won);
            }
            Ok(Turn::Lost) => {
                console.say(Tone::Error, "Game over! You ran out of attempts.")?;
                return Ok(Outcome::Lost);
            }
            Ok(Turn::Feedback(feedback)) => {
                console.say(
                    Tone::Plain,
                    &format!("Well placed pieces: {}", feedback.well_placed),
                )?;
                console.say(
                    Tone::Plain,
                    &format!("Misplaced pieces: {}", feedback.misplaced),
                )?;
                debug!("{} attempts remaining", engine.attempts_remaining());
            }
            Err(e) => return Err(io::Error::other(e)),
        }
    }
}

/// Resolve a configuration and play one game with it.
///
/// Returns `None` when input ended before a game could start.
pub fn run<C: Console + ?Sized, R: Rng + ?Sized>(
    console: &mut C,
    rng: &mut R,
) -> io::Result<Option<Outcome>> {
    let Some(config) = resolve_configuration(console)? else {
        return Ok(None);
    };
    info!(
        "Configuration resolved: attempts={}, code={}",
        config.attempt_limit,
        if config.secret_code.is_some() { "chosen" } else { "random" }
    );
    let outcome = play(console, &config, rng)?;
    info!("Game finished: {:?}", outcome);
    Ok(Some(outcome))
}
