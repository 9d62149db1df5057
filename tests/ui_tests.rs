#![cfg(feature = "std")]

use crossterm::style::Color;
use log::LevelFilter;
use mastermind::{parse_level, Tone};

#[test]
fn test_tone_colors() {
    assert_eq!(Tone::Plain.color(), None);
    assert_eq!(Tone::Instructions.color(), Some(Color::Yellow));
    assert_eq!(Tone::Help.color(), Some(Color::Cyan));
    assert_eq!(Tone::Error.color(), Some(Color::Red));
    assert_eq!(Tone::Success.color(), Some(Color::Green));
    assert_eq!(Tone::Round.color(), Some(Color::Blue));
    assert_eq!(Tone::Banner.color(), Some(Color::DarkYellow));
}

#[test]
fn test_log_level_names() {
    assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
    assert_eq!(parse_level(" TRACE "), Some(LevelFilter::Trace));
    assert_eq!(parse_level("off"), Some(LevelFilter::Off));
    assert_eq!(parse_level("loud"), None);
}
