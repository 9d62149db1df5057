#![cfg(feature = "std")]

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::input::{stdin_lines, LineInput, LineSource};

/// What a message is for. Decides its color and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Instructions,
    Help,
    Error,
    Success,
    /// Round header shown before each guess.
    Round,
    /// Pre-game banner.
    Banner,
}

impl Tone {
    pub fn color(self) -> Option<Color> {
        match self {
            Tone::Plain => None,
            Tone::Instructions => Some(Color::Yellow),
            Tone::Help => Some(Color::Cyan),
            Tone::Error => Some(Color::Red),
            Tone::Success => Some(Color::Green),
            Tone::Round => Some(Color::Blue),
            Tone::Banner => Some(Color::DarkYellow),
        }
    }
}

/// The game's view of the terminal: tagged output lines and line input.
pub trait Console {
    /// Write `text` followed by a newline.
    fn say(&mut self, tone: Tone, text: &str) -> io::Result<()>;

    /// Write `text` with no newline, ahead of reading input.
    fn prompt(&mut self, text: &str) -> io::Result<()>;

    fn read_line(&mut self) -> io::Result<LineInput>;

    /// Write each line in order with the same tone.
    fn say_all(&mut self, tone: Tone, lines: &[&str]) -> io::Result<()> {
        for line in lines {
            self.say(tone, line)?;
        }
        Ok(())
    }
}

/// [`Console`] writing to `out`, optionally in color.
pub struct TerminalConsole<W> {
    lines: Box<dyn LineSource>,
    out: W,
    color: bool,
}

impl TerminalConsole<io::Stdout> {
    /// Console on stdin/stdout.
    pub fn stdio(color: bool) -> Self {
        Self::new(stdin_lines(), io::stdout(), color)
    }
}

impl<W: Write> TerminalConsole<W> {
    pub fn new(lines: Box<dyn LineSource>, out: W, color: bool) -> Self {
        Self { lines, out, color }
    }
}

impl<W: Write> Console for TerminalConsole<W> {
    fn say(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        match tone.color().filter(|_| self.color) {
            Some(color) => queue!(
                self.out,
                SetForegroundColor(color),
                Print(text),
                ResetColor,
                Print("\n")
            )?,
            None => queue!(self.out, Print(text), Print("\n"))?,
        }
        self.out.flush()
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))?;
        self.out.flush()
    }

    fn read_line(&mut self) -> io::Result<LineInput> {
        self.lines.read_line()
    }
}
