#![cfg(feature = "std")]

//! Key-by-key line input with end-of-input detection.
//!
//! The terminal is put in raw mode while a line is read so that Ctrl+D can
//! be caught in the middle of a line, not only at its start. Echo and
//! backspace erasing are done here. When stdin is not a terminal, plain
//! buffered line reads are used instead and EOF plays the role of Ctrl+D.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};

/// A key press, reduced to what line editing cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    /// Ctrl+D (or Ctrl+C, which raw mode no longer turns into SIGINT).
    EndOfInput,
    /// Anything else: arrows, function keys, other control chords.
    Ignored,
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        let control = event.modifiers.contains(KeyModifiers::CONTROL);
        match event.code {
            KeyCode::Char(c) if control && matches!(c.to_ascii_lowercase(), 'd' | 'c') => {
                Key::EndOfInput
            }
            KeyCode::Char(_) if control || event.modifiers.contains(KeyModifiers::ALT) => {
                Key::Ignored
            }
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Tab => Key::Char('\t'),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            _ => Key::Ignored,
        }
    }
}

/// One line of input, or the end-of-input signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    Line(String),
    EndOfInput,
}

/// Source of individual key presses.
pub trait KeySource {
    /// Block until the next key press.
    fn next_key(&mut self) -> io::Result<Key>;
}

/// Anything that can produce whole lines.
pub trait LineSource {
    fn read_line(&mut self) -> io::Result<LineInput>;
}

/// [`KeySource`] backed by crossterm terminal events.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        loop {
            // Some platforms report releases as well as presses.
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    return Ok(Key::from(key));
                }
            }
        }
    }
}

/// Assembles lines from key presses, echoing to `echo` as it goes.
#[derive(Debug)]
pub struct KeyLineReader<K, W> {
    keys: K,
    echo: W,
}

impl<K: KeySource, W: Write> KeyLineReader<K, W> {
    pub fn new(keys: K, echo: W) -> Self {
        Self { keys, echo }
    }
}

impl<K: KeySource, W: Write> LineSource for KeyLineReader<K, W> {
    fn read_line(&mut self) -> io::Result<LineInput> {
        let mut buffer = String::new();
        loop {
            match self.keys.next_key()? {
                Key::EndOfInput => {
                    self.echo.write_all(b"\r\n")?;
                    self.echo.flush()?;
                    return Ok(LineInput::EndOfInput);
                }
                Key::Enter => {
                    self.echo.write_all(b"\r\n")?;
                    self.echo.flush()?;
                    return Ok(LineInput::Line(buffer));
                }
                Key::Backspace => {
                    if buffer.pop().is_some() {
                        self.echo.write_all(b"\x08 \x08")?;
                    }
                }
                Key::Char(c) => {
                    buffer.push(c);
                    write!(self.echo, "{}", c)?;
                }
                Key::Ignored => {}
            }
            self.echo.flush()?;
        }
    }
}

/// Restores cooked mode when dropped, even if the read failed.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Interactive terminal input: raw mode for the duration of each line.
#[derive(Debug)]
pub struct RawTerminalLines {
    reader: KeyLineReader<CrosstermKeys, io::Stdout>,
}

impl RawTerminalLines {
    pub fn new() -> Self {
        Self {
            reader: KeyLineReader::new(CrosstermKeys, io::stdout()),
        }
    }
}

impl Default for RawTerminalLines {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for RawTerminalLines {
    fn read_line(&mut self) -> io::Result<LineInput> {
        let _raw = RawModeGuard::enable()?;
        self.reader.read_line()
    }
}

/// Non-interactive input from any buffered reader. EOF ends input.
/// Bytes that are not UTF-8 are replaced rather than treated as an error.
#[derive(Debug)]
pub struct BufferedLines<R> {
    reader: R,
}

impl<R: BufRead> BufferedLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BufferedLines<R> {
    fn read_line(&mut self) -> io::Result<LineInput> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(LineInput::EndOfInput);
        }
        if bytes.ends_with(b"\n") {
            bytes.pop();
            if bytes.ends_with(b"\r") {
                bytes.pop();
            }
        }
        // Undecodable bytes become U+FFFD and fail code validation like any typo.
        Ok(LineInput::Line(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

/// Pick the line source for standard input: raw key reading on a
/// terminal, buffered reads otherwise.
pub fn stdin_lines() -> Box<dyn LineSource> {
    if io::stdin().is_terminal() {
        Box::new(RawTerminalLines::new())
    } else {
        Box::new(BufferedLines::new(io::stdin().lock()))
    }
}
