//! One-character confirmation readers.

use crate::error::Result;
use crate::traits::ConfirmationProvider;
use std::io::{self, Read, Stdin};

/// The only answer that confirms.
pub const CONFIRM_CHAR: char = 'y';

/// Reads exactly one character from any reader.
///
/// End of input counts as a refusal.
#[derive(Debug)]
pub struct ReaderConfirmation<R> {
    reader: R,
}

impl<R: Read> ReaderConfirmation<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Reads the next character, or `None` at end of input.
    ///
    /// A truncated or malformed UTF-8 sequence yields `U+FFFD` rather than an error.
    pub fn read_char(&mut self) -> Result<Option<char>> {
        let mut buf = [0u8; 4];
        if self.reader.read(&mut buf[..1])? == 0 {
            return Ok(None);
        }

        let width = utf8_width(buf[0]);
        for i in 1..width {
            if self.reader.read(&mut buf[i..=i])? == 0 {
                return Ok(Some(char::REPLACEMENT_CHARACTER));
            }
        }

        Ok(std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .or(Some(char::REPLACEMENT_CHARACTER)))
    }
}

impl<R: Read> ConfirmationProvider for ReaderConfirmation<R> {
    fn confirm(&mut self) -> Result<bool> {
        let answer = self.read_char()?;
        tracing::debug!("Confirmation answer: {answer:?}");
        Ok(answer == Some(CONFIRM_CHAR))
    }
}

/// Confirmation read from the process's standard input.
pub type StdinConfirmation = ReaderConfirmation<Stdin>;

impl StdinConfirmation {
    pub fn stdin() -> Self {
        Self::new(io::stdin())
    }
}

fn utf8_width(first: u8) -> usize {
    match first {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
