//! Reading commands from a line-oriented input source.

use std::io::{self, BufRead};

use super::command::{Command, Vocabulary, parse_command};

/// Reads player input one line at a time and parses it into commands.
pub struct Parser<R> {
    reader: R,
    vocabulary: Vocabulary,
    line: Vec<u8>,
}

impl<R: BufRead> Parser<R> {
    /// Create a parser over `reader` using the standard vocabulary.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            vocabulary: Vocabulary::default(),
            line: Vec::new(),
        }
    }

    /// Block until a full line is available and parse it.
    ///
    /// Returns `Ok(None)` once the input is exhausted. Bytes that are not
    /// valid UTF-8 are replaced rather than rejected, so a garbled line parses
    /// like any other unrecognised input.
    pub fn get_command(&mut self) -> io::Result<Option<Command>> {
        self.line.clear();
        if self.reader.read_until(b'\n', &mut self.line)? == 0 {
            log::debug!("end of input");
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&self.line);
        Ok(Some(parse_command(&line, &self.vocabulary)))
    }
}
