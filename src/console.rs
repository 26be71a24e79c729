//! Line-oriented prompt/response channel shared by every exercise.

use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Pairs a buffered reader with a writer so a program can ask for a line
/// and print its answers without caring whether it talks to a terminal or
/// to in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` without a trailing newline, flushes, and reads one line.
    ///
    /// The line terminator (`\n` or `\r\n`) is stripped. Returns `None` once
    /// the input is exhausted.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;
        self.read_line()
    }

    /// Reads one line without prompting. Same stripping and end-of-input
    /// rules as [`Console::prompt`].
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Writes `line` followed by a newline.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}").context("Failed to write output")
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_strips_line_terminators() {
        let mut c = console("first\nsecond\r\nlast");
        assert_eq!(c.prompt("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(c.prompt("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(c.prompt("> ").unwrap().as_deref(), Some("last"));
    }

    #[test]
    fn test_prompt_returns_none_at_end_of_input() {
        let mut c = console("");
        assert_eq!(c.prompt("> ").unwrap(), None);
    }

    #[test]
    fn test_empty_line_is_not_end_of_input() {
        let mut c = console("\n");
        assert_eq!(c.prompt("> ").unwrap().as_deref(), Some(""));
        assert_eq!(c.prompt("> ").unwrap(), None);
    }

    #[test]
    fn test_read_line_writes_nothing() {
        let mut c = console("a\n");
        assert_eq!(c.read_line().unwrap().as_deref(), Some("a"));
        assert!(c.into_output().is_empty());
    }

    #[test]
    fn test_prompt_and_say_write_to_output() {
        let mut c = console("x\n");
        c.prompt("Name: ").unwrap();
        c.say("done").unwrap();
        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out, "Name: done\n");
    }
}
