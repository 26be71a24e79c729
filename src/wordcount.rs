//! Whitespace-delimited word counting for text files.

use anyhow::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};

use crate::console::Console;

pub const FILE_PROMPT: &str = "Enter the name/address of the text file: ";

#[derive(Error, Debug)]
pub enum CountError {
    #[error("Error: Unable to open the file.")]
    Open(#[source] std::io::Error),

    #[error("Error reading the file.")]
    Read(#[source] std::io::Error),

    #[error("Error: Unable to open the file.")]
    NoFileName,
}

/// ASCII whitespace plus vertical tab, the C locale's `isspace` set.
fn is_separator(b: &u8) -> bool {
    b.is_ascii_whitespace() || *b == 0x0b
}

/// Counts maximal runs of non-whitespace bytes across all lines.
///
/// Works on raw bytes, so text in any ASCII-compatible encoding is counted.
pub fn count_words<R: BufRead>(reader: R) -> Result<usize, std::io::Error> {
    let mut total = 0;
    for line in reader.split(b'\n') {
        total += line?
            .split(is_separator)
            .filter(|word| !word.is_empty())
            .count();
    }
    Ok(total)
}

/// Asks for a file name and returns the first token, skipping blank lines
/// the way a whitespace-delimited read does. `None` at end of input.
fn ask_file_name<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Option<String>> {
    let mut answer = console.prompt(FILE_PROMPT)?;
    while let Some(line) = answer {
        if let Some(token) = line.split_whitespace().next() {
            return Ok(Some(token.to_string()));
        }
        answer = console.read_line()?;
    }
    Ok(None)
}

/// Opens `path` and counts its words.
pub fn count_words_in_file(path: &Path) -> Result<usize, CountError> {
    let file = File::open(path).map_err(CountError::Open)?;
    count_words(BufReader::new(file)).map_err(CountError::Read)
}

/// Runs the word-count program.
///
/// When `path` is `None` the file name is asked for on `console`, keeping
/// only the first whitespace-separated token of the answer. Failures to
/// open or read the file are written to `errors` and are not fatal.
#[tracing::instrument(skip(console, errors))]
pub fn run<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W>,
    errors: &mut E,
    path: Option<String>,
) -> Result<Option<usize>> {
    let file_name = match path {
        Some(path) => path,
        None => match ask_file_name(console)? {
            Some(name) => name,
            None => {
                writeln!(errors, "{}", CountError::NoFileName)?;
                error!("Input ended before a file name was given");
                return Ok(None);
            }
        },
    };

    match count_words_in_file(Path::new(&file_name)) {
        Ok(count) => {
            console.say(format!("Total word count in {file_name} is: {count}"))?;
            info!(file = %file_name, count, "Words counted");
            Ok(Some(count))
        }
        Err(e) => {
            writeln!(errors, "{e}")?;
            error!(file = %file_name, error = ?e, "Word count failed");
            Ok(None)
        }
    }
}
