//! Number-guessing game.
//!
//! A secret number between [`LOWEST`] and [`HIGHEST`] is drawn and the
//! player is told whether each guess is too high or too low until they hit
//! it. Only in-range numeric guesses count as attempts.

use anyhow::Result;
use rand::Rng;
use std::fmt;
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::console::Console;

pub const LOWEST: u32 = 1;
pub const HIGHEST: u32 = 100;

pub const GUESS_PROMPT: &str = "Guess a number between 1 and 100: ";

/// Draws a secret number in `[LOWEST, HIGHEST]`.
pub fn draw_secret<G: Rng>(rng: &mut G) -> u32 {
    rng.gen_range(LOWEST..=HIGHEST)
}

/// How a single line of input was judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    NotANumber,
    OutOfRange,
    TooHigh,
    TooLow,
    Correct,
}

impl Verdict {
    /// Whether this guess adds to the attempt count.
    pub fn counts(self) -> bool {
        matches!(self, Verdict::TooHigh | Verdict::TooLow | Verdict::Correct)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::NotANumber => write!(f, "Invalid input. Please enter a valid number."),
            Verdict::OutOfRange => write!(
                f,
                "Invalid input. Please enter a number between {LOWEST} and {HIGHEST}."
            ),
            Verdict::TooHigh => write!(f, "Too high! Try a lower number."),
            Verdict::TooLow => write!(f, "Too low! Try a higher number."),
            Verdict::Correct => write!(f, "Correct!"),
        }
    }
}

/// Judges `input` against `secret`. Input must be all ASCII digits.
pub fn judge(secret: u32, input: &str) -> Verdict {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Verdict::NotANumber;
    }

    let Ok(guess) = input.parse::<u32>() else {
        return Verdict::NotANumber;
    };

    if !(LOWEST..=HIGHEST).contains(&guess) {
        Verdict::OutOfRange
    } else if guess > secret {
        Verdict::TooHigh
    } else if guess < secret {
        Verdict::TooLow
    } else {
        Verdict::Correct
    }
}

/// Plays one game against `secret`.
///
/// Returns the number of counted attempts, or `None` if the input ran out
/// before the number was found.
#[tracing::instrument(skip(console, secret))]
pub fn play<R: BufRead, W: Write>(console: &mut Console<R, W>, secret: u32) -> Result<Option<u32>> {
    let mut attempts = 0;

    loop {
        let Some(line) = console.prompt(GUESS_PROMPT)? else {
            info!(attempts, "Input ended before the number was guessed");
            return Ok(None);
        };

        let verdict = judge(secret, &line);
        if verdict.counts() {
            attempts += 1;
        }
        debug!(input = %line, ?verdict, attempts, "Guess judged");

        if verdict == Verdict::Correct {
            console.say("")?;
            console.say(format!(
                "Congratulations! You guessed it in {attempts} valid attempts."
            ))?;
            info!(attempts, "Number guessed");
            return Ok(Some(attempts));
        }

        console.say(verdict)?;
    }
}
