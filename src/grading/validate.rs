//! Grade text validation.

use super::error::InputError;
use super::{MAX_GRADE, MIN_GRADE};

/// Checks that `input` is a plain decimal numeral.
///
/// Only ASCII digits and a single `.` are allowed, and the `.` must be
/// followed by a digit. A leading `.` is accepted, so `".5"` is valid while
/// `"12."` and `"1.2.3"` are not. Whitespace anywhere is rejected.
pub fn is_number(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }

    let bytes = input.as_bytes();
    let mut has_decimal = false;

    for (i, &c) in bytes.iter().enumerate() {
        if c == b'.' {
            if has_decimal {
                return false;
            }
            has_decimal = true;
            match bytes.get(i + 1) {
                Some(next) if next.is_ascii_digit() => {}
                _ => return false,
            }
        } else if !c.is_ascii_digit() {
            return false;
        }
    }

    true
}

/// Extracts the numeric value of a grade string without range checking.
///
/// # Errors
///
/// Returns [`InputError::MalformedGrade`] when `input` fails [`is_number`].
pub fn parse_number(input: &str) -> Result<f64, InputError> {
    if !is_number(input) {
        return Err(InputError::MalformedGrade(input.to_string()));
    }

    // `is_number` already rejects whitespace, so there is nothing to strip.
    input
        .parse::<f64>()
        .map_err(|_| InputError::MalformedGrade(input.to_string()))
}

/// Rejects values outside `[MIN_GRADE, MAX_GRADE]`.
pub fn check_range(value: f64) -> Result<f64, InputError> {
    if (MIN_GRADE..=MAX_GRADE).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::GradeOutOfRange(value))
    }
}

/// Full grade validation: syntax first, then range.
pub fn parse_grade(input: &str) -> Result<f64, InputError> {
    parse_number(input).and_then(check_range)
}
