use thiserror::Error;

use super::{MAX_GRADE, MIN_GRADE};

/// Rejected user input. Every variant is recovered by re-prompting; the
/// variants differ only in the message shown.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid input. Please enter a non-empty name.")]
    EmptyName,

    #[error("Invalid input. Please enter a valid grade between {min} and {max}.", min = MIN_GRADE, max = MAX_GRADE)]
    MalformedGrade(String),

    #[error("Invalid input. Please enter a valid grade between {min} and {max}.", min = MIN_GRADE, max = MAX_GRADE)]
    GradeOutOfRange(f64),

    #[error("'{0}' is reserved to finish data entry")]
    ReservedName(String),
}
