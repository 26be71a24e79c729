//! Student grade collection and aggregation.
//!
//! Names and grades are collected interactively until the `done` sentinel,
//! validated on the way in, and summarized as average, lowest and highest
//! grade once collection finishes.

pub mod collect;
pub mod error;
pub mod report;
pub mod roster;
pub mod validate;

use crate::console::Console;
use anyhow::Result;
use std::io::{BufRead, Write};

pub use collect::{Collector, Phase, collect};
pub use error::InputError;
pub use report::{Summary, write_report};
pub use roster::{Record, Roster};

/// Lowest accepted grade.
pub const MIN_GRADE: f64 = 0.0;
/// Highest accepted grade.
pub const MAX_GRADE: f64 = 100.0;
/// Name input that ends the collection loop.
pub const SENTINEL: &str = "done";

/// Runs a full grading session: collect a roster, then print the report.
#[tracing::instrument(skip(console))]
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Option<Summary>> {
    let roster = collect(console)?;
    write_report(console.output_mut(), &roster)
}
