//! Roster aggregation and the final console report.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

use super::roster::Roster;

pub const NO_DATA: &str = "No student data entered.";

/// Aggregate figures for a non-empty roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub average: f64,
    pub lowest: f64,
    pub highest: f64,
}

impl Summary {
    /// Computes sum, lowest and highest in one pass. Returns `None` for an
    /// empty roster.
    pub fn from_roster(roster: &Roster) -> Option<Self> {
        if roster.is_empty() {
            return None;
        }

        let mut sum = 0.0;
        let mut lowest = f64::MAX;
        let mut highest = f64::MIN;

        for record in roster.iter() {
            sum += record.grade();
            lowest = lowest.min(record.grade());
            highest = highest.max(record.grade());
        }

        Some(Self {
            count: roster.len(),
            average: sum / roster.len() as f64,
            lowest,
            highest,
        })
    }
}

/// Writes the per-student lines and the summary, or the no-data message.
pub fn write_report<W: Write>(out: &mut W, roster: &Roster) -> Result<Option<Summary>> {
    let Some(summary) = Summary::from_roster(roster) else {
        writeln!(out, "{NO_DATA}").context("Failed to write report")?;
        info!("Empty roster, nothing to report");
        return Ok(None);
    };

    writeln!(out).context("Failed to write report")?;
    for record in roster.iter() {
        writeln!(out, "Student: {}, Grade: {}", record.name(), record.grade())
            .context("Failed to write report")?;
    }

    writeln!(out).context("Failed to write report")?;
    writeln!(out, "Average grade: {}", summary.average).context("Failed to write report")?;
    writeln!(out, "Lowest grade: {}", summary.lowest).context("Failed to write report")?;
    writeln!(out, "Highest grade: {}", summary.highest).context("Failed to write report")?;

    debug!("{}", serde_json::to_string(&summary)?);
    info!(
        count = summary.count,
        average = summary.average,
        lowest = summary.lowest,
        highest = summary.highest,
        "Summary computed"
    );

    Ok(Some(summary))
}
