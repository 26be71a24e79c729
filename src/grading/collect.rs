//! The sentinel-terminated name/grade collection loop.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::mem;
use tracing::{debug, info, warn};

use super::error::InputError;
use super::roster::{Record, Roster};
use super::validate::parse_grade;
use super::SENTINEL;
use crate::console::Console;

pub const NAME_PROMPT: &str = "Enter student name (or 'done' to finish): ";

/// Where the collection loop currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    AwaitingName,
    AwaitingGrade { name: String },
    Finished,
}

impl Phase {
    /// Prompt for the next line, or `None` once finished.
    pub fn prompt(&self) -> Option<String> {
        match self {
            Phase::AwaitingName => Some(NAME_PROMPT.to_string()),
            Phase::AwaitingGrade { name } => Some(format!("Enter {name}'s grade: ")),
            Phase::Finished => None,
        }
    }
}

/// Drives [`Phase`] transitions and owns the roster being built.
#[derive(Debug)]
pub struct Collector {
    phase: Phase,
    roster: Roster,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        Self {
            phase: Phase::AwaitingName,
            roster: Roster::new(),
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Feeds one input line to the state machine.
    ///
    /// On error the phase is left unchanged: an empty name keeps waiting for
    /// a name, a bad grade keeps waiting for a grade for the same student.
    pub fn feed(&mut self, line: &str) -> Result<(), InputError> {
        match mem::replace(&mut self.phase, Phase::Finished) {
            Phase::AwaitingName => {
                if line == SENTINEL {
                    self.phase = Phase::Finished;
                } else if line.is_empty() {
                    self.phase = Phase::AwaitingName;
                    return Err(InputError::EmptyName);
                } else {
                    self.phase = Phase::AwaitingGrade {
                        name: line.to_string(),
                    };
                }
            }
            Phase::AwaitingGrade { name } => match parse_grade(line)
                .and_then(|grade| Record::new(name.clone(), grade))
            {
                Ok(record) => {
                    info!(name = record.name(), grade = record.grade(), "Record accepted");
                    self.roster.push(record);
                    self.phase = Phase::AwaitingName;
                }
                Err(e) => {
                    self.phase = Phase::AwaitingGrade { name };
                    return Err(e);
                }
            },
            Phase::Finished => {}
        }
        Ok(())
    }

    /// Ends collection early, dropping any name still waiting for a grade.
    pub fn close(&mut self) {
        if let Phase::AwaitingGrade { name } = &self.phase {
            warn!(name = %name, "Input ended before a grade was entered");
        }
        self.phase = Phase::Finished;
    }

    pub fn into_roster(self) -> Roster {
        self.roster
    }
}

/// Prompts on `console` until the sentinel or end of input and returns the roster.
pub fn collect<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Roster> {
    let mut collector = Collector::new();

    while let Some(prompt) = collector.phase().prompt() {
        let Some(line) = console.prompt(&prompt)? else {
            debug!("End of input");
            collector.close();
            break;
        };

        if let Err(e) = collector.feed(&line) {
            debug!(input = %line, error = ?e, "Input rejected");
            console.say(&e)?;
        }
    }

    info!(records = collector.roster().len(), "Collection finished");
    Ok(collector.into_roster())
}
