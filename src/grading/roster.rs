use serde::Serialize;

use super::error::InputError;
use super::validate::check_range;
use super::SENTINEL;

/// One accepted `(name, grade)` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    name: String,
    grade: f64,
}

impl Record {
    /// Builds a record, refusing empty or reserved names and out-of-range grades.
    pub fn new(name: impl Into<String>, grade: f64) -> Result<Self, InputError> {
        let name = name.into();
        if name.is_empty() {
            return Err(InputError::EmptyName);
        }
        if name == SENTINEL {
            return Err(InputError::ReservedName(name));
        }
        let grade = check_range(grade)?;
        Ok(Self { name, grade })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> f64 {
        self.grade
    }
}

/// Records in the order they were entered. Duplicate names are kept.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    records: Vec<Record>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl FromIterator<Record> for Roster {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
