use crate::utils::error::ExtractError;
use serde::Serialize;

/// One planet, parsed from one input line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    name: String,
    date: String,
    radius: f64,
}

impl Record {
    pub fn new(name: impl Into<String>, date: impl Into<String>, radius: f64) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            radius,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `DD.MM.YYYY`, as it appeared in the input.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Inclusive radius bounds. `min > max` is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadiusRange {
    pub min: f64,
    pub max: f64,
}

impl RadiusRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, radius: f64) -> bool {
        self.min <= radius && radius <= self.max
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineRejection {
    /// 1-based.
    pub line_number: usize,
    pub line: String,
    pub reason: ExtractError,
}

#[derive(Debug, Clone, Default)]
pub struct BuildOutcome {
    pub records: Vec<Record>,
    pub rejections: Vec<LineRejection>,
}

impl BuildOutcome {
    pub fn lines_read(&self) -> usize {
        self.records.len() + self.rejections.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub lines_read: usize,
    pub records_built: usize,
    pub lines_rejected: usize,
    pub records_matched: usize,
    pub sorted: bool,
}
