#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::report::ReportFormat;
use crate::core::sorter::SortPolicy;
use crate::domain::model::RadiusRange;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "file.txt";

/// Effective run settings after merging flags, config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub input: PathBuf,
    pub sort_policy: SortPolicy,
    pub format: ReportFormat,
    /// `None` means ask on stdin.
    pub range: Option<RadiusRange>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            sort_policy: SortPolicy::default(),
            format: ReportFormat::default(),
            range: None,
        }
    }
}

/// Values given on the command line. Every field overrides the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<String>,
    pub sort_policy: Option<SortPolicy>,
    pub format: Option<ReportFormat>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validate for Overrides {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validation::validate_path("--input", input)?;
        }
        validation::validate_bounds_pair(self.min, self.max)?;
        Ok(())
    }
}

impl Settings {
    pub fn resolve(overrides: &Overrides, file: Option<&toml_config::TomlConfig>) -> Result<Self> {
        overrides.validate()?;
        if let Some(file) = file {
            file.validate()?;
        }

        let defaults = Settings::default();

        let input = overrides
            .input
            .clone()
            .or_else(|| file.and_then(|f| f.input.path.clone()))
            .map(PathBuf::from)
            .unwrap_or(defaults.input);

        let sort_policy = overrides
            .sort_policy
            .or_else(|| file.and_then(|f| f.sort.policy))
            .unwrap_or(defaults.sort_policy);

        let format = overrides
            .format
            .or_else(|| file.and_then(|f| f.report.format))
            .unwrap_or(defaults.format);

        let range = validation::validate_bounds_pair(overrides.min, overrides.max)?
            .map(|(min, max)| RadiusRange::new(min, max))
            .or_else(|| {
                file.and_then(|f| f.filter)
                    .map(|filter| RadiusRange::new(filter.min, filter.max))
            });

        Ok(Self {
            input,
            sort_policy,
            format,
            range,
        })
    }
}
