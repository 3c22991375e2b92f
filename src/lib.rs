pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::{Overrides, Settings};

pub use crate::adapters::file_source::FileLineSource;
pub use crate::adapters::prompt::{FixedRange, StdinRangePrompt};
pub use crate::adapters::report::{ReportFormat, Reporter};
pub use crate::core::builder::RecordBuilder;
pub use crate::core::engine::CatalogEngine;
pub use crate::core::extract::FieldExtractor;
pub use crate::core::filter::filter_by_radius;
pub use crate::core::sorter::{sort_by_date, sortable_key, SortPolicy};
pub use crate::domain::model::{RadiusRange, Record};
pub use crate::utils::error::{CatalogError, ExtractError, Result, SortError};
