pub mod builder;
pub mod engine;
pub mod extract;
pub mod filter;
pub mod sorter;

pub use crate::domain::model::{BuildOutcome, LineRejection, RadiusRange, Record, RunSummary};
pub use crate::domain::ports::{LineSource, RangeSource};
pub use crate::utils::error::Result;
