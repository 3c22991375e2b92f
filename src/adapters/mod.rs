// Adapters layer: concrete implementations of the domain ports plus console output.

pub mod file_source;
pub mod prompt;
pub mod report;
