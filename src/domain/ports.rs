use crate::domain::model::RadiusRange;
use crate::utils::error::Result;
use std::io::Write;

/// Where raw input lines come from.
pub trait LineSource {
    type Lines: Iterator<Item = Result<String>>;

    /// Human-readable origin, used in logs and diagnostics.
    fn describe(&self) -> String;

    fn open(&self) -> Result<Self::Lines>;
}

/// Supplies the radius range used by the filter step.
///
/// `out` is the report writer, so an interactive source can print its prompt
/// in sequence with the listings.
pub trait RangeSource {
    fn radius_range(&mut self, out: &mut dyn Write) -> Result<RadiusRange>;
}
