use crate::domain::model::RadiusRange;
use crate::domain::ports::RangeSource;
use crate::utils::error::{CatalogError, Result};
use std::io::{BufRead, Write};

pub const RANGE_PROMPT: &str = "Enter radius range (min max): ";

/// Asks for `min max` on a reader; the two numbers may span several lines.
pub struct StdinRangePrompt<R> {
    input: R,
}

impl<R: BufRead> StdinRangePrompt<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    fn read_tokens(&mut self, wanted: usize) -> Result<Vec<String>> {
        let mut tokens = Vec::with_capacity(wanted);
        let mut line = String::new();

        while tokens.len() < wanted {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            tokens.extend(line.split_whitespace().map(str::to_string));
        }

        tokens.truncate(wanted);
        Ok(tokens)
    }
}

impl<R: BufRead> RangeSource for StdinRangePrompt<R> {
    fn radius_range(&mut self, out: &mut dyn Write) -> Result<RadiusRange> {
        write!(out, "\n{}", RANGE_PROMPT)?;
        out.flush()?;

        let tokens = self.read_tokens(2)?;
        let parsed: Vec<f64> = tokens
            .iter()
            .map_while(|t| t.parse::<f64>().ok())
            .collect();

        match parsed.as_slice() {
            [min, max] => {
                tracing::debug!("Radius range entered: {} - {}", min, max);
                Ok(RadiusRange::new(*min, *max))
            }
            _ => Err(CatalogError::InvalidRange {
                input: tokens.join(" "),
            }),
        }
    }
}

/// A range known up front, from flags or the config file.
#[derive(Debug, Clone, Copy)]
pub struct FixedRange(pub RadiusRange);

impl RangeSource for FixedRange {
    fn radius_range(&mut self, _out: &mut dyn Write) -> Result<RadiusRange> {
        Ok(self.0)
    }
}
