use crate::adapters::report::{Reporter, View};
use crate::core::builder::RecordBuilder;
use crate::core::filter::filter_by_range;
use crate::core::sorter::{sort_by_date, SortPolicy};
use crate::domain::model::{BuildOutcome, RunSummary};
use crate::domain::ports::{LineSource, RangeSource};
use crate::utils::error::{CatalogError, Result};
use std::io::Write;

/// Runs read -> build -> sort -> filter, reporting each view as it goes.
pub struct CatalogEngine<L: LineSource, R: RangeSource> {
    source: L,
    range: R,
    builder: RecordBuilder,
    reporter: Reporter,
    sort_policy: SortPolicy,
}

impl<L: LineSource, R: RangeSource> CatalogEngine<L, R> {
    pub fn new(source: L, range: R) -> Result<Self> {
        Ok(Self {
            source,
            range,
            builder: RecordBuilder::with_default_patterns()?,
            reporter: Reporter::default(),
            sort_policy: SortPolicy::default(),
        })
    }

    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_sort_policy(mut self, policy: SortPolicy) -> Self {
        self.sort_policy = policy;
        self
    }

    pub fn run(&mut self, out: &mut dyn Write, err: &mut dyn Write) -> Result<RunSummary> {
        tracing::info!("Reading records from {}", self.source.describe());

        // Extract
        let lines = self.source.open()?;
        let outcome = self.builder.build_all(lines)?;
        tracing::info!(
            "Read {} lines: {} records, {} rejected",
            outcome.lines_read(),
            outcome.records.len(),
            outcome.rejections.len()
        );

        self.process(outcome, out, err)
    }

    /// Everything after extraction: diagnostics, both listings, range and filter.
    /// If the sort fails, the unsorted order is listed under the sorted heading.
    pub fn process(
        &mut self,
        outcome: BuildOutcome,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<RunSummary> {
        self.reporter.rejections(err, &outcome.rejections)?;

        let mut summary = RunSummary {
            lines_read: outcome.lines_read(),
            records_built: outcome.records.len(),
            lines_rejected: outcome.rejections.len(),
            ..RunSummary::default()
        };
        let mut records = outcome.records;

        self.reporter.listing(out, View::Unsorted, &records)?;

        // Sort
        match sort_by_date(&mut records, self.sort_policy) {
            Ok(()) => summary.sorted = true,
            Err(e) => {
                let e = CatalogError::from(e);
                tracing::warn!("{}", e);
                writeln!(err, "{}", e.user_friendly_message())?;
            }
        }
        self.reporter.listing(out, View::Sorted, &records)?;

        // Filter
        let range = self.range.radius_range(out)?;
        let matched = filter_by_range(&records, range);
        tracing::info!(
            "{} records within radius range {} - {}",
            matched.len(),
            range.min,
            range.max
        );
        summary.records_matched = matched.len();
        self.reporter.filtered(out, range, &matched)?;
        out.flush()?;

        Ok(summary)
    }
}
