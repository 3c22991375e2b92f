use crate::domain::model::{LineRejection, RadiusRange, Record};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub const NO_MATCHES: &str = "No planets found within the given radius range.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Unsorted,
    Sorted,
}

impl View {
    fn title(self) -> &'static str {
        match self {
            View::Unsorted => "Unsorted File data:",
            View::Sorted => "Sorted File data:",
        }
    }

    fn key(self) -> &'static str {
        match self {
            View::Unsorted => "unsorted",
            View::Sorted => "sorted",
        }
    }
}

#[derive(Serialize)]
struct JsonView<'a> {
    view: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<RadiusRange>,
    records: &'a [Record],
}

/// Renders the listings. Each method writes one complete view.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    pub fn listing(&self, out: &mut dyn Write, view: View, records: &[Record]) -> Result<()> {
        match self.format {
            ReportFormat::Text => {
                if view == View::Sorted {
                    writeln!(out)?;
                }
                writeln!(out, "{}", view.title())?;
                for r in records {
                    writeln!(out, "{} | {} | {} kilometers", r.date(), r.name(), r.radius())?;
                }
            }
            ReportFormat::Csv => write_csv(out, view.key(), records)?,
            ReportFormat::Json => write_json(out, view.key(), None, records)?,
        }
        Ok(())
    }

    pub fn filtered(
        &self,
        out: &mut dyn Write,
        range: RadiusRange,
        records: &[Record],
    ) -> Result<()> {
        match self.format {
            ReportFormat::Text => {
                if records.is_empty() {
                    writeln!(out, "\n{}", NO_MATCHES)?;
                } else {
                    writeln!(
                        out,
                        "\nPlanets within radius range ({} - {}):",
                        range.min, range.max
                    )?;
                    for r in records {
                        writeln!(
                            out,
                            "{} | {} kilometers | Opened on: {}",
                            r.name(),
                            r.radius(),
                            r.date()
                        )?;
                    }
                }
            }
            ReportFormat::Csv => {
                if records.is_empty() {
                    writeln!(out, "# {}", NO_MATCHES)?;
                } else {
                    write_csv(out, "filtered", records)?;
                }
            }
            ReportFormat::Json => write_json(out, "filtered", Some(range), records)?,
        }
        Ok(())
    }

    /// One diagnostic line per rejected input line.
    pub fn rejections(&self, err: &mut dyn Write, rejections: &[LineRejection]) -> Result<()> {
        for rejection in rejections {
            writeln!(
                err,
                "Error parsing line: {} - {}",
                rejection.line, rejection.reason
            )?;
        }
        Ok(())
    }
}

fn write_csv(out: &mut dyn Write, view: &str, records: &[Record]) -> Result<()> {
    writeln!(out, "# {}", view)?;
    let mut writer = csv::Writer::from_writer(&mut *out);
    for record in records {
        writer.serialize(record)?;
    }
    if records.is_empty() {
        writer.write_record(["name", "date", "radius"])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(
    out: &mut dyn Write,
    view: &str,
    range: Option<RadiusRange>,
    records: &[Record],
) -> Result<()> {
    let body = JsonView {
        view,
        range,
        records,
    };
    serde_json::to_writer(&mut *out, &body)?;
    writeln!(out)?;
    Ok(())
}
