use crate::adapters::report::ReportFormat;
use crate::config::Overrides;
use crate::core::sorter::SortPolicy;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "planet-catalog")]
#[command(about = "Extract, sort and filter planet records from a text file")]
pub struct CliConfig {
    /// Input file, one record per line [default: file.txt]
    #[arg(short, long)]
    pub input: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Lower radius bound; skips the interactive prompt (requires --max)
    #[arg(long, requires = "max", allow_negative_numbers = true)]
    pub min: Option<f64>,

    /// Upper radius bound (requires --min)
    #[arg(long, requires = "min", allow_negative_numbers = true)]
    pub max: Option<f64>,

    /// How to treat dates that are not DD.MM.YYYY
    #[arg(long, value_enum)]
    pub sort_policy: Option<SortPolicy>,

    /// Report output format
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            input: self.input.clone(),
            sort_policy: self.sort_policy,
            format: self.format,
            min: self.min,
            max: self.max,
        }
    }
}
