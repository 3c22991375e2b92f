use clap::Parser;
use planet_catalog::config::toml_config::TomlConfig;
use planet_catalog::core::RangeSource;
use planet_catalog::domain::model::RunSummary;
use planet_catalog::utils::logger;
use planet_catalog::{
    CatalogEngine, CatalogError, CliConfig, FileLineSource, FixedRange, Reporter, Settings,
    StdinRangePrompt,
};
use std::io;

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.log_json);
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!(
            "Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("{}", e.user_friendly_message());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(cli: &CliConfig) -> Result<RunSummary, CatalogError> {
    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            Some(TomlConfig::from_file(path)?)
        }
        None => None,
    };

    let settings = Settings::resolve(&cli.overrides(), file_config.as_ref())?;
    tracing::debug!("Effective settings: {:?}", settings);

    match settings.range {
        Some(range) => execute(&settings, FixedRange(range)),
        None => execute(&settings, StdinRangePrompt::new(io::stdin().lock())),
    }
}

fn execute<R: RangeSource>(settings: &Settings, range: R) -> Result<RunSummary, CatalogError> {
    let source = FileLineSource::new(&settings.input);
    let mut engine = CatalogEngine::new(source, range)?
        .with_reporter(Reporter::new(settings.format))
        .with_sort_policy(settings.sort_policy);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = engine.run(&mut stdout.lock(), &mut stderr.lock())?;

    tracing::info!(
        "Done: {} records ({} lines rejected), {} in range",
        summary.records_built,
        summary.lines_rejected,
        summary.records_matched
    );
    Ok(summary)
}
