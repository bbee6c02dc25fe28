use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use job_normalizer::config::DEFAULT_OUTPUT_PATH;
use job_normalizer::core::{ConfigManager, LoggingConfig};
use job_normalizer::{convert_csv_to_json, ConvertConfig};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "jobnorm")]
#[command(about = "Convert a jobs CSV export into structured JSON")]
struct Cli {
    /// Path to the input CSV file
    input_csv: PathBuf,

    /// Path to the output JSON file
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    output_json: PathBuf,

    /// Date used as "today" for relative posted dates (YYYY-MM-DD)
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// Write single-line JSON instead of indented output
    #[arg(long)]
    compact: bool,
}

fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file_layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true) // Clear file on startup
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(Mutex::new(file))
                    .with_current_span(false)
                    .with_span_list(false),
            )
        }
        None => None,
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("Invalid log level: {}", config.level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = ConfigManager::load()?;
    init_logging(&settings.logging)?;

    let mut config = ConvertConfig::new(cli.input_csv)
        .with_output_path(cli.output_json)
        .with_pretty(!cli.compact);
    if let Some(date) = cli.reference_date.or(settings.reference_date) {
        config = config.with_reference_date(date);
    }

    let summary = convert_csv_to_json(&config).await?;

    info!(
        "Converted {} rows into {} records ({} duplicates skipped)",
        summary.rows_read, summary.records_written, summary.duplicates_skipped
    );
    println!("Wrote structured JSON to {}", summary.output_path.display());

    Ok(())
}
