use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

pub mod collector;
pub mod config;
pub mod core;
pub mod header_mapper;
pub mod normalizers;
pub mod record_builder;
pub mod types;
pub mod utils;

pub use collector::{collect_jobs, JobCollector};
pub use config::ConvertConfig;
pub use header_mapper::{CanonicalField, HeaderMapping};
pub use record_builder::RecordBuilder;
pub use types::{JobRecord, RawRow, SalaryPeriod, StructuredSalary};

use crate::core::FsOps;

/// Outcome of one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub rows_read: usize,
    pub records_written: usize,
    pub duplicates_skipped: usize,
    pub output_path: PathBuf,
}

/// Read the CSV export, normalize every row and write the JSON array.
///
/// Only I/O failures are errors; messy cells degrade to empty fields.
pub async fn convert_csv_to_json(config: &ConvertConfig) -> Result<ConversionSummary> {
    let table = FsOps::read_csv(&config.input_path).await?;

    let mapping = HeaderMapping::from_headers(&table.headers);
    info!("Header mapping: {}", mapping.describe());
    info!("Reference date: {}", config.reference_date);

    let mut collector = JobCollector::new(&mapping, config.reference_date);
    for row in table.rows {
        collector.push(row);
    }
    let rows_read = collector.rows_read();
    let duplicates_skipped = collector.duplicates_skipped();
    let records = collector.finish();

    FsOps::write_records_json(&config.output_path, &records, config.pretty).await?;

    Ok(ConversionSummary {
        rows_read,
        records_written: records.len(),
        duplicates_skipped,
        output_path: config.output_path.clone(),
    })
}
