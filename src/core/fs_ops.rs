// src/core/fs_ops.rs
//! File system collaborators: reading the CSV export and writing the JSON output

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

use crate::types::{JobRecord, RawRow};

/// Header row plus data rows of a CSV export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl CsvTable {
    /// Parse CSV text whose first record is the header row.
    ///
    /// Short records are padded with empty cells, long ones truncated.
    pub fn parse(content: &str) -> Result<Self> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .context("Failed to read CSV header row")?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.with_context(|| format!("Failed to parse CSV record {}", index + 1))?;
            let cells: Vec<&str> = record.iter().collect();
            rows.push(RawRow::from_cells(&headers, &cells));
        }

        Ok(Self { headers, rows })
    }
}

pub struct FsOps;

impl FsOps {
    /// Whole input file as text; a non-UTF-8 export is rejected here.
    async fn read_export(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .await
            .with_context(|| format!("Cannot read CSV export {}", path.display()))
    }

    /// Replace `path` with `content`, creating missing parent folders first.
    async fn write_output(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Cannot create output folder {}", parent.display()))?;
        }

        fs::write(path, content)
            .await
            .with_context(|| format!("Cannot write JSON output {}", path.display()))?;

        debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }

    /// Read and parse a UTF-8 CSV export
    pub async fn read_csv(path: &Path) -> Result<CsvTable> {
        let content = Self::read_export(path).await?;
        let table = CsvTable::parse(&content)
            .with_context(|| format!("Failed to parse CSV file: {}", path.display()))?;

        info!(
            "Read {} rows with {} columns from {}",
            table.rows.len(),
            table.headers.len(),
            path.display()
        );
        Ok(table)
    }

    /// Write records as a JSON array, non-ASCII text kept as is
    pub async fn write_records_json(path: &Path, records: &[JobRecord], pretty: bool) -> Result<()> {
        let json = if pretty {
            serde_json::to_string_pretty(records)
        } else {
            serde_json::to_string(records)
        }
        .context("Failed to serialize job records to JSON")?;

        Self::write_output(path, &json).await
    }
}
