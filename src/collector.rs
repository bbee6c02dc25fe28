// src/collector.rs
//! Drives record building over all rows and drops repeated job URLs.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::header_mapper::HeaderMapping;
use crate::record_builder::RecordBuilder;
use crate::types::{JobRecord, RawRow};
use crate::utils::normalize_url_key;

/// Per-run accumulator. The seen-URL set lives only as long as one collector.
pub struct JobCollector<'a> {
    builder: RecordBuilder<'a>,
    seen_urls: HashSet<String>,
    records: Vec<JobRecord>,
    rows_read: usize,
    duplicates_skipped: usize,
}

impl<'a> JobCollector<'a> {
    pub fn new(mapping: &'a HeaderMapping, reference_date: NaiveDate) -> Self {
        Self {
            builder: RecordBuilder::new(mapping, reference_date),
            seen_urls: HashSet::new(),
            records: Vec::new(),
            rows_read: 0,
            duplicates_skipped: 0,
        }
    }

    /// Build and keep the record for `row`. Returns false when its URL was already seen.
    pub fn push(&mut self, row: RawRow) -> bool {
        self.rows_read += 1;
        let record = self.builder.build(row);

        if let Some(url) = &record.job_url {
            let key = normalize_url_key(url);
            if !key.is_empty() && !self.seen_urls.insert(key) {
                debug!("Skipping duplicate job URL: {}", url);
                self.duplicates_skipped += 1;
                return false;
            }
        }

        self.records.push(record);
        true
    }

    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    pub fn duplicates_skipped(&self) -> usize {
        self.duplicates_skipped
    }

    pub fn finish(self) -> Vec<JobRecord> {
        self.records
    }
}

/// Map the headers, then build deduplicated records for every row in order.
pub fn collect_jobs<H, I>(headers: &[H], rows: I, reference_date: NaiveDate) -> Vec<JobRecord>
where
    H: AsRef<str>,
    I: IntoIterator<Item = RawRow>,
{
    let mapping = HeaderMapping::from_headers(headers);
    let mut collector = JobCollector::new(&mapping, reference_date);
    for row in rows {
        collector.push(row);
    }
    collector.finish()
}
