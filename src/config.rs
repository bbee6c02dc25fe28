// src/config.rs
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_PATH: &str = "jobs.json";

/// One CSV -> JSON conversion run
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// "Today" for relative dates; shared by every row of the run
    pub reference_date: NaiveDate,
    pub pretty: bool,
}

impl ConvertConfig {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            reference_date: Local::now().date_naive(),
            pretty: true,
        }
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
