// src/core/config_manager.rs
//! Environment-driven settings for the binary

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;

pub const LOG_LEVEL_VAR: &str = "JOBNORM_LOG_LEVEL";
pub const LOG_FILE_VAR: &str = "JOBNORM_LOG_FILE";
pub const REFERENCE_DATE_VAR: &str = "JOBNORM_REFERENCE_DATE";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub logging: LoggingConfig,
    pub reference_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    /// JSON log file, truncated on startup
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_file: None,
        }
    }
}

impl ConfigManager {
    /// Load settings from the process environment
    pub fn load() -> Result<Self> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup
    pub fn load_from<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let logging = Self::load_logging(&lookup);
        let reference_date = Self::load_reference_date(&lookup)?;

        Ok(Self {
            logging,
            reference_date,
        })
    }

    fn load_logging<F>(lookup: &F) -> LoggingConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = LoggingConfig::default();
        LoggingConfig {
            level: lookup(LOG_LEVEL_VAR)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.level),
            log_file: lookup(LOG_FILE_VAR)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    fn load_reference_date<F>(lookup: &F) -> Result<Option<NaiveDate>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(raw) = lookup(REFERENCE_DATE_VAR).filter(|v| !v.trim().is_empty()) else {
            return Ok(None);
        };

        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map(Some)
            .with_context(|| format!("{} must be YYYY-MM-DD, got {:?}", REFERENCE_DATE_VAR, raw))
    }
}
