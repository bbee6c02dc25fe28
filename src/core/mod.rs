// src/core/mod.rs
//! Ambient services around the normalization engine: settings and file I/O

pub mod config_manager;
pub mod fs_ops;

pub use config_manager::{ConfigManager, LoggingConfig};
pub use fs_ops::{CsvTable, FsOps};
