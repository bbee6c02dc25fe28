// src/normalizers/mod.rs
//! Text normalizers applied to individual cells.
//!
//! All of them are pure and fail soft: unparseable input yields an empty or
//! absent result, never an error.

pub mod date_parser;
pub mod html_cleaner;
pub mod salary;
pub mod tech_stack;

pub use date_parser::parse_posted_date;
pub use html_cleaner::clean_html_description;
pub use salary::{extract_salary_phrase, parse_salary};
pub use tech_stack::parse_tech_stack;
