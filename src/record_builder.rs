// src/record_builder.rs
//! Builds one [`JobRecord`] out of one raw row.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::header_mapper::{CanonicalField, HeaderMapping};
use crate::normalizers::date_parser::parse_posted_date_iso;
use crate::normalizers::{clean_html_description, parse_salary, parse_tech_stack};
use crate::types::{JobRecord, RawRow};
use crate::utils::non_empty;

static LOCATION_PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:see\s+job\s+desc\.?|see\s+job\s+description\.?|n/?a|na)\s*$")
        .expect("valid regex")
});

static COMPETITIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bcompetitive\b").expect("valid regex"));

pub struct RecordBuilder<'a> {
    mapping: &'a HeaderMapping,
    reference_date: NaiveDate,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(mapping: &'a HeaderMapping, reference_date: NaiveDate) -> Self {
        Self {
            mapping,
            reference_date,
        }
    }

    pub fn build(&self, row: RawRow) -> JobRecord {
        let cell = |field: CanonicalField| self.mapping.value(&row, field).trim();

        let job_title = cell(CanonicalField::JobTitle).to_string();
        let job_url = non_empty(cell(CanonicalField::JobUrl));
        let posted_date =
            parse_posted_date_iso(Some(cell(CanonicalField::PostedDate)), self.reference_date);
        let job_description = clean_html_description(Some(
            self.mapping.value(&row, CanonicalField::JobDescriptionHtml),
        ));
        let location = normalize_location(cell(CanonicalField::Location));

        let salary_cell = cell(CanonicalField::Salary);
        let salary = if !salary_cell.is_empty() && !COMPETITIVE_RE.is_match(salary_cell) {
            parse_salary(Some(salary_cell))
        } else {
            debug!("Salary column empty or vague, reading salary from description");
            parse_salary(Some(&job_description))
        };

        let tech_cell = cell(CanonicalField::TechStack);
        let tech_source = if tech_cell.is_empty() {
            job_description.as_str()
        } else {
            tech_cell
        };
        let tech_stack = parse_tech_stack(Some(tech_source));

        JobRecord {
            job_title,
            job_url,
            posted_date,
            job_description,
            location,
            salary,
            tech_stack,
            original_row: row,
        }
    }
}

/// Trimmed location, with placeholders like "N/A" or "See job description" treated as absent
pub fn normalize_location(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || LOCATION_PLACEHOLDER_RE.is_match(trimmed) {
        None
    } else {
        Some(trimmed.to_string())
    }
}
