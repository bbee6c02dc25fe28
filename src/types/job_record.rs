// src/types/job_record.rs
//! Normalized job listing structures written to the output file

use serde::Serialize;

use super::RawRow;

// ===== Output Record =====

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRecord {
    pub job_title: String,
    pub job_url: Option<String>,
    pub posted_date: Option<String>, // ISO-8601 YYYY-MM-DD
    pub job_description: String,
    pub location: Option<String>,
    pub salary: StructuredSalary,
    pub tech_stack: Vec<String>,
    pub original_row: RawRow,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructuredSalary {
    pub display: Option<String>,
    pub min_amount: Option<u64>,
    pub max_amount: Option<u64>,
    pub currency_code: Option<String>,
    pub currency_symbol: Option<String>,
    pub period: Option<SalaryPeriod>,
}

impl StructuredSalary {
    /// True when no field carries a value
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Pay frequency, serialized capitalized ("Hour", "Year", ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SalaryPeriod {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl SalaryPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryPeriod::Hour => "Hour",
            SalaryPeriod::Day => "Day",
            SalaryPeriod::Week => "Week",
            SalaryPeriod::Month => "Month",
            SalaryPeriod::Year => "Year",
        }
    }
}
