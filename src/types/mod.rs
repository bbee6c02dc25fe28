// src/types/mod.rs
pub mod job_record;
pub mod raw_row;

pub use job_record::{JobRecord, SalaryPeriod, StructuredSalary};
pub use raw_row::RawRow;
