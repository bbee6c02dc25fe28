// src/header_mapper.rs
//! Maps messy export headers onto the canonical job fields.
//!
//! Each header is checked against [`HEADER_RULES`] top to bottom and the
//! first matching rule decides its fate. Headers matching no rule are ignored.

use std::collections::HashMap;
use std::fmt;

use crate::types::RawRow;
use crate::utils::normalize_header;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    JobTitle,
    JobUrl,
    JobDescriptionHtml,
    Location,
    PostedDate,
    Salary,
    TechStack,
}

impl CanonicalField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::JobTitle => "job_title",
            CanonicalField::JobUrl => "job_url",
            CanonicalField::JobDescriptionHtml => "job_description_html",
            CanonicalField::Location => "location",
            CanonicalField::PostedDate => "posted_date",
            CanonicalField::Salary => "salary",
            CanonicalField::TechStack => "tech_stack",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
enum Matcher {
    /// Header contains any of the needles
    ContainsAny(&'static [&'static str]),
    /// Header contains every needle
    ContainsAll(&'static [&'static str]),
    /// Header equals one of the values
    Exact(&'static [&'static str]),
}

impl Matcher {
    fn matches(&self, header: &str) -> bool {
        match self {
            Matcher::ContainsAny(needles) => needles.iter().any(|n| header.contains(*n)),
            Matcher::ContainsAll(needles) => needles.iter().all(|n| header.contains(*n)),
            Matcher::Exact(values) => values.contains(&header),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Assign {
    /// Replace any column previously assigned to the field
    Overwrite,
    /// Only take the field if nothing claimed it yet
    IfUnmapped,
}

#[derive(Debug, Clone, Copy)]
struct HeaderRule {
    matcher: Matcher,
    field: CanonicalField,
    assign: Assign,
}

const fn rule(matcher: Matcher, field: CanonicalField, assign: Assign) -> HeaderRule {
    HeaderRule {
        matcher,
        field,
        assign,
    }
}

/// Priority-ordered rules. URL and HTML-description columns come first so
/// they never get mistaken for a title.
const HEADER_RULES: [HeaderRule; 8] = [
    rule(
        Matcher::ContainsAny(&["url"]),
        CanonicalField::JobUrl,
        Assign::Overwrite,
    ),
    rule(
        Matcher::ContainsAll(&["description", "html"]),
        CanonicalField::JobDescriptionHtml,
        Assign::Overwrite,
    ),
    rule(
        Matcher::Exact(&["job title", "job_title", "title"]),
        CanonicalField::JobTitle,
        Assign::Overwrite,
    ),
    rule(
        Matcher::ContainsAny(&["title", "position"]),
        CanonicalField::JobTitle,
        Assign::IfUnmapped,
    ),
    rule(
        Matcher::ContainsAny(&["location", "city"]),
        CanonicalField::Location,
        Assign::Overwrite,
    ),
    rule(
        Matcher::ContainsAny(&["date", "posted", "published"]),
        CanonicalField::PostedDate,
        Assign::Overwrite,
    ),
    rule(
        Matcher::ContainsAny(&["salary", "pay", "compensation"]),
        CanonicalField::Salary,
        Assign::Overwrite,
    ),
    rule(
        Matcher::ContainsAny(&["tech", "stack", "skills", "technologies"]),
        CanonicalField::TechStack,
        Assign::Overwrite,
    ),
];

/// Canonical field -> original column name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMapping {
    columns: HashMap<CanonicalField, String>,
}

impl HeaderMapping {
    /// Build the mapping from the header row, in file order.
    pub fn from_headers<H: AsRef<str>>(headers: &[H]) -> Self {
        let mut mapping = Self::default();
        for header in headers {
            mapping.apply(header.as_ref());
        }
        mapping
    }

    fn apply(&mut self, header: &str) {
        let normalized = normalize_header(header);
        let Some(rule) = HEADER_RULES
            .iter()
            .find(|rule| rule.matcher.matches(&normalized))
        else {
            return;
        };

        match rule.assign {
            Assign::Overwrite => {
                self.columns.insert(rule.field, header.to_string());
            }
            Assign::IfUnmapped => {
                self.columns
                    .entry(rule.field)
                    .or_insert_with(|| header.to_string());
            }
        }
    }

    pub fn column(&self, field: CanonicalField) -> Option<&str> {
        self.columns.get(&field).map(String::as_str)
    }

    /// Cell text for `field` in `row`; empty when the field is unmapped or the cell is missing.
    pub fn value<'a>(&self, row: &'a RawRow, field: CanonicalField) -> &'a str {
        self.column(field)
            .and_then(|column| row.get(column))
            .unwrap_or("")
    }

    /// Mapped pairs sorted by canonical name, for logging.
    pub fn describe(&self) -> String {
        let mut pairs: Vec<String> = self
            .columns
            .iter()
            .map(|(field, column)| format!("{}={:?}", field, column))
            .collect();
        pairs.sort();
        pairs.join(", ")
    }
}
