// src/normalizers/date_parser.rs
//! Posted-date normalization for absolute and relative phrasings.

use std::sync::LazyLock;

use chrono::{Duration, NaiveDate};
use regex::Regex;

/// Accepted absolute layouts, each guarded by the exact text shape it allows.
///
/// chrono on its own also takes looser input such as two-digit years or a
/// leading sign.
static ABSOLUTE_FORMATS: LazyLock<[(Regex, &'static str); 3]> = LazyLock::new(|| {
    let iso = Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").expect("valid regex");
    let slashed = Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").expect("valid regex");
    [
        (iso, "%Y-%m-%d"),
        (slashed.clone(), "%m/%d/%Y"),
        (slashed, "%d/%m/%Y"),
    ]
});

/// `<N> <unit>(s) ago`, with the unit's length in days.
static RELATIVE_PATTERNS: LazyLock<Vec<(Regex, i64)>> = LazyLock::new(|| {
    [("day", 1), ("week", 7), ("month", 30), ("year", 365)]
        .into_iter()
        .map(|(unit, days)| {
            let pattern = format!(r"^\s*(\d+)\s+{unit}s?\s+ago\s*$");
            (Regex::new(&pattern).expect("valid regex"), days)
        })
        .collect()
});

static SUB_DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bhours?\s+ago\b|\bminutes?\s+ago\b").expect("valid regex")
});

/// Resolve a posted-date cell against `today`.
///
/// Months count as 30 days and years as 365; anything unrecognized is `None`.
pub fn parse_posted_date(text: Option<&str>, today: NaiveDate) -> Option<NaiveDate> {
    let text = text?.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(date) = ABSOLUTE_FORMATS
        .iter()
        .filter(|(shape, _)| shape.is_match(text))
        .find_map(|(_, fmt)| NaiveDate::parse_from_str(text, fmt).ok())
    {
        return Some(date);
    }

    let lower = text.to_lowercase();
    match lower.as_str() {
        "today" | "just now" => return Some(today),
        "yesterday" => return today.checked_sub_signed(Duration::days(1)),
        _ => {}
    }

    for (re, unit_days) in RELATIVE_PATTERNS.iter() {
        if let Some(caps) = re.captures(&lower) {
            return caps[1]
                .parse::<i64>()
                .ok()
                .and_then(|n| n.checked_mul(*unit_days))
                .and_then(Duration::try_days)
                .and_then(|offset| today.checked_sub_signed(offset));
        }
    }

    if SUB_DAY_RE.is_match(&lower) {
        return Some(today);
    }

    None
}

/// ISO-8601 (`YYYY-MM-DD`) rendering used in output records
pub fn parse_posted_date_iso(text: Option<&str>, today: NaiveDate) -> Option<String> {
    parse_posted_date(text, today).map(|date| date.format("%Y-%m-%d").to_string())
}
