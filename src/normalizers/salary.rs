// src/normalizers/salary.rs
//! Salary extraction from free text.
//!
//! Two stages: [`extract_salary_phrase`] narrows a long text down to the part
//! that talks about pay, then [`parse_salary`] turns that phrase into a
//! [`StructuredSalary`]. A phrase with no currency, period or pay keyword is
//! rejected outright, which keeps version numbers and years of experience
//! from being read as amounts.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::types::{SalaryPeriod, StructuredSalary};

/// Texts up to this many characters are assumed to be salary-focused already.
const SHORT_TEXT_CHARS: usize = 120;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex")
}

// ---------------------------------------------------------------------------
// Phrase extraction
// ---------------------------------------------------------------------------

static KEYWORD_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex(
        r"(?i)(?:salary|compensation|package|rate|pay|wage|remuneration)[^.!\n]*:?\s*[^.!\n]+",
    )
});

static CURRENCY_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex(concat!(
        r"(?i)(?:[$€£]|\b(?:usd|gbp|eur)\b)\s?\d[\d,]*(?:\.\d+)?k?",
        r"(?:\s*[-–]\s*[$€£]?\s?\d[\d,]*(?:\.\d+)?k?)?",
        r"(?:\s*(?:usd|gbp|eur))?",
        r"(?:\s*(?:per\s*(?:hour|day|week|month|year)|/hr|/hour|/day|/week|/month|/year|hr|hourly))?",
    ))
});

static PERIOD_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex(concat!(
        r"(?i)\d+[\d,]*(?:\.\d+)?k?\s*",
        r"(?:per\s*(?:hour|day|week|month|year)|/hr|/hour|/day|/week|/month|/year|hr\b|hourly|daily|weekly|monthly|yearly)",
    ))
});

static DESCRIPTOR_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\b(competitive|doe)\b"));

fn trim_phrase(phrase: &str) -> String {
    phrase.trim_matches(&[' ', '.'][..]).to_string()
}

/// Pick out the salary-related phrase of `text`.
///
/// Returns an empty string when nothing looks like pay information.
pub fn extract_salary_phrase(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }
    if text.chars().count() <= SHORT_TEXT_CHARS {
        return text.to_string();
    }

    for re in [&*KEYWORD_SPAN_RE, &*CURRENCY_SPAN_RE, &*PERIOD_SPAN_RE] {
        if let Some(m) = re.find(text) {
            return trim_phrase(m.as_str());
        }
    }

    DESCRIPTOR_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Structured parsing
// ---------------------------------------------------------------------------

static CURRENCY_RE: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)(\$|€|£|usd|gbp|eur)"));

static PERIOD_SIGNAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex(concat!(
        r"per\s*(?:hour|day|week|month|year)|/hr|/hour|/day|/week|/month|/year",
        r"|hr\b|hourly|daily|weekly|monthly|yearly|annum|annual|\byr\b|\bpa\b",
    ))
});

static PAY_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"\b(?:salary|compensation|package|rate|pay|wage|remuneration|base|bonus)\b")
});

/// Checked in order; the first hit decides the period.
static PERIOD_RULES: LazyLock<[(Regex, SalaryPeriod); 5]> = LazyLock::new(|| {
    [
        (regex(r"per\s*hour|/hour|/hr|\shr\b|hourly"), SalaryPeriod::Hour),
        (
            regex(r"per\s*day|/day|daily|day rate|daily rate"),
            SalaryPeriod::Day,
        ),
        (regex(r"per\s*week|/week|weekly"), SalaryPeriod::Week),
        (regex(r"per\s*month|/month|monthly|/mo\b"), SalaryPeriod::Month),
        (
            regex(r"per\s*year|/year|annum|annual|yearly|\byr\b|\bpa\b|\bsalary\b|\bbase\b"),
            SalaryPeriod::Year,
        ),
    ]
});

static THOUSANDS_RE: LazyLock<Regex> = LazyLock::new(|| regex(r"\d+\s*k\b"));

static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)(\d+[\d,]*(?:\.\d+)?)(k)?"));

static DISPLAY_START_RE: LazyLock<Regex> = LazyLock::new(|| regex(r"[$€£]|\d"));

/// Parse salary text (a cell or a whole description) into structured fields.
///
/// Fields stay `None` when no clear signal is present; a `display` is only
/// kept alongside at least one amount, currency or period.
pub fn parse_salary(text: Option<&str>) -> StructuredSalary {
    let mut out = StructuredSalary::default();
    let Some(text) = text else {
        return out;
    };

    let snippet = extract_salary_phrase(text);
    if snippet.is_empty() {
        return out;
    }

    let lower = snippet.to_lowercase();
    let has_currency = CURRENCY_RE.is_match(&snippet);
    let has_period = PERIOD_SIGNAL_RE.is_match(&lower);
    let has_pay_keyword = PAY_KEYWORD_RE.is_match(&lower);
    if !(has_currency || has_period || has_pay_keyword) {
        debug!("No salary signal in phrase: {:?}", snippet);
        return out;
    }

    if let Some((code, symbol)) = detect_currency(&snippet) {
        out.currency_code = Some(code.to_string());
        out.currency_symbol = Some(symbol.to_string());
    }

    out.period = PERIOD_RULES
        .iter()
        .find(|(re, _)| re.is_match(&lower))
        .map(|(_, period)| *period)
        .or_else(|| THOUSANDS_RE.is_match(&lower).then_some(SalaryPeriod::Year));

    let amounts = extract_amounts(&snippet);
    if !amounts.is_empty() {
        let min = amounts.iter().copied().fold(f64::INFINITY, f64::min);
        let max = amounts.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        out.min_amount = Some(to_whole_amount(min));
        out.max_amount = Some(to_whole_amount(max));
    }

    out.display = refine_display(&snippet);

    if out.min_amount.is_none()
        && out.max_amount.is_none()
        && out.currency_code.is_none()
        && out.period.is_none()
    {
        out.display = None;
    }

    debug!(
        "Parsed salary {:?}: {:?}-{:?} {:?} per {}",
        out.display,
        out.min_amount,
        out.max_amount,
        out.currency_code,
        out.period.map_or("?", |p| p.as_str())
    );

    out
}

fn detect_currency(snippet: &str) -> Option<(&'static str, &'static str)> {
    let raw = CURRENCY_RE.find(snippet)?.as_str().to_lowercase();
    match raw.as_str() {
        "$" | "usd" => Some(("USD", "$")),
        "£" | "gbp" => Some(("GBP", "£")),
        "€" | "eur" => Some(("EUR", "€")),
        _ => None,
    }
}

/// Numeric tokens in order of appearance; a `k` suffix means thousands.
fn extract_amounts(snippet: &str) -> Vec<f64> {
    AMOUNT_RE
        .captures_iter(snippet)
        .filter_map(|caps| {
            let digits = caps[1].replace(',', "");
            let value = digits.parse::<f64>().ok()?;
            Some(if caps.get(2).is_some() {
                value * 1000.0
            } else {
                value
            })
        })
        .collect()
}

/// Whole currency units, truncated toward zero.
fn to_whole_amount(value: f64) -> u64 {
    value.trunc() as u64
}

/// Drop any leading label ("Daily rate: ...") before the first symbol or digit.
fn refine_display(snippet: &str) -> Option<String> {
    let raw = snippet.trim();
    let refined = match DISPLAY_START_RE.find(raw) {
        Some(m) if m.start() > 0 => raw[m.start()..].trim_start(),
        _ => raw,
    };
    if refined.is_empty() {
        None
    } else {
        Some(refined.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> StructuredSalary {
        parse_salary(Some(text))
    }

    #[test]
    fn test_dollar_range_per_year() {
        let salary = parse("$80,000 - $100,000 per year");
        assert_eq!(salary.min_amount, Some(80_000));
        assert_eq!(salary.max_amount, Some(100_000));
        assert_eq!(salary.currency_code.as_deref(), Some("USD"));
        assert_eq!(salary.currency_symbol.as_deref(), Some("$"));
        assert_eq!(salary.period, Some(SalaryPeriod::Year));
        assert_eq!(salary.display.as_deref(), Some("$80,000 - $100,000 per year"));
    }

    #[test]
    fn test_competitive_alone_is_empty() {
        assert!(parse("Competitive").is_empty());
        assert!(parse("DOE").is_empty());
    }

    #[test]
    fn test_no_signal_is_empty() {
        assert!(parse("Java, Python experience required").is_empty());
        assert!(parse("Python 3.11 and 5 years").is_empty());
    }

    #[test]
    fn test_k_suffix_defaults_to_yearly() {
        let salary = parse("£45k-£55k");
        assert_eq!(salary.min_amount, Some(45_000));
        assert_eq!(salary.max_amount, Some(55_000));
        assert_eq!(salary.currency_code.as_deref(), Some("GBP"));
        assert_eq!(salary.currency_symbol.as_deref(), Some("£"));
        assert_eq!(salary.period, Some(SalaryPeriod::Year));
    }

    #[test]
    fn test_reversed_range_uses_min_and_max() {
        let salary = parse("€70,000 - €60,000 annual");
        assert_eq!(salary.min_amount, Some(60_000));
        assert_eq!(salary.max_amount, Some(70_000));
        assert_eq!(salary.currency_code.as_deref(), Some("EUR"));
        assert_eq!(salary.period, Some(SalaryPeriod::Year));
    }

    #[test]
    fn test_daily_rate_label_is_dropped_from_display() {
        let salary = parse("Daily rate: 450 GBP");
        assert_eq!(salary.display.as_deref(), Some("450 GBP"));
        assert_eq!(salary.min_amount, Some(450));
        assert_eq!(salary.max_amount, Some(450));
        assert_eq!(salary.currency_code.as_deref(), Some("GBP"));
        assert_eq!(salary.period, Some(SalaryPeriod::Day));
    }

    #[test]
    fn test_hourly_amount_is_truncated() {
        let salary = parse("$25.75 per hour");
        assert_eq!(salary.min_amount, Some(25));
        assert_eq!(salary.period, Some(SalaryPeriod::Hour));
    }

    #[test]
    fn test_keyword_without_structure_clears_display() {
        let salary = parse("Salary negotiable");
        // "salary" implies a yearly period
        assert_eq!(salary.period, Some(SalaryPeriod::Year));
        assert_eq!(salary.display.as_deref(), Some("Salary negotiable"));

        let salary = parse("Bonus scheme available");
        assert!(salary.is_empty());
    }

    #[test]
    fn test_short_text_is_taken_whole() {
        assert_eq!(extract_salary_phrase("  up to $90k  "), "up to $90k");
    }

    #[test]
    fn test_long_text_keyword_span() {
        let text = format!(
            "{} Salary: $95,000 - $120,000 depending on experience. Apply today!",
            "We are a growing team building developer tools for data engineers across Europe."
        );
        assert_eq!(
            extract_salary_phrase(&text),
            "Salary: $95,000 - $120,000 depending on experience"
        );

        let salary = parse_salary(Some(&text));
        assert_eq!(salary.min_amount, Some(95_000));
        assert_eq!(salary.max_amount, Some(120_000));
        assert_eq!(salary.currency_code.as_deref(), Some("USD"));
        assert_eq!(
            salary.display.as_deref(),
            Some("$95,000 - $120,000 depending on experience")
        );
    }

    #[test]
    fn test_long_text_currency_span() {
        let text = format!(
            "{} Offering $60,000 - $75,000 USD for the right person.",
            "Join our friendly engineering group working on logistics software for global clients now."
        );
        assert_eq!(extract_salary_phrase(&text), "$60,000 - $75,000 USD");
    }

    #[test]
    fn test_long_text_code_led_span() {
        let text = format!("{} We need EUR 5000 monthly", "x".repeat(130));
        assert_eq!(extract_salary_phrase(&text), "EUR 5000");

        let salary = parse_salary(Some(&text));
        assert_eq!(salary.currency_code.as_deref(), Some("EUR"));
        assert_eq!(salary.currency_symbol.as_deref(), Some("€"));
        assert_eq!(salary.min_amount, Some(5000));
        assert_eq!(salary.display.as_deref(), Some("5000"));
    }

    #[test]
    fn test_currency_code_must_stand_alone() {
        let text = format!("{} Coached an amateur 500 times last season", "x".repeat(130));
        assert_eq!(extract_salary_phrase(&text), "");

        let text = format!("{} Offices across Europe 2024. Budget $90k", "x".repeat(130));
        assert_eq!(extract_salary_phrase(&text), "$90k");
    }

    #[test]
    fn test_long_text_period_span() {
        let text = format!(
            "{} Contractors earn 500 per day on site.",
            "Join our friendly engineering group working on logistics software for global clients now."
        );
        assert_eq!(extract_salary_phrase(&text), "500 per day");
    }

    #[test]
    fn test_long_text_without_signal_is_empty() {
        let text = "Looking for an engineer with Python 3.11, Kubernetes 1.29 and at least 5 years of \
                    hands-on experience designing distributed systems for large enterprise customers.";
        assert_eq!(extract_salary_phrase(text), "");
        assert!(parse_salary(Some(text)).is_empty());
    }

    #[test]
    fn test_long_text_descriptor() {
        let text = "Looking for an engineer with strong Python skills and at least five years of \
                    hands-on experience designing systems for customers, competitive.";
        assert_eq!(extract_salary_phrase(text), "competitive");
    }

    #[test]
    fn test_absent_input() {
        assert!(parse_salary(None).is_empty());
        assert!(parse_salary(Some("   ")).is_empty());
    }
}
