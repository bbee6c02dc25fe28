// src/utils.rs

/// Normalize a column header for rule matching
pub fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Normalize a job URL into its deduplication key
pub fn normalize_url_key(url: &str) -> String {
    url.trim().to_lowercase()
}

/// Collapse every whitespace run to a single space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trim text and turn an empty result into `None`
pub fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
