// src/normalizers/html_cleaner.rs
use std::sync::LazyLock;

use html_escape::decode_html_entities;
use regex::Regex;

use crate::utils::collapse_whitespace;

/// A `<` followed by at least one non-`>` and a closing `>`
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// Turn an HTML job description into plain, single-spaced text.
///
/// Anything between `<` and the next `>` becomes a space, then entities are
/// decoded. Any `&` left afterwards is dropped as well, so
/// `Hello &amp; welcome` reads `Hello welcome`.
pub fn clean_html_description(html: Option<&str>) -> String {
    let Some(html) = html.filter(|h| !h.is_empty()) else {
        return String::new();
    };

    let stripped = TAG_RE.replace_all(html, " ");
    let text = decode_html_entities(&stripped).replace('&', " ");

    collapse_whitespace(&text)
}
