// src/normalizers/tech_stack.rs
use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static EXPERIENCE_WITH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)experience with([^.]+)").expect("valid regex"));

static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,/]| and ").expect("valid regex"));

static HELPER_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(experience with|you should have|should have)\s+").expect("valid regex")
});

const EDGE_CHARS: &[char] = &[' ', '.', ';', ':', '!', '?', '\n', '\t'];

/// Split a skills cell (or a description) into distinct skill names.
///
/// When the text mentions "experience with ...", only that clause is used.
/// Duplicates are dropped case-insensitively, keeping the first spelling.
pub fn parse_tech_stack(text: Option<&str>) -> Vec<String> {
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return Vec::new();
    };

    let segment = EXPERIENCE_WITH_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or(text, |m| m.as_str());

    let mut seen = HashSet::new();
    let mut skills = Vec::new();
    for piece in SEPARATOR_RE.split(segment) {
        let piece = piece.trim_matches(EDGE_CHARS);
        if piece.is_empty() {
            continue;
        }
        let skill = HELPER_PHRASE_RE.replace(piece, "");
        if skill.is_empty() {
            continue;
        }
        if seen.insert(skill.to_lowercase()) {
            skills.push(skill.into_owned());
        }
    }
    skills
}
