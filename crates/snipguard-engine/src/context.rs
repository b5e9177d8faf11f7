//! Line-oriented context heuristics
//!
//! Independent of the pattern table: walks the content line by line and
//! flags `keyword = value` / `keyword: value` assignments where the
//! keyword comes from a fixed sensitive-word list. Lower precision than
//! the pattern detector, so every hit carries a fixed low confidence and
//! a kind in the `Context` namespace.

use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use snipguard_core::{ConfidenceTier, Detection, SecretKind};

/// Keywords that suggest the assigned value is sensitive
pub(crate) const SENSITIVE_KEYWORDS: &[&str] = &[
    "password",
    "secret",
    "key",
    "token",
    "api",
    "auth",
    "credential",
    "private",
    "confidential",
    "sensitive",
    "secure",
    "database",
    "db",
    "connection",
    "config",
    "env",
    "environment",
];

/// Values at or below this length are too trivial to flag (`key=1`)
const MIN_VALUE_LEN: usize = 6;

static KEYWORD_AUTOMATON: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostLongest)
        .build(SENSITIVE_KEYWORDS)
        .expect("keyword automaton")
});

/// Scan `content` line by line for sensitive-keyword assignments.
///
/// Detections carry absolute offsets into `content` (running sum of
/// prior line lengths plus one newline per prior line) and a fixed
/// context-tier confidence.
pub fn scan_lines(content: &str) -> Vec<Detection> {
    let mut detections = Vec::new();
    let mut line_offset = 0usize;

    for line in content.split('\n') {
        for m in KEYWORD_AUTOMATON.find_iter(line) {
            let keyword = SENSITIVE_KEYWORDS[m.pattern().as_usize()];
            if let Some((value_start, value)) = assignment_value(line, m.end()) {
                if value.chars().count() > MIN_VALUE_LEN
                    && value.chars().any(|c| c.is_alphanumeric())
                {
                    let mut detection = Detection::unscored(
                        SecretKind::Context(keyword.to_string()),
                        value,
                        line_offset + value_start,
                    );
                    detection.confidence = ConfidenceTier::Context.base_score();
                    detections.push(detection);
                }
            }
        }
        line_offset += line.len() + 1;
    }

    detections
}

/// Parse the `[:=] value` tail of an assignment whose keyword ends at
/// `keyword_end`. The keyword must terminate the identifier (no trailing
/// identifier characters before the delimiter); the value is optionally
/// quoted. Returns the value's start column and text.
fn assignment_value(line: &str, keyword_end: usize) -> Option<(usize, &str)> {
    let rest = &line[keyword_end..];
    let after_ws = rest.trim_start_matches([' ', '\t']);
    let delim_at = keyword_end + (rest.len() - after_ws.len());

    let mut chars = after_ws.chars();
    match chars.next() {
        Some(':') | Some('=') => {}
        _ => return None,
    }

    let tail = &line[delim_at + 1..];
    let trimmed = tail.trim_start_matches([' ', '\t']);
    let mut value_start = delim_at + 1 + (tail.len() - trimmed.len());

    let value = match trimmed.chars().next() {
        Some(quote @ ('"' | '\'' | '`')) => {
            value_start += quote.len_utf8();
            let inner = &trimmed[quote.len_utf8()..];
            match inner.find(quote) {
                Some(end) => &inner[..end],
                None => inner.trim_end(),
            }
        }
        Some(_) => trimmed
            .split([' ', '\t'])
            .next()
            .unwrap_or("")
            .trim_end_matches([',', ';']),
        None => return None,
    };

    if value.is_empty() {
        None
    } else {
        Some((value_start, value))
    }
}
