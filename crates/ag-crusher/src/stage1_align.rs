//! Stage 1: Cache alignment — rewrite volatile tokens to fixed placeholders.

use regex::Regex;
use std::sync::LazyLock;

/// Ordered (pattern, placeholder) table. Each rule runs over the output of the
/// previous one, so an earlier rewrite can hide a token from a later rule.
const PATTERN_TABLE: &[(&str, &str)] = &[
    (r"\b\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}[.\d]*Z?\b", "[TIMESTAMP]"),
    (r"\b[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}\b", "[UUID]"),
    (r"req-\d+", "[REQ_ID]"),
    (r"session_[a-zA-Z0-9]+", "[SESSION_ID]"),
];

static COMPILED: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    PATTERN_TABLE
        .iter()
        .map(|(pattern, placeholder)| (Regex::new(pattern).unwrap(), *placeholder))
        .collect()
});

/// Placeholders emitted by [`align`], in application order.
pub fn placeholders() -> impl Iterator<Item = &'static str> {
    PATTERN_TABLE.iter().map(|(_, p)| *p)
}

/// Apply every rule in table order.
pub fn align(text: &str) -> String {
    let mut result = text.to_string();
    for (re, placeholder) in COMPILED.iter() {
        result = re.replace_all(&result, *placeholder).into_owned();
    }
    result
}
