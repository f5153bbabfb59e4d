//! Stage 2: Redundancy reduction — collapse repeated lines, keep critical ones.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

/// Inputs with this many non-blank lines or fewer are returned untouched.
pub const BYPASS_LINES: usize = 10;

/// Lowercase markers that pin a line in the output.
pub const CRITICAL_SIGNALS: &[&str] = &[
    "error", "fatal", "critical", "fail", "exception", "crash",
    "warning", "timeout", "denied", "unauthorized", "rejected",
    "decision", "approved", "important", "required", "must",
];

static RE_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Case-insensitive match against [`CRITICAL_SIGNALS`].
pub fn is_critical(line: &str) -> bool {
    let lower = line.to_lowercase();
    CRITICAL_SIGNALS.iter().any(|signal| lower.contains(signal))
}

/// Dedup key: trimmed line with every digit run collapsed to `N`.
pub fn signature(line: &str) -> String {
    RE_DIGITS.replace_all(line.trim(), "N").into_owned()
}

pub fn omission_marker(count: usize) -> String {
    format!("  [... {count} similar entries omitted ...]")
}

/// Output lines plus the pending count of dropped duplicates.
#[derive(Default)]
struct Reducer {
    kept: Vec<String>,
    seen: HashSet<String>,
    skipped: usize,
}

impl Reducer {
    fn flush(&mut self) {
        if self.skipped > 0 {
            self.kept.push(omission_marker(self.skipped));
            self.skipped = 0;
        }
    }

    fn push(&mut self, line: &str) {
        let stripped = line.trim();
        if stripped.is_empty() {
            return;
        }
        if is_critical(stripped) {
            self.flush();
            self.kept.push(line.to_string());
            return;
        }
        if !self.seen.insert(signature(stripped)) {
            self.skipped += 1;
            return;
        }
        self.flush();
        self.kept.push(line.to_string());
    }

    fn finish(mut self) -> String {
        self.flush();
        self.kept.join("\n")
    }
}

/// Drop blank lines and repeated non-critical lines, leaving an omission
/// marker wherever a run of duplicates was cut.
pub fn reduce(text: &str) -> String {
    let non_blank = text.split('\n').filter(|l| !l.trim().is_empty()).count();
    if non_blank <= BYPASS_LINES {
        debug!(lines = non_blank, "reduce bypassed for short input");
        return text.to_string();
    }

    let mut reducer = Reducer::default();
    for line in text.split('\n') {
        reducer.push(line);
    }
    reducer.finish()
}
