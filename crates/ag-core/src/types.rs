use crate::text::char_len;
use serde::{Deserialize, Serialize};

/// Outcome of one crush call. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompactionResult {
    original_chars: usize,
    crushed_chars: usize,
    savings_pct: f64,
    content: String,
    fingerprint: String,
}

impl CompactionResult {
    pub fn new(original_chars: usize, content: String, fingerprint: String) -> Self {
        let crushed_chars = char_len(&content);
        Self {
            original_chars,
            crushed_chars,
            savings_pct: savings_pct(original_chars, crushed_chars),
            content,
            fingerprint,
        }
    }

    pub fn original_chars(&self) -> usize {
        self.original_chars
    }

    pub fn crushed_chars(&self) -> usize {
        self.crushed_chars
    }

    pub fn savings_pct(&self) -> f64 {
        self.savings_pct
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

/// Percentage saved, rounded to one decimal half-to-even on the exact binary
/// value. Negative when the output grew.
pub fn savings_pct(original: usize, crushed: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    let pct = (original as f64 - crushed as f64) / original as f64 * 100.0;
    format!("{pct:.1}").parse().unwrap_or(pct)
}

/// One chat message as sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
            name: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_user(&self) -> bool {
        self.role == "user"
    }
}

/// Statistics for a retention pass over a message list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionStats {
    pub original_chars: usize,
    pub compressed_chars: usize,
    pub savings_percent: i64,
    pub methods_used: Vec<String>,
}
