//! Tiered retention for chat histories.
//!
//! Zones:
//! - system: the first message, kept verbatim when `keep_system` is set
//! - history: everything between system and recent, truncated per role
//! - recent: the last `keep_recent` messages, kept verbatim

use ag_core::text::{char_len, head_chars};
use ag_core::{ChatMessage, Result, RetentionConfig, RetentionStats};
use tracing::debug;

/// A retained message list with its statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionOutcome {
    pub messages: Vec<ChatMessage>,
    pub stats: RetentionStats,
}

#[derive(Debug, Clone, Default)]
pub struct TieredRetention {
    config: RetentionConfig,
}

impl TieredRetention {
    pub fn new(config: RetentionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn retain(&self, messages: &[ChatMessage]) -> RetentionOutcome {
        let original_chars = total_chars(messages);
        let keep_recent = self.config.keep_recent;

        if messages.len() <= keep_recent.saturating_add(1) {
            return RetentionOutcome {
                messages: messages.to_vec(),
                stats: RetentionStats {
                    original_chars,
                    compressed_chars: original_chars,
                    savings_percent: 0,
                    methods_used: vec!["none".into()],
                },
            };
        }

        let history_start = usize::from(self.config.keep_system);
        let recent_start = messages.len() - keep_recent;

        let mut retained = Vec::with_capacity(messages.len());
        retained.extend_from_slice(&messages[..history_start]);
        retained.extend(messages[history_start..recent_start].iter().map(|m| self.crush_message(m)));
        retained.extend_from_slice(&messages[recent_start..]);

        let compressed_chars = total_chars(&retained);
        debug!(
            messages = messages.len(),
            history = recent_start - history_start,
            original_chars,
            compressed_chars,
            "tiered retention applied"
        );

        RetentionOutcome {
            messages: retained,
            stats: RetentionStats {
                original_chars,
                compressed_chars,
                savings_percent: savings_percent(original_chars, compressed_chars),
                methods_used: vec!["tiered_retention".into(), "variable_truncation".into()],
            },
        }
    }

    fn crush_message(&self, msg: &ChatMessage) -> ChatMessage {
        let len = char_len(&msg.content);
        let content = if msg.is_user() {
            if len <= self.config.user_truncate_over {
                return msg.clone();
            }
            format!("{}...", head_chars(&msg.content, self.config.user_keep_chars))
        } else {
            if len <= self.config.other_truncate_over {
                return msg.clone();
            }
            format!(
                "[Compressed Context: {}...]",
                head_chars(&msg.content, self.config.other_keep_chars)
            )
        };
        ChatMessage {
            content,
            ..msg.clone()
        }
    }
}

fn total_chars(messages: &[ChatMessage]) -> usize {
    messages.iter().map(|m| char_len(&m.content)).sum()
}

/// Whole-number percentage saved; 0 for an empty history.
fn savings_percent(original: usize, compressed: usize) -> i64 {
    if original == 0 {
        return 0;
    }
    ((1.0 - compressed as f64 / original as f64) * 100.0).round() as i64
}
