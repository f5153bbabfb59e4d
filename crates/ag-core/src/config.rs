use crate::error::{AgError, Result};
use serde::{Deserialize, Serialize};

/// Default character budget for a crushed payload.
pub const DEFAULT_MAX_CHARS: usize = 4000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub crusher: CrusherConfig,
    pub retention: RetentionConfig,
}

/// Budget settings for the text crusher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrusherConfig {
    pub max_chars: usize,
}

/// Zone and truncation settings for chat-history retention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    /// Messages at the tail that are never touched.
    pub keep_recent: usize,
    /// Keep the first message (system prompt) verbatim.
    pub keep_system: bool,
    pub user_truncate_over: usize,
    pub user_keep_chars: usize,
    pub other_truncate_over: usize,
    pub other_keep_chars: usize,
}

impl Default for CrusherConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            keep_recent: 4,
            keep_system: true,
            user_truncate_over: 50,
            user_keep_chars: 40,
            other_truncate_over: 100,
            other_keep_chars: 50,
        }
    }
}

impl CrusherConfig {
    pub fn with_max_chars(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub fn validate(&self) -> Result<()> {
        validate_budget(self.max_chars)
    }
}

impl RetentionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.keep_recent == 0 {
            return Err(AgError::InvalidConfig(
                "retention.keep_recent must be at least 1".into(),
            ));
        }
        if self.user_keep_chars >= self.user_truncate_over {
            return Err(AgError::InvalidConfig(format!(
                "retention.user_keep_chars ({}) must be below user_truncate_over ({})",
                self.user_keep_chars, self.user_truncate_over
            )));
        }
        if self.other_keep_chars >= self.other_truncate_over {
            return Err(AgError::InvalidConfig(format!(
                "retention.other_keep_chars ({}) must be below other_truncate_over ({})",
                self.other_keep_chars, self.other_truncate_over
            )));
        }
        Ok(())
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        self.crusher.validate()?;
        self.retention.validate()
    }

    /// Parse a JSON document; missing sections fall back to defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

/// A zero budget would leave no head or tail to keep.
pub fn validate_budget(max_chars: usize) -> Result<()> {
    if max_chars == 0 {
        return Err(AgError::InvalidConfig(
            "max_chars must be a positive integer".into(),
        ));
    }
    Ok(())
}
