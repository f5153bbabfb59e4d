//! Shared types, configuration and errors for the Antigravity context crusher.

pub mod config;
pub mod error;
pub mod payload;
pub mod text;
pub mod types;

pub use config::{CrusherConfig, EngineConfig, RetentionConfig, DEFAULT_MAX_CHARS};
pub use error::{AgError, Result};
pub use payload::Payload;
pub use types::{ChatMessage, CompactionResult, RetentionStats};

#[cfg(test)]
mod tests;
