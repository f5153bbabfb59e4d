//! Context crusher — shrinks prompt payloads before they reach a model.
//!
//! Stages, applied in order:
//! 1. Align — volatile tokens (timestamps, UUIDs, request/session ids) become
//!    fixed placeholders
//! 2. Reduce — repeated lines collapse into omission markers; critical lines
//!    always survive
//! 3. Fit — head/tail truncation against a character budget
//!
//! Every crushed original is kept in an [`OriginalStore`] under a short
//! fingerprint so callers can fetch the full text later.

pub mod pipeline;
pub mod retention;
pub mod stage1_align;
pub mod stage2_reduce;
pub mod stage3_fit;
pub mod store;

pub use pipeline::Crusher;
pub use retention::{RetentionOutcome, TieredRetention};
pub use store::{fingerprint, OriginalStore};
