//! Crusher — drives align, reduce and fit, and records originals.

use crate::store::{fingerprint, OriginalStore};
use crate::{stage1_align, stage2_reduce, stage3_fit};
use ag_core::config::validate_budget;
use ag_core::text::char_len;
use ag_core::{CompactionResult, CrusherConfig, Payload, Result};
use tracing::{debug, warn};

/// Compaction engine bound to one [`OriginalStore`]. `Default` gives the
/// standard budget and a fresh store.
#[derive(Debug, Clone, Default)]
pub struct Crusher {
    config: CrusherConfig,
    store: OriginalStore,
}

impl Crusher {
    /// Build an engine over an injected store. Fails on a zero budget.
    pub fn new(config: CrusherConfig, store: OriginalStore) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, store })
    }

    /// Engine with its own fresh store.
    pub fn with_budget(max_chars: usize) -> Result<Self> {
        Self::new(CrusherConfig::with_max_chars(max_chars), OriginalStore::new())
    }

    pub fn max_chars(&self) -> usize {
        self.config.max_chars
    }

    pub fn store(&self) -> &OriginalStore {
        &self.store
    }

    /// Crush with the configured budget.
    pub fn crush(&self, payload: impl Into<Payload>) -> Result<CompactionResult> {
        self.run(payload.into(), self.config.max_chars)
    }

    /// Crush with a per-call budget. The original still lands in this
    /// engine's store.
    pub fn crush_with_budget(
        &self,
        payload: impl Into<Payload>,
        max_chars: usize,
    ) -> Result<CompactionResult> {
        if let Err(e) = validate_budget(max_chars) {
            warn!(max_chars, "rejected crush budget");
            return Err(e);
        }
        self.run(payload.into(), max_chars)
    }

    /// Original serialized text for a fingerprint produced by this store.
    pub fn retrieve(&self, fingerprint: &str) -> Option<String> {
        self.store.get(fingerprint)
    }

    fn run(&self, payload: Payload, max_chars: usize) -> Result<CompactionResult> {
        let structured = payload.is_structured();
        let raw = payload.canonical_text()?;
        let original_chars = char_len(&raw);

        let aligned = stage1_align::align(&raw);
        let reduced = stage2_reduce::reduce(&aligned);
        let fitted = stage3_fit::fit(&reduced, max_chars);

        let fp = fingerprint(&raw);
        debug!(
            fingerprint = %fp,
            original_chars,
            structured,
            aligned = aligned != raw,
            reduced = reduced != aligned,
            fitted = fitted != reduced,
            "crushed payload"
        );
        self.store.insert(fp.clone(), raw);

        Ok(CompactionResult::new(original_chars, fitted, fp))
    }
}
