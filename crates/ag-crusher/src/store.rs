//! Original store — fingerprint to pre-alignment text.

use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Hex characters kept from the SHA-256 digest (48 bits).
pub const FINGERPRINT_LEN: usize = 12;

/// Short content hash used as the retrieval key.
pub fn fingerprint(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    hex::encode(&digest[..FINGERPRINT_LEN / 2])
}

/// Shared handle to an in-memory fingerprint map.
///
/// Clones point at the same map; [`OriginalStore::new`] starts a disjoint one.
/// Entries are never evicted.
#[derive(Debug, Clone, Default)]
pub struct OriginalStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl OriginalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; returns the previous original for this key.
    pub fn insert(&self, fingerprint: impl Into<String>, original: impl Into<String>) -> Option<String> {
        let fingerprint = fingerprint.into();
        let original = original.into();
        let mut map = self.inner.write();
        let previous = map.insert(fingerprint.clone(), original);
        if let Some(prev) = &previous {
            if map.get(&fingerprint) != Some(prev) {
                warn!(%fingerprint, "fingerprint collision, previous original overwritten");
            }
        }
        previous
    }

    pub fn get(&self, fingerprint: &str) -> Option<String> {
        self.inner.read().get(fingerprint).cloned()
    }

    pub fn contains(&self, fingerprint: &str) -> bool {
        self.inner.read().contains_key(fingerprint)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// True when both handles share one map.
    pub fn same_store(&self, other: &OriginalStore) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
