//! Identity capability
//!
//!     Every tag, question and passage carries a content hash, and tags and questions
//!     also carry an insertion id. Both come from an [IdGenerator] handed to the
//!     builder, so tests can swap in [SequentialIds] and get stable output.
//!
//!     [DefaultIds] hashes with SHA-256 (lowercase hex) and mints random v4 UUIDs.

use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};

pub trait IdGenerator: Send + Sync {
    /// Deterministic content hash of `input`.
    fn digest(&self, input: &str) -> String;

    /// A fresh id, unique within the process.
    fn unique_id(&self) -> String;
}

/// SHA-256 hex digests and random UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultIds;

impl IdGenerator for DefaultIds {
    fn digest(&self, input: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(input.as_bytes());
        hex::encode(hasher.finalize())
    }

    fn unique_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// SHA-256 digests with counter-based ids (`id-1`, `id-2`, ...).
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn digest(&self, input: &str) -> String {
        DefaultIds.digest(input)
    }

    fn unique_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("id-{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_sha256_hex() {
        assert_eq!(
            DefaultIds.digest("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(DefaultIds.digest("Cells"), DefaultIds.digest("Cells"));
    }

    #[test]
    fn default_ids_are_uuids() {
        let a = DefaultIds.unique_id();
        let b = DefaultIds.unique_id();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIds::new();
        assert_eq!(ids.unique_id(), "id-1");
        assert_eq!(ids.unique_id(), "id-2");
    }
}
