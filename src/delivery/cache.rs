//! Single-slot local cache for the last good feed document.
//!
//! One fixed slot, overwritten on every successful load. The storage
//! layer never surfaces errors to the user: a broken read is a cache
//! miss, a broken write is a skipped write.

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::models::FeedDocument;

const CACHE_FILE: &str = "prizmbet_matches_cache.json";

/// Outcome of a cache write. Storage problems collapse into `Skipped` so
/// the never-fails contract is visible in the signature instead of being
/// an invisible swallowed error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheWrite {
    Written,
    Skipped,
}

#[derive(Debug, Clone)]
pub struct CacheSlot {
    path: PathBuf,
}

impl CacheSlot {
    /// Default slot: `$PRIZMBET_CACHE`, or the fixed file name in the OS
    /// temp dir.
    pub fn from_env() -> Self {
        let path = env::var("PRIZMBET_CACHE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| env::temp_dir().join(CACHE_FILE));
        Self::at(path)
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the slot. Missing file, unreadable file and unparsable JSON
    /// all count as a plain cache miss.
    pub fn load(&self) -> Option<FeedDocument> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(doc) => Some(doc),
            Err(e) => {
                tracing::debug!("Cache slot unreadable, treating as miss: {}", e);
                None
            }
        }
    }

    pub fn store(&self, doc: &FeedDocument) -> CacheWrite {
        let Ok(raw) = serde_json::to_string(doc) else {
            return CacheWrite::Skipped;
        };
        match fs::write(&self.path, raw) {
            Ok(()) => CacheWrite::Written,
            Err(e) => {
                tracing::debug!("Cache write skipped: {}", e);
                CacheWrite::Skipped
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeedDocument;

    fn temp_slot(name: &str) -> CacheSlot {
        let path = env::temp_dir().join(format!(
            "prizmbet_cache_test_{}_{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        CacheSlot::at(path)
    }

    #[test]
    fn test_round_trip() {
        let slot = temp_slot("round_trip");
        assert!(slot.load().is_none());

        let doc = FeedDocument {
            last_update: Some("2026-02-17 20:45:00".to_string()),
            matches: Vec::new(),
        };
        assert_eq!(slot.store(&doc), CacheWrite::Written);

        let loaded = slot.load().expect("slot should hold the document");
        assert_eq!(loaded.last_update.as_deref(), Some("2026-02-17 20:45:00"));
    }

    #[test]
    fn test_corrupt_slot_is_a_miss() {
        let path = env::temp_dir().join(format!(
            "prizmbet_cache_test_corrupt_{}.json",
            std::process::id()
        ));
        fs::write(&path, "{not json").unwrap();
        assert!(CacheSlot::at(path).load().is_none());
    }

    #[test]
    fn test_unwritable_path_is_skipped() {
        let slot = CacheSlot::at(PathBuf::from("/nonexistent-dir/slot.json"));
        let doc = FeedDocument {
            last_update: None,
            matches: Vec::new(),
        };
        assert_eq!(slot.store(&doc), CacheWrite::Skipped);
    }
}
