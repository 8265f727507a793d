//! In-memory cache of accepted classifications using moka.
//!
//! Only successful, vocabulary-validated labels are stored. Keys are blake3
//! hashes over the vocabulary name, its labels and glosses, and the text.

use std::time::Duration;

use moka::sync::Cache;
use tenet_core::models::Vocabulary;

pub struct ClassificationCache {
    cache: Cache<String, String>,
}

impl ClassificationCache {
    /// Create a cache holding at most `max_entries` labels.
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();
        Self { cache }
    }

    /// Cache key for `text` classified against `vocabulary`.
    pub fn key(vocabulary: &Vocabulary, text: &str) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(vocabulary.name.as_bytes());
        for entry in &vocabulary.entries {
            hasher.update(&[0x1f]);
            hasher.update(entry.label.as_bytes());
            hasher.update(&[0x1d]);
            hasher.update(entry.gloss.as_bytes());
        }
        hasher.update(&[0x1e]);
        hasher.update(text.as_bytes());
        hasher.finalize().to_hex().to_string()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, label: String) {
        self.cache.insert(key, label);
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_depends_on_vocabulary_labels() {
        let a = Vocabulary::new("v").with_entry("x", "");
        let b = Vocabulary::new("v").with_entry("y", "");
        assert_ne!(
            ClassificationCache::key(&a, "text"),
            ClassificationCache::key(&b, "text")
        );
        assert_eq!(
            ClassificationCache::key(&a, "text"),
            ClassificationCache::key(&a.clone(), "text")
        );
    }

    #[test]
    fn key_depends_on_glosses() {
        let a = Vocabulary::new("v").with_entry("x", "first");
        let b = Vocabulary::new("v").with_entry("x", "second");
        assert_ne!(
            ClassificationCache::key(&a, "text"),
            ClassificationCache::key(&b, "text")
        );
    }

    #[test]
    fn insert_and_get() {
        let cache = ClassificationCache::new(16);
        cache.insert("k".into(), "honesty".into());
        assert_eq!(cache.get("k").as_deref(), Some("honesty"));
        assert_eq!(cache.get("missing"), None);
    }
}
