use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One allowed category label with a short human gloss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VocabularyEntry {
    pub label: String,
    pub gloss: String,
}

/// A named closed set of labels a classifier must choose from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Vocabulary {
    pub name: String,
    pub entries: Vec<VocabularyEntry>,
}

impl Vocabulary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Builder-style entry insertion.
    pub fn with_entry(mut self, label: impl Into<String>, gloss: impl Into<String>) -> Self {
        self.entries.push(VocabularyEntry {
            label: label.into(),
            gloss: gloss.into(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Exact label membership.
    pub fn contains(&self, label: &str) -> bool {
        self.entries.iter().any(|e| e.label == label)
    }

    /// Resolve a normalized response to a label: case-insensitive match on the
    /// label first, then on the gloss. No partial matching.
    pub fn resolve(&self, response: &str) -> Option<&str> {
        let needle = response.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.label.to_lowercase() == needle)
            .or_else(|| self.entries.iter().find(|e| e.gloss.to_lowercase() == needle))
            .map(|e| e.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colours() -> Vocabulary {
        Vocabulary::new("colour")
            .with_entry("red", "warm colour")
            .with_entry("Blue", "cool colour")
    }

    #[test]
    fn resolves_label_case_insensitively() {
        let v = colours();
        assert_eq!(v.resolve("RED"), Some("red"));
        assert_eq!(v.resolve("blue"), Some("Blue"));
    }

    #[test]
    fn resolves_gloss_to_label() {
        assert_eq!(colours().resolve("Cool Colour"), Some("Blue"));
    }

    #[test]
    fn rejects_partial_match() {
        assert_eq!(colours().resolve("re"), None);
        assert_eq!(colours().resolve("warm"), None);
    }
}
