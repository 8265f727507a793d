//! Shared test helpers for the Tenet workspace: deterministic collaborators,
//! signal builders, and JSON scenario fixtures.

pub mod classifiers;
pub mod embedder;
pub mod scenarios;
pub mod signals;

use std::path::PathBuf;

use serde::de::DeserializeOwned;

pub use classifiers::{FixedClassifier, FlakyClassifier, ScriptedClassifier};
pub use embedder::HashedTermEmbedder;
pub use signals::{candidate, signal, unit_2d, SignalBuilder};

/// Root directory of the JSON scenario fixtures.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}
