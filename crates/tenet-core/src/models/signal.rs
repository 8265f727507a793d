use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::SIGNAL_ID_PREFIX;

use super::{Confidence, Dimension, SignalType};

/// Where a signal was extracted from.
///
/// `category` is the grouping key (e.g. the parent directory) and is what
/// cross-category strength counts. It is deliberately distinct from
/// `file_path`: several files of one category must not inflate strength.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SignalSource {
    pub file_path: String,
    pub category: String,
    /// Line or fragment index within the file.
    pub position: u32,
}

impl SignalSource {
    pub fn new(file_path: impl Into<String>, category: impl Into<String>, position: u32) -> Self {
        Self {
            file_path: file_path.into(),
            category: category.into(),
            position,
        }
    }
}

/// A raw extraction handed to intake by the source walker, before
/// classification and embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SignalCandidate {
    pub text: String,
    pub source: SignalSource,
    pub signal_type: SignalType,
    pub confidence: Confidence,
    /// Order in which the walker extracted this candidate. Used for stable
    /// tie-breaking when capping.
    pub extraction_index: u64,
}

/// One classified, embedded text fragment. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Signal {
    pub id: String,
    pub text: String,
    pub source: SignalSource,
    /// `None` only while classification is pending; the convergence engine
    /// refuses unclassified signals.
    pub dimension: Option<Dimension>,
    pub signal_type: SignalType,
    pub embedding: Vec<f32>,
    pub confidence: Confidence,
    /// Monotonic creation index. Convergence processes signals in this order.
    pub creation_order: u64,
}

impl Signal {
    /// Deterministic content-derived identifier.
    pub fn derive_id(source: &SignalSource, text: &str) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(source.file_path.as_bytes());
        hasher.update(&[0]);
        hasher.update(&source.position.to_le_bytes());
        hasher.update(&[0]);
        hasher.update(text.as_bytes());
        format!("{SIGNAL_ID_PREFIX}{}", hasher.finalize().to_hex())
    }

    /// Category used for cross-category strength.
    pub fn category(&self) -> &str {
        &self.source.category
    }
}
