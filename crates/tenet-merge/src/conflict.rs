use serde::Serialize;
use tenet_core::models::{Dimension, PromotionResolution};

/// A disagreement between the baseline and incoming store, and how it was
/// resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MergeConflict {
    /// Matched principles disagree on dimension; the baseline's is kept.
    DimensionMismatch {
        principle_id: String,
        baseline: Dimension,
        incoming: Dimension,
    },
    /// Signals claimed by an incoming principle already belong to another
    /// principle of the result. They stay where they are.
    PrincipleOverlap {
        principle_id: String,
        incoming_id: String,
        signal_ids: Vec<String>,
    },
    /// Promotion states differed; promoted wins.
    PromotionStatus {
        principle_id: String,
        resolution: PromotionResolution,
    },
}

impl MergeConflict {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DimensionMismatch { .. } => "dimension_mismatch",
            Self::PrincipleOverlap { .. } => "principle_overlap",
            Self::PromotionStatus { .. } => "promotion_status",
        }
    }

    /// Principle of the merged store the conflict is attached to.
    pub fn principle_id(&self) -> &str {
        match self {
            Self::DimensionMismatch { principle_id, .. }
            | Self::PrincipleOverlap { principle_id, .. }
            | Self::PromotionStatus { principle_id, .. } => principle_id,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            Self::DimensionMismatch { baseline, incoming, .. } => {
                format!("kept {baseline}, incoming said {incoming}")
            }
            Self::PrincipleOverlap { incoming_id, signal_ids, .. } => {
                format!("{} signal(s) of {incoming_id} already owned", signal_ids.len())
            }
            Self::PromotionStatus { resolution, .. } => format!("{resolution:?}"),
        }
    }
}
