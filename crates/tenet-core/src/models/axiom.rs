use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{AXIOM_ID_PREFIX, ID_HASH_CHARS};

use super::Dimension;

/// Canonical renderings of a promoted principle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CanonicalForm {
    /// Short symbolic anchor from the closed anchor vocabulary.
    pub anchor: String,
    /// Compact notation, e.g. `HON:誠×3`.
    pub notation: String,
    /// Decorative glyph from the closed glyph vocabulary, if requested.
    pub glyph: Option<String>,
}

impl CanonicalForm {
    /// Build the compact notation for a dimension, anchor and count.
    pub fn notation_for(dimension: Dimension, anchor: &str, reinforcement: usize) -> String {
        format!("{}:{}×{}", dimension.code(), anchor, reinforcement)
    }
}

/// The canonical, promoted form of a principle. Never revoked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Axiom {
    pub id: String,
    /// Owning principle. Rewritten only when a merge absorbs the owner into
    /// another principle; the canonical content never changes.
    pub principle_id: String,
    pub dimension: Dimension,
    pub canonical: CanonicalForm,
    pub representative_text: String,
    /// Reinforcement count at the moment of promotion.
    pub promotion_reinforcement: usize,
    /// Cross-category strength at the moment of promotion.
    pub promotion_cross_category: usize,
    pub promoted_at: DateTime<Utc>,
}

impl Axiom {
    /// Deterministic axiom id for a principle.
    pub fn derive_id(principle_id: &str) -> String {
        let hash = blake3::hash(principle_id.as_bytes()).to_hex();
        format!("{AXIOM_ID_PREFIX}{}", &hash[..ID_HASH_CHARS])
    }

    pub fn reference(&self) -> AxiomRef {
        AxiomRef {
            axiom_id: self.id.clone(),
        }
    }
}

/// Reference from a principle to the axiom it owns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AxiomRef {
    pub axiom_id: String,
}

/// Promotion state of a principle.
///
/// Combined only through [`PromotionStatus::merge`], where promoted always
/// wins. There is no transition back to `NotPromoted`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PromotionStatus {
    #[default]
    NotPromoted,
    Promoted(AxiomRef),
}

/// Outcome of merging two promotion states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionMerge {
    pub status: PromotionStatus,
    pub resolution: PromotionResolution,
}

/// How two promotion states were reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionResolution {
    /// Both sides agreed (both unpromoted, or the same axiom).
    Agreed,
    /// Only the baseline was promoted; it stays promoted.
    BaselinePromoted,
    /// Only the incoming side was promoted; the result adopts its axiom.
    IncomingPromoted,
    /// Both promoted with different axioms; the baseline axiom is kept on the
    /// principle and the incoming axiom survives only in the axiom table.
    BothPromoted { retained: AxiomRef, aliased: AxiomRef },
}

impl PromotionResolution {
    /// Whether the two sides disagreed.
    pub fn is_conflict(&self) -> bool {
        !matches!(self, Self::Agreed)
    }
}

impl PromotionStatus {
    pub fn is_promoted(&self) -> bool {
        matches!(self, Self::Promoted(_))
    }

    pub fn axiom(&self) -> Option<&AxiomRef> {
        match self {
            Self::Promoted(r) => Some(r),
            Self::NotPromoted => None,
        }
    }

    /// Promoted wins. Baseline wins between two different axioms.
    pub fn merge(baseline: &Self, incoming: &Self) -> PromotionMerge {
        use PromotionResolution::*;
        match (baseline, incoming) {
            (Self::NotPromoted, Self::NotPromoted) => PromotionMerge {
                status: Self::NotPromoted,
                resolution: Agreed,
            },
            (Self::Promoted(b), Self::NotPromoted) => PromotionMerge {
                status: Self::Promoted(b.clone()),
                resolution: BaselinePromoted,
            },
            (Self::NotPromoted, Self::Promoted(n)) => PromotionMerge {
                status: Self::Promoted(n.clone()),
                resolution: IncomingPromoted,
            },
            (Self::Promoted(b), Self::Promoted(n)) if b == n => PromotionMerge {
                status: Self::Promoted(b.clone()),
                resolution: Agreed,
            },
            (Self::Promoted(b), Self::Promoted(n)) => PromotionMerge {
                status: Self::Promoted(b.clone()),
                resolution: BothPromoted {
                    retained: b.clone(),
                    aliased: n.clone(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn promoted(id: &str) -> PromotionStatus {
        PromotionStatus::Promoted(AxiomRef {
            axiom_id: id.to_string(),
        })
    }

    #[test]
    fn promoted_wins_from_either_side() {
        let m = PromotionStatus::merge(&promoted("ax-1"), &PromotionStatus::NotPromoted);
        assert_eq!(m.status, promoted("ax-1"));
        assert_eq!(m.resolution, PromotionResolution::BaselinePromoted);

        let m = PromotionStatus::merge(&PromotionStatus::NotPromoted, &promoted("ax-2"));
        assert_eq!(m.status, promoted("ax-2"));
        assert!(m.resolution.is_conflict());
    }

    #[test]
    fn baseline_axiom_kept_when_both_promoted() {
        let m = PromotionStatus::merge(&promoted("ax-1"), &promoted("ax-2"));
        assert_eq!(m.status, promoted("ax-1"));
        match m.resolution {
            PromotionResolution::BothPromoted { retained, aliased } => {
                assert_eq!(retained.axiom_id, "ax-1");
                assert_eq!(aliased.axiom_id, "ax-2");
            }
            other => panic!("unexpected resolution {other:?}"),
        }
    }

    #[test]
    fn same_axiom_is_agreement() {
        let m = PromotionStatus::merge(&promoted("ax-1"), &promoted("ax-1"));
        assert_eq!(m.resolution, PromotionResolution::Agreed);
    }

    #[test]
    fn notation_uses_dimension_code() {
        assert_eq!(
            CanonicalForm::notation_for(Dimension::Honesty, "誠", 3),
            "HON:誠×3"
        );
    }
}
