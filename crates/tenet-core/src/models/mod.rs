mod axiom;
mod confidence;
mod dimension;
mod greenfield;
mod principle;
mod signal;
mod snapshot;
mod store;
mod validation_result;
mod vocabulary;

pub use axiom::{
    Axiom, AxiomRef, CanonicalForm, PromotionMerge, PromotionResolution, PromotionStatus,
};
pub use confidence::Confidence;
pub use dimension::{Dimension, SignalType};
pub use greenfield::GreenfieldState;
pub use principle::Principle;
pub use signal::{Signal, SignalCandidate, SignalSource};
pub use snapshot::SnapshotMeta;
pub use store::PrincipleStore;
pub use validation_result::{
    CheckFailure, CheckOutcome, GateNote, RejectReason, ValidationResult,
};
pub use vocabulary::{Vocabulary, VocabularyEntry};
