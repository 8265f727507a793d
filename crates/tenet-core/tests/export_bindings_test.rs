//! TypeScript bindings for the core models.
//!
//! `#[ts(export)]` emits one export test per type; files land in
//! `tenet-core/bindings/` (or `TS_RS_EXPORT_DIR`) on `cargo test`.

use tenet_core::models::*;

#[test]
fn export_bindings() {
    // Importability check: every exported type must stay public.
    let _ = std::any::type_name::<Signal>();
    let _ = std::any::type_name::<SignalSource>();
    let _ = std::any::type_name::<SignalCandidate>();
    let _ = std::any::type_name::<SignalType>();
    let _ = std::any::type_name::<Dimension>();
    let _ = std::any::type_name::<Confidence>();
    let _ = std::any::type_name::<Principle>();
    let _ = std::any::type_name::<PromotionStatus>();
    let _ = std::any::type_name::<AxiomRef>();
    let _ = std::any::type_name::<Axiom>();
    let _ = std::any::type_name::<CanonicalForm>();
    let _ = std::any::type_name::<PrincipleStore>();
    let _ = std::any::type_name::<GreenfieldState>();
    let _ = std::any::type_name::<ValidationResult>();
    let _ = std::any::type_name::<GateNote>();
    let _ = std::any::type_name::<CheckOutcome>();
    let _ = std::any::type_name::<CheckFailure>();
    let _ = std::any::type_name::<RejectReason>();
    let _ = std::any::type_name::<SnapshotMeta>();
    let _ = std::any::type_name::<Vocabulary>();
    let _ = std::any::type_name::<VocabularyEntry>();
}
