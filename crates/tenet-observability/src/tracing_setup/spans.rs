//! Span definitions per operation: intake, classification, convergence,
//! promotion, merge, validation.

/// Create an intake span.
#[macro_export]
macro_rules! intake_span {
    ($candidates:expr) => {
        tracing::info_span!("tenet.intake", candidates = $candidates)
    };
}

/// Create a classification span.
#[macro_export]
macro_rules! classification_span {
    ($vocabulary:expr, $batch_size:expr) => {
        tracing::debug_span!("tenet.classification", vocabulary = %$vocabulary, batch_size = $batch_size)
    };
}

/// Create a convergence span.
#[macro_export]
macro_rules! convergence_span {
    ($signals:expr, $policy:expr) => {
        tracing::info_span!("tenet.convergence", signals = $signals, policy = %$policy)
    };
}

/// Create a per-dimension fold span.
#[macro_export]
macro_rules! fold_span {
    ($dimension:expr, $signals:expr) => {
        tracing::debug_span!("tenet.fold", dimension = %$dimension, signals = $signals)
    };
}

/// Create a promotion span.
#[macro_export]
macro_rules! promotion_span {
    ($principle_id:expr) => {
        tracing::debug_span!("tenet.promotion", principle_id = %$principle_id)
    };
}

/// Create a merge span.
#[macro_export]
macro_rules! merge_span {
    ($baseline:expr, $incoming:expr) => {
        tracing::info_span!("tenet.merge", baseline = $baseline, incoming = $incoming)
    };
}

/// Create a validation span.
#[macro_export]
macro_rules! validation_span {
    ($policy:expr) => {
        tracing::info_span!("tenet.validation", policy = %$policy)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const INTAKE: &str = "tenet.intake";
    pub const CLASSIFICATION: &str = "tenet.classification";
    pub const CONVERGENCE: &str = "tenet.convergence";
    pub const FOLD: &str = "tenet.fold";
    pub const PROMOTION: &str = "tenet.promotion";
    pub const MERGE: &str = "tenet.merge";
    pub const VALIDATION: &str = "tenet.validation";
}
