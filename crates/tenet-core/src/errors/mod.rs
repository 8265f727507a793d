//! Error types for the Tenet workspace.
//!
//! One top-level [`TenetError`] with per-subsystem enums folded in via `From`.

mod classification_error;
mod storage_error;

pub use classification_error::ClassificationError;
pub use storage_error::StorageError;

/// Result alias used across every Tenet crate.
pub type TenetResult<T> = Result<T, TenetError>;

/// Top-level error.
#[derive(Debug, thiserror::Error)]
pub enum TenetError {
    #[error("classification error: {0}")]
    ClassificationError(#[from] ClassificationError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    /// A signal reached the convergence engine without a usable embedding
    /// or dimension. Indicates a broken upstream guarantee; never recovered.
    #[error("precondition violated by signal {signal_id} from {source_path}: {reason}")]
    PreconditionViolation {
        signal_id: String,
        source_path: String,
        reason: String,
    },

    /// Only produced in `enforce` policy, and only when the caller asks for it
    /// via `ValidationResult::into_result`.
    #[error("validation rejected: {reason}")]
    ValidationRejected { reason: String },

    #[error("store invariant violated on principle {principle_id}: {details}")]
    InvariantViolation {
        principle_id: String,
        details: String,
    },

    #[error("embedding provider failed: {reason}")]
    EmbeddingError { reason: String },

    #[error("a convergence run is already in progress on this engine")]
    ConcurrentRun,

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl TenetError {
    /// Whether the caller may retry the failed operation later.
    ///
    /// Precondition and invariant violations indicate a contract breach and
    /// are never retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ClassificationError(e) => e.is_retryable(),
            Self::ValidationRejected { .. } | Self::ConcurrentRun => true,
            Self::EmbeddingError { .. } => true,
            _ => false,
        }
    }
}
