use crate::errors::ClassificationError;
use crate::models::Vocabulary;

/// External categorical classification capability.
///
/// Implementations return the raw response; the gateway normalizes it and
/// checks vocabulary membership, so an implementation never has to be trusted
/// to stay inside the vocabulary.
pub trait ICategoryClassifier: Send + Sync {
    /// Pick one label of `vocabulary` for `text`, or fail.
    fn classify(&self, text: &str, vocabulary: &Vocabulary) -> Result<String, ClassificationError>;

    /// Human-readable capability name.
    fn name(&self) -> &str;
}
