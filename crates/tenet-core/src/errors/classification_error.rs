/// Classification gateway errors.
///
/// There is no "best effort" variant: an unusable response is always an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassificationError {
    #[error("response {raw:?} is not in vocabulary {vocabulary}")]
    OutOfVocabulary { raw: String, vocabulary: String },

    #[error("unparsable classifier response {raw:?}")]
    Unparsable { raw: String },

    #[error("vocabulary {vocabulary} has no labels")]
    EmptyVocabulary { vocabulary: String },

    #[error("classifier unavailable: {reason}")]
    Unavailable { reason: String },
}

impl ClassificationError {
    /// The raw classifier response that caused the failure, if there was one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Self::OutOfVocabulary { raw, .. } | Self::Unparsable { raw } => Some(raw),
            _ => None,
        }
    }

    /// Out-of-vocabulary and unavailable responses may succeed on a later
    /// call; an empty vocabulary never will.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::EmptyVocabulary { .. })
    }
}
