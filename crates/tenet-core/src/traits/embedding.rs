use crate::errors::TenetResult;

/// Embedding generation provider. Must be deterministic and return a
/// non-empty vector for non-empty input.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> TenetResult<Vec<f32>>;

    /// Embed a batch of texts.
    fn embed_batch(&self, texts: &[String]) -> TenetResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
