//! Deterministic hashed term-frequency embedder.

use std::collections::HashMap;

use tenet_core::errors::{TenetError, TenetResult};
use tenet_core::traits::IEmbeddingProvider;

/// Hashes lowercase terms into fixed buckets (FNV-1a) weighted by term
/// frequency, then L2-normalizes. Texts sharing vocabulary land close
/// together; identical texts embed identically.
pub struct HashedTermEmbedder {
    dimensions: usize,
}

impl HashedTermEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
            .collect()
    }
}

impl Default for HashedTermEmbedder {
    fn default() -> Self {
        Self::new(64)
    }
}

impl IEmbeddingProvider for HashedTermEmbedder {
    fn embed(&self, text: &str) -> TenetResult<Vec<f32>> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return Err(TenetError::EmbeddingError {
                reason: format!("no terms in {text:?}"),
            });
        }
        let mut tf: HashMap<&str, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.as_str()).or_default() += 1.0;
        }
        let mut vec = vec![0.0f32; self.dimensions];
        for (term, count) in tf {
            vec[Self::bucket(term, self.dimensions)] += count;
        }
        let norm = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        for v in &mut vec {
            *v /= norm;
        }
        Ok(vec)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-term"
    }
}
