//! Cosine similarity and nearest-principle lookup.

use tenet_core::models::Principle;

/// Cosine similarity between two vectors.
/// Returns 0.0 for mismatched, empty or zero-magnitude vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0)
    }
}

/// Index and similarity of the best principle at or above `threshold`.
///
/// `principles` must be in creation order: on equal similarity the earlier
/// principle wins because only a strictly greater score replaces the best.
pub fn best_match(principles: &[Principle], embedding: &[f32], threshold: f64) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in principles.iter().enumerate() {
        let sim = cosine_similarity(&p.centroid, embedding);
        if sim >= threshold && best.map_or(true, |(_, b)| sim > b) {
            best = Some((i, sim));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_have_similarity_one() {
        let v = vec![1.0, 2.0, 3.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn orthogonal_vectors_have_similarity_zero() {
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-9);
    }

    #[test]
    fn degenerate_inputs_return_zero() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    fn scale_invariant() {
        let sim = cosine_similarity(&[1.0, 1.0], &[3.0, 3.0]);
        assert!((sim - 1.0).abs() < 1e-9);
    }
}
