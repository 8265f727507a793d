//! Confidence threshold and per-source cap.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tenet_core::config::IntakeConfig;
use tenet_core::models::SignalCandidate;

/// Survivors of the filter plus drop counts.
#[derive(Debug, Clone, Default)]
pub struct Selection<'a> {
    /// Kept candidates in extraction order.
    pub kept: Vec<&'a SignalCandidate>,
    pub below_threshold: usize,
    pub blank: usize,
    pub over_cap: usize,
}

/// Select the candidates that go on to classification.
///
/// - drop blank text and confidence below `confidence_threshold`
/// - per source file, keep at most `per_source_cap`, preferring higher
///   confidence, then earlier extraction
///
/// Pure and deterministic: the same input always yields the same output.
pub fn select_candidates<'a>(
    candidates: &'a [SignalCandidate],
    config: &IntakeConfig,
) -> Selection<'a> {
    let mut selection = Selection::default();
    let mut by_source: BTreeMap<&str, Vec<usize>> = BTreeMap::new();

    for (i, c) in candidates.iter().enumerate() {
        if c.text.trim().is_empty() {
            selection.blank += 1;
        } else if !c.confidence.meets(config.confidence_threshold) {
            selection.below_threshold += 1;
        } else {
            by_source.entry(c.source.file_path.as_str()).or_default().push(i);
        }
    }

    let mut kept: Vec<usize> = Vec::new();
    for (_, mut indices) in by_source {
        if indices.len() > config.per_source_cap {
            indices.sort_by(|&a, &b| rank(&candidates[a], &candidates[b]).then(a.cmp(&b)));
            selection.over_cap += indices.len() - config.per_source_cap;
            indices.truncate(config.per_source_cap);
        }
        kept.extend(indices);
    }

    kept.sort_by(|&a, &b| {
        candidates[a]
            .extraction_index
            .cmp(&candidates[b].extraction_index)
            .then(a.cmp(&b))
    });
    selection.kept = kept.into_iter().map(|i| &candidates[i]).collect();
    selection
}

/// Higher confidence first, then earlier extraction.
fn rank(a: &SignalCandidate, b: &SignalCandidate) -> Ordering {
    b.confidence
        .total_cmp(&a.confidence)
        .then(a.extraction_index.cmp(&b.extraction_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenet_core::models::{Confidence, SignalSource, SignalType};

    fn cand(file: &str, confidence: f64, index: u64) -> SignalCandidate {
        SignalCandidate {
            text: format!("fragment {index}"),
            source: SignalSource::new(file, "memory", index as u32),
            signal_type: SignalType::Belief,
            confidence: Confidence::new(confidence),
            extraction_index: index,
        }
    }

    fn config(threshold: f64, cap: usize) -> IntakeConfig {
        IntakeConfig {
            confidence_threshold: threshold,
            per_source_cap: cap,
        }
    }

    #[test]
    fn drops_below_threshold_inclusive_boundary() {
        let cs = vec![cand("a.md", 0.49, 0), cand("a.md", 0.5, 1), cand("a.md", 0.9, 2)];
        let sel = select_candidates(&cs, &config(0.5, 15));
        assert_eq!(sel.kept.len(), 2);
        assert_eq!(sel.below_threshold, 1);
    }

    #[test]
    fn cap_keeps_highest_confidence_then_earliest() {
        let cs = vec![
            cand("a.md", 0.6, 0),
            cand("a.md", 0.9, 1),
            cand("a.md", 0.7, 2),
            cand("a.md", 0.9, 3),
        ];
        let sel = select_candidates(&cs, &config(0.5, 2));
        let kept: Vec<u64> = sel.kept.iter().map(|c| c.extraction_index).collect();
        assert_eq!(kept, vec![1, 3]);
        assert_eq!(sel.over_cap, 2);
    }

    #[test]
    fn ties_at_cap_boundary_prefer_earlier_extraction() {
        let cs = vec![cand("a.md", 0.8, 5), cand("a.md", 0.8, 2), cand("a.md", 0.8, 9)];
        let sel = select_candidates(&cs, &config(0.5, 2));
        let kept: Vec<u64> = sel.kept.iter().map(|c| c.extraction_index).collect();
        assert_eq!(kept, vec![2, 5]);
    }

    #[test]
    fn cap_is_per_source_file() {
        let cs = vec![
            cand("a.md", 0.9, 0),
            cand("b.md", 0.9, 1),
            cand("a.md", 0.9, 2),
            cand("b.md", 0.9, 3),
        ];
        let sel = select_candidates(&cs, &config(0.5, 1));
        let kept: Vec<u64> = sel.kept.iter().map(|c| c.extraction_index).collect();
        assert_eq!(kept, vec![0, 1]);
    }

    #[test]
    fn blank_text_is_dropped() {
        let mut blank = cand("a.md", 0.9, 0);
        blank.text = "   ".into();
        let cs = vec![blank, cand("a.md", 0.9, 1)];
        let sel = select_candidates(&cs, &config(0.5, 15));
        assert_eq!(sel.kept.len(), 1);
        assert_eq!(sel.blank, 1);
    }
}
