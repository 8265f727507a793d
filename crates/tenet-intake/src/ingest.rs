//! Ingest: filter → classify dimension → embed → Signal.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tenet_classification::ClassificationGateway;
use tenet_core::config::IntakeConfig;
use tenet_core::errors::{ClassificationError, TenetError, TenetResult};
use tenet_core::models::{Signal, SignalCandidate};
use tenet_core::traits::IEmbeddingProvider;
use tracing::{info, warn};

use crate::filter::select_candidates;

/// A candidate that survived filtering but could not be classified.
#[derive(Debug, Clone)]
pub struct IntakeRejection {
    pub extraction_index: u64,
    pub source_path: String,
    pub error: ClassificationError,
}

/// Result of one ingest call.
#[derive(Debug, Clone, Default)]
pub struct IntakeReport {
    /// New signals in creation order.
    pub signals: Vec<Signal>,
    pub rejections: Vec<IntakeRejection>,
    pub dropped_below_threshold: usize,
    pub dropped_blank: usize,
    pub dropped_over_cap: usize,
    /// First creation order index not used by this call.
    pub next_order: u64,
}

pub struct IntakePipeline {
    gateway: Arc<ClassificationGateway>,
    embedder: Arc<dyn IEmbeddingProvider>,
    config: IntakeConfig,
}

impl IntakePipeline {
    pub fn new(
        gateway: Arc<ClassificationGateway>,
        embedder: Arc<dyn IEmbeddingProvider>,
        config: IntakeConfig,
    ) -> Self {
        Self {
            gateway,
            embedder,
            config,
        }
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    /// Filter, classify and embed `candidates`. Creation order starts at
    /// `first_order` and increases by one per created signal.
    ///
    /// A classification failure drops only that candidate. An embedding
    /// failure aborts the call.
    pub fn ingest(&self, candidates: &[SignalCandidate], first_order: u64) -> TenetResult<IntakeReport> {
        self.ingest_from(candidates, |_| first_order)
    }

    /// Like [`ingest`](Self::ingest), but takes the creation order range
    /// from a shared counter. One index per selected candidate is reserved
    /// before classification starts, so concurrent callers never share an
    /// index. Indices of rejected candidates are left unused.
    pub fn ingest_reserving(
        &self,
        candidates: &[SignalCandidate],
        counter: &AtomicU64,
    ) -> TenetResult<IntakeReport> {
        self.ingest_from(candidates, |selected| {
            counter.fetch_add(selected as u64, Ordering::SeqCst)
        })
    }

    fn ingest_from(
        &self,
        candidates: &[SignalCandidate],
        reserve: impl FnOnce(usize) -> u64,
    ) -> TenetResult<IntakeReport> {
        let _span = tenet_observability::intake_span!(candidates.len()).entered();
        let selection = select_candidates(candidates, &self.config);
        let first_order = reserve(selection.kept.len());
        let mut report = IntakeReport {
            dropped_below_threshold: selection.below_threshold,
            dropped_blank: selection.blank,
            dropped_over_cap: selection.over_cap,
            next_order: first_order,
            ..Default::default()
        };

        let texts: Vec<&str> = selection.kept.iter().map(|c| c.text.as_str()).collect();
        let dimensions = self.gateway.classify_dimensions(&texts);

        let mut classified = Vec::with_capacity(selection.kept.len());
        for (candidate, result) in selection.kept.iter().zip(dimensions) {
            match result {
                Ok(dimension) => classified.push((*candidate, dimension)),
                Err(error) => {
                    warn!(
                        source = %candidate.source.file_path,
                        extraction_index = candidate.extraction_index,
                        error = %error,
                        "candidate rejected by classification"
                    );
                    report.rejections.push(IntakeRejection {
                        extraction_index: candidate.extraction_index,
                        source_path: candidate.source.file_path.clone(),
                        error,
                    });
                }
            }
        }

        if classified.is_empty() {
            return Ok(report);
        }

        let batch: Vec<String> = classified.iter().map(|(c, _)| c.text.clone()).collect();
        let embeddings = self.embedder.embed_batch(&batch)?;
        if embeddings.len() != batch.len() {
            return Err(TenetError::EmbeddingError {
                reason: format!(
                    "{} returned {} embeddings for {} texts",
                    self.embedder.name(),
                    embeddings.len(),
                    batch.len()
                ),
            });
        }

        for ((candidate, dimension), embedding) in classified.into_iter().zip(embeddings) {
            report.signals.push(Signal {
                id: Signal::derive_id(&candidate.source, &candidate.text),
                text: candidate.text.clone(),
                source: candidate.source.clone(),
                dimension: Some(dimension),
                signal_type: candidate.signal_type,
                embedding,
                confidence: candidate.confidence,
                creation_order: report.next_order,
            });
            report.next_order += 1;
        }

        info!(
            candidates = candidates.len(),
            signals = report.signals.len(),
            rejected = report.rejections.len(),
            below_threshold = report.dropped_below_threshold,
            over_cap = report.dropped_over_cap,
            "intake complete"
        );
        Ok(report)
    }
}
