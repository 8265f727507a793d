//! ConvergenceEngine: owns configuration and promoter, single-run guard.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tenet_core::config::ConvergenceConfig;
use tenet_core::errors::{TenetError, TenetResult};
use tenet_core::models::{GreenfieldState, PrincipleStore, Signal, ValidationResult};

use crate::monitoring::ConvergenceReport;
use crate::pipeline;
use crate::promotion::AxiomPromoter;

/// Result of [`ConvergenceEngine::converge`].
#[derive(Debug, Clone)]
pub struct ConvergenceOutcome {
    pub store: PrincipleStore,
    pub validation: ValidationResult,
    pub report: ConvergenceReport,
}

/// The convergence engine.
///
/// `converge` is not commutative over its input: it processes signals in
/// creation order and each assignment depends on the principles created
/// before it.
pub struct ConvergenceEngine {
    /// Guard: only one convergence can run at a time.
    is_running: Arc<AtomicBool>,
    config: ConvergenceConfig,
    promoter: Option<AxiomPromoter>,
}

/// Releases the run flag when dropped.
struct RunGuard<'a>(&'a AtomicBool);

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl ConvergenceEngine {
    pub fn new(config: ConvergenceConfig, promoter: AxiomPromoter) -> Self {
        Self {
            is_running: Arc::new(AtomicBool::new(false)),
            config,
            promoter: Some(promoter),
        }
    }

    /// Engine that clusters but never promotes.
    pub fn without_promotion(config: ConvergenceConfig) -> Self {
        Self {
            is_running: Arc::new(AtomicBool::new(false)),
            config,
            promoter: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    pub fn config(&self) -> &ConvergenceConfig {
        &self.config
    }

    pub fn promoter(&self) -> Option<&AxiomPromoter> {
        self.promoter.as_ref()
    }

    /// Fold `signals` into a copy of `store` and validate the result under
    /// `policy`.
    ///
    /// Fails with `PreconditionViolation` before any work if a signal lacks a
    /// dimension or a usable embedding, and with `ConcurrentRun` if another
    /// call is in flight on this engine.
    pub fn converge(
        &self,
        signals: &[Signal],
        store: &PrincipleStore,
        policy: GreenfieldState,
    ) -> TenetResult<ConvergenceOutcome> {
        if self
            .is_running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(TenetError::ConcurrentRun);
        }
        let _guard = RunGuard(&self.is_running);

        pipeline::run_convergence(signals, store, &self.config, self.promoter.as_ref(), policy)
    }
}
