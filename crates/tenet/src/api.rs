//! Stateless entry points with default configuration.

use std::sync::Arc;

use tenet_classification::{ClassificationGateway, KeywordClassifier};
use tenet_convergence::{AxiomPromoter, ConvergenceEngine};
use tenet_core::config::TenetConfig;
use tenet_core::errors::TenetResult;
use tenet_core::models::{GreenfieldState, PrincipleStore, Signal, ValidationResult};
use tenet_merge::StoreMerger;

/// Fold `signals` into a copy of `store` and validate the result under
/// `policy`.
///
/// Uses default configuration, with the offline keyword classifier naming
/// canonical anchors for promoted principles. The result is order-dependent:
/// signals are processed in creation order.
pub fn converge(
    signals: &[Signal],
    store: &PrincipleStore,
    policy: GreenfieldState,
) -> TenetResult<(PrincipleStore, ValidationResult)> {
    let config = TenetConfig::default();
    let gateway = ClassificationGateway::new(Arc::new(KeywordClassifier), &config.classification)?;
    let promoter = AxiomPromoter::new(Arc::new(gateway), config.promotion);
    let outcome = ConvergenceEngine::new(config.convergence, promoter).converge(signals, store, policy)?;
    Ok((outcome.store, outcome.validation))
}

/// Merge `incoming` into `baseline` with the default merge threshold.
pub fn merge(baseline: &PrincipleStore, incoming: &PrincipleStore) -> TenetResult<PrincipleStore> {
    StoreMerger::new(TenetConfig::default().merge)
        .merge(baseline, incoming)
        .map(|outcome| outcome.store)
}
