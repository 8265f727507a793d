//! Convergence pipeline.
//!
//! Preconditions → dedup → per-dimension fold (with inline promotion) →
//! store invariants → quality checks → greenfield gate.

pub mod checks;
pub mod fold;
pub mod preconditions;

use std::collections::{BTreeMap, HashMap, HashSet};

use rayon::prelude::*;
use tenet_core::config::ConvergenceConfig;
use tenet_core::errors::TenetResult;
use tenet_core::models::{Dimension, GreenfieldState, Principle, PrincipleStore, Signal};
use tenet_observability::tracing_setup::events;
use tracing::{debug, info};
use uuid::Uuid;

use crate::engine::ConvergenceOutcome;
use crate::monitoring::{ConvergenceReport, StoreMetrics};
use crate::promotion::AxiomPromoter;
use fold::{fold_dimension, FoldOutput};

/// Run one convergence pass over `signals` against a copy of `store`.
///
/// The caller's store is never modified; on error nothing is returned.
pub fn run_convergence(
    signals: &[Signal],
    store: &PrincipleStore,
    config: &ConvergenceConfig,
    promoter: Option<&AxiomPromoter>,
    policy: GreenfieldState,
) -> TenetResult<ConvergenceOutcome> {
    let _span = tenet_observability::convergence_span!(signals.len(), policy).entered();

    preconditions::check_preconditions(signals, store, config.embedding_dimensions)?;

    // Dedup against the store and within the input, then order by creation.
    let mut seen: HashSet<&str> = HashSet::new();
    let mut skipped = Vec::new();
    let mut fresh: Vec<&Signal> = Vec::with_capacity(signals.len());
    for s in signals {
        if store.signals.contains_key(&s.id) || !seen.insert(s.id.as_str()) {
            debug!(signal_id = %s.id, "signal already known, skipped");
            skipped.push(s.id.clone());
        } else {
            fresh.push(s);
        }
    }
    fresh.sort_by(|a, b| a.creation_order.cmp(&b.creation_order));

    let mut next = store.clone();
    for s in &fresh {
        next.signals.insert(s.id.clone(), (*s).clone());
    }

    // Partition principles and signals by dimension. Dimensions without new
    // signals pass through untouched.
    let mut by_dimension: BTreeMap<Dimension, (Vec<Principle>, Vec<&Signal>)> = BTreeMap::new();
    let mut untouched = Vec::new();
    let mut incoming: BTreeMap<Dimension, Vec<&Signal>> = BTreeMap::new();
    for s in fresh.iter().copied() {
        // Preconditions guarantee a dimension.
        if let Some(d) = s.dimension {
            incoming.entry(d).or_default().push(s);
        }
    }
    for p in std::mem::take(&mut next.principles) {
        match incoming.get(&p.dimension) {
            Some(_) => by_dimension.entry(p.dimension).or_default().0.push(p),
            None => untouched.push(p),
        }
    }
    for (d, group) in incoming {
        by_dimension.entry(d).or_default().1 = group;
    }

    let outputs: Vec<FoldOutput> = {
        let index: HashMap<&str, &Signal> =
            next.signals.iter().map(|(k, v)| (k.as_str(), v)).collect();
        let work: Vec<(Dimension, Vec<Principle>, Vec<&Signal>)> = by_dimension
            .into_iter()
            .map(|(d, (principles, signals))| (d, principles, signals))
            .collect();
        let run = |(d, principles, signals): (Dimension, Vec<Principle>, Vec<&Signal>)| {
            fold_dimension(d, principles, &signals, &index, config.match_threshold, promoter)
        };
        if config.parallel_dimensions {
            work.into_par_iter().map(run).collect()
        } else {
            work.into_iter().map(run).collect()
        }
    };

    let mut report = ConvergenceReport {
        run_id: Uuid::new_v4().to_string(),
        signals_in: signals.len(),
        processed: fresh.len(),
        skipped,
        ..Default::default()
    };
    next.principles = untouched;
    for out in outputs {
        report.principles_created += out.created;
        report.signals_reinforced += out.reinforced;
        report.promotion_failures.extend(out.promotion_failures);
        for axiom in out.axioms {
            report.axioms_promoted.push(axiom.id.clone());
            next.axioms.insert(axiom.id.clone(), axiom);
        }
        next.principles.extend(out.principles);
    }
    next.sort_principles();
    next.check_invariants()?;

    let outcome = checks::run_checks(signals.len(), &next);
    let validation = tenet_greenfield::evaluate(&outcome, policy);
    report.metrics = StoreMetrics::compute(&next);

    events::convergence_completed(
        report.processed,
        report.principles_created,
        report.signals_reinforced,
        report.axioms_promoted.len(),
    );
    info!(
        run_id = %report.run_id,
        principles = next.principles.len(),
        axioms = next.axioms.len(),
        valid = validation.valid,
        "convergence pass finished"
    );

    Ok(ConvergenceOutcome {
        store: next,
        validation,
        report,
    })
}
