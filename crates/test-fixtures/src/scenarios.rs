//! Typed convergence scenarios stored under `scenarios/`.

use serde::Deserialize;
use tenet_core::models::{Dimension, Signal};

use crate::signals::SignalBuilder;

#[derive(Debug, Clone, Deserialize)]
pub struct SignalFixture {
    pub text: String,
    pub dimension: Dimension,
    pub category: String,
    pub embedding: Vec<f32>,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

fn default_confidence() -> f64 {
    0.9
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedOutcome {
    pub principles: usize,
    pub axioms: usize,
    /// Reinforcement counts of the resulting principles, in creation order.
    pub reinforcement: Vec<usize>,
    /// Cross-category strengths, in creation order.
    pub cross_category: Vec<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvergenceScenario {
    pub name: String,
    pub match_threshold: f64,
    pub axiom_threshold: usize,
    pub signals: Vec<SignalFixture>,
    pub expected: ExpectedOutcome,
}

impl ConvergenceScenario {
    /// Materialize the fixture signals with creation order = list position.
    pub fn build_signals(&self) -> Vec<Signal> {
        self.signals
            .iter()
            .enumerate()
            .map(|(i, f)| {
                SignalBuilder::new(&f.text)
                    .dimension(f.dimension)
                    .category(&f.category)
                    .embedding(f.embedding.clone())
                    .confidence(f.confidence)
                    .order(i as u64)
                    .build()
            })
            .collect()
    }
}

/// Load `scenarios/convergence/<name>.json`.
pub fn convergence_scenario(name: &str) -> ConvergenceScenario {
    crate::load_fixture(&format!("convergence/{name}.json"))
}
