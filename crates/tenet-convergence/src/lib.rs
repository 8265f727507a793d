//! # tenet-convergence
//!
//! Folds signals into principles by nearest-centroid matching and promotes
//! reinforced principles to axioms.
//!
//! The fold is an online, order-dependent clustering: each signal is compared
//! only against principles that exist when it is processed. Feeding the same
//! signals in a different creation order can produce a different store.
//! Distinct dimensions never interact and may be folded concurrently.

pub mod algorithms;
pub mod engine;
pub mod monitoring;
pub mod pipeline;
pub mod promotion;

pub use engine::{ConvergenceEngine, ConvergenceOutcome};
pub use monitoring::{ConvergenceReport, StoreMetrics};
pub use promotion::{AxiomPromoter, PromotionAttempt, PromotionFailure, SweepReport};
