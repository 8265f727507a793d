//! # tenet
//!
//! Turns text fragments ("signals") into reinforced principles and promotes
//! the strongest to canonical axioms.
//!
//! Two entry points cover the common case:
//! - [`converge`] folds signals into a store and validates the result;
//! - [`merge`] combines a baseline store with a newly synthesized one.
//!
//! [`TenetRuntime`] wires intake, classification, convergence, merge,
//! snapshot storage and metrics together under one configuration.

mod api;
pub mod runtime;

pub use api::{converge, merge};
pub use runtime::{RuntimeOptions, StorageMode, TenetRuntime};

pub use tenet_core::{
    config::TenetConfig,
    errors::{TenetError, TenetResult},
    models::{GreenfieldState, PrincipleStore, Signal, SignalCandidate, ValidationResult},
};
