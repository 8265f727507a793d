//! # tenet-core
//!
//! Foundation crate for the Tenet convergence engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TenetConfig;
pub use errors::{ClassificationError, StorageError, TenetError, TenetResult};
pub use models::{
    Axiom, Confidence, Dimension, GreenfieldState, Principle, PrincipleStore, PromotionStatus,
    Signal, SignalType, ValidationResult,
};
