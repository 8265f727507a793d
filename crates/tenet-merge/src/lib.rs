//! # tenet-merge
//!
//! Combines a baseline principle store with a newly synthesized one.
//! Inputs are borrowed immutably and the result is a new store. Conflicts
//! are resolved deterministically and recorded, never raised.

pub mod conflict;
pub mod merger;

pub use conflict::MergeConflict;
pub use merger::{MergeOutcome, MergeStats, StoreMerger};
