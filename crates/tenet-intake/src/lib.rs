//! # tenet-intake
//!
//! Turns raw extraction candidates into classified, embedded [`Signal`]s.
//!
//! [`filter`] is the pure confidence/cap filter. [`ingest`] runs the filter,
//! classifies survivors through the gateway, embeds them and assigns
//! creation order.
//!
//! [`Signal`]: tenet_core::models::Signal

pub mod filter;
pub mod ingest;

pub use filter::{select_candidates, Selection};
pub use ingest::{IntakePipeline, IntakeRejection, IntakeReport};
