//! # tenet-classification
//!
//! Wraps an external categorical classifier and guarantees every accepted
//! answer is a member of the vocabulary it was asked about.
//!
//! - [`ClassificationGateway`] normalizes, validates, caches and batches.
//! - [`vocabulary`] holds the fixed dimension, anchor and glyph vocabularies.
//! - [`KeywordClassifier`] is a deterministic offline capability.

pub mod cache;
pub mod gateway;
pub mod keyword;
pub mod normalize;
pub mod vocabulary;

pub use cache::ClassificationCache;
pub use gateway::{ClassificationGateway, ClassificationRequest, GatewayStats};
pub use keyword::KeywordClassifier;
