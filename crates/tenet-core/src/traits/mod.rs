mod classifier;
mod embedding;
mod snapshot_store;

pub use classifier::ICategoryClassifier;
pub use embedding::IEmbeddingProvider;
pub use snapshot_store::ISnapshotStore;
