// Single source of truth for all default values.

// --- Intake ---
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_PER_SOURCE_CAP: usize = 15;

// --- Classification ---
pub const DEFAULT_CLASSIFICATION_CONCURRENCY: usize = 4;
pub const DEFAULT_CLASSIFICATION_CACHE_CAPACITY: u64 = 10_000;

// --- Convergence ---
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.8;
pub const DEFAULT_PARALLEL_DIMENSIONS: bool = true;
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 0;

// --- Promotion ---
pub const DEFAULT_AXIOM_THRESHOLD: usize = 3;
pub const DEFAULT_MIN_CROSS_CATEGORY: usize = 2;
pub const DEFAULT_GLYPHS_ENABLED: bool = true;

// --- Merge ---
pub const DEFAULT_MERGE_THRESHOLD: f64 = 0.85;
pub const DEFAULT_CROSS_DIMENSION_MERGE: bool = false;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "tenet.db";
pub const DEFAULT_SNAPSHOT_RETENTION: usize = 20;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
