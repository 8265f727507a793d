/// Tenet version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Promotion requires signals from at least this many distinct source
/// categories, regardless of configuration.
pub const MIN_CROSS_CATEGORY_STRENGTH: usize = 2;

/// Hex characters kept from a BLAKE3 digest when deriving principle and axiom ids.
pub const ID_HASH_CHARS: usize = 16;

/// Prefixes for derived identifiers.
pub const SIGNAL_ID_PREFIX: &str = "sig-";
pub const PRINCIPLE_ID_PREFIX: &str = "pr-";
pub const AXIOM_ID_PREFIX: &str = "ax-";

/// Vocabulary names handed to the classification capability.
pub const DIMENSION_VOCABULARY: &str = "dimension";
pub const ANCHOR_VOCABULARY: &str = "canonical-anchor";
pub const GLYPH_VOCABULARY: &str = "glyph";
