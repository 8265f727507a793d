//! Strict response normalization.
//!
//! Only surface noise is removed. Anything left must match a label or gloss
//! exactly (ignoring case); there is no fuzzy or substring matching.

const WRAPPERS: &[char] = &['"', '\'', '`', '\u{201c}', '\u{201d}', '\u{2018}', '\u{2019}'];

/// Strip whitespace, wrapping quotes/backticks and at most one trailing
/// period. Returns `None` when nothing is left.
pub fn normalize_response(raw: &str) -> Option<String> {
    let mut s = raw.trim().trim_matches(WRAPPERS).trim();
    if let Some(stripped) = s.strip_suffix('.') {
        s = stripped.trim_end().trim_matches(WRAPPERS).trim();
    }
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
