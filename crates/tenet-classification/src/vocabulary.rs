//! Fixed vocabularies handed to the classifier.

use tenet_core::constants::{ANCHOR_VOCABULARY, DIMENSION_VOCABULARY, GLYPH_VOCABULARY};
use tenet_core::models::{Dimension, Vocabulary};

/// Canonical anchors: single CJK characters with English glosses.
pub const ANCHORS: [(&str, &str); 16] = [
    ("誠", "sincerity"),
    ("信", "trust"),
    ("勇", "courage"),
    ("仁", "benevolence"),
    ("義", "integrity"),
    ("禮", "respect"),
    ("智", "wisdom"),
    ("和", "harmony"),
    ("忍", "patience"),
    ("省", "reflection"),
    ("真", "truth"),
    ("學", "learning"),
    ("守", "boundary"),
    ("心", "care"),
    ("簡", "simplicity"),
    ("明", "clarity"),
];

/// Decorative glyphs.
pub const GLYPHS: [(&str, &str); 12] = [
    ("🎯", "focus"),
    ("💎", "clarity of value"),
    ("🔥", "passion"),
    ("🌱", "growth"),
    ("🛡️", "protection"),
    ("🤝", "partnership"),
    ("🧭", "direction"),
    ("⚖️", "balance"),
    ("💡", "insight"),
    ("🌊", "flow"),
    ("✨", "wonder"),
    ("🪞", "self-reflection"),
];

/// The seven semantic dimensions, labelled as they serialize.
pub fn dimension_vocabulary() -> Vocabulary {
    Dimension::ALL
        .into_iter()
        .fold(Vocabulary::new(DIMENSION_VOCABULARY), |v, d| {
            v.with_entry(d.label(), d.gloss())
        })
}

pub fn anchor_vocabulary() -> Vocabulary {
    ANCHORS
        .into_iter()
        .fold(Vocabulary::new(ANCHOR_VOCABULARY), |v, (label, gloss)| {
            v.with_entry(label, gloss)
        })
}

pub fn glyph_vocabulary() -> Vocabulary {
    GLYPHS
        .into_iter()
        .fold(Vocabulary::new(GLYPH_VOCABULARY), |v, (label, gloss)| {
            v.with_entry(label, gloss)
        })
}
