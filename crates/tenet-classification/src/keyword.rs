//! Deterministic keyword classifier.
//!
//! Scores each vocabulary entry by how many of its keyword patterns occur in
//! the text and returns the best label. Ties go to the entry listed first.
//! When no entry scores, the classifier reports itself unavailable rather
//! than guessing.

use std::sync::LazyLock;

use regex::Regex;
use tenet_core::constants::{ANCHOR_VOCABULARY, DIMENSION_VOCABULARY, GLYPH_VOCABULARY};
use tenet_core::errors::ClassificationError;
use tenet_core::models::{Vocabulary, VocabularyEntry};
use tenet_core::traits::ICategoryClassifier;

/// Keyword rule for one label of one vocabulary.
pub struct KeywordRule {
    pub vocabulary: &'static str,
    pub label: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! keyword_rule {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Dimensions ─────────────────────────────────────────────────────────────
keyword_rule!(RE_IDENTITY, r"(?i)\b(?:i am|who i am|identity|myself|core self|essence)\b");
keyword_rule!(RE_CHARACTER, r"(?i)\b(?:curious|patient|stubborn|calm|temperament|personality|trait\w*)\b");
keyword_rule!(RE_VOICE, r"(?i)\b(?:speak|voice|tone|write|writing|words|concise|verbose|plain language)\b");
keyword_rule!(RE_HONESTY, r"(?i)\b(?:honest\w*|truth\w*|lie|lies|lying|candor|candid|transparen\w*|admit\w*)\b");
keyword_rule!(RE_BOUNDARIES, r"(?i)\b(?:boundar\w*|refuse|never|ethic\w*|harm\w*|consent|limit\w*)\b");
keyword_rule!(RE_RELATIONSHIP, r"(?i)\b(?:friend\w*|trust\w*|partner\w*|together|relationship\w*|people|listen\w*)\b");
keyword_rule!(RE_CONTINUITY, r"(?i)\b(?:grow\w*|learn\w*|change\w*|remember\w*|memory|evolv\w*|progress)\b");

// ── Anchors ────────────────────────────────────────────────────────────────
keyword_rule!(RE_ANCHOR_SINCERITY, r"(?i)\b(?:sincer\w*|honest\w*|candor|candid)\b");
keyword_rule!(RE_ANCHOR_TRUST, r"(?i)\b(?:trust\w*|reliab\w*|promise\w*)\b");
keyword_rule!(RE_ANCHOR_COURAGE, r"(?i)\b(?:courag\w*|brave\w*|risk\w*|dare)\b");
keyword_rule!(RE_ANCHOR_BENEVOLENCE, r"(?i)\b(?:kind\w*|compassion\w*|benevolen\w*|generous)\b");
keyword_rule!(RE_ANCHOR_INTEGRITY, r"(?i)\b(?:integrity|principle\w*|right thing|ethic\w*)\b");
keyword_rule!(RE_ANCHOR_RESPECT, r"(?i)\b(?:respect\w*|courtes\w*|dignity)\b");
keyword_rule!(RE_ANCHOR_WISDOM, r"(?i)\b(?:wis\w*|judg\w*|discern\w*)\b");
keyword_rule!(RE_ANCHOR_HARMONY, r"(?i)\b(?:harmon\w*|balance\w*|peace\w*|together)\b");
keyword_rule!(RE_ANCHOR_PATIENCE, r"(?i)\b(?:patien\w*|wait\w*|endur\w*)\b");
keyword_rule!(RE_ANCHOR_REFLECTION, r"(?i)\b(?:reflect\w*|introspect\w*|review\w*)\b");
keyword_rule!(RE_ANCHOR_TRUTH, r"(?i)\b(?:truth\w*|true|fact\w*|lie|lies|lying)\b");
keyword_rule!(RE_ANCHOR_LEARNING, r"(?i)\b(?:learn\w*|study\w*|curio\w*|grow\w*)\b");
keyword_rule!(RE_ANCHOR_BOUNDARY, r"(?i)\b(?:boundar\w*|refuse\w*|limit\w*|protect\w*)\b");
keyword_rule!(RE_ANCHOR_CARE, r"(?i)\b(?:care|caring|warm\w*|empath\w*|listen\w*)\b");
keyword_rule!(RE_ANCHOR_SIMPLICITY, r"(?i)\b(?:simpl\w*|minimal\w*|concise)\b");
keyword_rule!(RE_ANCHOR_CLARITY, r"(?i)\b(?:clear\w*|clarity|plain|explicit)\b");

// ── Glyphs ─────────────────────────────────────────────────────────────────
keyword_rule!(RE_GLYPH_FOCUS, r"(?i)\b(?:focus\w*|goal\w*|aim\w*|purpose)\b");
keyword_rule!(RE_GLYPH_VALUE, r"(?i)\b(?:value\w*|precious|core|honest\w*|truth\w*)\b");
keyword_rule!(RE_GLYPH_PASSION, r"(?i)\b(?:passion\w*|energy|drive|love)\b");
keyword_rule!(RE_GLYPH_GROWTH, r"(?i)\b(?:grow\w*|learn\w*|improv\w*|evolv\w*)\b");
keyword_rule!(RE_GLYPH_PROTECTION, r"(?i)\b(?:protect\w*|boundar\w*|safe\w*|refuse\w*)\b");
keyword_rule!(RE_GLYPH_PARTNERSHIP, r"(?i)\b(?:partner\w*|friend\w*|together|collaborat\w*|trust\w*)\b");
keyword_rule!(RE_GLYPH_DIRECTION, r"(?i)\b(?:direction|path|guid\w*|navigat\w*)\b");
keyword_rule!(RE_GLYPH_BALANCE, r"(?i)\b(?:balanc\w*|fair\w*|just\w*|ethic\w*)\b");
keyword_rule!(RE_GLYPH_INSIGHT, r"(?i)\b(?:insight\w*|idea\w*|understand\w*|clear\w*)\b");
keyword_rule!(RE_GLYPH_FLOW, r"(?i)\b(?:flow\w*|adapt\w*|calm\w*)\b");
keyword_rule!(RE_GLYPH_WONDER, r"(?i)\b(?:wonder\w*|curio\w*|delight\w*|joy\w*)\b");
keyword_rule!(RE_GLYPH_REFLECTION, r"(?i)\b(?:reflect\w*|myself|self|introspect\w*)\b");

/// Rules for the fixed vocabularies.
pub static STANDARD_RULES: &[KeywordRule] = &[
    KeywordRule { vocabulary: DIMENSION_VOCABULARY, label: "identity-core", regex: &RE_IDENTITY },
    KeywordRule { vocabulary: DIMENSION_VOCABULARY, label: "character-traits", regex: &RE_CHARACTER },
    KeywordRule { vocabulary: DIMENSION_VOCABULARY, label: "voice-presence", regex: &RE_VOICE },
    KeywordRule { vocabulary: DIMENSION_VOCABULARY, label: "honesty", regex: &RE_HONESTY },
    KeywordRule { vocabulary: DIMENSION_VOCABULARY, label: "boundaries-ethics", regex: &RE_BOUNDARIES },
    KeywordRule { vocabulary: DIMENSION_VOCABULARY, label: "relationship-dynamics", regex: &RE_RELATIONSHIP },
    KeywordRule { vocabulary: DIMENSION_VOCABULARY, label: "continuity-growth", regex: &RE_CONTINUITY },
    KeywordRule { vocabulary: ANCHOR_VOCABULARY, label: "誠", regex: &RE_ANCHOR_SINCERITY },
    KeywordRule { vocabulary: ANCHOR_VOCABULARY, label: "信", regex: &RE_ANCHOR_TRUST },
    KeywordRule { vocabulary: ANCHOR_VOCABULARY, label: "勇", regex: &RE_ANCHOR_COURAGE },
    KeywordRule { vocabulary: ANCHOR_VOCABULARY, label: "仁", regex: &RE_ANCHOR_BENEVOLENCE },
    KeywordRule { vocabulary: ANCHOR_VOCABULARY, label: "義", regex: &RE_ANCHOR_INTEGRITY },
    KeywordRule { vocabulary: ANCHOR_VOCABULARY, label: "禮", regex: &RE_ANCHOR_RESPECT },
    KeywordRule { vocabulary: ANCHOR_VOCABULARY, label: "智", regex: &RE_ANCHOR_WISDOM },
    KeywordRule { vocabulary: ANCHOR_VOCABULARY, label: "和", regex: &RE_ANCHOR_HARMONY },
    KeywordRule { vocabulary: ANCHOR_VOCABULARY, label: "忍", regex: &RE_ANCHOR_PATIENCE },
    KeywordRule { vocabulary: ANCHOR_VOCABULARY, label: "省", regex: &RE_ANCHOR_REFLECTION },
    KeywordRule { vocabulary: ANCHOR_VOCABULARY, label: "真", regex: &RE_ANCHOR_TRUTH },
    KeywordRule { vocabulary: ANCHOR_VOCABULARY, label: "學", regex: &RE_ANCHOR_LEARNING },
    KeywordRule { vocabulary: ANCHOR_VOCABULARY, label: "守", regex: &RE_ANCHOR_BOUNDARY },
    KeywordRule { vocabulary: ANCHOR_VOCABULARY, label: "心", regex: &RE_ANCHOR_CARE },
    KeywordRule { vocabulary: ANCHOR_VOCABULARY, label: "簡", regex: &RE_ANCHOR_SIMPLICITY },
    KeywordRule { vocabulary: ANCHOR_VOCABULARY, label: "明", regex: &RE_ANCHOR_CLARITY },
    KeywordRule { vocabulary: GLYPH_VOCABULARY, label: "🎯", regex: &RE_GLYPH_FOCUS },
    KeywordRule { vocabulary: GLYPH_VOCABULARY, label: "💎", regex: &RE_GLYPH_VALUE },
    KeywordRule { vocabulary: GLYPH_VOCABULARY, label: "🔥", regex: &RE_GLYPH_PASSION },
    KeywordRule { vocabulary: GLYPH_VOCABULARY, label: "🌱", regex: &RE_GLYPH_GROWTH },
    KeywordRule { vocabulary: GLYPH_VOCABULARY, label: "🛡️", regex: &RE_GLYPH_PROTECTION },
    KeywordRule { vocabulary: GLYPH_VOCABULARY, label: "🤝", regex: &RE_GLYPH_PARTNERSHIP },
    KeywordRule { vocabulary: GLYPH_VOCABULARY, label: "🧭", regex: &RE_GLYPH_DIRECTION },
    KeywordRule { vocabulary: GLYPH_VOCABULARY, label: "⚖️", regex: &RE_GLYPH_BALANCE },
    KeywordRule { vocabulary: GLYPH_VOCABULARY, label: "💡", regex: &RE_GLYPH_INSIGHT },
    KeywordRule { vocabulary: GLYPH_VOCABULARY, label: "🌊", regex: &RE_GLYPH_FLOW },
    KeywordRule { vocabulary: GLYPH_VOCABULARY, label: "✨", regex: &RE_GLYPH_WONDER },
    KeywordRule { vocabulary: GLYPH_VOCABULARY, label: "🪞", regex: &RE_GLYPH_REFLECTION },
];

/// Offline classifier backed by keyword patterns.
///
/// Vocabularies without standard rules are scored against the words of each
/// entry's label and gloss.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    fn score(text: &str, vocabulary_name: &str, entry: &VocabularyEntry) -> usize {
        let standard = STANDARD_RULES
            .iter()
            .find(|r| r.vocabulary == vocabulary_name && r.label == entry.label);
        match standard {
            Some(rule) => rule
                .regex
                .as_ref()
                .map_or(0, |re| re.find_iter(text).count()),
            None => gloss_score(text, entry),
        }
    }
}

/// Count occurrences of the entry's label and gloss words (four letters or more).
fn gloss_score(text: &str, entry: &VocabularyEntry) -> usize {
    let words: Vec<String> = entry
        .label
        .split(|c: char| !c.is_alphanumeric())
        .chain(entry.gloss.split(|c: char| !c.is_alphanumeric()))
        .filter(|w| w.chars().count() >= 4)
        .map(regex::escape)
        .collect();
    if words.is_empty() {
        return 0;
    }
    Regex::new(&format!(r"(?i)\b(?:{})\b", words.join("|")))
        .map_or(0, |re| re.find_iter(text).count())
}

impl ICategoryClassifier for KeywordClassifier {
    fn classify(&self, text: &str, vocabulary: &Vocabulary) -> Result<String, ClassificationError> {
        let mut best: Option<(&VocabularyEntry, usize)> = None;
        for entry in &vocabulary.entries {
            let score = Self::score(text, &vocabulary.name, entry);
            if score > 0 && best.map_or(true, |(_, s)| score > s) {
                best = Some((entry, score));
            }
        }
        best.map(|(entry, _)| entry.label.clone())
            .ok_or_else(|| ClassificationError::Unavailable {
                reason: format!("no keyword of vocabulary {} matched", vocabulary.name),
            })
    }

    fn name(&self) -> &str {
        "keyword"
    }
}
