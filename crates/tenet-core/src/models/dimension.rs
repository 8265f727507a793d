//! Closed enumerations attached to every signal: semantic dimension and signal type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Semantic dimension a signal (and its principle) belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    IdentityCore,
    CharacterTraits,
    VoicePresence,
    Honesty,
    BoundariesEthics,
    RelationshipDynamics,
    ContinuityGrowth,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Self::IdentityCore,
        Self::CharacterTraits,
        Self::VoicePresence,
        Self::Honesty,
        Self::BoundariesEthics,
        Self::RelationshipDynamics,
        Self::ContinuityGrowth,
    ];

    /// Vocabulary label, identical to the serde form.
    pub fn label(self) -> &'static str {
        match self {
            Self::IdentityCore => "identity-core",
            Self::CharacterTraits => "character-traits",
            Self::VoicePresence => "voice-presence",
            Self::Honesty => "honesty",
            Self::BoundariesEthics => "boundaries-ethics",
            Self::RelationshipDynamics => "relationship-dynamics",
            Self::ContinuityGrowth => "continuity-growth",
        }
    }

    /// Three-letter code used in compact axiom notation.
    pub fn code(self) -> &'static str {
        match self {
            Self::IdentityCore => "IDN",
            Self::CharacterTraits => "CHR",
            Self::VoicePresence => "VOI",
            Self::Honesty => "HON",
            Self::BoundariesEthics => "BND",
            Self::RelationshipDynamics => "REL",
            Self::ContinuityGrowth => "CNT",
        }
    }

    /// Short description handed to the classifier alongside the label.
    pub fn gloss(self) -> &'static str {
        match self {
            Self::IdentityCore => "who I fundamentally am",
            Self::CharacterTraits => "stable traits and temperament",
            Self::VoicePresence => "how I speak and show up",
            Self::Honesty => "truthfulness and candor",
            Self::BoundariesEthics => "limits and ethical lines",
            Self::RelationshipDynamics => "how I relate to others",
            Self::ContinuityGrowth => "memory, change and growth over time",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("unknown dimension: {s}"))
    }
}

/// What kind of statement a signal makes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SignalType {
    Value,
    Belief,
    Preference,
    Goal,
    Constraint,
    Relationship,
    Pattern,
    Correction,
    Boundary,
    Reinforcement,
}

impl SignalType {
    pub const ALL: [SignalType; 10] = [
        Self::Value,
        Self::Belief,
        Self::Preference,
        Self::Goal,
        Self::Constraint,
        Self::Relationship,
        Self::Pattern,
        Self::Correction,
        Self::Boundary,
        Self::Reinforcement,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Belief => "belief",
            Self::Preference => "preference",
            Self::Goal => "goal",
            Self::Constraint => "constraint",
            Self::Relationship => "relationship",
            Self::Pattern => "pattern",
            Self::Correction => "correction",
            Self::Boundary => "boundary",
            Self::Reinforcement => "reinforcement",
        }
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SignalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("unknown signal type: {s}"))
    }
}
