use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Validation strictness policy.
///
/// Transitions are an operator decision; nothing in the core changes it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum GreenfieldState {
    /// Failed checks are recorded as would-reject notes; the result is valid.
    #[default]
    Bootstrap,
    /// Accepts like `Bootstrap`; would-reject notes feed later calibration.
    Learn,
    /// Failed checks invalidate the result.
    Enforce,
}

impl GreenfieldState {
    pub const ALL: [GreenfieldState; 3] = [Self::Bootstrap, Self::Learn, Self::Enforce];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bootstrap => "bootstrap",
            Self::Learn => "learn",
            Self::Enforce => "enforce",
        }
    }

    /// Whether failed checks actually reject the result.
    pub fn rejects(self) -> bool {
        matches!(self, Self::Enforce)
    }
}

impl fmt::Display for GreenfieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GreenfieldState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("unknown greenfield policy: {s}"))
    }
}
