use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{TenetError, TenetResult};

use super::GreenfieldState;

/// Why a convergence result would be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    /// The store holds no axioms after the run.
    NoAxiomsGenerated,
    /// Signals were supplied but no principle exists afterwards.
    NoPrinciplesGenerated,
}

impl RejectReason {
    /// Stable reason code reported to callers.
    pub fn code(self) -> &'static str {
        match self {
            Self::NoAxiomsGenerated => "no-axioms-generated",
            Self::NoPrinciplesGenerated => "no-principles-generated",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single failed quality check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckFailure {
    pub reason: RejectReason,
    pub detail: String,
}

/// Policy-agnostic result of the convergence quality checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckOutcome {
    pub failures: Vec<CheckFailure>,
}

impl CheckOutcome {
    pub fn passed() -> Self {
        Self::default()
    }

    pub fn is_passed(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn fail(&mut self, reason: RejectReason, detail: impl Into<String>) {
        self.failures.push(CheckFailure {
            reason,
            detail: detail.into(),
        });
    }

    /// The first failure, which determines the reported reason.
    pub fn primary(&self) -> Option<&CheckFailure> {
        self.failures.first()
    }
}

/// Note attached to a validation result for every failed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GateNote {
    pub reason: String,
    pub detail: String,
    /// True when the check rejected the result, false when it was downgraded.
    pub enforced: bool,
}

/// Final decision of the greenfield gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationResult {
    pub valid: bool,
    pub policy: GreenfieldState,
    /// Reason code when the result was rejected (`enforce` only).
    pub reason: Option<String>,
    /// Reason code that would have rejected the result (`bootstrap`/`learn`).
    pub would_reject: Option<String>,
    pub notes: Vec<GateNote>,
}

impl ValidationResult {
    /// Convert a rejected result into `TenetError::ValidationRejected`.
    pub fn into_result(self) -> TenetResult<Self> {
        if self.valid {
            Ok(self)
        } else {
            Err(TenetError::ValidationRejected {
                reason: self.reason.unwrap_or_else(|| "unspecified".to_string()),
            })
        }
    }
}
