//! # tenet-greenfield
//!
//! Decides whether failed convergence checks reject a result.
//!
//! | policy      | failed check                          |
//! |-------------|---------------------------------------|
//! | `bootstrap` | valid, reason recorded as would-reject |
//! | `learn`     | same as `bootstrap`                   |
//! | `enforce`   | invalid, reason returned              |
//!
//! The policy never changes on its own; transitions are an operator decision.

pub mod gate;
pub mod ledger;

pub use gate::evaluate;
pub use ledger::{LedgerEntry, RejectionLedger};
