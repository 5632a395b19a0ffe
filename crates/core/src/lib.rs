//! Vigil Core - Domain types
//!
//! This crate contains the fundamental types used across Vigil:
//! - `Amount`: non-negative integer-cent wrapper for financial amounts
//! - `Event` / `EventKind`: one deposit or withdrawal with its timestamp
//! - `UserId`: opaque caller identity keying per-user histories
//! - `AlertCode` / `Evaluation`: rule outcomes as they appear on the wire

pub mod alert;
pub mod amount;
pub mod error;
pub mod event;

pub use alert::{AlertCode, Evaluation};
pub use amount::Amount;
pub use error::CoreError;
pub use event::{Event, EventKind, UserId};
