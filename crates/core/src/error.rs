//! Core errors

use thiserror::Error;

/// Errors raised while validating caller input.
///
/// All of these are boundary errors: they reject the request before any rule
/// evaluation or store access happens. Nothing in this set is ever fatal to
/// the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Only 'deposit' or 'withdraw' are supported event types")]
    UnsupportedEventType(String),

    #[error("Malformed amount: {0}")]
    MalformedAmount(String),

    #[error("Amount cannot be negative: {0} cents")]
    NegativeAmount(i64),

    #[error("Seconds field must be within 0-59, got {0}")]
    SecondsOutOfRange(u32),

    #[error("Unknown alert code: {0}")]
    UnknownAlertCode(u32),
}
