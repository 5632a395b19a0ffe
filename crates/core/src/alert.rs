//! Alert codes raised by the rule evaluator

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::event::UserId;

/// Closed set of alert codes, serialized as their bare wire numbers.
///
/// Codes are independent; zero, one, or several may apply to a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum AlertCode {
    /// A single withdrawal over the large-withdrawal threshold
    LargeWithdrawal = 1100,
    /// Three or more withdrawals in an unbroken run
    ConsecutiveWithdrawals = 30,
    /// Three non-decreasing deposits in a row, ignoring withdrawals
    IncreasingDeposits = 300,
    /// Deposits within the lookback window accumulating over the threshold
    AccumulativeDeposits = 123,
}

impl AlertCode {
    /// Wire number for this code
    pub const fn code(&self) -> u32 {
        *self as u32
    }

    /// Stable rule name, used in logs
    pub const fn name(&self) -> &'static str {
        match self {
            AlertCode::LargeWithdrawal => "large_withdrawal",
            AlertCode::ConsecutiveWithdrawals => "consecutive_withdrawals",
            AlertCode::IncreasingDeposits => "increasing_deposits",
            AlertCode::AccumulativeDeposits => "accumulative_deposits",
        }
    }
}

impl From<AlertCode> for u32 {
    fn from(code: AlertCode) -> Self {
        code.code()
    }
}

impl TryFrom<u32> for AlertCode {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1100 => Ok(AlertCode::LargeWithdrawal),
            30 => Ok(AlertCode::ConsecutiveWithdrawals),
            300 => Ok(AlertCode::IncreasingDeposits),
            123 => Ok(AlertCode::AccumulativeDeposits),
            other => Err(CoreError::UnknownAlertCode(other)),
        }
    }
}

/// Outcome of evaluating one incoming event.
///
/// `alert_codes` preserves evaluation order and is never deduplicated or
/// sorted. Serializes directly as the HTTP response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub user_id: UserId,
    pub alert_codes: Vec<AlertCode>,
    pub alert: bool,
}

impl Evaluation {
    pub fn new(user_id: UserId, alert_codes: Vec<AlertCode>) -> Self {
        let alert = !alert_codes.is_empty();
        Self {
            user_id,
            alert_codes,
            alert,
        }
    }
}
