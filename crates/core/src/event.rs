//! Transaction events and user identity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::amount::Amount;
use crate::error::CoreError;

/// The two recognized transaction kinds.
///
/// Any other value on the wire is a validation failure at the boundary;
/// invalid kinds are unrepresentable past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Deposit,
    Withdraw,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Deposit => "deposit",
            EventKind::Withdraw => "withdraw",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(EventKind::Deposit),
            "withdraw" => Ok(EventKind::Withdraw),
            other => Err(CoreError::UnsupportedEventType(other.to_string())),
        }
    }
}

/// Opaque caller-supplied user identity.
///
/// Callers send either a JSON integer or a string; both key the same kind of
/// per-user history and echo back unchanged in responses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Int(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Int(n) => write!(f, "{}", n),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for UserId {
    fn from(n: i64) -> Self {
        UserId::Int(n)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId::Text(s.to_string())
    }
}

/// One committed deposit or withdrawal.
///
/// Immutable once created. `occurred_at` is the server-observed wall time
/// with its seconds-within-minute field replaced by the caller-supplied
/// value; `None` when the request carried no seconds field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub amount: Amount,
    pub occurred_at: Option<DateTime<Utc>>,
}

impl Event {
    pub fn new(kind: EventKind, amount: Amount, occurred_at: Option<DateTime<Utc>>) -> Self {
        Self {
            kind,
            amount,
            occurred_at,
        }
    }

    pub fn is_deposit(&self) -> bool {
        self.kind == EventKind::Deposit
    }

    pub fn is_withdraw(&self) -> bool {
        self.kind == EventKind::Withdraw
    }
}
