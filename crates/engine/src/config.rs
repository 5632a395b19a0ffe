//! Rule thresholds, configurable instead of hardcoded
//!
//! Defaults match the production rule set; individual fields can be
//! overridden from a JSON config file without recompilation.

use serde::{Deserialize, Serialize};

/// Thresholds and window sizes for the alert rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Withdrawal amount (cents) above which a single withdrawal alerts
    #[serde(default = "default_withdraw_threshold_cents")]
    pub withdraw_threshold_cents: i64,

    /// Prior consecutive withdrawals tolerated before the run alerts
    #[serde(default = "default_withdrawals_before_alert")]
    pub withdrawals_before_alert: u32,

    /// Qualifying prior deposits needed for a non-decreasing run to alert
    #[serde(default = "default_deposits_before_alert")]
    pub deposits_before_alert: u32,

    /// Lookback window for the accumulative-deposits rule (seconds)
    #[serde(default = "default_window_seconds")]
    pub window_seconds: i64,

    /// Accumulated deposit amount (cents) above which the window rule alerts
    #[serde(default = "default_accumulative_threshold_cents")]
    pub accumulative_threshold_cents: i64,
}

// Default value functions for serde
fn default_withdraw_threshold_cents() -> i64 {
    10_000
}

fn default_withdrawals_before_alert() -> u32 {
    2
}

fn default_deposits_before_alert() -> u32 {
    2
}

fn default_window_seconds() -> i64 {
    30
}

fn default_accumulative_threshold_cents() -> i64 {
    20_000
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            withdraw_threshold_cents: default_withdraw_threshold_cents(),
            withdrawals_before_alert: default_withdrawals_before_alert(),
            deposits_before_alert: default_deposits_before_alert(),
            window_seconds: default_window_seconds(),
            accumulative_threshold_cents: default_accumulative_threshold_cents(),
        }
    }
}

impl RuleConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
