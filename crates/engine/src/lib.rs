//! Vigil Engine - windowed, stateful rule evaluation
//!
//! ## Flow
//!
//! ```text
//! POST /event ──► AlertEngine::ingest
//!                   ├── Clock::now + seconds override     (clock)
//!                   ├── per-user lock in MemoryStore
//!                   │     ├── evaluate(event, prior history)
//!                   │     └── append(event)
//!                   └── Evaluation { alert_codes, alert }
//! ```
//!
//! ## Key components
//!
//! - [`config::RuleConfig`] - configurable thresholds, not hardcoded
//! - [`rules`] - the four pure rule checks
//! - [`clock::Clock`] - injected time source (no ambient `now`)
//! - [`engine::AlertEngine`] - evaluate-then-commit orchestrator

pub mod clock;
pub mod config;
pub mod engine;
pub mod rules;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::RuleConfig;
pub use engine::AlertEngine;
