//! Ingestion engine - evaluate against prior history, then commit

use std::sync::Arc;

use tracing::info;

use vigil_core::{AlertCode, Amount, Evaluation, Event, EventKind, UserId};
use vigil_store::MemoryStore;

use crate::clock::{stamp, Clock, SystemClock};
use crate::config::RuleConfig;
use crate::rules;

/// Evaluates incoming events against per-user history and records them.
///
/// The store and clock are injected; the engine holds no ambient state and
/// no mutable globals.
pub struct AlertEngine {
    config: RuleConfig,
    store: Arc<MemoryStore>,
    clock: Arc<dyn Clock>,
}

impl AlertEngine {
    pub fn new(config: RuleConfig, store: Arc<MemoryStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            store,
            clock,
        }
    }

    /// Engine over a fresh store and the system clock.
    pub fn with_defaults() -> Self {
        Self::new(
            RuleConfig::default(),
            Arc::new(MemoryStore::new()),
            Arc::new(SystemClock),
        )
    }

    /// Run every rule applicable to the event's kind, in fixed order,
    /// against a frozen history snapshot.
    ///
    /// Read-only and idempotent: the same event and history always yield the
    /// same codes, in the same order, never deduplicated or reordered.
    pub fn evaluate(&self, event: &Event, history: &[Event]) -> Vec<AlertCode> {
        let mut codes = Vec::new();
        match event.kind {
            EventKind::Withdraw => {
                if rules::withdrawal_over_threshold(event, &self.config) {
                    codes.push(AlertCode::LargeWithdrawal);
                }
                if rules::consecutive_withdrawals(event, history, &self.config) {
                    codes.push(AlertCode::ConsecutiveWithdrawals);
                }
            }
            EventKind::Deposit => {
                if rules::increasing_deposits(event, history, &self.config) {
                    codes.push(AlertCode::IncreasingDeposits);
                }
                if rules::accumulative_deposits(event, history, &self.config) {
                    codes.push(AlertCode::AccumulativeDeposits);
                }
            }
        }
        codes
    }

    /// Ingest one event: stamp it, evaluate it against the user's prior
    /// events, then commit it to the history.
    ///
    /// Evaluation strictly precedes the commit, and both happen under the
    /// user's lock as one atomic unit. The event is recorded whether or not
    /// it alerted.
    pub fn ingest(
        &self,
        user_id: &UserId,
        kind: EventKind,
        amount: Amount,
        seconds: Option<u32>,
    ) -> Evaluation {
        let occurred_at = stamp(self.clock.now(), seconds);
        let event = Event::new(kind, amount, occurred_at);

        let codes = self
            .store
            .evaluate_then_append(user_id, event.clone(), |history| {
                self.evaluate(&event, history)
            });

        if !codes.is_empty() {
            let names: Vec<&str> = codes.iter().map(|c| c.name()).collect();
            info!(user = %user_id, kind = %kind, amount = %amount, rules = ?names, "alert raised");
        }

        Evaluation::new(user_id.clone(), codes)
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }
}
