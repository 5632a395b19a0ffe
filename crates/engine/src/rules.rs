//! The four alert rules
//!
//! Every rule is a pure function of the incoming event, the user's prior
//! history (oldest first) and the configured thresholds. The incoming event
//! is never part of `history`; rules only read, never mutate.

use chrono::Duration;
use vigil_core::{Event, EventKind};

use crate::config::RuleConfig;

/// A single withdrawal strictly over the configured threshold.
///
/// Stateless: history is never consulted. Exactly the threshold does not
/// trigger.
pub fn withdrawal_over_threshold(event: &Event, config: &RuleConfig) -> bool {
    event.kind == EventKind::Withdraw && event.amount.cents() > config.withdraw_threshold_cents
}

/// The current withdrawal extends an unbroken run of withdrawals.
///
/// The running count starts at 1 for the incoming event itself. Scanning
/// history newest-first, every prior withdrawal extends the run; the first
/// non-withdrawal ends the scan. Triggers once the run exceeds
/// `withdrawals_before_alert`.
pub fn consecutive_withdrawals(event: &Event, history: &[Event], config: &RuleConfig) -> bool {
    if event.kind != EventKind::Withdraw {
        return false;
    }
    let mut run = 1u32;
    for prior in history.iter().rev() {
        if prior.kind != EventKind::Withdraw {
            break;
        }
        run += 1;
        if run > config.withdrawals_before_alert {
            return true;
        }
    }
    false
}

/// The current deposit closes a non-decreasing run of deposit amounts.
///
/// Withdrawals in between are skipped without ending the run. Each prior
/// deposit is compared against the incoming amount: a strictly larger prior
/// amount ends the scan, an equal or smaller one counts toward the run.
/// Triggers once `deposits_before_alert` prior deposits qualify.
pub fn increasing_deposits(event: &Event, history: &[Event], config: &RuleConfig) -> bool {
    if event.kind != EventKind::Deposit {
        return false;
    }
    let mut qualifying = 0u32;
    for prior in history.iter().rev() {
        if prior.kind != EventKind::Deposit {
            continue;
        }
        if event.amount < prior.amount {
            break;
        }
        qualifying += 1;
        if qualifying >= config.deposits_before_alert {
            return true;
        }
    }
    false
}

/// Deposits inside the lookback window accumulate past the threshold.
///
/// Requires the incoming deposit to carry a reference time and the history
/// to contain at least one timestamped entry. The accumulator starts at the
/// incoming amount. The scan covers the whole history newest-first and does
/// not end when an entry falls outside the window: only prior deposits whose
/// recorded time lies within `window_seconds` of the reference time
/// contribute, but the threshold is re-checked after every prior deposit
/// regardless of window membership. Untimestamped deposits never contribute.
/// Exactly the threshold does not trigger.
pub fn accumulative_deposits(event: &Event, history: &[Event], config: &RuleConfig) -> bool {
    if event.kind != EventKind::Deposit {
        return false;
    }
    let now = match event.occurred_at {
        Some(now) => now,
        None => return false,
    };
    if !history.iter().any(|e| e.occurred_at.is_some()) {
        return false;
    }

    let window = Duration::seconds(config.window_seconds);
    let mut accumulated = event.amount.cents();
    for prior in history.iter().rev() {
        if prior.kind != EventKind::Deposit {
            continue;
        }
        if let Some(at) = prior.occurred_at {
            if now.signed_duration_since(at) <= window {
                accumulated = accumulated.saturating_add(prior.amount.cents());
            }
        }
        if accumulated > config.accumulative_threshold_cents {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use vigil_core::Amount;

    fn cfg() -> RuleConfig {
        RuleConfig::default()
    }

    fn deposit(cents: i64) -> Event {
        Event::new(EventKind::Deposit, Amount::from_cents(cents).unwrap(), None)
    }

    fn withdraw(cents: i64) -> Event {
        Event::new(EventKind::Withdraw, Amount::from_cents(cents).unwrap(), None)
    }

    fn deposit_at(cents: i64, at: DateTime<Utc>) -> Event {
        Event::new(EventKind::Deposit, Amount::from_cents(cents).unwrap(), Some(at))
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    // --- withdrawal_over_threshold ---

    #[test]
    fn test_threshold_is_strict() {
        assert!(!withdrawal_over_threshold(&withdraw(10_000), &cfg()));
        assert!(withdrawal_over_threshold(&withdraw(10_001), &cfg()));
    }

    #[test]
    fn test_threshold_ignores_history_and_deposits() {
        assert!(!withdrawal_over_threshold(&deposit(1_000_000), &cfg()));
    }

    // --- consecutive_withdrawals ---

    #[test]
    fn test_empty_history_never_runs() {
        assert!(!consecutive_withdrawals(&withdraw(100), &[], &cfg()));
    }

    #[test]
    fn test_third_withdrawal_triggers() {
        let history = vec![withdraw(100), withdraw(100)];
        assert!(consecutive_withdrawals(&withdraw(100), &history, &cfg()));
    }

    #[test]
    fn test_second_withdrawal_does_not_trigger() {
        let history = vec![withdraw(100)];
        assert!(!consecutive_withdrawals(&withdraw(100), &history, &cfg()));
    }

    #[test]
    fn test_deposit_breaks_the_run() {
        // The most recent entry is a deposit: the run is reset even though
        // older withdrawals exist past it.
        let history = vec![withdraw(100), withdraw(100), deposit(50)];
        assert!(!consecutive_withdrawals(&withdraw(100), &history, &cfg()));
    }

    #[test]
    fn test_run_does_not_look_past_interruption() {
        let history = vec![withdraw(100), deposit(50), withdraw(100)];
        assert!(!consecutive_withdrawals(&withdraw(100), &history, &cfg()));
    }

    #[test]
    fn test_deposit_event_not_applicable() {
        let history = vec![withdraw(100), withdraw(100)];
        assert!(!consecutive_withdrawals(&deposit(100), &history, &cfg()));
    }

    // --- increasing_deposits ---

    #[test]
    fn test_first_deposit_never_triggers() {
        assert!(!increasing_deposits(&deposit(1_000), &[], &cfg()));
    }

    #[test]
    fn test_three_equal_deposits_trigger() {
        // Ties qualify as non-decreasing.
        let history = vec![deposit(1_000), deposit(1_000)];
        assert!(increasing_deposits(&deposit(1_000), &history, &cfg()));
    }

    #[test]
    fn test_withdrawals_are_skipped_not_counted() {
        let history = vec![deposit(1_000), withdraw(999_999), deposit(2_000)];
        assert!(increasing_deposits(&deposit(2_000), &history, &cfg()));
    }

    #[test]
    fn test_larger_prior_deposit_stops_the_scan() {
        // New deposit of 40 after [100, 50]: the scan stops at 50.
        let history = vec![deposit(10_000), deposit(5_000)];
        assert!(!increasing_deposits(&deposit(4_000), &history, &cfg()));
    }

    #[test]
    fn test_comparison_is_against_the_new_amount() {
        // History [100, 50], new deposit 200: both priors qualify even
        // though 50 < 100 between themselves.
        let history = vec![deposit(10_000), deposit(5_000)];
        assert!(increasing_deposits(&deposit(20_000), &history, &cfg()));
    }

    #[test]
    fn test_two_deposits_total_do_not_trigger() {
        let history = vec![deposit(1_000)];
        assert!(!increasing_deposits(&deposit(2_000), &history, &cfg()));
    }

    #[test]
    fn test_withdraw_event_not_applicable() {
        let history = vec![deposit(1_000), deposit(1_000)];
        assert!(!increasing_deposits(&withdraw(1_000), &history, &cfg()));
    }

    // --- accumulative_deposits ---

    #[test]
    fn test_requires_reference_time() {
        let history = vec![deposit_at(15_000, t0())];
        let untimestamped = deposit(15_000);
        assert!(!accumulative_deposits(&untimestamped, &history, &cfg()));
    }

    #[test]
    fn test_requires_a_timestamped_prior_event() {
        let history = vec![deposit(15_000)];
        let event = deposit_at(15_000, t0());
        assert!(!accumulative_deposits(&event, &history, &cfg()));
    }

    #[test]
    fn test_window_sum_triggers() {
        // 50 + 100 + 75 committed over 25s, new 50 at +28s: the scan adds
        // 75 (3s old), then 100 (8s old) and crosses 200.00.
        let history = vec![
            deposit_at(5_000, t0()),
            deposit_at(10_000, t0() + Duration::seconds(20)),
            deposit_at(7_500, t0() + Duration::seconds(25)),
        ];
        let event = deposit_at(5_000, t0() + Duration::seconds(28));
        assert!(accumulative_deposits(&event, &history, &cfg()));
    }

    #[test]
    fn test_exactly_threshold_does_not_trigger() {
        // 100.00 + 50.00 in window, new 50.00: accumulator lands exactly on
        // 200.00 and must not trigger.
        let history = vec![
            deposit_at(10_000, t0()),
            deposit_at(5_000, t0() + Duration::seconds(5)),
        ];
        let event = deposit_at(5_000, t0() + Duration::seconds(10));
        assert!(!accumulative_deposits(&event, &history, &cfg()));
    }

    #[test]
    fn test_out_of_window_deposits_do_not_contribute() {
        let history = vec![
            deposit_at(15_000, t0()),
            deposit_at(10_000, t0() + Duration::seconds(60)),
        ];
        // Only the second prior deposit (1s old) is in window; counting the
        // first would have crossed the threshold.
        let event = deposit_at(5_000, t0() + Duration::seconds(61));
        assert!(!accumulative_deposits(&event, &history, &cfg()));
    }

    #[test]
    fn test_scan_does_not_stop_at_window_exit() {
        // The newest prior deposit is out of window; an older one landed
        // within it (timestamps are not assumed contiguous by recency).
        let reference = t0() + Duration::seconds(90);
        let history = vec![
            deposit_at(19_000, reference - Duration::seconds(10)),
            deposit_at(2_000, reference - Duration::seconds(80)),
        ];
        let event = deposit_at(5_000, reference);
        assert!(accumulative_deposits(&event, &history, &cfg()));
    }

    #[test]
    fn test_threshold_checked_after_out_of_window_entries_too() {
        // The new amount alone is over the threshold; the check fires on the
        // first prior deposit even though that deposit is out of window.
        let history = vec![deposit_at(1_000, t0())];
        let event = deposit_at(25_000, t0() + Duration::seconds(300));
        assert!(accumulative_deposits(&event, &history, &cfg()));
    }

    #[test]
    fn test_withdrawals_never_contribute() {
        let history = vec![
            Event::new(
                EventKind::Withdraw,
                Amount::from_cents(50_000).unwrap(),
                Some(t0()),
            ),
            deposit_at(10_000, t0() + Duration::seconds(1)),
        ];
        let event = deposit_at(5_000, t0() + Duration::seconds(2));
        assert!(!accumulative_deposits(&event, &history, &cfg()));
    }

    #[test]
    fn test_accumulator_saturates_on_huge_sums() {
        let history: Vec<Event> = (0..10)
            .map(|i| deposit_at(i64::MAX / 4, t0() + Duration::seconds(i)))
            .collect();
        let event = deposit_at(1, t0() + Duration::seconds(11));
        assert!(accumulative_deposits(&event, &history, &cfg()));
    }
}
