//! Load decision engine
//!
//! This module provides the DecisionEngine that evaluates load events
//! against the velocity limits by coordinating the Ledger and the weekly
//! window boundary detection.
//!
//! The engine enforces, per event and in order:
//! - Duplicate suppression (known ids are dropped with no decision record)
//! - Weekly window rollover (a Monday crossing clears every customer's
//!   aggregates before the event is evaluated)
//! - Tentative accumulation, rule evaluation, and exact rollback when the
//!   load is rejected

use crate::core::ledger::Ledger;
use crate::core::window;
use crate::types::{DecisionRecord, LoadEvent, VelocityLimits};
use chrono::{DateTime, Datelike, Utc};

/// Stateful decision engine for a single run
///
/// Owns the Ledger, the velocity limits, and the weekly window anchor.
/// Constructed once per run and fed events strictly in input order; the
/// input is assumed non-decreasing by timestamp (a precondition, not
/// enforced here).
pub struct DecisionEngine {
    ledger: Ledger,
    limits: VelocityLimits,
    /// Timestamp of the most recent processed event; None until the first
    /// event arrives. Duplicates do not advance it.
    anchor: Option<DateTime<Utc>>,
}

impl DecisionEngine {
    /// Create a new DecisionEngine with an empty ledger
    ///
    /// # Arguments
    ///
    /// * `limits` - The velocity thresholds to enforce for the whole run
    pub fn new(limits: VelocityLimits) -> Self {
        DecisionEngine {
            ledger: Ledger::new(),
            limits,
            anchor: None,
        }
    }

    /// Evaluate a single load event
    ///
    /// Steps, in order:
    /// 1. Duplicate check: an id already seen for this customer is a no-op
    ///    for ledger state and produces no decision record.
    /// 2. Weekly window check: if the interval from the anchor to this
    ///    event crosses a Monday, every customer's weekday aggregates are
    ///    cleared before evaluation proceeds.
    /// 3. The event is tentatively accumulated, capturing the pre-mutation
    ///    aggregate.
    /// 4. The three velocity rules are evaluated against the
    ///    post-accumulation aggregates (equality with a maximum passes).
    /// 5. On rejection the tentative accumulation is rolled back exactly,
    ///    so rejected loads never count toward future limit checks.
    ///
    /// # Arguments
    ///
    /// * `event` - The load event to evaluate
    ///
    /// # Returns
    ///
    /// * `Some(DecisionRecord)` - The accept/reject decision for the event
    /// * `None` - The event was a duplicate and is treated as already decided
    pub fn evaluate(&mut self, event: &LoadEvent) -> Option<DecisionRecord> {
        if self.ledger.is_duplicate(&event.customer_id, &event.id) {
            return None;
        }

        if let Some(anchor) = self.anchor {
            if window::crossed_monday(anchor, event.time) {
                self.ledger.reset_all_weekly_aggregates();
            }
        }
        self.anchor = Some(event.time);

        let weekday = event.time.weekday();
        let previous = self.ledger.record_and_accumulate(event);

        let accepted = self.ledger.within_limits(&event.customer_id, &self.limits);
        if !accepted {
            self.ledger.rollback(&event.customer_id, weekday, previous);
        }

        Some(DecisionRecord {
            id: event.id.clone(),
            customer_id: event.customer_id.clone(),
            accepted,
        })
    }

    /// Read-only access to the ledger state
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use rust_decimal::Decimal;

    fn event(id: &str, customer_id: &str, amount: &str, time: &str) -> LoadEvent {
        LoadEvent {
            id: id.to_string(),
            customer_id: customer_id.to_string(),
            amount: amount.parse().unwrap(),
            time: time.parse().unwrap(),
        }
    }

    fn engine() -> DecisionEngine {
        DecisionEngine::new(VelocityLimits::default())
    }

    #[test]
    fn test_accept_at_exact_daily_maximum() {
        let mut engine = engine();

        // 2000-01-03 is a Monday
        let first = engine
            .evaluate(&event("10001", "1234", "4999.99", "2000-01-03T01:00:00Z"))
            .unwrap();
        assert!(first.accepted);
        let monday = engine.ledger().day_aggregate("1234", Weekday::Mon).unwrap();
        assert_eq!(monday.amount, "4999.99".parse::<Decimal>().unwrap());
        assert_eq!(monday.count, 1);

        // Lands exactly on the daily maximum: still accepted
        let second = engine
            .evaluate(&event("10002", "1234", "0.01", "2000-01-03T02:00:00Z"))
            .unwrap();
        assert!(second.accepted);
        let monday = engine.ledger().day_aggregate("1234", Weekday::Mon).unwrap();
        assert_eq!(monday.amount, "5000.00".parse::<Decimal>().unwrap());

        // One cent above: rejected, and the aggregate is unchanged
        let third = engine
            .evaluate(&event("10003", "1234", "0.01", "2000-01-03T03:00:00Z"))
            .unwrap();
        assert!(!third.accepted);

        let monday = engine.ledger().day_aggregate("1234", Weekday::Mon).unwrap();
        assert_eq!(monday.amount, "5000.00".parse::<Decimal>().unwrap());
        assert_eq!(monday.count, 2);
    }

    #[test]
    fn test_duplicate_produces_no_record_and_no_state_change() {
        let mut engine = engine();

        let first = engine.evaluate(&event("10001", "1234", "100.00", "2000-01-03T01:00:00Z"));
        assert!(first.is_some());

        // Same id, same customer, different amount: silently dropped
        let duplicate = engine.evaluate(&event("10001", "1234", "999.00", "2000-01-03T02:00:00Z"));
        assert!(duplicate.is_none());

        let monday = engine.ledger().day_aggregate("1234", Weekday::Mon).unwrap();
        assert_eq!(monday.amount, "100.00".parse::<Decimal>().unwrap());
        assert_eq!(monday.count, 1);
    }

    #[test]
    fn test_same_id_for_different_customers_is_not_a_duplicate() {
        let mut engine = engine();

        let first = engine.evaluate(&event("10001", "1234", "100.00", "2000-01-03T01:00:00Z"));
        let second = engine.evaluate(&event("10001", "5678", "200.00", "2000-01-03T02:00:00Z"));

        assert!(first.unwrap().accepted);
        assert!(second.unwrap().accepted);
    }

    #[test]
    fn test_daily_count_limit() {
        let mut engine = engine();

        for i in 1..=3 {
            let decision = engine
                .evaluate(&event(
                    &format!("1000{}", i),
                    "1234",
                    "1.00",
                    &format!("2000-01-03T0{}:00:00Z", i),
                ))
                .unwrap();
            assert!(decision.accepted, "load {} should be accepted", i);
        }

        // Fourth load of the day: rejected regardless of amount
        let fourth = engine
            .evaluate(&event("10004", "1234", "0.01", "2000-01-03T04:00:00Z"))
            .unwrap();
        assert!(!fourth.accepted);
        assert_eq!(engine.ledger().weekly_count("1234"), 3);
    }

    #[test]
    fn test_weekly_amount_limit_with_exact_rollback() {
        let mut engine = DecisionEngine::new(VelocityLimits {
            daily_max_amount: "5000.00".parse().unwrap(),
            daily_max_count: 100,
            weekly_max_amount: "20000.00".parse().unwrap(),
        });

        // 4999.75 on each of Mon-Thu = 19999.00
        for (i, day) in ["03", "04", "05", "06"].iter().enumerate() {
            let decision = engine
                .evaluate(&event(
                    &i.to_string(),
                    "42",
                    "4999.75",
                    &format!("2000-01-{}T01:00:00Z", day),
                ))
                .unwrap();
            assert!(decision.accepted);
        }
        assert_eq!(engine.ledger().weekly_total("42"), "19999.00".parse().unwrap());

        // 2.00 more would reach 20001.00: rejected, totals restored exactly
        let decision = engine
            .evaluate(&event("4", "42", "2.00", "2000-01-07T01:00:00Z"))
            .unwrap();
        assert!(!decision.accepted);
        assert_eq!(engine.ledger().weekly_total("42"), "19999.00".parse().unwrap());
        assert_eq!(engine.ledger().day_aggregate("42", Weekday::Fri), None);

        // 1.00 lands exactly on the weekly cap: accepted
        let decision = engine
            .evaluate(&event("5", "42", "1.00", "2000-01-07T02:00:00Z"))
            .unwrap();
        assert!(decision.accepted);
        assert_eq!(engine.ledger().weekly_total("42"), "20000.00".parse().unwrap());
    }

    #[test]
    fn test_monday_crossing_resets_all_customers() {
        let mut engine = engine();

        // Fill customer 1234 to the daily cap on Friday 2000-01-07
        engine
            .evaluate(&event("1", "1234", "5000.00", "2000-01-07T01:00:00Z"))
            .unwrap();
        engine
            .evaluate(&event("2", "5678", "3000.00", "2000-01-07T02:00:00Z"))
            .unwrap();

        // Would breach the daily cap within the same window
        let rejected = engine
            .evaluate(&event("3", "1234", "1.00", "2000-01-07T03:00:00Z"))
            .unwrap();
        assert!(!rejected.accepted);

        // Monday 2000-01-10 crossed: all customers start a fresh window
        let fresh = engine
            .evaluate(&event("4", "1234", "5000.00", "2000-01-10T01:00:00Z"))
            .unwrap();
        assert!(fresh.accepted);
        assert_eq!(engine.ledger().weekly_total("5678"), Decimal::ZERO);

        // Seen ids survive the reset
        let duplicate = engine.evaluate(&event("2", "5678", "1.00", "2000-01-10T02:00:00Z"));
        assert!(duplicate.is_none());
    }

    #[test]
    fn test_duplicate_does_not_trigger_reset() {
        let mut engine = engine();

        engine
            .evaluate(&event("1", "1234", "4000.00", "2000-01-07T01:00:00Z"))
            .unwrap();

        // A duplicate dated after the next Monday is dropped before the
        // window check, so the aggregates survive
        let duplicate = engine.evaluate(&event("1", "1234", "4000.00", "2000-01-11T01:00:00Z"));
        assert!(duplicate.is_none());
        assert_eq!(engine.ledger().weekly_total("1234"), "4000.00".parse().unwrap());
    }

    #[test]
    fn test_accepted_count_matches_weekly_count() {
        let mut engine = engine();

        let mut accepted = 0;
        let amounts = ["2000.00", "2000.00", "2000.00", "2000.00"];
        for (i, amount) in amounts.iter().enumerate() {
            let decision = engine
                .evaluate(&event(
                    &i.to_string(),
                    "1234",
                    amount,
                    &format!("2000-01-03T0{}:00:00Z", i + 1),
                ))
                .unwrap();
            if decision.accepted {
                accepted += 1;
            }
        }

        // Third load breaches the 5000 daily cap, fourth breaches count too
        assert_eq!(accepted, 2);
        assert_eq!(engine.ledger().weekly_count("1234"), accepted);
    }
}
