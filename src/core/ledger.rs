//! Ledger module
//!
//! This module provides the `Ledger` struct which maintains, per customer,
//! the set of already-seen event ids and the per-weekday load aggregates
//! for the current weekly window.
//!
//! The Ledger is responsible for:
//! - Creating customer entries lazily on first event
//! - Suppressing duplicate event ids (the seen-id set only grows)
//! - Accumulating load amounts and counts per weekday
//! - Restoring a weekday aggregate exactly when a load is rolled back
//! - Clearing all weekday aggregates on a weekly window rollover
//!
//! Aggregate updates are pure value replacement (read old, compute new,
//! write new) rather than in-place increment, which keeps rollback a plain
//! restore of the captured pre-mutation value.

use crate::types::{CustomerId, EventId, LoadEvent, VelocityLimits};
use chrono::{Datelike, Weekday};
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

/// Total load amount and load count for one (customer, weekday) pair
///
/// One instance exists per weekday a customer has loaded on within the
/// current weekly window. Reset to absent when the window rolls over.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DailyAggregate {
    /// Sum of accepted load amounts on this weekday
    pub amount: Decimal,

    /// Number of accepted loads on this weekday
    pub count: u32,
}

/// Per-customer ledger state
///
/// The seen-id set survives weekly resets; only the weekday aggregates
/// are cleared when a new week begins.
#[derive(Debug, Default)]
struct CustomerEntry {
    /// Every event id ever observed for this customer
    seen_ids: HashSet<EventId>,

    /// Load aggregates for the current weekly window, keyed by weekday
    by_weekday: HashMap<Weekday, DailyAggregate>,
}

/// Holds all customer load state for the duration of a run
///
/// The Ledger maintains an in-memory map of customer ids to ledger entries.
/// It is exclusively owned by the decision engine; there is a single writer
/// and no interior synchronization.
#[derive(Debug, Default)]
pub struct Ledger {
    /// Map of customer ids to their ledger entries
    customers: HashMap<CustomerId, CustomerEntry>,
}

impl Ledger {
    /// Create a new Ledger with no customer entries
    pub fn new() -> Self {
        Ledger {
            customers: HashMap::new(),
        }
    }

    /// Check whether an event id has already been seen for a customer
    ///
    /// Customers with no prior entry return false. No side effect.
    ///
    /// # Arguments
    ///
    /// * `customer_id` - The customer to check
    /// * `event_id` - The event id to look up
    ///
    /// # Returns
    ///
    /// `true` iff the id is already present in that customer's seen set
    pub fn is_duplicate(&self, customer_id: &str, event_id: &str) -> bool {
        self.customers
            .get(customer_id)
            .is_some_and(|entry| entry.seen_ids.contains(event_id))
    }

    /// Record an event and accumulate it into its weekday aggregate
    ///
    /// Creates the customer entry if absent, adds the event id to the seen
    /// set, and replaces the weekday aggregate with one carrying the added
    /// amount and an incremented count.
    ///
    /// The caller must have checked [`Ledger::is_duplicate`] first; this
    /// operation assumes a non-duplicate event.
    ///
    /// # Arguments
    ///
    /// * `event` - The load event to record
    ///
    /// # Returns
    ///
    /// The pre-mutation aggregate for the event's weekday, to be handed
    /// back to [`Ledger::rollback`] if the load ends up rejected. A weekday
    /// with no prior loads yields the zero aggregate.
    pub fn record_and_accumulate(&mut self, event: &LoadEvent) -> DailyAggregate {
        let weekday = event.time.weekday();
        let entry = self.customers.entry(event.customer_id.clone()).or_default();

        entry.seen_ids.insert(event.id.clone());

        let previous = entry.by_weekday.get(&weekday).copied().unwrap_or_default();
        entry.by_weekday.insert(
            weekday,
            DailyAggregate {
                amount: previous.amount + event.amount,
                count: previous.count + 1,
            },
        );

        previous
    }

    /// Restore a weekday aggregate to its captured pre-mutation value
    ///
    /// Used to undo a tentative accumulation when a load is rejected. The
    /// restore is exact: the aggregate is set back to the given value, not
    /// blindly cleared. A pre-mutation value with zero count means the
    /// weekday had no loads before this event, so the entry is removed
    /// entirely and the customer state is observationally identical to
    /// before the event. The seen-id set is left as is - a rejected load
    /// is still a decided load.
    ///
    /// # Arguments
    ///
    /// * `customer_id` - The customer whose aggregate to restore
    /// * `weekday` - The weekday the event accumulated into
    /// * `previous` - The aggregate captured by `record_and_accumulate`
    pub fn rollback(&mut self, customer_id: &str, weekday: Weekday, previous: DailyAggregate) {
        if let Some(entry) = self.customers.get_mut(customer_id) {
            if previous.count == 0 {
                entry.by_weekday.remove(&weekday);
            } else {
                entry.by_weekday.insert(weekday, previous);
            }
        }
    }

    /// Clear every customer's weekday aggregates
    ///
    /// Called exactly once per detected weekly-window rollover. Seen-id
    /// sets are untouched: duplicate suppression spans window boundaries.
    pub fn reset_all_weekly_aggregates(&mut self) {
        for entry in self.customers.values_mut() {
            entry.by_weekday.clear();
        }
    }

    /// Evaluate the velocity rules against a customer's current aggregates
    ///
    /// Scans every weekday aggregate held for the customer: any weekday
    /// amount strictly above the daily maximum, any weekday count strictly
    /// above the daily count maximum, or a cross-weekday amount sum strictly
    /// above the weekly maximum rejects. Values exactly equal to a maximum
    /// pass. Scanning all weekdays (not just the event's own) means a
    /// pre-existing breach rejects any further load for that customer.
    ///
    /// # Arguments
    ///
    /// * `customer_id` - The customer to evaluate
    /// * `limits` - The three velocity thresholds
    ///
    /// # Returns
    ///
    /// `true` if the customer's aggregates are within all three limits
    pub fn within_limits(&self, customer_id: &str, limits: &VelocityLimits) -> bool {
        let Some(entry) = self.customers.get(customer_id) else {
            return true;
        };

        let mut weekly_total = Decimal::ZERO;
        for aggregate in entry.by_weekday.values() {
            if aggregate.amount > limits.daily_max_amount {
                return false;
            }
            if aggregate.count > limits.daily_max_count {
                return false;
            }
            weekly_total += aggregate.amount;
        }

        weekly_total <= limits.weekly_max_amount
    }

    /// Get a customer's aggregate for one weekday
    ///
    /// # Returns
    ///
    /// * `Some(DailyAggregate)` - If the customer has loads on that weekday
    /// * `None` - If the customer or weekday has no aggregate
    pub fn day_aggregate(&self, customer_id: &str, weekday: Weekday) -> Option<DailyAggregate> {
        self.customers
            .get(customer_id)?
            .by_weekday
            .get(&weekday)
            .copied()
    }

    /// Sum of a customer's aggregate amounts across all weekdays
    ///
    /// Returns zero for unknown customers.
    pub fn weekly_total(&self, customer_id: &str) -> Decimal {
        self.customers
            .get(customer_id)
            .map(|entry| entry.by_weekday.values().map(|a| a.amount).sum())
            .unwrap_or(Decimal::ZERO)
    }

    /// Sum of a customer's aggregate counts across all weekdays
    ///
    /// Equals the number of accepted loads for the customer since the last
    /// weekly reset. Returns zero for unknown customers.
    pub fn weekly_count(&self, customer_id: &str) -> u32 {
        self.customers
            .get(customer_id)
            .map(|entry| entry.by_weekday.values().map(|a| a.count).sum())
            .unwrap_or(0)
    }
}
