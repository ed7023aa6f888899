//! Event-related types for the Rust Velocity Engine
//!
//! This module defines the load event consumed by the decision engine,
//! the decision record it emits, and the velocity limit thresholds.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Load event identifier
///
/// Unique per customer; the same id may appear again under a different
/// customer and is then treated as a distinct event.
pub type EventId = String;

/// Customer identifier
pub type CustomerId = String;

/// A single load (deposit) request, parsed and validated
///
/// Represents one line of input after the I/O layer has stripped the
/// currency symbol and parsed the amount and timestamp. Immutable once
/// constructed; the weekday is derived from `time` at evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadEvent {
    /// Event identifier, unique within one customer's history
    pub id: EventId,

    /// Customer this load applies to
    pub customer_id: CustomerId,

    /// Load amount, non-negative
    pub amount: Decimal,

    /// Time the load was attempted (UTC)
    pub time: DateTime<Utc>,
}

/// Outcome of evaluating one load event
///
/// Serialized as one JSON object per line. Field declaration order matters:
/// serde_json emits fields in this order, and the output contract is
/// `id, customer_id, accepted`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionRecord {
    /// The evaluated event's identifier
    pub id: EventId,

    /// The customer the event applied to
    pub customer_id: CustomerId,

    /// Whether the load was accepted
    pub accepted: bool,
}

/// The three velocity thresholds enforced by the decision engine
///
/// A value exactly equal to a maximum is still accepted; only values
/// strictly above a maximum are rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityLimits {
    /// Maximum total amount loadable per customer per day
    pub daily_max_amount: Decimal,

    /// Maximum number of loads per customer per day, regardless of amount
    pub daily_max_count: u32,

    /// Maximum total amount loadable per customer per week
    pub weekly_max_amount: Decimal,
}

impl Default for VelocityLimits {
    /// The limits the original system shipped with:
    /// $5,000 per day, 3 loads per day, $20,000 per week.
    fn default() -> Self {
        VelocityLimits {
            daily_max_amount: Decimal::new(5_000_00, 2),
            daily_max_count: 3,
            weekly_max_amount: Decimal::new(20_000_00, 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits_match_shipped_values() {
        let limits = VelocityLimits::default();
        assert_eq!(limits.daily_max_amount, Decimal::new(500000, 2));
        assert_eq!(limits.daily_max_count, 3);
        assert_eq!(limits.weekly_max_amount, Decimal::new(2000000, 2));
    }

    #[test]
    fn test_decision_record_field_order() {
        let record = DecisionRecord {
            id: "15887".to_string(),
            customer_id: "528".to_string(),
            accepted: true,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"id":"15887","customer_id":"528","accepted":true}"#
        );
    }
}
