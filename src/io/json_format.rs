//! JSON line format handling for load records and decision output
//!
//! This module centralizes all wire format concerns, providing:
//! - RawRecord structure for deserialization of one input line
//! - Conversion from raw records to domain events (currency-symbol
//!   stripping, amount and sign validation)
//! - Decision record output serialization
//!
//! The conversion functions are pure (no I/O) for easy testing.

use crate::types::{DecisionRecord, LoadEvent, VelocityError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Raw input record structure for deserialization
///
/// Matches one line of the input file. The amount arrives as a string
/// because it carries an optional leading currency symbol; the timestamp
/// deserializes directly from its RFC 3339 representation.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RawRecord {
    pub id: String,
    pub customer_id: String,
    pub load_amount: String,
    pub time: DateTime<Utc>,
}

/// Parse one input line into a LoadEvent
///
/// Deserializes the JSON object and converts it via [`convert_raw_record`].
///
/// # Arguments
///
/// * `line` - One line of input text
///
/// # Returns
///
/// * `Ok(LoadEvent)` - Successfully parsed event
/// * `Err(VelocityError)` - JSON or amount parse failure
pub fn parse_line(line: &str) -> Result<LoadEvent, VelocityError> {
    let raw: RawRecord = serde_json::from_str(line)?;
    convert_raw_record(raw)
}

/// Convert a RawRecord to a LoadEvent
///
/// This function:
/// - Strips a single leading `$` from the amount, if present
/// - Parses the remainder into a Decimal
/// - Rejects negative amounts (loads are deposits; a negative amount is
///   a malformed event, not a withdrawal)
///
/// # Arguments
///
/// * `raw` - The deserialized input record
///
/// # Returns
///
/// * `Ok(LoadEvent)` - Successfully converted event
/// * `Err(VelocityError)` - The amount could not be interpreted
pub fn convert_raw_record(raw: RawRecord) -> Result<LoadEvent, VelocityError> {
    let amount_str = raw.load_amount.trim();
    let bare = amount_str.strip_prefix('$').unwrap_or(amount_str);

    let amount = Decimal::from_str(bare)
        .map_err(|_| VelocityError::invalid_amount(&raw.load_amount, &raw.id))?;

    if amount.is_sign_negative() {
        return Err(VelocityError::invalid_amount(&raw.load_amount, &raw.id));
    }

    Ok(LoadEvent {
        id: raw.id,
        customer_id: raw.customer_id,
        amount,
        time: raw.time,
    })
}

/// Write one decision record as a JSON line
///
/// Emits the exact field order `id, customer_id, accepted` (declaration
/// order of [`DecisionRecord`]) followed by a newline.
///
/// # Arguments
///
/// * `record` - The decision to write
/// * `output` - Mutable reference to a writer
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(VelocityError)` if serialization or the write failed
pub fn write_decision(record: &DecisionRecord, output: &mut dyn Write) -> Result<(), VelocityError> {
    let json = serde_json::to_string(record)?;
    writeln!(output, "{}", json)?;
    Ok(())
}
