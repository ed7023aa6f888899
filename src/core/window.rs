//! Weekly window boundary detection
//!
//! The weekly window rolls over when the interval between the running
//! anchor and an incoming event's timestamp crosses at least one Monday.
//! Detection steps day by day from the anchor's calendar day: the first
//! candidate day is the one after the anchor's day, and a candidate counts
//! only if its midnight is on or before the event's timestamp.

use chrono::{DateTime, Datelike, NaiveTime, Utc, Weekday};

/// Check whether a Monday boundary lies between an anchor and a timestamp
///
/// Returns true iff there exists a calendar day strictly after the anchor's
/// day and on/before `ts` whose weekday is Monday. If `ts` is not strictly
/// after `anchor`, no crossing is reported regardless of weekday content.
///
/// An event landing exactly at a Monday midnight counts as a crossing: the
/// candidate day's midnight is compared inclusively against `ts`.
///
/// # Arguments
///
/// * `anchor` - Timestamp of the most recent processed event
/// * `ts` - Timestamp of the incoming event
pub fn crossed_monday(anchor: DateTime<Utc>, ts: DateTime<Utc>) -> bool {
    if anchor >= ts {
        return false;
    }

    let mut day = anchor.date_naive();
    loop {
        let Some(next) = day.succ_opt() else {
            return false;
        };
        day = next;

        if day.and_time(NaiveTime::MIN).and_utc() > ts {
            return false;
        }
        if day.weekday() == Weekday::Mon {
            return true;
        }
    }
}
