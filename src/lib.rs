//! Rust Velocity Engine Library
//! # Overview
//!
//! This library enforces velocity limits on a stream of account load
//! (deposit) requests: for each load event it decides whether the load is
//! accepted or rejected according to per-day and per-week thresholds,
//! emitting one JSON decision record per non-duplicate input event.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (LoadEvent, DecisionRecord, limits, errors)
//! - [`cli`] - CLI argument parsing
//! - [`config`] - JSON configuration file loading
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Per-event decision orchestration
//!   - [`core::ledger`] - Per-customer duplicate suppression and weekday aggregates
//!   - [`core::window`] - Weekly window boundary detection
//! - [`io`] - Line-oriented JSON input/output with sync and async readers
//! - [`strategy`] - Pluggable I/O pipelines over the one sequential engine
//!
//! # Velocity Rules
//!
//! A load is rejected when, after tentatively applying it, any of these
//! holds for the customer:
//!
//! - A weekday's loaded amount exceeds the daily maximum
//! - A weekday's load count exceeds the daily count maximum
//! - The amount summed across the week's weekdays exceeds the weekly maximum
//!
//! Values exactly equal to a maximum are accepted. A rejected load is
//! rolled back exactly and never counts toward future checks. The weekly
//! window rolls over when the gap between consecutive events crosses a
//! Monday; the rollover clears every customer's aggregates at once but
//! never the seen-id sets, so duplicate suppression spans windows.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use config::Config;
pub use core::{DailyAggregate, DecisionEngine, Ledger};
pub use io::write_decision;
pub use types::{
    CustomerId, DecisionRecord, EventId, LoadEvent, VelocityError, VelocityLimits,
};
