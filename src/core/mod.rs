//! Core business logic module
//!
//! This module contains the core decision components:
//! - `ledger` - Per-customer duplicate suppression and weekday aggregates
//! - `engine` - Per-event decision orchestration (duplicates, weekly reset,
//!   rule evaluation, rollback)
//! - `window` - Monday-boundary detection for the weekly window

pub mod engine;
pub mod ledger;
pub mod window;

pub use engine::DecisionEngine;
pub use ledger::{DailyAggregate, Ledger};
