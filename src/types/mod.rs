//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `event`: Load event, decision record, and limit types
//! - `error`: Error types for the velocity engine

pub mod error;
pub mod event;

pub use error::VelocityError;
pub use event::{CustomerId, DecisionRecord, EventId, LoadEvent, VelocityLimits};
