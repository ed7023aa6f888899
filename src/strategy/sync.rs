//! Synchronous processing strategy
//!
//! This module provides a synchronous, single-threaded implementation of
//! the ProcessingStrategy trait. It orchestrates processing by coordinating
//! between the SyncReader (for line input) and DecisionEngine (for the
//! velocity rules).
//!
//! # Design
//!
//! The SyncProcessingStrategy focuses on orchestration, delegating:
//! - Line parsing to `SyncReader` (iterator interface)
//! - Decision making to `DecisionEngine` (business logic)
//! - Output formatting to `json_format::write_decision`
//!
//! # Memory Efficiency
//!
//! This strategy maintains constant memory per event: lines are streamed
//! one at a time and decisions are written as they are produced. Resident
//! state is the ledger itself, O(customers + seen ids).

use crate::core::DecisionEngine;
use crate::io::json_format::write_decision;
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::{VelocityError, VelocityLimits};
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// Streams events through the decision engine in file order and writes
/// one decision line per non-duplicate event.
///
/// # Error Handling
///
/// Fatal errors (file not found, output write failure) are returned
/// immediately. Per-line parse errors are logged to stderr and the line
/// is skipped; the ledger is never touched by a malformed line.
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(
        &self,
        input_path: &Path,
        limits: VelocityLimits,
        output: &mut dyn Write,
    ) -> Result<(), VelocityError> {
        let mut engine = DecisionEngine::new(limits);

        let reader = SyncReader::new(input_path)?;

        for result in reader {
            match result {
                Ok(event) => {
                    // Duplicates yield no decision and produce no output line
                    if let Some(decision) = engine.evaluate(&event) {
                        write_decision(&decision, output)?;
                    }
                }
                Err(e) => {
                    eprintln!("Skipping malformed line: {}", e);
                }
            }
        }

        Ok(())
    }
}
