//! Processing strategy module
//!
//! This module defines the Strategy pattern for complete load-processing
//! pipelines, encompassing input parsing, decision evaluation, and output
//! writing. This allows different I/O implementations (synchronous,
//! asynchronous) to be selected at runtime.
//!
//! Whatever the I/O style, events reach a single `DecisionEngine` strictly
//! in file order: the engine's rolling aggregates and global weekly reset
//! depend on that order, so there is no parallel variant.

use crate::cli::StrategyType;
use crate::types::{VelocityError, VelocityLimits};
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::AsyncProcessingStrategy;
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete load-processing pipelines
///
/// Each strategy reads load records from the input file, evaluates them
/// through the decision engine, and writes one JSON decision line per
/// non-duplicate event to the provided output.
pub trait ProcessingStrategy: Send + Sync {
    /// Process load events from the input file and write decisions to output
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the newline-delimited JSON input file
    /// * `limits` - The velocity thresholds to enforce for the run
    /// * `output` - Mutable reference to a writer for decision records
    ///
    /// # Returns
    ///
    /// * `Ok(())` if processing completed (possibly with skipped lines)
    /// * `Err(VelocityError)` if a fatal error occurred
    ///
    /// # Errors
    ///
    /// Returns an error if the input file cannot be opened or the output
    /// cannot be written. Individual line parse errors are logged to
    /// stderr and processing continues with the next line.
    fn process(
        &self,
        input_path: &Path,
        limits: VelocityLimits,
        output: &mut dyn Write,
    ) -> Result<(), VelocityError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create
///
/// # Returns
///
/// A boxed trait object implementing the ProcessingStrategy trait
pub fn create_strategy(strategy_type: StrategyType) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => Box::new(AsyncProcessingStrategy),
    }
}
