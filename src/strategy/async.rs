//! Asynchronous processing strategy
//!
//! This module provides a tokio-based implementation of the
//! ProcessingStrategy trait. Input lines are read through async file I/O;
//! evaluation stays strictly sequential because the decision engine's
//! rolling aggregates and global weekly reset depend on event order.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── tokio runtime (owned per call)
//!     ├── AsyncReader (ordered line streaming)
//!     └── DecisionEngine (same engine as the sync strategy)
//! ```

use crate::core::DecisionEngine;
use crate::io::async_reader::AsyncReader;
use crate::io::json_format::write_decision;
use crate::strategy::ProcessingStrategy;
use crate::types::{VelocityError, VelocityLimits};
use std::io::Write;
use std::path::Path;

/// Asynchronous processing strategy
///
/// Owns a multi-threaded tokio runtime for the duration of one `process`
/// call and drives the pipeline to completion on it. Decision output is
/// written synchronously as each event is evaluated, preserving arrival
/// order.
#[derive(Debug, Clone, Copy)]
pub struct AsyncProcessingStrategy;

impl AsyncProcessingStrategy {
    async fn run(
        input_path: &Path,
        limits: VelocityLimits,
        output: &mut dyn Write,
    ) -> Result<(), VelocityError> {
        let mut engine = DecisionEngine::new(limits);
        let mut reader = AsyncReader::open(input_path).await?;

        while let Some(result) = reader.next_event().await {
            match result {
                Ok(event) => {
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

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(
        &self,
        input_path: &Path,
        limits: VelocityLimits,
        output: &mut dyn Write,
    ) -> Result<(), VelocityError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .build()
            .map_err(VelocityError::from)?;

        runtime.block_on(Self::run(input_path, limits, output))
    }
}
