//! Asynchronous line reader
//!
//! Provides an async streaming interface over load events from a
//! newline-delimited JSON file.
//!
//! # Design
//!
//! The AsyncReader uses:
//! - tokio buffered line reading for async file I/O
//! - the json_format module for parsing and validation
//!
//! Events are yielded strictly one at a time in file order. The decision
//! engine is order-dependent (rolling aggregates plus a global weekly
//! reset), so there is deliberately no batch or out-of-order interface.

use crate::io::json_format;
use crate::types::{LoadEvent, VelocityError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

/// Asynchronous newline-delimited JSON reader
///
/// Yields load events in file order with constant memory usage.
pub struct AsyncReader<R: AsyncBufRead + Unpin> {
    lines: Lines<R>,
    line_num: u64,
}

impl AsyncReader<BufReader<tokio::fs::File>> {
    /// Open a file and create an AsyncReader over it
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the input file
    ///
    /// # Returns
    ///
    /// * `Ok(AsyncReader)` if the file opened successfully
    /// * `Err(VelocityError)` if the file could not be opened
    pub async fn open(path: &std::path::Path) -> Result<Self, VelocityError> {
        let file = tokio::fs::File::open(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VelocityError::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                VelocityError::from(e)
            }
        })?;

        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: AsyncBufRead + Unpin> AsyncReader<R> {
    /// Create a new AsyncReader from an async buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_num: 0,
        }
    }

    /// Get the next load event from the input
    ///
    /// Blank lines are skipped; parse errors carry the line number.
    ///
    /// # Returns
    ///
    /// * `Some(Ok(LoadEvent))` - Successfully parsed event
    /// * `Some(Err(VelocityError))` - Read or parse error
    /// * `None` - End of input reached
    pub async fn next_event(&mut self) -> Option<Result<LoadEvent, VelocityError>> {
        loop {
            let line = match self.lines.next_line().await {
                Ok(Some(text)) => text,
                Ok(None) => return None,
                Err(e) => return Some(Err(VelocityError::from(e))),
            };
            self.line_num += 1;

            if line.trim().is_empty() {
                continue;
            }

            return Some(json_format::parse_line(&line).map_err(|e| match e {
                VelocityError::ParseError { message, .. } => {
                    VelocityError::parse_error(self.line_num, message)
                }
                other => VelocityError::parse_error(self.line_num, other.to_string()),
            }));
        }
    }
}
