//! Synchronous line reader with iterator interface
//!
//! Provides a streaming iterator over load events from a newline-delimited
//! JSON file. Delegates format concerns to the json_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<LoadEvent, VelocityError>` for each input line. Blank lines are
//! skipped. Parse errors carry the line number for diagnostics.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found) are returned from `new()`
//! - Individual line parse errors are yielded as Err variants so the
//!   caller can log and continue
//!
//! # Memory Efficiency
//!
//! Lines are read one at a time through a buffered reader; memory usage is
//! O(longest line), not O(file size).

use crate::io::json_format;
use crate::types::{LoadEvent, VelocityError};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// Synchronous newline-delimited JSON reader
///
/// Provides an iterator interface over load events, streaming the file
/// line by line.
#[derive(Debug)]
pub struct SyncReader {
    lines: Lines<BufReader<File>>,
    line_num: u64,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the input file
    ///
    /// # Returns
    ///
    /// * `Ok(SyncReader)` if the file opened successfully
    /// * `Err(VelocityError)` if the file could not be opened
    pub fn new(path: &Path) -> Result<Self, VelocityError> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VelocityError::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                VelocityError::from(e)
            }
        })?;

        Ok(Self {
            lines: BufReader::new(file).lines(),
            line_num: 0,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<LoadEvent, VelocityError>;

    /// Get the next load event from the input file
    ///
    /// # Returns
    ///
    /// * `Some(Ok(LoadEvent))` - Successfully parsed event
    /// * `Some(Err(VelocityError))` - Read or parse error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_num += 1;

            match line {
                Ok(text) => {
                    if text.trim().is_empty() {
                        continue;
                    }
                    return Some(json_format::parse_line(&text).map_err(|e| match e {
                        VelocityError::ParseError { message, .. } => {
                            VelocityError::parse_error(self.line_num, message)
                        }
                        other => VelocityError::parse_error(self.line_num, other.to_string()),
                    }));
                }
                Err(e) => return Some(Err(VelocityError::from(e))),
            }
        }
    }
}
