//! I/O module
//!
//! Handles newline-delimited JSON parsing and decision output.
//!
//! # Components
//!
//! - `json_format` - Wire format handling (record conversion, output serialization)
//! - `sync_reader` - Synchronous line reader with iterator interface
//! - `async_reader` - Asynchronous line reader

pub mod async_reader;
pub mod json_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use json_format::{convert_raw_record, parse_line, write_decision, RawRecord};
pub use sync_reader::SyncReader;
