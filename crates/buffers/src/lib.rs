//! Byte buffer primitives for the `data-stream` codec.
//!
//! # Overview
//!
//! - [`Writer`] - Appends native-endian values to an auto-growing buffer
//! - [`Reader`] - Reads native-endian values from a byte slice with cursor tracking
//!
//! Unlike a raw cursor, every [`Reader`] read checks that enough bytes remain
//! and fails with [`BufferError::EndOfBuffer`] otherwise, leaving the cursor
//! where it was.
//!
//! # Example
//!
//! ```
//! use data_stream_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.i32(-7);
//! writer.buf(b"hello");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8().unwrap(), 0x01);
//! assert_eq!(reader.i32().unwrap(), -7);
//! assert_eq!(reader.buf(5).unwrap(), b"hello");
//! assert!(reader.u8().is_err());
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    #[error("end of buffer: needed {needed} bytes, {remaining} remaining")]
    EndOfBuffer { needed: usize, remaining: usize },
}
