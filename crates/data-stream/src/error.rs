//! Decode error type.

use data_stream_buffers::BufferError;
use thiserror::Error;

use crate::Tag;

/// Error type for reading values back out of a [`Stream`](crate::Stream).
///
/// Writes never fail. Every variant here is a decode failure; none of them
/// roll back elements already inserted into a destination container.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The byte at the cursor is not the tag the read expected. The cursor
    /// is left on that byte.
    #[error("expected {expected} tag at position {position}, found byte 0x{found:02x}")]
    TagMismatch {
        expected: Tag,
        found: u8,
        position: usize,
    },
    /// A length or element count decoded to a negative value.
    #[error("negative length {length} at position {position}")]
    NegativeLength { length: i32, position: usize },
    /// String payload is not valid UTF-8.
    #[error("invalid UTF-8 in string at position {position}")]
    InvalidUtf8 { position: usize },
    /// Fewer bytes remain than the value needs.
    #[error(transparent)]
    Buffer(#[from] BufferError),
}

pub type Result<T> = std::result::Result<T, Error>;
