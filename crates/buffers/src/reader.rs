//! Bounds-checked binary buffer reader with cursor tracking.

use crate::BufferError;

/// A binary buffer reader that reads data from a byte slice.
///
/// The reader maintains a cursor position `x` that only moves forward.
/// Every read checks the remaining length first; a short read returns
/// [`BufferError::EndOfBuffer`] and leaves the cursor untouched.
///
/// # Example
///
/// ```
/// use data_stream_buffers::Reader;
///
/// let data = [0x01, 0x02];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8().unwrap(), 0x01);
/// assert_eq!(reader.size(), 1);
/// assert!(reader.i32().is_err());
/// assert_eq!(reader.u8().unwrap(), 0x02);
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    /// End position (exclusive).
    pub end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        let end = uint8.len();
        Self { uint8, x: 0, end }
    }

    /// Creates a reader from a slice with custom start and end positions.
    ///
    /// `end` is clamped to the slice length and `x` to `end`.
    pub fn from_slice(uint8: &'a [u8], x: usize, end: usize) -> Self {
        let end = end.min(uint8.len());
        Self {
            uint8,
            x: x.min(end),
            end,
        }
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.end - self.x
    }

    /// Peeks at the current byte without advancing the cursor.
    pub fn peek(&self) -> Option<u8> {
        if self.x < self.end {
            Some(self.uint8[self.x])
        } else {
            None
        }
    }

    fn assert_size(&self, needed: usize) -> Result<(), BufferError> {
        let remaining = self.size();
        if needed > remaining {
            return Err(BufferError::EndOfBuffer { needed, remaining });
        }
        Ok(())
    }

    /// Advances the cursor by the given number of bytes.
    pub fn skip(&mut self, length: usize) -> Result<(), BufferError> {
        self.assert_size(length)?;
        self.x += length;
        Ok(())
    }

    /// Returns a subarray of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.assert_size(size)?;
        let x = self.x;
        let end = x + size;
        self.x = end;
        Ok(&self.uint8[x..end])
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let bin = self.buf(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bin);
        Ok(out)
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        self.assert_size(1)?;
        let val = self.uint8[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self) -> Result<i8, BufferError> {
        Ok(self.u8()? as i8)
    }

    /// Reads a signed 32-bit integer (native byte order).
    #[inline]
    pub fn i32(&mut self) -> Result<i32, BufferError> {
        self.array().map(i32::from_ne_bytes)
    }

    /// Reads a signed 64-bit integer (native byte order).
    #[inline]
    pub fn i64(&mut self) -> Result<i64, BufferError> {
        self.array().map(i64::from_ne_bytes)
    }

    /// Reads a 32-bit floating point number (native byte order).
    #[inline]
    pub fn f32(&mut self) -> Result<f32, BufferError> {
        self.array().map(f32::from_ne_bytes)
    }

    /// Reads a 64-bit floating point number (native byte order).
    #[inline]
    pub fn f64(&mut self) -> Result<f64, BufferError> {
        self.array().map(f64::from_ne_bytes)
    }
}
