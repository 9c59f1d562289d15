//! The tagged byte stream.

use std::ops::Shl;

use data_stream_buffers::{BufferError, Reader, Writer};

use crate::{Decode, Encode, Error, Result, Serializable, Tag};

/// An append-only byte buffer with a forward-only read cursor.
///
/// Values go in with [`write`](Stream::write) and come back out with
/// [`read`](Stream::read), in the same order. Writes append to the end of
/// the buffer and never touch the cursor; reads advance the cursor and never
/// touch the buffer. Writing after reading is allowed but the new bytes land
/// after everything already in the buffer, not at the cursor.
///
/// Every read checks its tag and the remaining length before consuming
/// anything, so a failed primitive or string read leaves the cursor where it
/// was.
///
/// # Example
///
/// ```
/// use data_stream::Stream;
///
/// let mut ds = Stream::new();
/// let _ = &mut ds << true << b'x' << 123 << 1234i64 << 123.0f32 << 123.4 << "hello world";
/// assert_eq!(ds.size(), 2 + 2 + 5 + 9 + 5 + 9 + (1 + 4 + 11));
///
/// assert_eq!(ds.read::<bool>().unwrap(), true);
/// assert_eq!(ds.read::<u8>().unwrap(), b'x');
/// assert_eq!(ds.read::<i32>().unwrap(), 123);
/// assert_eq!(ds.read::<i64>().unwrap(), 1234);
/// assert_eq!(ds.read::<f32>().unwrap(), 123.0);
/// assert_eq!(ds.read::<f64>().unwrap(), 123.4);
/// assert_eq!(ds.read::<String>().unwrap(), "hello world");
/// assert!(ds.is_exhausted());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stream {
    writer: Writer,
    x: usize,
}

impl Stream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty stream with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            writer: Writer::with_capacity(capacity),
            x: 0,
        }
    }

    /// Wraps bytes produced by another stream, ready to be read from the start.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            writer: Writer::from_vec(bytes),
            x: 0,
        }
    }

    /// Total number of bytes in the buffer.
    pub fn size(&self) -> usize {
        self.writer.len()
    }

    /// Current read cursor.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Bytes between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.writer.len() - self.x
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.writer.as_slice()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_vec()
    }

    /// The tag at the cursor, if the byte there is a recognized tag.
    pub fn peek_tag(&self) -> Option<Tag> {
        self.reader().peek().and_then(Tag::from_byte)
    }

    // ---------------------------------------------------------------- write

    /// Appends raw bytes with no tag.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.writer.buf(bytes);
    }

    pub fn write_tag(&mut self, tag: Tag) {
        self.writer.u8(tag.as_byte());
    }

    /// Writes a 4-byte length or element count.
    ///
    /// # Panics
    ///
    /// Panics if `len` does not fit in an `i32`; the wire format cannot
    /// represent it.
    pub fn write_len(&mut self, len: usize) {
        let len = match i32::try_from(len) {
            Ok(len) => len,
            Err(_) => panic!("length {len} exceeds the 32-bit wire limit"),
        };
        self.writer.i32(len);
    }

    pub(crate) fn write_bool(&mut self, value: bool) {
        self.write_tag(Tag::Bool);
        self.writer.u8(value as u8);
    }

    pub(crate) fn write_char(&mut self, value: u8) {
        self.write_tag(Tag::Char);
        self.writer.u8(value);
    }

    pub(crate) fn write_i32(&mut self, value: i32) {
        self.write_tag(Tag::Int32);
        self.writer.i32(value);
    }

    pub(crate) fn write_i64(&mut self, value: i64) {
        self.write_tag(Tag::Int64);
        self.writer.i64(value);
    }

    pub(crate) fn write_f32(&mut self, value: f32) {
        self.write_tag(Tag::Float);
        self.writer.f32(value);
    }

    pub(crate) fn write_f64(&mut self, value: f64) {
        self.write_tag(Tag::Double);
        self.writer.f64(value);
    }

    pub(crate) fn write_str(&mut self, value: &str) {
        self.write_tag(Tag::String);
        self.write_len(value.len());
        self.writer.buf(value.as_bytes());
    }

    /// Writes a container tag and element count.
    pub(crate) fn write_header(&mut self, tag: Tag, len: usize) {
        self.write_tag(tag);
        self.write_len(len);
    }

    /// Appends one value.
    pub fn write<T: Encode + ?Sized>(&mut self, value: &T) {
        value.encode(self);
    }

    /// Appends an aggregate through its [`Serializable`] implementation.
    pub fn write_serializable(&mut self, value: &dyn Serializable) {
        value.serialize(self);
    }

    /// Appends one value and returns the stream for chaining.
    pub fn push<T: Encode + ?Sized>(&mut self, value: &T) -> &mut Self {
        self.write(value);
        self
    }

    // ---------------------------------------------------------------- read

    fn reader(&self) -> Reader<'_> {
        Reader::from_slice(self.writer.as_slice(), self.x, self.writer.len())
    }

    /// Positions a reader just past the expected tag, without committing.
    fn begin(&self, expected: Tag) -> Result<Reader<'_>> {
        let mut reader = self.reader();
        match reader.peek() {
            None => Err(trace(BufferError::EndOfBuffer {
                needed: 1,
                remaining: 0,
            })),
            Some(found) if found != expected.as_byte() => Err(trace(Error::TagMismatch {
                expected,
                found,
                position: self.x,
            })),
            Some(_) => {
                reader.skip(1)?;
                Ok(reader)
            }
        }
    }

    /// Checks and consumes the tag at the cursor.
    ///
    /// On mismatch the cursor stays on the offending byte.
    pub fn read_tag(&mut self, expected: Tag) -> Result<()> {
        let x = self.begin(expected)?.x;
        self.x = x;
        Ok(())
    }

    /// Reads a 4-byte length or element count, rejecting negative values.
    pub fn read_len(&mut self) -> Result<usize> {
        let mut reader = self.reader();
        let len = read_len(&mut reader)?;
        let x = reader.x;
        self.x = x;
        Ok(len)
    }

    fn read_fixed<T>(
        &mut self,
        tag: Tag,
        payload: impl FnOnce(&mut Reader<'_>) -> std::result::Result<T, BufferError>,
    ) -> Result<T> {
        let mut reader = self.begin(tag)?;
        if let Some(width) = tag.fixed_width() {
            let remaining = reader.size();
            if remaining < width {
                return Err(trace(BufferError::EndOfBuffer {
                    needed: width,
                    remaining,
                }));
            }
        }
        let value = payload(&mut reader).map_err(trace)?;
        let x = reader.x;
        self.x = x;
        Ok(value)
    }

    pub(crate) fn read_bool(&mut self) -> Result<bool> {
        self.read_fixed(Tag::Bool, |r| r.u8().map(|b| b != 0))
    }

    pub(crate) fn read_char(&mut self) -> Result<u8> {
        self.read_fixed(Tag::Char, |r| r.u8())
    }

    pub(crate) fn read_i32(&mut self) -> Result<i32> {
        self.read_fixed(Tag::Int32, |r| r.i32())
    }

    pub(crate) fn read_i64(&mut self) -> Result<i64> {
        self.read_fixed(Tag::Int64, |r| r.i64())
    }

    pub(crate) fn read_f32(&mut self) -> Result<f32> {
        self.read_fixed(Tag::Float, |r| r.f32())
    }

    pub(crate) fn read_f64(&mut self) -> Result<f64> {
        self.read_fixed(Tag::Double, |r| r.f64())
    }

    pub(crate) fn read_string(&mut self) -> Result<String> {
        let mut reader = self.begin(Tag::String)?;
        let len = read_len(&mut reader)?;
        let position = reader.x;
        let bytes = reader.buf(len).map_err(trace)?;
        let value = std::str::from_utf8(bytes)
            .map_err(|_| trace(Error::InvalidUtf8 { position }))?
            .to_owned();
        let x = reader.x;
        self.x = x;
        Ok(value)
    }

    /// Reads a container tag and element count.
    pub(crate) fn read_header(&mut self, tag: Tag) -> Result<usize> {
        let mut reader = self.begin(tag)?;
        let len = read_len(&mut reader)?;
        let x = reader.x;
        self.x = x;
        Ok(len)
    }

    /// Element capacity worth reserving for a count read off the wire.
    ///
    /// Every encoded value takes at least one byte, so a count larger than
    /// the remaining input cannot be satisfied and must not drive allocation.
    pub(crate) fn reserve_hint(&self, len: usize) -> usize {
        len.min(self.remaining())
    }

    /// Reads one value of the expected type.
    pub fn read<T: Decode>(&mut self) -> Result<T> {
        T::decode(self)
    }

    /// Reads into an existing value.
    ///
    /// Containers are extended rather than replaced, and a failed container
    /// read leaves whatever elements were decoded before the failure in
    /// `value`, with the cursor after the last fully read element.
    pub fn read_into<T: Decode>(&mut self, value: &mut T) -> Result<()> {
        value.decode_in_place(self)
    }

    /// Reads an aggregate through its [`Serializable`] implementation.
    pub fn read_serializable(&mut self, value: &mut dyn Serializable) -> Result<()> {
        value.deserialize(self)
    }

    /// Reads into `value` and returns the stream for chaining.
    pub fn pull<T: Decode>(&mut self, value: &mut T) -> Result<&mut Self> {
        self.read_into(value)?;
        Ok(self)
    }
}

fn read_len(reader: &mut Reader<'_>) -> Result<usize> {
    let position = reader.x;
    let mut peek = reader.clone();
    let length = peek.i32().map_err(trace)?;
    if length < 0 {
        return Err(trace(Error::NegativeLength { length, position }));
    }
    *reader = peek;
    Ok(length as usize)
}

fn trace(err: impl Into<Error>) -> Error {
    let err = err.into();
    log::trace!("data stream decode failed: {err}");
    err
}

impl<'a, T: Encode> Shl<T> for &'a mut Stream {
    type Output = &'a mut Stream;

    fn shl(self, value: T) -> Self::Output {
        self.write(&value);
        self
    }
}
