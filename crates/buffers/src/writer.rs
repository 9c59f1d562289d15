//! Append-only binary buffer writer.

/// A binary buffer writer that appends data to an auto-growing buffer.
///
/// All multi-byte values are written in native byte order. Writes never
/// fail; the buffer grows as needed.
///
/// # Example
///
/// ```
/// use data_stream_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.i64(1);
/// assert_eq!(writer.len(), 9);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Writer {
    uint8: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self { uint8: Vec::new() }
    }

    /// Creates an empty writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Wraps bytes produced elsewhere; further writes append after them.
    pub fn from_vec(uint8: Vec<u8>) -> Self {
        Self { uint8 }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Borrows everything written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.uint8
    }

    /// Discards all written bytes, keeping the allocation.
    pub fn reset(&mut self) {
        self.uint8.clear();
    }

    /// Returns the written bytes and leaves the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }

    /// Consumes the writer and returns the written bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.uint8
    }

    /// Appends raw bytes.
    #[inline]
    pub fn buf(&mut self, data: &[u8]) {
        self.uint8.extend_from_slice(data);
    }

    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.uint8.push(val);
    }

    #[inline]
    pub fn i8(&mut self, val: i8) {
        self.uint8.push(val as u8);
    }

    #[inline]
    pub fn i32(&mut self, val: i32) {
        self.buf(&val.to_ne_bytes());
    }

    #[inline]
    pub fn i64(&mut self, val: i64) {
        self.buf(&val.to_ne_bytes());
    }

    #[inline]
    pub fn f32(&mut self, val: f32) {
        self.buf(&val.to_ne_bytes());
    }

    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.buf(&val.to_ne_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        let mut writer = Writer::new();
        writer.u8(1);
        assert_eq!(writer.len(), 1);
        writer.i32(2);
        assert_eq!(writer.len(), 5);
        writer.f32(3.0);
        assert_eq!(writer.len(), 9);
        writer.i64(4);
        assert_eq!(writer.len(), 17);
        writer.f64(5.0);
        assert_eq!(writer.len(), 25);
    }

    #[test]
    fn test_native_order() {
        let mut writer = Writer::new();
        writer.i32(0x0102_0304);
        assert_eq!(writer.as_slice(), &0x0102_0304i32.to_ne_bytes());
    }

    #[test]
    fn test_flush_empties() {
        let mut writer = Writer::new();
        writer.buf(b"abc");
        assert_eq!(writer.flush(), b"abc".to_vec());
        assert!(writer.is_empty());
    }

    #[test]
    fn test_from_vec_appends() {
        let mut writer = Writer::from_vec(vec![9]);
        writer.u8(8);
        assert_eq!(writer.into_vec(), vec![9, 8]);
    }
}
