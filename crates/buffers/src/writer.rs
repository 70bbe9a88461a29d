//! Binary buffer writer with auto-growing capacity.

/// A binary buffer writer that grows automatically as needed.
///
/// # Example
///
/// ```
/// use ycs_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.f32(1.0);
/// let data = writer.flush();
/// assert_eq!(data, [0x01, 0x3f, 0x80, 0x00, 0x00]);
/// ```
pub struct Writer {
    /// The underlying byte buffer.
    pub uint8: Vec<u8>,
    /// Position where last flush happened.
    pub x0: usize,
    /// Current cursor position.
    pub x: usize,
    /// Allocation size when buffer needs to grow.
    alloc_size: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with the default allocation size (4KB).
    pub fn new() -> Self {
        Self::with_alloc_size(4 * 1024)
    }

    /// Creates a new writer with a custom allocation size.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        Self {
            uint8: vec![0u8; alloc_size],
            x0: 0,
            x: 0,
            alloc_size,
        }
    }

    /// Number of bytes written since the last flush.
    pub fn len(&self) -> usize {
        self.x - self.x0
    }

    /// Returns `true` if nothing was written since the last flush.
    pub fn is_empty(&self) -> bool {
        self.x == self.x0
    }

    /// Ensures the buffer has at least `capacity` bytes available.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let remaining = self.uint8.len() - self.x;
        if remaining < capacity {
            let total = self.uint8.len() - self.x0;
            let required = capacity - remaining;
            let total_required = total + required;
            let new_size = if total_required <= self.alloc_size {
                self.alloc_size
            } else {
                total_required * 2
            };
            self.grow(new_size);
        }
    }

    fn grow(&mut self, new_size: usize) {
        let x0 = self.x0;
        let x = self.x;
        let mut new_buf = vec![0u8; new_size];
        new_buf[..x - x0].copy_from_slice(&self.uint8[x0..x]);
        self.uint8 = new_buf;
        self.x = x - x0;
        self.x0 = 0;
    }

    /// Returns the written data and advances the flush position.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.uint8[self.x0..self.x].to_vec();
        self.x0 = self.x;
        result
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.ensure_capacity(1);
        self.uint8[self.x] = val;
        self.x += 1;
    }

    /// Writes a signed 64-bit integer (big-endian).
    #[inline]
    pub fn i64(&mut self, val: i64) {
        self.buf(&val.to_be_bytes());
    }

    /// Writes a 64-bit floating point number (big-endian).
    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.buf(&val.to_be_bytes());
    }

    /// Writes a 32-bit floating point number (big-endian).
    #[inline]
    pub fn f32(&mut self, val: f32) {
        self.buf(&val.to_be_bytes());
    }

    /// Writes raw bytes.
    pub fn buf(&mut self, buf: &[u8]) {
        let length = buf.len();
        self.ensure_capacity(length);
        self.uint8[self.x..self.x + length].copy_from_slice(buf);
        self.x += length;
    }

    /// Writes the bytes of a UTF-8 string and returns the byte length written.
    pub fn utf8(&mut self, s: &str) -> usize {
        self.buf(s.as_bytes());
        s.len()
    }
}
