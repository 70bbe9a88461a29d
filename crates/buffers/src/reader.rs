//! Binary buffer reader with cursor tracking.

use crate::BufferError;

/// A binary buffer reader over a borrowed byte slice.
///
/// The reader keeps a cursor and never reads past `end`; reads that would
/// cross it fail with [`BufferError::EndOfBuffer`] and leave the cursor
/// where it was.
///
/// # Example
///
/// ```
/// use ycs_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8(), Ok(0x01));
/// assert_eq!(reader.buf(2), Ok(&[0x02, 0x03][..]));
/// assert_eq!(reader.size(), 0);
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

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.end - self.x
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        if self.x >= self.end {
            return Err(BufferError::EndOfBuffer);
        }
        let val = self.uint8[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Returns a subarray of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        if size > self.size() {
            return Err(BufferError::EndOfBuffer);
        }
        let x = self.x;
        self.x += size;
        Ok(&self.uint8[x..self.x])
    }

    /// Reads `N` bytes into a fixed-size array.
    #[inline]
    pub fn array<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.buf(N)?);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u8(), Ok(0x01));
        assert_eq!(reader.u8(), Ok(0x02));
        assert_eq!(reader.u8(), Ok(0x03));
        assert_eq!(reader.u8(), Err(BufferError::EndOfBuffer));
    }

    #[test]
    fn test_buf_past_end_keeps_cursor() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        reader.u8().unwrap();
        assert_eq!(reader.buf(3), Err(BufferError::EndOfBuffer));
        assert_eq!(reader.x, 1);
        assert_eq!(reader.buf(2), Ok(&[0x02, 0x03][..]));
    }

    #[test]
    fn test_array() {
        let data = [0x3f, 0x80, 0x00, 0x00];
        let mut reader = Reader::new(&data);
        let bytes: [u8; 4] = reader.array().unwrap();
        assert_eq!(f32::from_be_bytes(bytes), 1.0);
        assert!(reader.array::<1>().is_err());
    }

    #[test]
    fn test_empty() {
        let mut reader = Reader::new(&[]);
        assert_eq!(reader.size(), 0);
        assert_eq!(reader.buf(0), Ok(&[][..]));
        assert!(reader.u8().is_err());
    }
}
