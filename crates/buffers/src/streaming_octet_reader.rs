//! Streaming octet reader for reading across chunk boundaries.

use crate::BufferError;

/// A reader that consumes a queue of pushed chunks.
///
/// Chunks are never merged into a single buffer; reads walk across chunk
/// boundaries as needed. Used when an update arrives in pieces (for example
/// from a transport that frames messages independently of the codec).
#[derive(Debug, Default)]
pub struct StreamingOctetReader {
    chunks: Vec<Vec<u8>>,
    /// Current position within the first chunk.
    x: usize,
    /// Total size of all queued chunks, including consumed bytes of the first.
    chunk_size: usize,
}

impl StreamingOctetReader {
    /// Creates an empty streaming reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of bytes remaining to be read.
    pub fn size(&self) -> usize {
        self.chunk_size - self.x
    }

    /// Adds a chunk of data to be read.
    pub fn push(&mut self, chunk: Vec<u8>) {
        if chunk.is_empty() {
            return;
        }
        self.chunk_size += chunk.len();
        self.chunks.push(chunk);
    }

    fn assert_size(&self, size: usize) -> Result<(), BufferError> {
        if size > self.size() {
            return Err(BufferError::EndOfBuffer);
        }
        Ok(())
    }

    /// Reads a single unsigned byte.
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        self.assert_size(1)?;
        let chunk = &self.chunks[0];
        let octet = chunk[self.x];
        self.x += 1;
        if self.x >= chunk.len() {
            self.chunk_size -= chunk.len();
            self.chunks.remove(0);
            self.x = 0;
        }
        Ok(octet)
    }

    /// Reads `size` bytes into a new vector.
    pub fn buf(&mut self, size: usize) -> Result<Vec<u8>, BufferError> {
        self.assert_size(size)?;
        let mut result = Vec::with_capacity(size);
        let mut remaining = size;
        while remaining > 0 {
            let chunk = &self.chunks[0];
            let available = chunk.len() - self.x;
            let take = available.min(remaining);
            result.extend_from_slice(&chunk[self.x..self.x + take]);
            remaining -= take;
            if take == available {
                self.chunk_size -= chunk.len();
                self.chunks.remove(0);
                self.x = 0;
            } else {
                self.x += take;
            }
        }
        Ok(result)
    }
}
