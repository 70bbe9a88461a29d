//! Byte containers used by the ycs update codecs.
//!
//! # Overview
//!
//! - [`Reader`] - Reads from a byte slice with cursor tracking
//! - [`StreamingOctetReader`] - Reads across a queue of pushed chunks
//! - [`Writer`] - Writes to an auto-growing buffer
//!
//! Every read is bounds-checked: running off the end of the input yields
//! [`BufferError::EndOfBuffer`] instead of panicking, so decoders built on
//! top can surface truncated input as an ordinary error.
//!
//! # Example
//!
//! ```
//! use ycs_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.utf8("hello");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8(), Ok(0x01));
//! assert_eq!(reader.buf(5), Ok(&b"hello"[..]));
//! assert!(reader.u8().is_err());
//! ```

mod reader;
mod streaming_octet_reader;
mod writer;

pub use reader::Reader;
pub use streaming_octet_reader::StreamingOctetReader;
pub use writer::Writer;

/// Error type for buffer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    EndOfBuffer,
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::EndOfBuffer => write!(f, "end of buffer"),
        }
    }
}

impl std::error::Error for BufferError {}
