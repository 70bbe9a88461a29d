//! lib0 primitive codec used by the Yjs V1 update format.
//!
//! The V1 update decoder reads every field through the primitives defined
//! here: unsigned and signed variable-length integers, length-prefixed
//! strings and byte arrays, big-endian floats, and the self-describing
//! [`Any`] value.
//!
//! - [`Lib0Read`] decodes primitives from any byte source (the slice
//!   [`Reader`](ycs_buffers::Reader), the chunked
//!   [`StreamingOctetReader`](ycs_buffers::StreamingOctetReader), or a
//!   `&mut` to either).
//! - [`Lib0Writer`] encodes the same primitives.
//!
//! ```
//! use ycs_buffers::Reader;
//! use ycs_lib0::{Any, Lib0Read, Lib0Writer};
//!
//! let mut w = Lib0Writer::new();
//! w.write_var_uint(300);
//! w.write_any(&Any::from("hi"));
//! let bytes = w.to_vec();
//!
//! let mut r = Reader::new(&bytes);
//! assert_eq!(r.read_var_uint(), Ok(300));
//! assert_eq!(r.read_any(), Ok(Any::from("hi")));
//! ```

mod any;
mod constants;
mod error;
mod read;
mod write;

pub use any::Any;
pub use constants::{AnyTag, BITS31};
pub use error::Lib0Error;
pub use read::{Lib0Read, MAX_ANY_DEPTH};
pub use write::Lib0Writer;
