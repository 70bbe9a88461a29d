//! Legacy (V1) update format.
//!
//! Fields are written back to back with lib0 primitives and no framing, so
//! a decoder only stays aligned while its caller reads fields in exactly
//! the order the encoder wrote them.

mod decoder;
mod encoder;

pub use decoder::{DsDecoderV1, UpdateDecoderV1};
pub use encoder::{DsEncoderV1, UpdateEncoderV1};

use ycs_buffers::Reader;

/// Creates an update decoder that owns a slice reader over `data`.
pub fn update_decoder(data: &[u8]) -> UpdateDecoderV1<'_, Reader<'_>> {
    UpdateDecoderV1::new(Reader::new(data))
}

/// Creates a delete-set decoder that owns a slice reader over `data`.
pub fn ds_decoder(data: &[u8]) -> DsDecoderV1<'_, Reader<'_>> {
    DsDecoderV1::new(Reader::new(data))
}
