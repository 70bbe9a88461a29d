//! Field-level codecs for update streams.
//!
//! [`DsDecoder`] / [`UpdateDecoder`] are the contract shared by every wire
//! variant; the caller drives them in the exact field order the encoder
//! used. Only the legacy V1 variant lives in this crate ([`v1`]). The
//! delta-encoded V2 variant implements the same traits elsewhere and keeps
//! its running baselines to itself.

pub mod v1;

use ycs_lib0::{Any, Lib0Read};

use crate::{DecodeError, Id};

/// Reads the fields of delete-set entries.
pub trait DsDecoder {
    /// The primitive reader underneath the field decoder.
    type Rest: Lib0Read;

    /// Raw access to the stream for headers the caller reads itself
    /// (client counts, entry counts).
    fn rest_decoder(&mut self) -> Result<&mut Self::Rest, DecodeError>;

    /// Clears per-client delta state before the next client's entries.
    fn reset_ds_cur_val(&mut self);

    /// Start clock of a deleted range.
    fn read_ds_clock(&mut self) -> Result<u64, DecodeError>;

    /// Length of a deleted range.
    fn read_ds_len(&mut self) -> Result<u64, DecodeError>;
}

/// Reads the fields of struct (item / gc / skip) records.
pub trait UpdateDecoder: DsDecoder {
    fn read_left_id(&mut self) -> Result<Id, DecodeError>;
    fn read_right_id(&mut self) -> Result<Id, DecodeError>;
    fn read_client(&mut self) -> Result<u64, DecodeError>;
    fn read_info(&mut self) -> Result<u8, DecodeError>;
    fn read_string(&mut self) -> Result<String, DecodeError>;
    /// `true` when the parent is given by a root-type key rather than an id.
    fn read_parent_info(&mut self) -> Result<bool, DecodeError>;
    fn read_type_ref(&mut self) -> Result<u32, DecodeError>;
    fn read_len(&mut self) -> Result<i32, DecodeError>;
    fn read_any(&mut self) -> Result<Any, DecodeError>;
    fn read_buf(&mut self) -> Result<Vec<u8>, DecodeError>;
    fn read_key(&mut self) -> Result<String, DecodeError>;
    fn read_json(&mut self) -> Result<Any, DecodeError>;
}

/// Writes the fields of delete-set entries.
pub trait DsEncoder {
    fn reset_ds_cur_val(&mut self);
    fn write_ds_clock(&mut self, clock: u64);
    fn write_ds_len(&mut self, len: u64);
    /// Returns the encoded bytes written so far.
    fn to_vec(&mut self) -> Vec<u8>;
}

/// Writes the fields of struct records, mirroring [`UpdateDecoder`].
pub trait UpdateEncoder: DsEncoder {
    fn write_left_id(&mut self, id: Id);
    fn write_right_id(&mut self, id: Id);
    fn write_client(&mut self, client: u64);
    fn write_info(&mut self, info: u8);
    fn write_string(&mut self, s: &str);
    fn write_parent_info(&mut self, is_y_key: bool);
    fn write_type_ref(&mut self, type_ref: u32);
    fn write_len(&mut self, len: u64);
    fn write_any(&mut self, any: &Any);
    fn write_buf(&mut self, buf: &[u8]);
    fn write_key(&mut self, key: &str);
    fn write_json(&mut self, json: &Any);
}
