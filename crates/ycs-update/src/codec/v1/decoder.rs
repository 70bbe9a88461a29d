//! V1 field decoders.
//!
//! Every field is read inline from the single stream: no sub-channels, no
//! run-length decoders, no delta baselines.

use ycs_lib0::{Any, Lib0Read};

use crate::codec::{DsDecoder, UpdateDecoder};
use crate::{DecodeError, Id, Input};

/// Literal the encoder writes for an undefined JSON embed.
const JSON_UNDEFINED: &str = "undefined";

/// V1 delete-set decoder: clock and length are plain varints.
///
/// Construct with [`new`](Self::new) to hand the stream over, or with
/// [`leave_open`](Self::leave_open) to lend it. An owned stream is released
/// by [`dispose`](Self::dispose) or on drop, whichever comes first.
#[derive(Debug)]
pub struct DsDecoderV1<'a, R> {
    input: Option<Input<'a, R>>,
}

impl<'a, R: Lib0Read + 'a> DsDecoderV1<'a, R> {
    /// Creates a decoder that owns `reader`.
    pub fn new(reader: R) -> Self {
        Self::from_input(Input::Owned(reader))
    }

    /// Creates a decoder that borrows `reader` and never releases it.
    pub fn leave_open(reader: &'a mut R) -> Self {
        Self::from_input(Input::Borrowed(reader))
    }

    /// Creates a decoder over an already wrapped stream.
    pub fn from_input(input: Input<'a, R>) -> Self {
        Self { input: Some(input) }
    }

    #[inline]
    fn reader(&mut self) -> Result<&mut R, DecodeError> {
        self.input
            .as_mut()
            .map(Input::get_mut)
            .ok_or(DecodeError::InvalidOperation)
    }
}

impl<R> DsDecoderV1<'_, R> {
    /// Whether [`dispose`](Self::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        self.input.is_none()
    }

    /// Releases the stream if owned. Safe to call any number of times.
    pub fn dispose(&mut self) {
        match self.input.take() {
            Some(Input::Owned(reader)) => {
                drop(reader);
                tracing::trace!("v1 decoder released owned stream");
            }
            Some(Input::Borrowed(_)) => {
                tracing::trace!("v1 decoder detached from borrowed stream");
            }
            None => {}
        }
    }
}

impl<R> Drop for DsDecoderV1<'_, R> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<'a, R: Lib0Read + 'a> DsDecoder for DsDecoderV1<'a, R> {
    type Rest = R;

    fn rest_decoder(&mut self) -> Result<&mut R, DecodeError> {
        self.reader()
    }

    /// No delta state in V1.
    fn reset_ds_cur_val(&mut self) {}

    fn read_ds_clock(&mut self) -> Result<u64, DecodeError> {
        Ok(self.reader()?.read_var_uint()?)
    }

    fn read_ds_len(&mut self) -> Result<u64, DecodeError> {
        Ok(self.reader()?.read_var_uint()?)
    }
}

/// V1 update decoder: the delete-set decoder plus struct field readers,
/// over the same stream and with the same lifecycle.
#[derive(Debug)]
pub struct UpdateDecoderV1<'a, R> {
    ds: DsDecoderV1<'a, R>,
}

impl<'a, R: Lib0Read + 'a> UpdateDecoderV1<'a, R> {
    /// Creates a decoder that owns `reader`.
    pub fn new(reader: R) -> Self {
        Self { ds: DsDecoderV1::new(reader) }
    }

    /// Creates a decoder that borrows `reader` and never releases it.
    pub fn leave_open(reader: &'a mut R) -> Self {
        Self { ds: DsDecoderV1::leave_open(reader) }
    }

    /// Creates a decoder over an already wrapped stream.
    pub fn from_input(input: Input<'a, R>) -> Self {
        Self { ds: DsDecoderV1::from_input(input) }
    }

    fn read_id(&mut self) -> Result<Id, DecodeError> {
        let r = self.ds.reader()?;
        let client = r.read_var_uint()?;
        let clock = r.read_var_uint()?;
        Ok(Id::new(client, clock))
    }
}

impl<R> UpdateDecoderV1<'_, R> {
    /// Whether [`dispose`](Self::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        self.ds.is_disposed()
    }

    /// Releases the stream if owned. Safe to call any number of times.
    pub fn dispose(&mut self) {
        self.ds.dispose();
    }
}

impl<'a, R: Lib0Read + 'a> DsDecoder for UpdateDecoderV1<'a, R> {
    type Rest = R;

    fn rest_decoder(&mut self) -> Result<&mut R, DecodeError> {
        self.ds.rest_decoder()
    }

    fn reset_ds_cur_val(&mut self) {
        self.ds.reset_ds_cur_val();
    }

    fn read_ds_clock(&mut self) -> Result<u64, DecodeError> {
        self.ds.read_ds_clock()
    }

    fn read_ds_len(&mut self) -> Result<u64, DecodeError> {
        self.ds.read_ds_len()
    }
}

impl<'a, R: Lib0Read + 'a> UpdateDecoder for UpdateDecoderV1<'a, R> {
    fn read_left_id(&mut self) -> Result<Id, DecodeError> {
        self.read_id()
    }

    fn read_right_id(&mut self) -> Result<Id, DecodeError> {
        self.read_id()
    }

    fn read_client(&mut self) -> Result<u64, DecodeError> {
        Ok(self.ds.reader()?.read_var_uint()?)
    }

    fn read_info(&mut self) -> Result<u8, DecodeError> {
        Ok(self.ds.reader()?.read_u8()?)
    }

    fn read_string(&mut self) -> Result<String, DecodeError> {
        Ok(self.ds.reader()?.read_var_string()?)
    }

    /// Only an encoded `1` is `true`; `2` and above are `false`.
    fn read_parent_info(&mut self) -> Result<bool, DecodeError> {
        Ok(self.ds.reader()?.read_var_uint()? == 1)
    }

    fn read_type_ref(&mut self) -> Result<u32, DecodeError> {
        Ok(self.ds.reader()?.read_var_uint()? as u32)
    }

    /// Narrowed to `i32` without a range check.
    fn read_len(&mut self) -> Result<i32, DecodeError> {
        Ok(self.ds.reader()?.read_var_uint()? as i32)
    }

    fn read_any(&mut self) -> Result<Any, DecodeError> {
        Ok(self.ds.reader()?.read_any()?)
    }

    fn read_buf(&mut self) -> Result<Vec<u8>, DecodeError> {
        Ok(self.ds.reader()?.read_var_uint8_array()?)
    }

    fn read_key(&mut self) -> Result<String, DecodeError> {
        Ok(self.ds.reader()?.read_var_string()?)
    }

    fn read_json(&mut self) -> Result<Any, DecodeError> {
        let json = self.ds.reader()?.read_var_string()?;
        if json == JSON_UNDEFINED {
            return Ok(Any::Undefined);
        }
        let value: serde_json::Value = serde_json::from_str(&json).map_err(|err| {
            tracing::debug!(%err, len = json.len(), "json field failed to parse");
            DecodeError::from(err)
        })?;
        Ok(Any::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ycs_buffers::Reader;

    #[test]
    fn ds_clock_then_len() {
        let data = [0x05, 0x07];
        let mut dec = DsDecoderV1::new(Reader::new(&data));
        assert_eq!(dec.read_ds_clock(), Ok(5));
        assert_eq!(dec.read_ds_len(), Ok(7));
        assert_eq!(dec.read_ds_clock(), Err(DecodeError::StreamExhausted));
    }

    #[test]
    fn reset_ds_cur_val_does_not_move_the_cursor() {
        let data = [0x05, 0x07];
        let mut dec = DsDecoderV1::new(Reader::new(&data));
        dec.reset_ds_cur_val();
        assert_eq!(dec.read_ds_clock(), Ok(5));
        dec.reset_ds_cur_val();
        dec.reset_ds_cur_val();
        assert_eq!(dec.read_ds_len(), Ok(7));
    }

    #[test]
    fn left_id() {
        let data = [0x01, 0x02];
        let mut dec = UpdateDecoderV1::new(Reader::new(&data));
        assert_eq!(dec.read_left_id(), Ok(Id::new(1, 2)));
    }

    #[test]
    fn parent_info_is_exact_equality() {
        let data = [0x01, 0x00, 0x02, 0xAC, 0x02];
        let mut dec = UpdateDecoderV1::new(Reader::new(&data));
        assert_eq!(dec.read_parent_info(), Ok(true));
        assert_eq!(dec.read_parent_info(), Ok(false));
        assert_eq!(dec.read_parent_info(), Ok(false));
        assert_eq!(dec.read_parent_info(), Ok(false));
    }

    #[test]
    fn info_is_a_raw_byte() {
        let data = [0xFF];
        let mut dec = UpdateDecoderV1::new(Reader::new(&data));
        assert_eq!(dec.read_info(), Ok(0xFF));
    }

    #[test]
    fn len_narrows_without_check() {
        // varuint 2^32 + 5
        let data = [0x85, 0x80, 0x80, 0x80, 0x10];
        let mut dec = UpdateDecoderV1::new(Reader::new(&data));
        assert_eq!(dec.read_len(), Ok(5));
    }

    #[test]
    fn json_object() {
        let payload = br#"{"a":1}"#;
        let mut data = vec![payload.len() as u8];
        data.extend_from_slice(payload);
        let mut dec = UpdateDecoderV1::new(Reader::new(&data));
        let value = dec.read_json().unwrap();
        assert_eq!(value.get("a"), Some(&Any::Integer(1)));
    }

    #[test]
    fn json_malformed() {
        let payload = b"{a:1}";
        let mut data = vec![payload.len() as u8];
        data.extend_from_slice(payload);
        let mut dec = UpdateDecoderV1::new(Reader::new(&data));
        assert!(matches!(dec.read_json(), Err(DecodeError::MalformedEncoding(_))));
    }

    #[test]
    fn json_undefined_literal() {
        let mut data = vec![JSON_UNDEFINED.len() as u8];
        data.extend_from_slice(JSON_UNDEFINED.as_bytes());
        let mut dec = UpdateDecoderV1::new(Reader::new(&data));
        assert_eq!(dec.read_json(), Ok(Any::Undefined));
    }

    #[test]
    fn reads_after_dispose_fail() {
        let data = [0x01, 0x02];
        let mut dec = UpdateDecoderV1::new(Reader::new(&data));
        dec.dispose();
        assert!(dec.is_disposed());
        assert_eq!(dec.read_client(), Err(DecodeError::InvalidOperation));
        assert_eq!(dec.read_ds_clock(), Err(DecodeError::InvalidOperation));
        assert!(dec.rest_decoder().is_err());
        dec.reset_ds_cur_val();
        dec.dispose();
    }

    #[test]
    fn no_preamble_is_consumed() {
        let data = [0x2A];
        let mut reader = Reader::new(&data);
        {
            let _dec = UpdateDecoderV1::leave_open(&mut reader);
        }
        assert_eq!(reader.x, 0);
    }
}
