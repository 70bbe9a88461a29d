//! V1 field encoders, the write side of [`super::decoder`].

use ycs_lib0::{Any, Lib0Writer};

use crate::codec::{DsEncoder, UpdateEncoder};
use crate::Id;

/// V1 delete-set encoder.
#[derive(Default)]
pub struct DsEncoderV1 {
    pub rest_encoder: Lib0Writer,
}

impl DsEncoderV1 {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DsEncoder for DsEncoderV1 {
    fn reset_ds_cur_val(&mut self) {}

    fn write_ds_clock(&mut self, clock: u64) {
        self.rest_encoder.write_var_uint(clock);
    }

    fn write_ds_len(&mut self, len: u64) {
        self.rest_encoder.write_var_uint(len);
    }

    fn to_vec(&mut self) -> Vec<u8> {
        self.rest_encoder.to_vec()
    }
}

/// V1 update encoder.
#[derive(Default)]
pub struct UpdateEncoderV1 {
    ds: DsEncoderV1,
}

impl UpdateEncoderV1 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw access for headers written outside the field contract.
    pub fn rest_encoder(&mut self) -> &mut Lib0Writer {
        &mut self.ds.rest_encoder
    }

    fn write_id(&mut self, id: Id) {
        self.ds.rest_encoder.write_var_uint(id.client);
        self.ds.rest_encoder.write_var_uint(id.clock);
    }
}

impl DsEncoder for UpdateEncoderV1 {
    fn reset_ds_cur_val(&mut self) {
        self.ds.reset_ds_cur_val();
    }

    fn write_ds_clock(&mut self, clock: u64) {
        self.ds.write_ds_clock(clock);
    }

    fn write_ds_len(&mut self, len: u64) {
        self.ds.write_ds_len(len);
    }

    fn to_vec(&mut self) -> Vec<u8> {
        self.ds.to_vec()
    }
}

impl UpdateEncoder for UpdateEncoderV1 {
    fn write_left_id(&mut self, id: Id) {
        self.write_id(id);
    }

    fn write_right_id(&mut self, id: Id) {
        self.write_id(id);
    }

    fn write_client(&mut self, client: u64) {
        self.rest_encoder().write_var_uint(client);
    }

    fn write_info(&mut self, info: u8) {
        self.rest_encoder().write_u8(info);
    }

    fn write_string(&mut self, s: &str) {
        self.rest_encoder().write_var_string(s);
    }

    fn write_parent_info(&mut self, is_y_key: bool) {
        self.rest_encoder().write_var_uint(is_y_key as u64);
    }

    fn write_type_ref(&mut self, type_ref: u32) {
        self.rest_encoder().write_var_uint(type_ref as u64);
    }

    fn write_len(&mut self, len: u64) {
        self.rest_encoder().write_var_uint(len);
    }

    fn write_any(&mut self, any: &Any) {
        self.rest_encoder().write_any(any);
    }

    fn write_buf(&mut self, buf: &[u8]) {
        self.rest_encoder().write_var_uint8_array(buf);
    }

    fn write_key(&mut self, key: &str) {
        self.rest_encoder().write_var_string(key);
    }

    fn write_json(&mut self, json: &Any) {
        let text = match json {
            Any::Undefined => "undefined".to_string(),
            other => serde_json::Value::from(other.clone()).to_string(),
        };
        self.rest_encoder().write_var_string(&text);
    }
}
