//! [`Lib0Writer`] extends [`Writer`] with lib0 primitive encodings.

use ycs_buffers::Writer;

use crate::{Any, AnyTag, BITS31};

/// A writer producing the lib0 encodings read back by [`Lib0Read`](crate::Lib0Read).
pub struct Lib0Writer {
    pub inner: Writer,
}

impl Default for Lib0Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lib0Writer {
    pub fn new() -> Self {
        Self { inner: Writer::new() }
    }

    pub fn with_alloc_size(size: usize) -> Self {
        Self { inner: Writer::with_alloc_size(size) }
    }

    /// Returns everything written since the last call.
    pub fn to_vec(&mut self) -> Vec<u8> {
        self.inner.flush()
    }

    #[inline]
    pub fn write_u8(&mut self, val: u8) {
        self.inner.u8(val);
    }

    /// Writes an unsigned LEB128 varint (minimal length).
    pub fn write_var_uint(&mut self, mut num: u64) {
        while num > 0x7F {
            self.inner.u8(0x80 | (num & 0x7F) as u8);
            num >>= 7;
        }
        self.inner.u8(num as u8);
    }

    /// Writes a signed varint: `|c s vvvvvv|` then 7-bit continuation groups.
    pub fn write_var_int(&mut self, num: i64) {
        let negative = num < 0;
        let mut magnitude = num.unsigned_abs();
        let cont = if magnitude > 0x3F { 0x80 } else { 0 };
        let sign = if negative { 0x40 } else { 0 };
        self.inner.u8(cont | sign | (magnitude & 0x3F) as u8);
        magnitude >>= 6;
        while magnitude > 0 {
            let cont = if magnitude > 0x7F { 0x80 } else { 0 };
            self.inner.u8(cont | (magnitude & 0x7F) as u8);
            magnitude >>= 7;
        }
    }

    pub fn write_var_uint8_array(&mut self, buf: &[u8]) {
        self.write_var_uint(buf.len() as u64);
        self.inner.buf(buf);
    }

    pub fn write_var_string(&mut self, s: &str) {
        self.write_var_uint8_array(s.as_bytes());
    }

    pub fn write_f32(&mut self, val: f32) {
        self.inner.f32(val);
    }

    pub fn write_f64(&mut self, val: f64) {
        self.inner.f64(val);
    }

    pub fn write_big_int64(&mut self, val: i64) {
        self.inner.i64(val);
    }

    /// Writes a tagged [`Any`] value.
    ///
    /// Integers beyond 31 bits go out as f64, and floats that survive an f32
    /// round trip go out as f32, matching what lib0 produces for JS numbers.
    pub fn write_any(&mut self, val: &Any) {
        match val {
            Any::Undefined => self.write_u8(AnyTag::Undefined as u8),
            Any::Null => self.write_u8(AnyTag::Null as u8),
            Any::Bool(true) => self.write_u8(AnyTag::True as u8),
            Any::Bool(false) => self.write_u8(AnyTag::False as u8),
            Any::Integer(i) if i.unsigned_abs() <= BITS31 => {
                self.write_u8(AnyTag::Integer as u8);
                self.write_var_int(*i);
            }
            Any::Integer(i) => {
                self.write_u8(AnyTag::Float64 as u8);
                self.write_f64(*i as f64);
            }
            Any::Float(f) => {
                if (*f as f32) as f64 == *f {
                    self.write_u8(AnyTag::Float32 as u8);
                    self.write_f32(*f as f32);
                } else {
                    self.write_u8(AnyTag::Float64 as u8);
                    self.write_f64(*f);
                }
            }
            Any::BigInt(i) => {
                self.write_u8(AnyTag::BigInt as u8);
                self.write_big_int64(*i);
            }
            Any::String(s) => {
                self.write_u8(AnyTag::String as u8);
                self.write_var_string(s);
            }
            Any::Buffer(bytes) => {
                self.write_u8(AnyTag::Buffer as u8);
                self.write_var_uint8_array(bytes);
            }
            Any::Array(arr) => {
                self.write_u8(AnyTag::Array as u8);
                self.write_var_uint(arr.len() as u64);
                for item in arr {
                    self.write_any(item);
                }
            }
            Any::Map(map) => {
                self.write_u8(AnyTag::Object as u8);
                self.write_var_uint(map.len() as u64);
                for (key, item) in map {
                    self.write_var_string(key);
                    self.write_any(item);
                }
            }
        }
    }
}
