//! [`Lib0Read`]: primitive decoding over a byte source.

use indexmap::IndexMap;
use ycs_buffers::{Reader, StreamingOctetReader};

use crate::{Any, AnyTag, Lib0Error};

/// Deepest container nesting [`Lib0Read::read_any`] accepts.
pub const MAX_ANY_DEPTH: usize = 128;

/// Decodes lib0 primitives from a forward-only byte source.
///
/// Implementors only supply [`read_u8`](Self::read_u8) and
/// [`read_bytes`](Self::read_bytes); everything else is derived. Every
/// method fails with [`Lib0Error::UnexpectedEof`] when the source ends in
/// the middle of a value, and never returns a placeholder.
pub trait Lib0Read {
    /// Reads one raw byte.
    fn read_u8(&mut self) -> Result<u8, Lib0Error>;

    /// Reads exactly `len` raw bytes.
    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, Lib0Error>;

    /// Reads exactly `N` raw bytes into an array.
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Lib0Error> {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.read_bytes(N)?);
        Ok(out)
    }

    /// Reads an unsigned LEB128 varint.
    ///
    /// Non-minimal encodings are accepted; values past `u64::MAX` are not.
    fn read_var_uint(&mut self) -> Result<u64, Lib0Error> {
        let mut num: u64 = 0;
        let mut shift: u32 = 0;
        loop {
            let byte = self.read_u8()?;
            let part = (byte & 0x7F) as u64;
            if part > (u64::MAX >> shift) {
                return Err(Lib0Error::VarIntOverflow);
            }
            num |= part << shift;
            if byte < 0x80 {
                return Ok(num);
            }
            shift += 7;
            if shift > 63 {
                return Err(Lib0Error::VarIntOverflow);
            }
        }
    }

    /// Reads a signed varint: first byte `|c s vvvvvv|`, then 7-bit groups.
    fn read_var_int(&mut self) -> Result<i64, Lib0Error> {
        let first = self.read_u8()?;
        let negative = first & 0x40 != 0;
        let mut num = (first & 0x3F) as u64;
        if first & 0x80 != 0 {
            let mut shift: u32 = 6;
            loop {
                let byte = self.read_u8()?;
                let part = (byte & 0x7F) as u64;
                if shift > 63 || part > (u64::MAX >> shift) {
                    return Err(Lib0Error::VarIntOverflow);
                }
                num |= part << shift;
                if byte < 0x80 {
                    break;
                }
                shift += 7;
            }
        }
        if negative && num == 1 << 63 {
            return Ok(i64::MIN);
        }
        let magnitude = i64::try_from(num).map_err(|_| Lib0Error::VarIntOverflow)?;
        if negative {
            magnitude.checked_neg().ok_or(Lib0Error::VarIntOverflow)
        } else {
            Ok(magnitude)
        }
    }

    /// Reads a varuint byte length followed by that many bytes.
    fn read_var_uint8_array(&mut self) -> Result<Vec<u8>, Lib0Error> {
        let len = self.read_var_uint()?;
        // A length that does not even fit in memory cannot be satisfied.
        let len = usize::try_from(len).map_err(|_| Lib0Error::UnexpectedEof)?;
        self.read_bytes(len)
    }

    /// Reads a varuint byte length followed by UTF-8 bytes.
    fn read_var_string(&mut self) -> Result<String, Lib0Error> {
        let bytes = self.read_var_uint8_array()?;
        String::from_utf8(bytes).map_err(|_| Lib0Error::InvalidUtf8)
    }

    fn read_f32(&mut self) -> Result<f32, Lib0Error> {
        Ok(f32::from_be_bytes(self.read_array()?))
    }

    fn read_f64(&mut self) -> Result<f64, Lib0Error> {
        Ok(f64::from_be_bytes(self.read_array()?))
    }

    fn read_big_int64(&mut self) -> Result<i64, Lib0Error> {
        Ok(i64::from_be_bytes(self.read_array()?))
    }

    /// Reads a tagged [`Any`] value.
    ///
    /// Arrays and objects nested deeper than [`MAX_ANY_DEPTH`] fail with
    /// [`Lib0Error::DepthLimitExceeded`].
    fn read_any(&mut self) -> Result<Any, Lib0Error> {
        read_any_at(self, 0)
    }
}

fn read_any_at<R: Lib0Read + ?Sized>(r: &mut R, depth: usize) -> Result<Any, Lib0Error> {
    let tag = r.read_u8()?;
    let tag = AnyTag::from_u8(tag).ok_or(Lib0Error::UnknownAnyTag(tag))?;
    if matches!(tag, AnyTag::Object | AnyTag::Array) && depth >= MAX_ANY_DEPTH {
        return Err(Lib0Error::DepthLimitExceeded);
    }
    let value = match tag {
        AnyTag::Undefined => Any::Undefined,
        AnyTag::Null => Any::Null,
        AnyTag::Integer => Any::Integer(r.read_var_int()?),
        AnyTag::Float32 => Any::Float(r.read_f32()? as f64),
        AnyTag::Float64 => Any::Float(r.read_f64()?),
        AnyTag::BigInt => Any::BigInt(r.read_big_int64()?),
        AnyTag::False => Any::Bool(false),
        AnyTag::True => Any::Bool(true),
        AnyTag::String => Any::String(r.read_var_string()?),
        AnyTag::Object => {
            let len = r.read_var_uint()?;
            let mut map = IndexMap::new();
            for _ in 0..len {
                let key = r.read_var_string()?;
                let val = read_any_at(r, depth + 1)?;
                map.insert(key, val);
            }
            Any::Map(map)
        }
        AnyTag::Array => {
            let len = r.read_var_uint()?;
            let mut arr = Vec::new();
            for _ in 0..len {
                arr.push(read_any_at(r, depth + 1)?);
            }
            Any::Array(arr)
        }
        AnyTag::Buffer => Any::Buffer(r.read_var_uint8_array()?),
    };
    Ok(value)
}

impl Lib0Read for Reader<'_> {
    #[inline]
    fn read_u8(&mut self) -> Result<u8, Lib0Error> {
        Ok(self.u8()?)
    }

    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, Lib0Error> {
        Ok(self.buf(len)?.to_vec())
    }

    #[inline]
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Lib0Error> {
        Ok(self.array()?)
    }
}

impl Lib0Read for StreamingOctetReader {
    #[inline]
    fn read_u8(&mut self) -> Result<u8, Lib0Error> {
        Ok(self.u8()?)
    }

    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, Lib0Error> {
        Ok(self.buf(len)?)
    }
}

impl<T: Lib0Read + ?Sized> Lib0Read for &mut T {
    #[inline]
    fn read_u8(&mut self) -> Result<u8, Lib0Error> {
        (**self).read_u8()
    }

    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, Lib0Error> {
        (**self).read_bytes(len)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Lib0Error> {
        (**self).read_array()
    }
}
