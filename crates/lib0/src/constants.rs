//! Tag bytes of the lib0 `any` encoding.

/// Largest magnitude written as a varint by [`Lib0Writer::write_any`](crate::Lib0Writer::write_any).
pub const BITS31: u64 = 0x7FFF_FFFF;

/// Leading byte of an encoded `any` value.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyTag {
    Undefined = 127,
    Null = 126,
    Integer = 125,
    Float32 = 124,
    Float64 = 123,
    BigInt = 122,
    False = 121,
    True = 120,
    String = 119,
    Object = 118,
    Array = 117,
    Buffer = 116,
}

impl AnyTag {
    pub fn from_u8(b: u8) -> Option<Self> {
        match b {
            127 => Some(Self::Undefined),
            126 => Some(Self::Null),
            125 => Some(Self::Integer),
            124 => Some(Self::Float32),
            123 => Some(Self::Float64),
            122 => Some(Self::BigInt),
            121 => Some(Self::False),
            120 => Some(Self::True),
            119 => Some(Self::String),
            118 => Some(Self::Object),
            117 => Some(Self::Array),
            116 => Some(Self::Buffer),
            _ => None,
        }
    }
}
