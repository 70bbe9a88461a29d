use thiserror::Error;
use ycs_buffers::BufferError;

/// Failure decoding a lib0 primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Lib0Error {
    /// The input ended before the primitive was complete.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// A variable-length integer does not fit in 64 bits.
    #[error("variable-length integer out of range")]
    VarIntOverflow,
    /// A string payload is not valid UTF-8.
    #[error("invalid UTF-8 in string payload")]
    InvalidUtf8,
    /// An `any` value starts with a tag lib0 does not define.
    #[error("unknown any tag: {0}")]
    UnknownAnyTag(u8),
    /// Arrays and objects inside an `any` value nest too deeply.
    #[error("any value nested deeper than {} levels", crate::MAX_ANY_DEPTH)]
    DepthLimitExceeded,
}

impl From<BufferError> for Lib0Error {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => Lib0Error::UnexpectedEof,
        }
    }
}
