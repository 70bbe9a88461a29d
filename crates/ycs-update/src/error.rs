use thiserror::Error;
use ycs_lib0::Lib0Error;

/// Failure reading a field from an update stream.
///
/// Every variant is terminal for the decode session: the stream cursor is
/// left wherever the failing primitive stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Fewer bytes remain than the field's encoding requires.
    #[error("update stream exhausted in the middle of a field")]
    StreamExhausted,
    /// The bytes are present but do not form a valid encoding.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),
    /// The decoder was used after [`dispose`](crate::DsDecoderV1::dispose).
    #[error("decoder used after disposal")]
    InvalidOperation,
}

impl From<Lib0Error> for DecodeError {
    fn from(err: Lib0Error) -> Self {
        match err {
            Lib0Error::UnexpectedEof => DecodeError::StreamExhausted,
            other => DecodeError::MalformedEncoding(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::MalformedEncoding(format!("invalid JSON payload: {err}"))
    }
}
