use thiserror::Error;

/// Errors returned by checked big-endian decoding.
///
/// Note: the hot-path `to_*_be` functions never produce these; they panic on
/// out-of-range reads instead.
///
/// # Examples
/// ```
/// use bitconv_core::decode::DecodeError;
///
/// let err = DecodeError::OutOfBounds { offset: 2, width: 4, len: 4 };
/// assert!(err.to_string().contains("read out of bounds"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("read out of bounds: {width} bytes at offset {offset}, buffer holds {len}")]
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },
    #[error("unknown scalar type '{name}'")]
    UnknownKind { name: String },
    #[error("host floating point is not IEEE-754: {reason}")]
    UnsupportedFloat { reason: &'static str },
}
