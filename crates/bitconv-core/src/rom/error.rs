use thiserror::Error;

use crate::decode::DecodeError;

/// Errors returned by ROM byte-order normalization and header decoding.
///
/// # Examples
/// ```
/// use bitconv_core::rom::RomError;
///
/// let err = RomError::UnrecognizedFormat { signature: 0x12 };
/// assert!(err.to_string().contains("unrecognized ROM format"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RomError {
    #[error("unrecognized ROM format: signature byte 0x{signature:02x}")]
    UnrecognizedFormat { signature: u8 },
    #[error("invalid ROM length: {length} bytes is not a multiple of the {unit}-byte swap unit")]
    InvalidLength { length: usize, unit: usize },
    #[error("header decode error: {0}")]
    Decode(#[from] DecodeError),
}
