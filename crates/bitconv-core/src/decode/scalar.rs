use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DecodeError;
use super::layout;
use super::reader::BeReader;
use super::source::ByteSource;

/// Scalar type selector for runtime-chosen decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 10] = [
        ScalarKind::I8,
        ScalarKind::U8,
        ScalarKind::I16,
        ScalarKind::U16,
        ScalarKind::I32,
        ScalarKind::U32,
        ScalarKind::I64,
        ScalarKind::U64,
        ScalarKind::F32,
        ScalarKind::F64,
    ];

    /// Encoded width in bytes.
    pub fn width(self) -> usize {
        match self {
            ScalarKind::I8 | ScalarKind::U8 => layout::WIDTH_8,
            ScalarKind::I16 | ScalarKind::U16 => layout::WIDTH_16,
            ScalarKind::I32 | ScalarKind::U32 | ScalarKind::F32 => layout::WIDTH_32,
            ScalarKind::I64 | ScalarKind::U64 | ScalarKind::F64 => layout::WIDTH_64,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::I8 => "i8",
            ScalarKind::U8 => "u8",
            ScalarKind::I16 => "i16",
            ScalarKind::U16 => "u16",
            ScalarKind::I32 => "i32",
            ScalarKind::U32 => "u32",
            ScalarKind::I64 => "i64",
            ScalarKind::U64 => "u64",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a scalar name. Accepts `u32`, `uint32`, `int16`, `float`, `double`, ...
///
/// # Examples
/// ```
/// use bitconv_core::decode::ScalarKind;
///
/// assert_eq!("uint32".parse::<ScalarKind>()?, ScalarKind::U32);
/// assert_eq!("double".parse::<ScalarKind>()?, ScalarKind::F64);
/// # Ok::<(), bitconv_core::decode::DecodeError>(())
/// ```
impl FromStr for ScalarKind {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.to_ascii_lowercase().as_str() {
            "i8" | "int8" => ScalarKind::I8,
            "u8" | "uint8" => ScalarKind::U8,
            "i16" | "int16" => ScalarKind::I16,
            "u16" | "uint16" => ScalarKind::U16,
            "i32" | "int32" => ScalarKind::I32,
            "u32" | "uint32" => ScalarKind::U32,
            "i64" | "int64" => ScalarKind::I64,
            "u64" | "uint64" => ScalarKind::U64,
            "f32" | "float" => ScalarKind::F32,
            "f64" | "double" => ScalarKind::F64,
            _ => {
                return Err(DecodeError::UnknownKind {
                    name: s.to_string(),
                });
            }
        };
        Ok(kind)
    }
}

/// A decoded value tagged with its type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Scalar {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::I8(_) => ScalarKind::I8,
            Scalar::U8(_) => ScalarKind::U8,
            Scalar::I16(_) => ScalarKind::I16,
            Scalar::U16(_) => ScalarKind::U16,
            Scalar::I32(_) => ScalarKind::I32,
            Scalar::U32(_) => ScalarKind::U32,
            Scalar::I64(_) => ScalarKind::I64,
            Scalar::U64(_) => ScalarKind::U64,
            Scalar::F32(_) => ScalarKind::F32,
            Scalar::F64(_) => ScalarKind::F64,
        }
    }

    /// Raw bit pattern, zero-extended to 64 bits.
    pub fn raw_bits(&self) -> u64 {
        match *self {
            Scalar::I8(v) => u64::from(v as u8),
            Scalar::U8(v) => u64::from(v),
            Scalar::I16(v) => u64::from(v as u16),
            Scalar::U16(v) => u64::from(v),
            Scalar::I32(v) => u64::from(v as u32),
            Scalar::U32(v) => u64::from(v),
            Scalar::I64(v) => v as u64,
            Scalar::U64(v) => v,
            Scalar::F32(v) => u64::from(v.to_bits()),
            Scalar::F64(v) => v.to_bits(),
        }
    }

    /// Raw bit pattern as zero-padded hex, e.g. `0x3f800000`.
    pub fn raw_hex(&self) -> String {
        format!(
            "0x{:0width$x}",
            self.raw_bits(),
            width = self.kind().width() * 2
        )
    }
}

/// One decoded field of a run, as emitted by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedField {
    pub offset: usize,
    #[serde(flatten)]
    pub value: Scalar,
    pub raw: String,
}

/// Checked decode of a single value at `offset`.
///
/// # Examples
/// ```
/// use bitconv_core::decode::{Scalar, ScalarKind, decode_scalar};
///
/// let bytes = vec![0xFFu8, 0xFF, 0xFF, 0xFF];
/// assert_eq!(decode_scalar(ScalarKind::I32, &bytes, 0)?, Scalar::I32(-1));
/// # Ok::<(), bitconv_core::decode::DecodeError>(())
/// ```
///
/// # Errors
/// Returns `DecodeError::OutOfBounds` when the value does not fit.
pub fn decode_scalar<S: ByteSource + ?Sized>(
    kind: ScalarKind,
    data: &S,
    offset: usize,
) -> Result<Scalar, DecodeError> {
    BeReader::new(data).read_scalar(kind, offset)
}

/// Checked decode of `count` consecutive values starting at `offset`.
///
/// # Errors
/// Returns `DecodeError::OutOfBounds` spanning the whole run when any value
/// does not fit. The span is checked before anything is decoded or allocated.
pub fn decode_run<S: ByteSource + ?Sized>(
    kind: ScalarKind,
    data: &S,
    offset: usize,
    count: usize,
) -> Result<Vec<DecodedField>, DecodeError> {
    let reader = BeReader::new(data);
    let span = count
        .checked_mul(kind.width())
        .ok_or(DecodeError::OutOfBounds {
            offset,
            width: usize::MAX,
            len: reader.byte_len(),
        })?;
    reader.require_range(offset, span)?;

    let mut fields = Vec::with_capacity(count);
    let mut cursor = offset;
    for _ in 0..count {
        let value = reader.read_scalar(kind, cursor)?;
        fields.push(DecodedField {
            offset: cursor,
            value,
            raw: value.raw_hex(),
        });
        cursor += kind.width();
    }
    Ok(fields)
}
