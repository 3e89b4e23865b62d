use super::error::DecodeError;
use super::layout;
use super::parser;
use super::scalar::{Scalar, ScalarKind};
use super::source::ByteSource;

/// Bounds-checked big-endian reader over any [`ByteSource`].
///
/// # Examples
/// ```
/// use bitconv_core::decode::{BeReader, DecodeError};
///
/// let bytes = [0x00u8, 0x00, 0x00, 0x2A];
/// let reader = BeReader::new(&bytes);
/// assert_eq!(reader.read_u32(0)?, 42);
/// assert!(reader.read_u32(1).is_err());
/// # Ok::<(), DecodeError>(())
/// ```
pub struct BeReader<'a, S: ?Sized = [u8]> {
    data: &'a S,
}

impl<'a, S: ByteSource + ?Sized> BeReader<'a, S> {
    pub fn new(data: &'a S) -> Self {
        Self { data }
    }

    pub fn byte_len(&self) -> usize {
        self.data.byte_len()
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DecodeError> {
        self.require_range(0, needed)
    }

    /// Fail unless `width` bytes starting at `offset` are addressable.
    pub fn require_range(&self, offset: usize, width: usize) -> Result<(), DecodeError> {
        let len = self.data.byte_len();
        match offset.checked_add(width) {
            Some(end) if end <= len => Ok(()),
            _ => Err(DecodeError::OutOfBounds { offset, width, len }),
        }
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, DecodeError> {
        self.require_range(offset, layout::WIDTH_8)?;
        Ok(parser::to_u8_be(self.data, offset))
    }

    pub fn read_i8(&self, offset: usize) -> Result<i8, DecodeError> {
        self.require_range(offset, layout::WIDTH_8)?;
        Ok(parser::to_i8_be(self.data, offset))
    }

    pub fn read_u16(&self, offset: usize) -> Result<u16, DecodeError> {
        self.require_range(offset, layout::WIDTH_16)?;
        Ok(parser::to_u16_be(self.data, offset))
    }

    pub fn read_i16(&self, offset: usize) -> Result<i16, DecodeError> {
        self.require_range(offset, layout::WIDTH_16)?;
        Ok(parser::to_i16_be(self.data, offset))
    }

    pub fn read_u32(&self, offset: usize) -> Result<u32, DecodeError> {
        self.require_range(offset, layout::WIDTH_32)?;
        Ok(parser::to_u32_be(self.data, offset))
    }

    pub fn read_i32(&self, offset: usize) -> Result<i32, DecodeError> {
        self.require_range(offset, layout::WIDTH_32)?;
        Ok(parser::to_i32_be(self.data, offset))
    }

    pub fn read_u64(&self, offset: usize) -> Result<u64, DecodeError> {
        self.require_range(offset, layout::WIDTH_64)?;
        Ok(parser::to_u64_be(self.data, offset))
    }

    pub fn read_i64(&self, offset: usize) -> Result<i64, DecodeError> {
        self.require_range(offset, layout::WIDTH_64)?;
        Ok(parser::to_i64_be(self.data, offset))
    }

    pub fn read_f32(&self, offset: usize) -> Result<f32, DecodeError> {
        self.require_range(offset, layout::WIDTH_32)?;
        Ok(parser::to_f32_be(self.data, offset))
    }

    pub fn read_f64(&self, offset: usize) -> Result<f64, DecodeError> {
        self.require_range(offset, layout::WIDTH_64)?;
        Ok(parser::to_f64_be(self.data, offset))
    }

    /// Read one value whose type is chosen at runtime.
    pub fn read_scalar(&self, kind: ScalarKind, offset: usize) -> Result<Scalar, DecodeError> {
        let value = match kind {
            ScalarKind::I8 => Scalar::I8(self.read_i8(offset)?),
            ScalarKind::U8 => Scalar::U8(self.read_u8(offset)?),
            ScalarKind::I16 => Scalar::I16(self.read_i16(offset)?),
            ScalarKind::U16 => Scalar::U16(self.read_u16(offset)?),
            ScalarKind::I32 => Scalar::I32(self.read_i32(offset)?),
            ScalarKind::U32 => Scalar::U32(self.read_u32(offset)?),
            ScalarKind::I64 => Scalar::I64(self.read_i64(offset)?),
            ScalarKind::U64 => Scalar::U64(self.read_u64(offset)?),
            ScalarKind::F32 => Scalar::F32(self.read_f32(offset)?),
            ScalarKind::F64 => Scalar::F64(self.read_f64(offset)?),
        };
        Ok(value)
    }
}

impl<'a> BeReader<'a, [u8]> {
    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], DecodeError> {
        self.data
            .get(range.clone())
            .ok_or(DecodeError::OutOfBounds {
                offset: range.start,
                width: range.end.saturating_sub(range.start),
                len: self.data.len(),
            })
    }

    pub fn read_ascii_string(&self, range: std::ops::Range<usize>) -> Result<String, DecodeError> {
        let bytes = self.read_slice(range)?;
        let raw = String::from_utf8_lossy(bytes);
        Ok(raw.trim_end_matches('\0').trim().to_string())
    }
}
