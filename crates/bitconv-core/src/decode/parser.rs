//! Hot-path big-endian decoders.
//!
//! These functions trust the caller: `offset + width` must not exceed the
//! source length. An out-of-range read panics through slice indexing. Use
//! [`super::BeReader`] when the input is not already validated.

use super::layout;
use super::source::ByteSource;

/// Assemble `width` bytes starting at `offset`, most significant first.
#[inline]
fn assemble_be<S: ByteSource + ?Sized>(data: &S, offset: usize, width: usize) -> u64 {
    let mut value = 0u64;
    for index in 0..width {
        value = (value << 8) | u64::from(data.byte_at(offset + index));
    }
    value
}

#[inline]
pub fn to_u8_be<S: ByteSource + ?Sized>(data: &S, offset: usize) -> u8 {
    assemble_be(data, offset, layout::WIDTH_8) as u8
}

#[inline]
pub fn to_i8_be<S: ByteSource + ?Sized>(data: &S, offset: usize) -> i8 {
    to_u8_be(data, offset) as i8
}

/// Decode a big-endian `u16`.
///
/// # Examples
/// ```
/// use bitconv_core::decode::to_u16_be;
///
/// assert_eq!(to_u16_be(&[0x12u8, 0x34], 0), 0x1234);
/// ```
#[inline]
pub fn to_u16_be<S: ByteSource + ?Sized>(data: &S, offset: usize) -> u16 {
    assemble_be(data, offset, layout::WIDTH_16) as u16
}

#[inline]
pub fn to_i16_be<S: ByteSource + ?Sized>(data: &S, offset: usize) -> i16 {
    to_u16_be(data, offset) as i16
}

/// Decode a big-endian `u32`.
///
/// # Examples
/// ```
/// use bitconv_core::decode::to_u32_be;
///
/// let bytes = vec![0x00u8, 0x00, 0x00, 0x01];
/// assert_eq!(to_u32_be(&bytes, 0), 1);
/// ```
///
/// # Panics
/// Panics when `offset + 4` exceeds the source length.
#[inline]
pub fn to_u32_be<S: ByteSource + ?Sized>(data: &S, offset: usize) -> u32 {
    assemble_be(data, offset, layout::WIDTH_32) as u32
}

/// Decode a big-endian two's-complement `i32`.
///
/// # Examples
/// ```
/// use bitconv_core::decode::to_i32_be;
///
/// assert_eq!(to_i32_be(&[0xFFu8; 4], 0), -1);
/// ```
#[inline]
pub fn to_i32_be<S: ByteSource + ?Sized>(data: &S, offset: usize) -> i32 {
    to_u32_be(data, offset) as i32
}

#[inline]
pub fn to_u64_be<S: ByteSource + ?Sized>(data: &S, offset: usize) -> u64 {
    assemble_be(data, offset, layout::WIDTH_64)
}

#[inline]
pub fn to_i64_be<S: ByteSource + ?Sized>(data: &S, offset: usize) -> i64 {
    to_u64_be(data, offset) as i64
}

/// Decode a big-endian IEEE-754 binary32 by bit reinterpretation.
///
/// # Examples
/// ```
/// use bitconv_core::decode::to_f32_be;
///
/// assert_eq!(to_f32_be(&[0x3Fu8, 0x80, 0x00, 0x00], 0), 1.0);
/// ```
#[inline]
pub fn to_f32_be<S: ByteSource + ?Sized>(data: &S, offset: usize) -> f32 {
    f32::from_bits(to_u32_be(data, offset))
}

/// Decode a big-endian IEEE-754 binary64 by bit reinterpretation.
#[inline]
pub fn to_f64_be<S: ByteSource + ?Sized>(data: &S, offset: usize) -> f64 {
    f64::from_bits(to_u64_be(data, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u32_reads_most_significant_byte_first() {
        let bytes = [0x00u8, 0x00, 0x00, 0x01];
        assert_eq!(to_u32_be(&bytes, 0), 1);
        assert_eq!(to_u32_be(&[0x12u8, 0x34, 0x56, 0x78], 0), 0x1234_5678);
    }

    #[test]
    fn signed_values_are_twos_complement() {
        assert_eq!(to_i32_be(&[0xFFu8, 0xFF, 0xFF, 0xFF], 0), -1);
        assert_eq!(to_i16_be(&[0x80u8, 0x00], 0), i16::MIN);
        assert_eq!(to_i8_be(&[0xFEu8], 0), -2);
        assert_eq!(to_i64_be(&[0xFFu8; 8], 0), -1);
    }

    #[test]
    fn float_reinterprets_bits() {
        assert_eq!(to_f32_be(&[0x3Fu8, 0x80, 0x00, 0x00], 0), 1.0);
        assert_eq!(
            to_f64_be(&[0x40u8, 0x09, 0x21, 0xFB, 0x54, 0x44, 0x2D, 0x18], 0),
            std::f64::consts::PI
        );
    }

    #[test]
    fn float_nan_payload_survives() {
        let bytes = [0x7Fu8, 0xC0, 0x00, 0x01];
        let value = to_f32_be(&bytes, 0);
        assert!(value.is_nan());
        assert_eq!(value.to_bits().to_be_bytes(), bytes);
    }

    #[test]
    fn offset_selects_the_first_byte() {
        let bytes = vec![0xAAu8, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(to_u64_be(&bytes, 1), 0x0102_0304_0506_0708);
        assert_eq!(to_u16_be(&bytes, 7), 0x0708);
        assert_eq!(to_u8_be(&bytes, 0), 0xAA);
    }

    #[test]
    fn minimal_buffer_at_offset_zero() {
        assert_eq!(to_u64_be(&[0x01u8; 8], 0), 0x0101_0101_0101_0101);
        assert_eq!(to_u8_be(&[0x7Fu8], 0), 0x7F);
    }

    #[test]
    #[should_panic]
    fn read_past_end_panics() {
        let bytes = [0u8; 4];
        let _ = to_u32_be(&bytes, 1);
    }
}
