use std::mem::size_of;
use std::sync::OnceLock;

use super::error::DecodeError;
use super::layout;

const _: () = assert!(size_of::<f32>() == layout::WIDTH_32);
const _: () = assert!(size_of::<f64>() == layout::WIDTH_64);

static FLOAT_SUPPORT: OnceLock<Result<(), DecodeError>> = OnceLock::new();

/// Verify once per process that `f32`/`f64` are IEEE-754 binary32/binary64.
///
/// Later calls return the cached outcome.
///
/// # Examples
/// ```
/// bitconv_core::decode::ensure_ieee754_floats()?;
/// # Ok::<(), bitconv_core::decode::DecodeError>(())
/// ```
///
/// # Errors
/// Returns `DecodeError::UnsupportedFloat` naming the first failed probe.
pub fn ensure_ieee754_floats() -> Result<(), DecodeError> {
    FLOAT_SUPPORT.get_or_init(probe_float_layout).clone()
}

fn probe_float_layout() -> Result<(), DecodeError> {
    let checks: [(bool, &'static str); 7] = [
        (f32::RADIX == 2 && f64::RADIX == 2, "float radix is not 2"),
        (f32::MANTISSA_DIGITS == 24, "f32 mantissa is not 24 bits"),
        (f64::MANTISSA_DIGITS == 53, "f64 mantissa is not 53 bits"),
        (f32::from_bits(0x3F80_0000) == 1.0, "f32 bits 0x3f800000 != 1.0"),
        (f32::from_bits(0xC000_0000) == -2.0, "f32 bits 0xc0000000 != -2.0"),
        (
            f64::from_bits(0x3FF0_0000_0000_0000) == 1.0,
            "f64 bits 0x3ff0000000000000 != 1.0",
        ),
        (1.0f32.to_bits() == 0x3F80_0000, "f32 1.0 does not encode as 0x3f800000"),
    ];
    match checks.iter().find(|(ok, _)| !ok) {
        Some(&(_, reason)) => Err(DecodeError::UnsupportedFloat { reason }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::{ensure_ieee754_floats, probe_float_layout};

    #[test]
    fn host_floats_are_ieee754() {
        assert_eq!(probe_float_layout(), Ok(()));
    }

    #[test]
    fn cached_result_is_stable() {
        assert_eq!(ensure_ieee754_floats(), ensure_ieee754_floats());
    }
}
