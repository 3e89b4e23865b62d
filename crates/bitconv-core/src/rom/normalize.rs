use serde::{Deserialize, Serialize};

use super::error::RomError;
use super::format::RomFormat;
use super::layout;
use super::reader::RomReader;
use crate::decode::{to_u16_be, to_u32_be};

/// Outcome of an in-place normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalized {
    /// Detected source format; `None` for an empty buffer.
    pub format: Option<RomFormat>,
    /// Number of units reversed (0 when already canonical).
    pub units_swapped: usize,
}

/// Rewrite a ROM image in place into canonical big-endian (z64) order.
///
/// The first byte selects the storage order: `0x80` is left as is, `0x37`
/// has every 16-bit unit reversed, `0x40` has every 32-bit unit reversed.
/// Lengths and signatures are validated before any byte is written, so a
/// failed call leaves the buffer untouched. An empty buffer is a no-op.
///
/// # Examples
/// ```
/// use bitconv_core::rom::{RomFormat, normalize_to_big_endian};
///
/// let mut rom = vec![0x37, 0x80, 0x40, 0x12];
/// let outcome = normalize_to_big_endian(&mut rom)?;
/// assert_eq!(outcome.format, Some(RomFormat::V64));
/// assert_eq!(rom, [0x80, 0x37, 0x12, 0x40]);
/// # Ok::<(), bitconv_core::rom::RomError>(())
/// ```
///
/// # Errors
/// - `RomError::UnrecognizedFormat` for any other first byte.
/// - `RomError::InvalidLength` when the length is not a multiple of the unit.
pub fn normalize_to_big_endian(rom: &mut [u8]) -> Result<Normalized, RomError> {
    let reader = RomReader::new(rom);
    let format = match reader.detect_format()? {
        Some(format) => format,
        None => {
            return Ok(Normalized {
                format: None,
                units_swapped: 0,
            });
        }
    };
    let unit = match format.swap_unit() {
        Some(unit) => unit,
        None => {
            return Ok(Normalized {
                format: Some(format),
                units_swapped: 0,
            });
        }
    };
    reader.require_unit_multiple(unit)?;

    let units_swapped = match unit {
        layout::V64_UNIT => swap_units16(rom),
        _ => swap_units32(rom),
    };
    Ok(Normalized {
        format: Some(format),
        units_swapped,
    })
}

// The little-endian image of a big-endian read is the reversed unit.
fn swap_units16(rom: &mut [u8]) -> usize {
    let mut count = 0;
    for chunk in rom.chunks_exact_mut(layout::V64_UNIT) {
        let unit = to_u16_be(&*chunk, 0);
        chunk.copy_from_slice(&unit.to_le_bytes());
        count += 1;
    }
    count
}

fn swap_units32(rom: &mut [u8]) -> usize {
    let mut count = 0;
    for chunk in rom.chunks_exact_mut(layout::N64_UNIT) {
        let unit = to_u32_be(&*chunk, 0);
        chunk.copy_from_slice(&unit.to_le_bytes());
        count += 1;
    }
    count
}
