use serde::{Deserialize, Serialize};

use super::error::RomError;
use super::layout;
use super::normalize::normalize_to_big_endian;
use crate::decode::BeReader;

/// Decoded fields of the 64-byte cartridge header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomHeader {
    /// PI bus configuration word (the magic `0x80371240` on retail images).
    pub pi_config: u32,
    pub clock_rate: u32,
    pub entry_point: u32,
    pub release: u32,
    pub crc1: u32,
    pub crc2: u32,
    /// Internal name, space/NUL padding trimmed.
    pub title: String,
    /// Category, two-letter id and region, e.g. `NZLE`.
    pub game_code: String,
    pub version: u8,
}

/// Decode the header from a buffer already in canonical big-endian order.
///
/// # Errors
/// Returns `RomError::Decode` when the buffer is shorter than the header.
pub fn parse_header(data: &[u8]) -> Result<RomHeader, RomError> {
    let reader = BeReader::new(data);
    reader.require_len(layout::HEADER_LEN)?;

    Ok(RomHeader {
        pi_config: reader.read_u32(layout::PI_CONFIG_OFFSET)?,
        clock_rate: reader.read_u32(layout::CLOCK_RATE_OFFSET)?,
        entry_point: reader.read_u32(layout::ENTRY_POINT_OFFSET)?,
        release: reader.read_u32(layout::RELEASE_OFFSET)?,
        crc1: reader.read_u32(layout::CRC1_OFFSET)?,
        crc2: reader.read_u32(layout::CRC2_OFFSET)?,
        title: reader.read_ascii_string(layout::TITLE_RANGE.clone())?,
        game_code: reader.read_ascii_string(layout::GAME_CODE_RANGE.clone())?,
        version: reader.read_u8(layout::VERSION_OFFSET)?,
    })
}

/// Decode the header of an image in any supported byte order.
///
/// Only the header bytes are copied and normalized; `rom` is not modified.
/// Returns `Ok(None)` when the image is shorter than the header.
///
/// # Examples
/// ```
/// use bitconv_core::rom::{layout, read_header};
///
/// let mut rom = vec![0u8; layout::HEADER_LEN];
/// rom[..4].copy_from_slice(&layout::CANONICAL_MAGIC);
/// let header = read_header(&rom)?.expect("full header");
/// assert_eq!(header.pi_config, 0x8037_1240);
/// # Ok::<(), bitconv_core::rom::RomError>(())
/// ```
pub fn read_header(rom: &[u8]) -> Result<Option<RomHeader>, RomError> {
    let Some(bytes) = rom.get(..layout::HEADER_LEN) else {
        return Ok(None);
    };
    let mut header = bytes.to_vec();
    normalize_to_big_endian(&mut header)?;
    parse_header(&header).map(Some)
}
