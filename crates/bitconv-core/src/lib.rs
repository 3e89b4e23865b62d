//! bitconv core library: big-endian scalar decoding and ROM byte-order
//! normalization.
//!
//! The crate is split in two layers. `decode` turns runs of bytes into
//! fixed-width integers and IEEE-754 floats, most significant byte first,
//! independent of the host byte order. `rom` classifies a cartridge dump by
//! its first byte and rewrites it in place into canonical big-endian order.
//! Both are pure and allocation-free; file access belongs to callers such as
//! the `bitconv` CLI.
//!
//! Invariants:
//! - Decoding is a bit-exact reinterpretation; no range validation.
//! - The hot-path decoders never check bounds; `BeReader` does.
//! - The normalizer validates signature and length before writing a byte.
//!
//! Version française (résumé):
//! Cette crate décode des scalaires big-endian (entiers 8 à 64 bits, flottants
//! IEEE-754) depuis un tampon d'octets, et normalise l'ordre des octets d'une
//! image ROM selon son premier octet. Aucune E/S : le chargement des fichiers
//! reste dans la CLI.
//!
//! # Examples
//! ```
//! use bitconv_core::decode::{to_f32_be, to_u32_be};
//! use bitconv_core::rom::normalize_to_big_endian;
//!
//! let mut rom = vec![0x40, 0x12, 0x37, 0x80, 0x00, 0x00, 0x80, 0x3F];
//! normalize_to_big_endian(&mut rom)?;
//! assert_eq!(to_u32_be(&rom, 0), 0x8037_1240);
//! assert_eq!(to_f32_be(&rom, 4), 1.0);
//! # Ok::<(), bitconv_core::rom::RomError>(())
//! ```

use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub mod decode;
pub mod rom;

use rom::{RomError, RomFormat, RomHeader};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when the input has no modification time.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Byte order tag. The decoders always read big-endian; this records what the
/// host uses.
///
/// # Examples
/// ```
/// use bitconv_core::Endianness;
///
/// let expected = if cfg!(target_endian = "big") {
///     Endianness::Big
/// } else {
///     Endianness::Little
/// };
/// assert_eq!(Endianness::NATIVE, expected);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    Little = 0,
    Big = 1,
}

impl Endianness {
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endianness = Endianness::Big;
    #[cfg(target_endian = "little")]
    pub const NATIVE: Endianness = Endianness::Little;
}

/// Inspection report for one ROM image.
///
/// # Examples
/// ```
/// use bitconv_core::make_stub_report;
///
/// let report = make_stub_report("game.z64", 0);
/// assert_eq!(report.report_version, bitconv_core::REPORT_VERSION);
/// assert!(report.format.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RomReport {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp, taken from the input modification time.
    pub generated_at: String,
    /// Input file metadata.
    pub input: InputInfo,
    /// Detected byte order; absent for an empty input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<FormatSummary>,
    /// Decoded header; absent when the image is shorter than 64 bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<RomHeader>,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "bitconv").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the tool.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Byte-order classification of an image.
///
/// # Examples
/// ```
/// use bitconv_core::FormatSummary;
/// use bitconv_core::rom::RomFormat;
///
/// let summary = FormatSummary::from_format(RomFormat::V64);
/// assert_eq!(summary.signature, "0x37");
/// assert_eq!(summary.unit_bytes, Some(2));
/// assert!(summary.swapped);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatSummary {
    /// Format name (`z64`, `v64` or `n64`).
    pub name: RomFormat,
    /// Signature byte in `0x..` form.
    pub signature: String,
    /// Swap unit width; absent for canonical images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_bytes: Option<usize>,
    /// Whether normalization rewrites the image.
    pub swapped: bool,
}

impl FormatSummary {
    pub fn from_format(format: RomFormat) -> Self {
        let unit_bytes = format.swap_unit();
        Self {
            name: format,
            signature: format!("0x{:02x}", format.signature()),
            unit_bytes,
            swapped: unit_bytes.is_some(),
        }
    }
}

/// Build a stub report with base fields filled and no findings.
pub fn make_stub_report(input_path: &str, input_bytes: u64) -> RomReport {
    RomReport {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "bitconv".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        format: None,
        header: None,
    }
}

/// Classify and summarize a ROM image without modifying it.
///
/// # Examples
/// ```
/// use bitconv_core::inspect_rom;
///
/// let rom = [0x37u8, 0x80, 0x40, 0x12];
/// let report = inspect_rom("game.v64", &rom, None)?;
/// assert_eq!(report.format.map(|f| f.signature), Some("0x37".to_string()));
/// assert!(report.header.is_none());
/// # Ok::<(), bitconv_core::rom::RomError>(())
/// ```
///
/// # Errors
/// Returns `RomError` for an unknown signature or a length that is not a
/// multiple of the swap unit.
pub fn inspect_rom(
    input_path: &str,
    data: &[u8],
    modified: Option<SystemTime>,
) -> Result<RomReport, RomError> {
    let mut report = make_stub_report(input_path, data.len() as u64);
    report.generated_at = modified
        .and_then(system_time_to_rfc3339)
        .unwrap_or_else(|| DEFAULT_GENERATED_AT.to_string());

    let reader = rom::reader::RomReader::new(data);
    let Some(format) = reader.detect_format()? else {
        return Ok(report);
    };
    if let Some(unit) = format.swap_unit() {
        reader.require_unit_multiple(unit)?;
    }
    report.format = Some(FormatSummary::from_format(format));
    report.header = rom::read_header(data)?;
    Ok(report)
}

fn system_time_to_rfc3339(ts: SystemTime) -> Option<String> {
    OffsetDateTime::from(ts).format(&Rfc3339).ok()
}
