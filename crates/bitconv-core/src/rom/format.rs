use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::RomError;
use super::layout;

/// Storage order of a ROM dump, classified by its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RomFormat {
    /// Canonical big-endian image.
    Z64,
    /// Every 16-bit unit byte-swapped.
    V64,
    /// Every 32-bit unit stored little-endian.
    N64,
}

impl RomFormat {
    /// Classify a signature byte.
    ///
    /// # Examples
    /// ```
    /// use bitconv_core::rom::RomFormat;
    ///
    /// assert_eq!(RomFormat::from_signature(0x37)?, RomFormat::V64);
    /// assert!(RomFormat::from_signature(0x00).is_err());
    /// # Ok::<(), bitconv_core::rom::RomError>(())
    /// ```
    pub fn from_signature(signature: u8) -> Result<Self, RomError> {
        match signature {
            layout::SIGNATURE_Z64 => Ok(RomFormat::Z64),
            layout::SIGNATURE_V64 => Ok(RomFormat::V64),
            layout::SIGNATURE_N64 => Ok(RomFormat::N64),
            _ => Err(RomError::UnrecognizedFormat { signature }),
        }
    }

    pub fn signature(self) -> u8 {
        match self {
            RomFormat::Z64 => layout::SIGNATURE_Z64,
            RomFormat::V64 => layout::SIGNATURE_V64,
            RomFormat::N64 => layout::SIGNATURE_N64,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RomFormat::Z64 => "z64",
            RomFormat::V64 => "v64",
            RomFormat::N64 => "n64",
        }
    }

    /// Width of the unit to reverse, or `None` when already canonical.
    pub fn swap_unit(self) -> Option<usize> {
        match self {
            RomFormat::Z64 => None,
            RomFormat::V64 => Some(layout::V64_UNIT),
            RomFormat::N64 => Some(layout::N64_UNIT),
        }
    }
}

impl fmt::Display for RomFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
