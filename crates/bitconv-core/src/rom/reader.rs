use super::error::RomError;
use super::format::RomFormat;
use super::layout;

pub struct RomReader<'a> {
    data: &'a [u8],
}

impl<'a> RomReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn read_signature(&self) -> Option<u8> {
        self.data.get(layout::SIGNATURE_OFFSET).copied()
    }

    /// Classify the buffer; `Ok(None)` for an empty buffer.
    pub fn detect_format(&self) -> Result<Option<RomFormat>, RomError> {
        self.read_signature()
            .map(RomFormat::from_signature)
            .transpose()
    }

    pub fn require_unit_multiple(&self, unit: usize) -> Result<(), RomError> {
        if self.data.len() % unit != 0 {
            return Err(RomError::InvalidLength {
                length: self.data.len(),
                unit,
            });
        }
        Ok(())
    }
}

/// Classify a buffer by its signature byte without touching it.
///
/// # Examples
/// ```
/// use bitconv_core::rom::{RomFormat, detect_format};
///
/// assert_eq!(detect_format(&[0x80, 0x37, 0x12, 0x40])?, Some(RomFormat::Z64));
/// assert_eq!(detect_format(&[])?, None);
/// # Ok::<(), bitconv_core::rom::RomError>(())
/// ```
pub fn detect_format(data: &[u8]) -> Result<Option<RomFormat>, RomError> {
    RomReader::new(data).detect_format()
}

#[cfg(test)]
mod tests {
    use super::{RomReader, detect_format};
    use crate::rom::error::RomError;
    use crate::rom::format::RomFormat;

    #[test]
    fn detect_each_signature() {
        assert_eq!(detect_format(&[0x37, 0x80]).unwrap(), Some(RomFormat::V64));
        assert_eq!(detect_format(&[0x40]).unwrap(), Some(RomFormat::N64));
        assert_eq!(detect_format(&[0x80]).unwrap(), Some(RomFormat::Z64));
    }

    #[test]
    fn detect_unknown_signature() {
        let err = detect_format(&[0x12, 0x34]).unwrap_err();
        assert_eq!(err, RomError::UnrecognizedFormat { signature: 0x12 });
    }

    #[test]
    fn unit_multiple_checked() {
        let data = [0u8; 6];
        let reader = RomReader::new(&data);
        assert!(reader.require_unit_multiple(2).is_ok());
        assert_eq!(
            reader.require_unit_multiple(4),
            Err(RomError::InvalidLength { length: 6, unit: 4 })
        );
    }
}
