/// Indexable, read-only run of bytes.
///
/// Implemented for borrowed slices, fixed arrays and `Vec<u8>` so the
/// decoders accept all three without copying.
///
/// # Examples
/// ```
/// use bitconv_core::decode::ByteSource;
///
/// let bytes = vec![0x12u8, 0x34];
/// assert_eq!(bytes.byte_len(), 2);
/// assert_eq!(bytes.byte_at(1), 0x34);
/// ```
pub trait ByteSource {
    /// Number of addressable bytes.
    fn byte_len(&self) -> usize;

    /// Byte at `index`.
    ///
    /// # Panics
    /// Panics when `index >= self.byte_len()`.
    fn byte_at(&self, index: usize) -> u8;
}

impl ByteSource for [u8] {
    #[inline]
    fn byte_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self[index]
    }
}

impl<const N: usize> ByteSource for [u8; N] {
    #[inline]
    fn byte_len(&self) -> usize {
        N
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self[index]
    }
}

impl ByteSource for Vec<u8> {
    #[inline]
    fn byte_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.as_slice()[index]
    }
}
