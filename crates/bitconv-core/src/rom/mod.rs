//! ROM byte-order normalization.
//!
//! Cartridge dumps circulate in three byte orders, told apart by the first
//! byte: `0x80` (z64, canonical big-endian), `0x37` (v64, 16-bit units
//! swapped) and `0x40` (n64, 32-bit units little-endian). The normalizer
//! rewrites v64 and n64 images in place into z64 order so the big-endian
//! decoders can read them directly.
//!
//! Signatures and header offsets live in `layout`; classification in
//! `format` and `reader`; the in-place rewrite in `normalize`; header
//! decoding in `header`.
//!
//! Version française (résumé):
//! Le module remet une image ROM dans l'ordre big-endian canonique (z64) selon
//! son premier octet : 0x80 inchangé, 0x37 permutation par 16 bits, 0x40
//! permutation par 32 bits. Longueur et signature sont validées avant toute
//! écriture.

pub mod error;
pub mod format;
pub mod header;
pub mod layout;
pub mod normalize;
pub mod reader;

pub use error::RomError;
pub use format::RomFormat;
pub use header::{RomHeader, parse_header, read_header};
pub use normalize::{Normalized, normalize_to_big_endian};
pub use reader::detect_format;
