//! Big-endian scalar decoding.
//!
//! Layered like the rest of the crate:
//! - `layout`: scalar widths
//! - `source`: the [`ByteSource`] capability shared by slices, arrays and `Vec<u8>`
//! - `parser`: unchecked hot-path decoders (`to_u32_be`, `to_f64_be`, ...)
//! - `reader`: bounds-checked [`BeReader`]
//! - `scalar`: runtime-typed decoding for tools
//! - `float`: one-time IEEE-754 host check
//!
//! Every decoder treats `data[offset]` as the most significant byte, whatever
//! the host byte order. Floats are bit reinterpretations of the same-width
//! unsigned decode.

pub mod error;
pub mod float;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod scalar;
pub mod source;

pub use error::DecodeError;
pub use float::ensure_ieee754_floats;
pub use parser::{
    to_f32_be, to_f64_be, to_i8_be, to_i16_be, to_i32_be, to_i64_be, to_u8_be, to_u16_be,
    to_u32_be, to_u64_be,
};
pub use reader::BeReader;
pub use scalar::{DecodedField, Scalar, ScalarKind, decode_run, decode_scalar};
pub use source::ByteSource;
