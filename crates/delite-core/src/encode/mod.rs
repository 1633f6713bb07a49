//! Byte-level bitmap serialization
//!
//! [`encode`] writes a [`Bitmap`](crate::Bitmap) field by field into a
//! growable little-endian sink; [`decode`] reads the same layout back.

mod decoder;
mod encoder;
mod writer;

pub use decoder::decode;
pub use encoder::encode;
