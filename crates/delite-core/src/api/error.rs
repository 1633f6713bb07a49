//! Unified error type for the delite-core public API.
//!
//! [`DeliteError`] covers every failure the attenuation, bitmap, encoding
//! and preview stages can report, so application code can propagate any of
//! them with a single `?`.

use std::collections::TryReserveError;
use std::fmt;

/// Unified error type for the delite-core public API.
///
/// # Example
///
/// ```
/// use delite_core::{Bitmap, DeliteError};
///
/// let mut bitmap = Bitmap::init_grayscale().unwrap();
/// let err = bitmap.set_dimensions(5, 4).unwrap_err();
/// assert_eq!(err, DeliteError::InvalidDimensions { width: 5, height: 4 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliteError {
    /// Empty sample buffer or a pixel count of zero
    InvalidInput(&'static str),
    /// Width is not a multiple of 4, or the derived sizes overflow 32 bits
    InvalidDimensions {
        /// Requested width
        width: u64,
        /// Requested height
        height: u64,
    },
    /// Pixel source length differs from the declared image size
    SizeMismatch {
        /// `image_size` of the bitmap
        expected: usize,
        /// Length of the supplied pixel source
        actual: usize,
    },
    /// A palette or pixel buffer could not be allocated
    AllocationFailure {
        /// Number of bytes requested
        requested: usize,
    },
    /// Pixel fill requested on a raster that is not 8-bit indexed
    UnsupportedBitDepth(u16),
    /// Fewer than 16 samples, so the preview side rounds down to zero
    InsufficientSamples(usize),
    /// Encoding attempted before the palette or pixels were populated
    IncompleteBitmap(&'static str),
    /// Adjustment percentage above 100
    LevelOutOfRange(u32),
    /// Byte stream does not follow the 8-bit grayscale bitmap layout
    Malformed(&'static str),
}

impl fmt::Display for DeliteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliteError::InvalidInput(what) => write!(f, "invalid input: {}", what),
            DeliteError::InvalidDimensions { width, height } => write!(
                f,
                "invalid dimensions {}x{} (width must be a multiple of 4)",
                width, height
            ),
            DeliteError::SizeMismatch { expected, actual } => write!(
                f,
                "pixel data size mismatch: expected {} bytes, got {}",
                expected, actual
            ),
            DeliteError::AllocationFailure { requested } => {
                write!(f, "failed to allocate {} bytes", requested)
            }
            DeliteError::UnsupportedBitDepth(depth) => {
                write!(f, "unsupported bit depth {} (only 8-bit is supported)", depth)
            }
            DeliteError::InsufficientSamples(count) => write!(
                f,
                "insufficient samples for a preview: got {}, need at least 16",
                count
            ),
            DeliteError::IncompleteBitmap(what) => write!(f, "incomplete bitmap: {}", what),
            DeliteError::LevelOutOfRange(level) => write!(
                f,
                "adjustment level {}% out of range (must be 0..=100)",
                level
            ),
            DeliteError::Malformed(reason) => write!(f, "malformed bitmap: {}", reason),
        }
    }
}

impl std::error::Error for DeliteError {}

impl DeliteError {
    /// Map a failed `try_reserve` into [`DeliteError::AllocationFailure`].
    pub(crate) fn allocation(requested: usize) -> impl FnOnce(TryReserveError) -> Self {
        move |_| DeliteError::AllocationFailure { requested }
    }
}
