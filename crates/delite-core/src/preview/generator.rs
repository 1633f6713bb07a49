//! Square 8-bit grayscale preview from 16-bit samples.

use super::scale::{preview_side, scale_16_to_8};
use crate::api::DeliteError;
use crate::bitmap::Bitmap;

/// Builds an 8-bit grayscale preview bitmap from 16-bit samples.
///
/// The preview is the largest square whose side is a multiple of 4 and
/// whose area fits in the sample count. Samples are consumed in order, so
/// anything past `side * side` is not shown. Each sample is reduced to its
/// high byte.
///
/// # Example
///
/// ```
/// use delite_core::PreviewGenerator;
///
/// let samples: Vec<u16> = (0..25).map(|i| i * 256).collect();
/// let bitmap = PreviewGenerator::new().generate(&samples).unwrap();
///
/// assert_eq!((bitmap.width(), bitmap.height()), (4, 4));
/// assert_eq!(bitmap.pixel_data().unwrap()[15], 15);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewGenerator {
    x_resolution: u32,
    y_resolution: u32,
}

impl PreviewGenerator {
    /// Generator with zero resolution fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pixels-per-meter values written to the info header.
    #[inline]
    pub fn resolution(mut self, x: u32, y: u32) -> Self {
        self.x_resolution = x;
        self.y_resolution = y;
        self
    }

    /// Build the preview bitmap.
    ///
    /// # Errors
    ///
    /// [`DeliteError::InsufficientSamples`] when fewer than 16 samples are
    /// given. Errors from building the bitmap are returned unchanged.
    pub fn generate(&self, samples: &[u16]) -> Result<Bitmap, DeliteError> {
        let side = preview_side(samples.len());
        if side == 0 {
            return Err(DeliteError::InsufficientSamples(samples.len()));
        }
        let side_px = u32::try_from(side).map_err(|_| DeliteError::InvalidDimensions {
            width: side as u64,
            height: side as u64,
        })?;

        let used = side * side;
        let mut scaled = Vec::new();
        scaled
            .try_reserve_exact(used)
            .map_err(DeliteError::allocation(used))?;
        scaled.extend(samples[..used].iter().copied().map(scale_16_to_8));

        let mut bitmap = Bitmap::init_grayscale()?;
        bitmap.set_dimensions(side_px, side_px)?;
        bitmap.set_resolution(self.x_resolution, self.y_resolution);
        bitmap.fill_pixels(&scaled)?;
        Ok(bitmap)
    }
}
