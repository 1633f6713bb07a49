//! Adjuster builder -- the ergonomic entry point for the crate.
//!
//! [`Adjuster`] bundles the attenuation parameters with a configured
//! [`PreviewGenerator`] so a full pass is two calls.

use super::error::DeliteError;
use crate::attenuate::{attenuate, AdjustmentLevel};
use crate::encode::encode;
use crate::preview::PreviewGenerator;

/// High-level attenuation + preview pipeline.
///
/// - Constructor takes the attenuation parameters
/// - Configuration methods consume and return `self`
/// - [`adjust()`](Self::adjust) and [`preview()`](Self::preview) take
///   `&self`, so one adjuster can process many buffers
///
/// # Example
///
/// ```
/// use delite_core::{AdjustmentLevel, Adjuster};
///
/// let adjuster = Adjuster::new(1, AdjustmentLevel::new(50).unwrap()).resolution(2835, 2835);
///
/// let mut samples = vec![0x1000u16; 16];
/// samples[3] = 0xFF00;
/// assert_eq!(adjuster.adjust(&mut samples).unwrap(), 1);
/// assert_eq!(samples[3], 0x7F80);
///
/// let bmp = adjuster.preview(&samples).unwrap();
/// assert_eq!(bmp.len(), 1078 + 16);
/// assert_eq!(bmp[1078 + 3], 0x7F);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjuster {
    pixel_count: usize,
    level: AdjustmentLevel,
    preview: PreviewGenerator,
}

impl Adjuster {
    /// Adjust the `pixel_count` brightest samples by `level`.
    pub fn new(pixel_count: usize, level: AdjustmentLevel) -> Self {
        Self {
            pixel_count,
            level,
            preview: PreviewGenerator::new(),
        }
    }

    /// Set the preview resolution in pixels per meter.
    #[inline]
    pub fn resolution(mut self, x: u32, y: u32) -> Self {
        self.preview = self.preview.resolution(x, y);
        self
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    #[inline]
    pub fn level(&self) -> AdjustmentLevel {
        self.level
    }

    /// Attenuate `samples` in place; returns how many were adjusted.
    pub fn adjust(&self, samples: &mut [u16]) -> Result<usize, DeliteError> {
        attenuate(samples, self.pixel_count, self.level)
    }

    /// Build and encode the preview bitmap for `samples`.
    pub fn preview(&self, samples: &[u16]) -> Result<Vec<u8>, DeliteError> {
        let bitmap = self.preview.generate(samples)?;
        encode(&bitmap)
    }
}
