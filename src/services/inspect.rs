use crate::error::RunError;
use crate::services::file_io::ByteSource;
use delite_core::decode;
use std::fmt;
use std::path::Path;

/// Header fields and pixel statistics of a decoded preview bitmap
#[derive(Debug, Clone, PartialEq)]
pub struct BitmapSummary {
    pub width: u32,
    pub height: u32,
    pub file_size: u32,
    pub image_size: u32,
    pub pixel_data_offset: u32,
    pub x_resolution: u32,
    pub y_resolution: u32,
    /// Whether the color table is the plain 256-shade ramp
    pub grayscale_ramp: bool,
    pub min: u8,
    pub max: u8,
    pub mean: f64,
}

/// Decode a bitmap from `source` and summarize it
pub fn inspect(source: &impl ByteSource, path: &Path) -> Result<BitmapSummary, RunError> {
    let bytes = source.read(path)?;
    let bitmap = decode(&bytes)?;
    let info = bitmap.info_header();
    let pixels = bitmap.pixel_data().unwrap_or_default();

    let (min, max, sum) = pixels
        .iter()
        .fold((u8::MAX, u8::MIN, 0u64), |(lo, hi, sum), &p| {
            (lo.min(p), hi.max(p), sum + u64::from(p))
        });
    let (min, mean) = if pixels.is_empty() {
        (0, 0.0)
    } else {
        (min, sum as f64 / pixels.len() as f64)
    };

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Decoded bitmap");

    Ok(BitmapSummary {
        width: bitmap.width(),
        height: bitmap.height(),
        file_size: bitmap.file_size(),
        image_size: bitmap.image_size(),
        pixel_data_offset: bitmap.pixel_data_offset(),
        x_resolution: info.x_resolution,
        y_resolution: info.y_resolution,
        grayscale_ramp: bitmap
            .color_table()
            .is_some_and(|table| table.is_grayscale_ramp()),
        min,
        max,
        mean,
    })
}

impl fmt::Display for BitmapSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dimensions:   {}x{} (8-bit)", self.width, self.height)?;
        writeln!(f, "File size:    {} bytes", self.file_size)?;
        writeln!(f, "Image size:   {} bytes", self.image_size)?;
        writeln!(f, "Pixel offset: {}", self.pixel_data_offset)?;
        writeln!(
            f,
            "Resolution:   {}x{} px/m",
            self.x_resolution, self.y_resolution
        )?;
        writeln!(
            f,
            "Palette:      {}",
            if self.grayscale_ramp {
                "grayscale ramp"
            } else {
                "custom"
            }
        )?;
        write!(
            f,
            "Pixels:       min {} / max {} / mean {:.1}",
            self.min, self.max, self.mean
        )
    }
}
