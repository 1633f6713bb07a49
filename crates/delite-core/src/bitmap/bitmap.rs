//! In-memory bitmap with owned color table and pixel buffer.

use super::header::{FileHeader, InfoHeader, HEADERS_SIZE};
use super::palette::{ColorEntry, ColorTable, GRAYSCALE_ENTRIES};
use crate::api::DeliteError;

/// Bit depth of the indexed grayscale raster.
pub const GRAYSCALE_BIT_DEPTH: u16 = 8;

/// Pixel storage of a bitmap.
///
/// Indexed rasters carry a color table and one palette index per pixel.
/// Direct-color rasters store color values in the pixels themselves and
/// have no color table; this crate can describe them but not fill them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Raster {
    Indexed {
        palette: ColorTable,
        pixels: Option<Vec<u8>>,
    },
    Direct {
        pixels: Option<Vec<u8>>,
    },
}

impl Raster {
    /// The pixel buffer, if one has been filled.
    pub fn pixels(&self) -> Option<&[u8]> {
        match self {
            Raster::Indexed { pixels, .. } | Raster::Direct { pixels } => pixels.as_deref(),
        }
    }

    /// The color table, for indexed rasters.
    pub fn palette(&self) -> Option<&ColorTable> {
        match self {
            Raster::Indexed { palette, .. } => Some(palette),
            Raster::Direct { .. } => None,
        }
    }
}

/// A DIB bitmap: file header, info header and raster.
///
/// The usual lifecycle is [`init_grayscale`](Bitmap::init_grayscale),
/// [`set_dimensions`](Bitmap::set_dimensions), then
/// [`fill_pixels`](Bitmap::fill_pixels), after which the bitmap can be
/// passed to [`encode`](crate::encode).
///
/// # Example
///
/// ```
/// use delite_core::Bitmap;
///
/// let mut bitmap = Bitmap::init_grayscale().unwrap();
/// bitmap.set_dimensions(4, 2).unwrap();
/// bitmap.fill_pixels(&[0u8; 8]).unwrap();
///
/// assert_eq!(bitmap.image_size(), 8);
/// assert_eq!(bitmap.file_size(), 1078 + 8);
/// assert_eq!(bitmap.pixel_data(), Some(&[0u8; 8][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    header: FileHeader,
    info: InfoHeader,
    raster: Raster,
}

impl Bitmap {
    /// Create an 8-bit grayscale bitmap with the 256-shade ramp palette.
    ///
    /// Dimensions start at zero and no pixel buffer is allocated.
    ///
    /// # Errors
    ///
    /// [`DeliteError::AllocationFailure`] if the color table cannot be
    /// allocated.
    pub fn init_grayscale() -> Result<Self, DeliteError> {
        let palette = ColorTable::grayscale()?;
        let colors_used = GRAYSCALE_ENTRIES as u32;
        let pixel_data_offset = HEADERS_SIZE + colors_used * ColorEntry::SIZE;

        Ok(Self {
            header: FileHeader {
                file_size: pixel_data_offset,
                pixel_data_offset,
            },
            info: InfoHeader {
                bit_depth: GRAYSCALE_BIT_DEPTH,
                colors_used,
                ..Default::default()
            },
            raster: Raster::Indexed {
                palette,
                pixels: None,
            },
        })
    }

    /// Create a direct-color bitmap header with no color table.
    pub fn direct_color(bit_depth: u16) -> Self {
        Self {
            header: FileHeader {
                file_size: HEADERS_SIZE,
                pixel_data_offset: HEADERS_SIZE,
            },
            info: InfoHeader {
                bit_depth,
                ..Default::default()
            },
            raster: Raster::Direct { pixels: None },
        }
    }

    pub(crate) fn from_parts(header: FileHeader, info: InfoHeader, raster: Raster) -> Self {
        Self {
            header,
            info,
            raster,
        }
    }

    /// Set width and height and recompute the derived sizes.
    ///
    /// # Errors
    ///
    /// [`DeliteError::InvalidDimensions`] if `width` is not a multiple of 4
    /// or the image or file size does not fit in 32 bits. The bitmap is left
    /// unchanged on error.
    pub fn set_dimensions(&mut self, width: u32, height: u32) -> Result<(), DeliteError> {
        let invalid = DeliteError::InvalidDimensions {
            width: u64::from(width),
            height: u64::from(height),
        };
        if width % 4 != 0 {
            return Err(invalid);
        }

        let bytes_per_pixel = u32::from(self.info.bit_depth).div_ceil(8);
        let image_size = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(bytes_per_pixel))
            .ok_or_else(|| invalid.clone())?;
        let file_size = image_size
            .checked_add(self.header.pixel_data_offset)
            .ok_or(invalid)?;

        self.info.width = width;
        self.info.height = height;
        self.info.image_size = image_size;
        self.header.file_size = file_size;
        Ok(())
    }

    /// Set the informational resolution fields (pixels per meter).
    pub fn set_resolution(&mut self, x: u32, y: u32) {
        self.info.x_resolution = x;
        self.info.y_resolution = y;
    }

    /// Copy `source` into a freshly allocated pixel buffer.
    ///
    /// Any previous pixel buffer is dropped.
    ///
    /// # Errors
    ///
    /// - [`DeliteError::UnsupportedBitDepth`] if the raster is not 8-bit indexed
    /// - [`DeliteError::SizeMismatch`] if `source.len()` differs from
    ///   [`image_size`](Self::image_size)
    /// - [`DeliteError::AllocationFailure`] if the buffer cannot be reserved
    pub fn fill_pixels(&mut self, source: &[u8]) -> Result<(), DeliteError> {
        let bit_depth = self.info.bit_depth;
        let Raster::Indexed { pixels, .. } = &mut self.raster else {
            return Err(DeliteError::UnsupportedBitDepth(bit_depth));
        };
        if bit_depth != GRAYSCALE_BIT_DEPTH {
            return Err(DeliteError::UnsupportedBitDepth(bit_depth));
        }

        let expected = self.info.image_size as usize;
        if source.len() != expected {
            return Err(DeliteError::SizeMismatch {
                expected,
                actual: source.len(),
            });
        }

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(expected)
            .map_err(DeliteError::allocation(expected))?;
        buffer.extend_from_slice(source);
        *pixels = Some(buffer);
        Ok(())
    }

    #[inline]
    pub fn file_header(&self) -> &FileHeader {
        &self.header
    }

    #[inline]
    pub fn info_header(&self) -> &InfoHeader {
        &self.info
    }

    #[inline]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.info.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.info.height
    }

    #[inline]
    pub fn bit_depth(&self) -> u16 {
        self.info.bit_depth
    }

    #[inline]
    pub fn image_size(&self) -> u32 {
        self.info.image_size
    }

    #[inline]
    pub fn file_size(&self) -> u32 {
        self.header.file_size
    }

    #[inline]
    pub fn pixel_data_offset(&self) -> u32 {
        self.header.pixel_data_offset
    }

    /// The color table, for indexed bitmaps.
    #[inline]
    pub fn color_table(&self) -> Option<&ColorTable> {
        self.raster.palette()
    }

    /// The pixel buffer, once filled.
    #[inline]
    pub fn pixel_data(&self) -> Option<&[u8]> {
        self.raster.pixels()
    }
}
