//! Bitmap serialization.

use super::writer::LeWriter;
use crate::api::DeliteError;
use crate::bitmap::{Bitmap, ColorTable, FileHeader, InfoHeader, Raster};

/// Serialize a bitmap into its on-disk byte layout.
///
/// Layout, all integers little-endian with no padding:
///
/// ```text
///    0  file header      14 bytes
///   14  info header      40 bytes
///   54  color table      colors_used * 4 bytes (R, G, B, 0)
///  off  pixel data       image_size bytes
/// ```
///
/// The returned buffer is exactly `bitmap.file_size()` bytes long.
///
/// # Errors
///
/// [`DeliteError::IncompleteBitmap`] if the color table or the pixel buffer
/// is missing or does not match the sizes declared in the headers.
///
/// # Example
///
/// ```
/// use delite_core::{encode, Bitmap};
///
/// let mut bitmap = Bitmap::init_grayscale().unwrap();
/// assert!(encode(&bitmap).is_err());
///
/// bitmap.set_dimensions(4, 1).unwrap();
/// bitmap.fill_pixels(&[0, 64, 128, 255]).unwrap();
/// let bytes = encode(&bitmap).unwrap();
///
/// assert_eq!(&bytes[..2], b"BM");
/// assert_eq!(bytes.len(), 1082);
/// assert_eq!(&bytes[1078..], &[0, 64, 128, 255]);
/// ```
pub fn encode(bitmap: &Bitmap) -> Result<Vec<u8>, DeliteError> {
    let info = bitmap.info_header();
    let (palette, pixels) = match bitmap.raster() {
        Raster::Indexed { palette, pixels } => {
            if palette.len() != info.colors_used as usize {
                return Err(DeliteError::IncompleteBitmap(
                    "color table does not match colors_used",
                ));
            }
            (Some(palette), pixels.as_deref())
        }
        Raster::Direct { pixels } => (None, pixels.as_deref()),
    };
    let pixels = pixels.ok_or(DeliteError::IncompleteBitmap("pixel data not set"))?;
    if pixels.len() != info.image_size as usize {
        return Err(DeliteError::IncompleteBitmap(
            "pixel data does not match image size",
        ));
    }

    let mut out = LeWriter::with_capacity(bitmap.file_size() as usize);
    write_file_header(&mut out, bitmap.file_header());
    write_info_header(&mut out, info);
    if let Some(palette) = palette {
        write_color_table(&mut out, palette);
    }
    write_pixel_data(&mut out, pixels);

    debug_assert_eq!(out.len(), bitmap.file_size() as usize);
    Ok(out.into_inner())
}

fn write_file_header(out: &mut LeWriter, header: &FileHeader) {
    out.bytes(&FileHeader::SIGNATURE)
        .u32(header.file_size)
        .u32(FileHeader::RESERVED)
        .u32(header.pixel_data_offset);
}

fn write_info_header(out: &mut LeWriter, info: &InfoHeader) {
    out.u32(InfoHeader::SIZE)
        .u32(info.width)
        .u32(info.height)
        .u16(InfoHeader::PLANES)
        .u16(info.bit_depth)
        .u32(InfoHeader::COMPRESSION)
        .u32(info.image_size)
        .u32(info.x_resolution)
        .u32(info.y_resolution)
        .u32(info.colors_used)
        .u32(InfoHeader::IMPORTANT_COLORS);
}

fn write_color_table(out: &mut LeWriter, palette: &ColorTable) {
    for entry in palette.entries() {
        out.bytes(&entry.to_bytes());
    }
}

fn write_pixel_data(out: &mut LeWriter, pixels: &[u8]) {
    out.bytes(pixels);
}
