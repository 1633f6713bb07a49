//! Parsing of bitmaps written by [`encode`](super::encode).
//!
//! Only the exact layout produced by this crate is accepted: 40-byte info
//! header, 8 bits per pixel, uncompressed, 256-entry color table directly
//! followed by the pixel data.

use super::writer::LeReader;
use crate::api::DeliteError;
use crate::bitmap::{
    Bitmap, ColorEntry, ColorTable, FileHeader, InfoHeader, Raster, GRAYSCALE_BIT_DEPTH,
    GRAYSCALE_ENTRIES, HEADERS_SIZE,
};

const TRUNCATED: DeliteError = DeliteError::Malformed("stream is truncated");

/// Parse an 8-bit indexed bitmap from its on-disk bytes.
///
/// The color table is kept as read, so `decode(&encode(&b)?)? == b`.
///
/// # Errors
///
/// [`DeliteError::UnsupportedBitDepth`] for anything but 8-bit data, and
/// [`DeliteError::Malformed`] for any other deviation from the layout.
///
/// # Example
///
/// ```
/// use delite_core::{decode, encode, Bitmap};
///
/// let mut bitmap = Bitmap::init_grayscale().unwrap();
/// bitmap.set_dimensions(4, 1).unwrap();
/// bitmap.fill_pixels(&[1, 2, 3, 4]).unwrap();
///
/// let parsed = decode(&encode(&bitmap).unwrap()).unwrap();
/// assert_eq!(parsed.pixel_data(), Some(&[1u8, 2, 3, 4][..]));
/// ```
pub fn decode(bytes: &[u8]) -> Result<Bitmap, DeliteError> {
    let mut input = LeReader::new(bytes);

    let header = read_file_header(&mut input, bytes.len())?;
    let info = read_info_header(&mut input)?;

    let expected_offset = HEADERS_SIZE + info.colors_used * ColorEntry::SIZE;
    if header.pixel_data_offset != expected_offset {
        return Err(DeliteError::Malformed(
            "pixel data offset does not follow the color table",
        ));
    }
    let expected_size = expected_offset
        .checked_add(info.image_size)
        .ok_or(DeliteError::Malformed("image size overflows the file size"))?;
    if header.file_size != expected_size {
        return Err(DeliteError::Malformed(
            "file size does not match headers and image size",
        ));
    }

    let palette = read_color_table(&mut input, info.colors_used as usize)?;
    let pixels = input
        .bytes(info.image_size as usize)
        .ok_or(TRUNCATED)?
        .to_vec();
    debug_assert_eq!(input.remaining(), 0);

    Ok(Bitmap::from_parts(
        header,
        info,
        Raster::Indexed {
            palette,
            pixels: Some(pixels),
        },
    ))
}

fn read_file_header(
    input: &mut LeReader<'_>,
    stream_len: usize,
) -> Result<FileHeader, DeliteError> {
    if stream_len < HEADERS_SIZE as usize {
        return Err(TRUNCATED);
    }
    if input.bytes(2).ok_or(TRUNCATED)? != &FileHeader::SIGNATURE[..] {
        return Err(DeliteError::Malformed("missing BM signature"));
    }
    let file_size = input.u32().ok_or(TRUNCATED)?;
    if file_size as usize != stream_len {
        return Err(DeliteError::Malformed(
            "file size field does not match stream length",
        ));
    }
    if input.u32().ok_or(TRUNCATED)? != FileHeader::RESERVED {
        return Err(DeliteError::Malformed("reserved field is not zero"));
    }
    let pixel_data_offset = input.u32().ok_or(TRUNCATED)?;

    Ok(FileHeader {
        file_size,
        pixel_data_offset,
    })
}

fn read_info_header(input: &mut LeReader<'_>) -> Result<InfoHeader, DeliteError> {
    if input.u32().ok_or(TRUNCATED)? != InfoHeader::SIZE {
        return Err(DeliteError::Malformed("unsupported info header size"));
    }
    let width = input.u32().ok_or(TRUNCATED)?;
    let height = input.u32().ok_or(TRUNCATED)?;
    if input.u16().ok_or(TRUNCATED)? != InfoHeader::PLANES {
        return Err(DeliteError::Malformed("planes count is not 1"));
    }
    let bit_depth = input.u16().ok_or(TRUNCATED)?;
    if bit_depth != GRAYSCALE_BIT_DEPTH {
        return Err(DeliteError::UnsupportedBitDepth(bit_depth));
    }
    if input.u32().ok_or(TRUNCATED)? != InfoHeader::COMPRESSION {
        return Err(DeliteError::Malformed("compressed bitmaps are not supported"));
    }
    let image_size = input.u32().ok_or(TRUNCATED)?;
    let x_resolution = input.u32().ok_or(TRUNCATED)?;
    let y_resolution = input.u32().ok_or(TRUNCATED)?;
    let colors_used = input.u32().ok_or(TRUNCATED)?;
    let important_colors = input.u32().ok_or(TRUNCATED)?;

    if width % 4 != 0 {
        return Err(DeliteError::Malformed("width is not a multiple of 4"));
    }
    if width.checked_mul(height) != Some(image_size) {
        return Err(DeliteError::Malformed("image size does not match dimensions"));
    }
    if colors_used as usize != GRAYSCALE_ENTRIES {
        return Err(DeliteError::Malformed("expected 256 color table entries"));
    }
    if important_colors != InfoHeader::IMPORTANT_COLORS {
        return Err(DeliteError::Malformed("important colors is not zero"));
    }

    Ok(InfoHeader {
        width,
        height,
        bit_depth,
        image_size,
        x_resolution,
        y_resolution,
        colors_used,
    })
}

fn read_color_table(input: &mut LeReader<'_>, count: usize) -> Result<ColorTable, DeliteError> {
    let raw = input
        .bytes(count * ColorEntry::SIZE as usize)
        .ok_or(TRUNCATED)?;
    let entries = raw
        .chunks_exact(ColorEntry::SIZE as usize)
        .map(|c| ColorEntry {
            red: c[0],
            green: c[1],
            blue: c[2],
            reserved: c[3],
        })
        .collect();
    Ok(ColorTable::from_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;

    fn sample_bytes() -> Vec<u8> {
        let mut bitmap = Bitmap::init_grayscale().unwrap();
        bitmap.set_dimensions(4, 2).unwrap();
        bitmap.set_resolution(100, 200);
        bitmap.fill_pixels(&[0, 1, 2, 3, 252, 253, 254, 255]).unwrap();
        encode(&bitmap).unwrap()
    }

    fn patch_u32(bytes: &mut [u8], off: usize, value: u32) {
        bytes[off..off + 4].copy_from_slice(&value.to_le_bytes());
    }

    #[test]
    fn test_decode_restores_fields() {
        let bitmap = decode(&sample_bytes()).unwrap();
        assert_eq!(bitmap.width(), 4);
        assert_eq!(bitmap.height(), 2);
        assert_eq!(bitmap.image_size(), 8);
        assert_eq!(bitmap.info_header().x_resolution, 100);
        assert_eq!(bitmap.info_header().y_resolution, 200);
        assert!(bitmap.color_table().unwrap().is_grayscale_ramp());
        assert_eq!(
            bitmap.pixel_data(),
            Some(&[0u8, 1, 2, 3, 252, 253, 254, 255][..])
        );
    }

    #[test]
    fn test_decode_rejects_bad_signature() {
        let mut bytes = sample_bytes();
        bytes[0] = b'X';
        assert_eq!(
            decode(&bytes),
            Err(DeliteError::Malformed("missing BM signature"))
        );
    }

    #[test]
    fn test_decode_rejects_truncation() {
        let bytes = sample_bytes();
        assert_eq!(decode(&bytes[..20]), Err(TRUNCATED));
        assert_eq!(
            decode(&bytes[..bytes.len() - 1]),
            Err(DeliteError::Malformed(
                "file size field does not match stream length"
            ))
        );
    }

    #[test]
    fn test_decode_rejects_other_bit_depths() {
        let mut bytes = sample_bytes();
        bytes[28..30].copy_from_slice(&24u16.to_le_bytes());
        assert_eq!(decode(&bytes), Err(DeliteError::UnsupportedBitDepth(24)));
    }

    #[test]
    fn test_decode_rejects_inconsistent_image_size() {
        let mut bytes = sample_bytes();
        patch_u32(&mut bytes, 34, 12);
        assert_eq!(
            decode(&bytes),
            Err(DeliteError::Malformed("image size does not match dimensions"))
        );
    }

    #[test]
    fn test_decode_rejects_moved_pixel_offset() {
        let mut bytes = sample_bytes();
        patch_u32(&mut bytes, 10, 1079);
        assert_eq!(
            decode(&bytes),
            Err(DeliteError::Malformed(
                "pixel data offset does not follow the color table"
            ))
        );
    }
}
