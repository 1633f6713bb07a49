//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Size of file header + info header + 256-entry color table
pub const PIXEL_OFFSET: usize = 1078;

fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

/// Assert `bytes` is an 8-bit grayscale bitmap of the given square side
pub fn assert_grayscale_bmp(bytes: &[u8], side: u32) {
    assert!(
        bytes.len() >= PIXEL_OFFSET,
        "Expected a bitmap, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    assert_eq!(&bytes[..2], b"BM", "Missing BM signature");
    assert_eq!(u32_at(bytes, 2) as usize, bytes.len(), "file_size field");
    assert_eq!(u32_at(bytes, 10) as usize, PIXEL_OFFSET, "pixel offset");
    assert_eq!(u32_at(bytes, 18), side, "width");
    assert_eq!(u32_at(bytes, 22), side, "height");
    assert_eq!(u32_at(bytes, 34), side * side, "image_size");
    assert_eq!(bytes.len(), PIXEL_OFFSET + (side * side) as usize);
}

/// Pixel bytes of a bitmap written by delite
pub fn pixels(bytes: &[u8]) -> &[u8] {
    &bytes[PIXEL_OFFSET..]
}
