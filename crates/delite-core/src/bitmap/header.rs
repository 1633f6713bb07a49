//! File header and info header fields.
//!
//! Only the mutable fields are stored; constants (signature, reserved word,
//! header size, planes, compression, important colors) are associated
//! constants and are emitted by the encoder directly.

/// File identification header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileHeader {
    /// Total file size in bytes (headers + color table + pixel data)
    pub file_size: u32,
    /// Offset of the first pixel byte from the start of the file
    pub pixel_data_offset: u32,
}

impl FileHeader {
    /// Magic bytes, "BM"
    pub const SIGNATURE: [u8; 2] = *b"BM";
    /// Reserved word, always zero
    pub const RESERVED: u32 = 0;
    /// Encoded size: signature + file size + reserved + offset
    pub const SIZE: u32 = 2 + 4 + 4 + 4;
}

/// Bitmap information header (40-byte form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InfoHeader {
    /// Width in pixels, a multiple of 4 once set
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Bits per pixel
    pub bit_depth: u16,
    /// Pixel data size in bytes, `width * height` for 8-bit uncompressed
    pub image_size: u32,
    /// Horizontal resolution in pixels per meter, informational
    pub x_resolution: u32,
    /// Vertical resolution in pixels per meter, informational
    pub y_resolution: u32,
    /// Number of color table entries
    pub colors_used: u32,
}

impl InfoHeader {
    /// Encoded size of this header
    pub const SIZE: u32 = 40;
    /// Color planes, always 1
    pub const PLANES: u16 = 1;
    /// Uncompressed (BI_RGB)
    pub const COMPRESSION: u32 = 0;
    /// Zero means every color is important
    pub const IMPORTANT_COLORS: u32 = 0;
}

/// Combined size of both headers.
pub const HEADERS_SIZE: u32 = FileHeader::SIZE + InfoHeader::SIZE;
