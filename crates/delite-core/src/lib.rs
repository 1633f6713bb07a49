#![allow(clippy::module_inception)]

//! delite-core: brightest-pixel attenuation and grayscale bitmap previews
//!
//! This library takes a buffer of raw 16-bit samples, attenuates the
//! brightest of them by a percentage, and renders an 8-bit grayscale DIB
//! (`.bmp`) preview of the result.
//!
//! # Quick Start
//!
//! The [`Adjuster`] builder is the primary entry point:
//!
//! ```
//! use delite_core::{AdjustmentLevel, Adjuster};
//!
//! let adjuster = Adjuster::new(50, AdjustmentLevel::new(50).unwrap());
//!
//! let mut samples = vec![0u16; 64];
//! adjuster.adjust(&mut samples).unwrap();
//! let bmp = adjuster.preview(&samples).unwrap();
//!
//! assert_eq!(&bmp[..2], b"BM");
//! ```
//!
//! # Building Blocks
//!
//! - [`attenuate`]: scale the N largest samples in place, each at most once
//! - [`Bitmap`]: headers, 256-shade color table and pixel buffer
//! - [`encode`] / [`decode`]: the exact on-disk byte layout
//! - [`PreviewGenerator`]: 16-bit samples to a square 8-bit bitmap
//!
//! # File Layout
//!
//! ```text
//! offset  size        field
//!      0     2        "BM"
//!      2     4        file size
//!      6     4        reserved (0)
//!     10     4        pixel data offset (1078)
//!     14    40        info header (width, height, 1 plane, 8 bpp, ...)
//!     54  1024        color table, entry i = (i, i, i, 0)
//!   1078  w*h         pixel data, one byte per pixel
//! ```
//!
//! Width is always a multiple of 4, so rows need no padding. Pixels are
//! stored in sample order with no bottom-up flip, so viewers show the
//! preview mirrored vertically.
//!
//! # Rounding
//!
//! Attenuation computes `sample * (100 - level) / 100` in integers and
//! truncates toward zero. The preview keeps the high byte of each sample
//! (`sample / 256`). Neither step rounds to nearest.

pub mod api;
pub mod attenuate;
pub mod bitmap;
pub mod encode;
pub mod preview;


pub use api::{Adjuster, DeliteError};
pub use attenuate::{attenuate, AdjustmentLevel};
pub use bitmap::{Bitmap, ColorEntry, ColorTable, FileHeader, InfoHeader, Raster};
pub use encode::{decode, encode};
pub use preview::PreviewGenerator;
