//! Bitmap types
//!
//! This module provides the in-memory [`Bitmap`] (file header, info header,
//! raster) and the grayscale [`ColorTable`] used by indexed rasters.

mod bitmap;
mod header;
mod palette;

pub use bitmap::{Bitmap, Raster, GRAYSCALE_BIT_DEPTH};
pub use header::{FileHeader, InfoHeader, HEADERS_SIZE};
pub use palette::{ColorEntry, ColorTable, GRAYSCALE_ENTRIES};
