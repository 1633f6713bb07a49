//! Preview generation
//!
//! [`PreviewGenerator`] turns 16-bit samples into a square 8-bit grayscale
//! [`Bitmap`](crate::Bitmap). The sizing and scaling helpers are exposed for
//! callers that need to report preview dimensions up front.

mod generator;
mod scale;

pub use generator::PreviewGenerator;
pub use scale::{preview_side, scale_16_to_8};
