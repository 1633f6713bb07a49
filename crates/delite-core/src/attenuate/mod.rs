//! Brightest-sample attenuation
//!
//! This module provides the validated [`AdjustmentLevel`] percentage and the
//! [`attenuate`] pass that scales the N brightest samples of a buffer.

mod level;
mod selection;

pub use level::AdjustmentLevel;
pub use selection::attenuate;
