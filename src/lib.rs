//! Delite - overexposure touch-up for raw 16-bit sample streams.
//!
//! Reads a raw stream, attenuates the brightest samples, and writes the
//! adjusted stream plus an 8-bit grayscale bitmap preview. The algorithms
//! live in `delite-core`; this crate holds configuration, file I/O and the
//! command-line front end. The library is exposed for integration testing.

pub mod error;
pub mod models;
pub mod services;
