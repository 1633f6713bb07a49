//! Public API for the delite-core crate.
//!
//! This module provides the high-level API: [`Adjuster`] builder and
//! [`DeliteError`] unified error type.

mod adjuster;
mod error;

pub use adjuster::Adjuster;
pub use error::DeliteError;
