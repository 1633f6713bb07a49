//! Test fixtures: scratch directories and sample streams.

use delite::services::encode_samples;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory holding one run's input and outputs
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `samples` as a raw little-endian stream and return its path
    pub fn raw_input(&self, name: &str, samples: &[u16]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, encode_samples(samples)).expect("Failed to write raw input");
        path
    }

    pub fn read(&self, path: &Path) -> Vec<u8> {
        std::fs::read(path).expect("Failed to read output")
    }
}

/// A dim frame with a handful of hot pixels at known positions
pub fn frame_with_hot_pixels(len: usize, hot: &[(usize, u16)]) -> Vec<u16> {
    let mut samples: Vec<u16> = (0..len).map(|i| 0x1000 + (i as u16 % 64) * 16).collect();
    for &(index, value) in hot {
        samples[index] = value;
    }
    samples
}
