//! Raw sample stream encoding: consecutive little-endian `u16` values.

use crate::error::RunError;

/// Split a byte stream into little-endian 16-bit samples
pub fn decode_samples(bytes: &[u8]) -> Result<Vec<u16>, RunError> {
    if bytes.len() % 2 != 0 {
        return Err(RunError::OddLength { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Inverse of [`decode_samples`]
pub fn encode_samples(samples: &[u16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}
