//! Top-k brightest sample selection and attenuation.
//!
//! Selection is a repeated linear scan: each round picks the largest sample
//! that has not been picked yet, scales it, and marks its index. A sample is
//! scaled at most once no matter how many rounds are requested.

use super::level::AdjustmentLevel;
use crate::api::DeliteError;

/// Attenuate the `pixel_count` brightest samples in place.
///
/// Equal maxima are taken in index order. Once every index has been
/// adjusted, remaining rounds do nothing. Returns the number of samples
/// that were adjusted, i.e. `min(pixel_count, samples.len())`.
///
/// # Errors
///
/// [`DeliteError::InvalidInput`] if `samples` is empty or `pixel_count`
/// is zero.
///
/// # Example
///
/// ```
/// use delite_core::{attenuate, AdjustmentLevel};
///
/// let mut samples = [10u16, 400, 30, 400, 200];
/// let adjusted = attenuate(&mut samples, 3, AdjustmentLevel::new(50).unwrap()).unwrap();
///
/// assert_eq!(adjusted, 3);
/// assert_eq!(samples, [10, 200, 30, 200, 100]);
/// ```
pub fn attenuate(
    samples: &mut [u16],
    pixel_count: usize,
    level: AdjustmentLevel,
) -> Result<usize, DeliteError> {
    if samples.is_empty() {
        return Err(DeliteError::InvalidInput("sample buffer is empty"));
    }
    if pixel_count == 0 {
        return Err(DeliteError::InvalidInput("pixel count must be positive"));
    }

    let mut adjusted = AdjustedSet::new(samples.len());

    for _ in 0..pixel_count {
        let Some(index) = brightest_unadjusted(samples, &adjusted) else {
            break;
        };
        samples[index] = level.apply(samples[index]);
        adjusted.insert(index);
    }

    Ok(adjusted.len())
}

/// Index of the largest sample not yet in `adjusted`, first one on ties.
fn brightest_unadjusted(samples: &[u16], adjusted: &AdjustedSet) -> Option<usize> {
    let mut best: Option<(usize, u16)> = None;
    for (index, &value) in samples.iter().enumerate() {
        if adjusted.contains(index) {
            continue;
        }
        match best {
            Some((_, max)) if value <= max => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}

/// Set membership over sample indices, one flag per position.
struct AdjustedSet {
    flags: Vec<bool>,
    count: usize,
}

impl AdjustedSet {
    fn new(size: usize) -> Self {
        Self {
            flags: vec![false; size],
            count: 0,
        }
    }

    #[inline]
    fn contains(&self, index: usize) -> bool {
        self.flags[index]
    }

    fn insert(&mut self, index: usize) {
        if !self.flags[index] {
            self.flags[index] = true;
            self.count += 1;
        }
    }

    fn len(&self) -> usize {
        self.count
    }
}
