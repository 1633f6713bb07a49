//! Validated attenuation percentage.

use crate::api::DeliteError;

/// Attenuation percentage in `0..=100`.
///
/// A level of `p` scales a selected sample to `sample * (100 - p) / 100`,
/// truncated toward zero.
///
/// # Example
///
/// ```
/// use delite_core::AdjustmentLevel;
///
/// let level = AdjustmentLevel::new(25).unwrap();
/// assert_eq!(level.apply(1000), 750);
/// assert!(AdjustmentLevel::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct AdjustmentLevel(u8);

impl AdjustmentLevel {
    /// Leaves samples unchanged.
    pub const NONE: Self = Self(0);
    /// Drives selected samples to zero.
    pub const FULL: Self = Self(100);

    /// Create a level, rejecting anything above 100.
    pub fn new(percent: u32) -> Result<Self, DeliteError> {
        if percent > 100 {
            return Err(DeliteError::LevelOutOfRange(percent));
        }
        Ok(Self(percent as u8))
    }

    /// The level as a percentage.
    #[inline]
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Scale one sample. Exact integer arithmetic, truncating toward zero.
    #[inline]
    pub fn apply(self, sample: u16) -> u16 {
        let kept = 100 - u32::from(self.0);
        // sample * kept / 100 <= sample, so the narrowing cannot overflow
        (u32::from(sample) * kept / 100) as u16
    }
}

impl TryFrom<u32> for AdjustmentLevel {
    type Error = DeliteError;

    fn try_from(percent: u32) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}
