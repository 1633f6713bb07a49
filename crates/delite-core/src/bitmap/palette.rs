//! Color table for indexed bitmaps.

use crate::api::DeliteError;

/// Number of entries in an 8-bit color table.
pub const GRAYSCALE_ENTRIES: usize = 256;

/// One color table entry, stored on disk as R, G, B, reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorEntry {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub reserved: u8,
}

impl ColorEntry {
    /// Encoded size of one entry
    pub const SIZE: u32 = 4;

    /// Gray shade with all three channels set to `level`.
    #[inline]
    pub const fn gray(level: u8) -> Self {
        Self {
            red: level,
            green: level,
            blue: level,
            reserved: 0,
        }
    }

    /// The entry in on-disk byte order.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.reserved]
    }
}

/// Owned color table.
///
/// Created by [`ColorTable::grayscale`] for bitmaps built by this crate, or
/// read verbatim by the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    entries: Vec<ColorEntry>,
}

impl ColorTable {
    /// The 256-shade ramp where entry `i` is `(i, i, i, 0)`.
    ///
    /// # Errors
    ///
    /// [`DeliteError::AllocationFailure`] if the entries cannot be reserved.
    ///
    /// # Example
    ///
    /// ```
    /// use delite_core::{ColorEntry, ColorTable};
    ///
    /// let table = ColorTable::grayscale().unwrap();
    /// assert_eq!(table.len(), 256);
    /// assert_eq!(table.entries()[7], ColorEntry::gray(7));
    /// ```
    pub fn grayscale() -> Result<Self, DeliteError> {
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(GRAYSCALE_ENTRIES)
            .map_err(DeliteError::allocation(
                GRAYSCALE_ENTRIES * ColorEntry::SIZE as usize,
            ))?;
        entries.extend((0..=u8::MAX).map(ColorEntry::gray));
        Ok(Self { entries })
    }

    pub(crate) fn from_entries(entries: Vec<ColorEntry>) -> Self {
        Self { entries }
    }

    #[inline]
    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every entry is `(i, i, i, 0)` for its index `i`.
    pub fn is_grayscale_ramp(&self) -> bool {
        self.entries.len() == GRAYSCALE_ENTRIES
            && self
                .entries
                .iter()
                .enumerate()
                .all(|(i, &entry)| entry == ColorEntry::gray(i as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_ramp() {
        let table = ColorTable::grayscale().unwrap();
        assert_eq!(table.len(), GRAYSCALE_ENTRIES);
        assert!(!table.is_empty());
        assert_eq!(table.entries()[0], ColorEntry::gray(0));
        assert_eq!(table.entries()[255].to_bytes(), [255, 255, 255, 0]);
        assert!(table.is_grayscale_ramp());
    }

    #[test]
    fn test_non_ramp_detected() {
        let mut entries: Vec<ColorEntry> = (0..=255u8).map(ColorEntry::gray).collect();
        entries[10].red = 0;
        assert!(!ColorTable::from_entries(entries).is_grayscale_ramp());
        assert!(!ColorTable::from_entries(Vec::new()).is_grayscale_ramp());
    }
}
