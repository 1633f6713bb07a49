//! Sample scaling and preview sizing.

/// Drop the low byte of a 16-bit sample (integer division by 256).
#[inline]
pub fn scale_16_to_8(sample: u16) -> u8 {
    (sample >> 8) as u8
}

/// Side length of the largest square preview with a width that is a
/// multiple of 4 and at most `count` pixels.
///
/// # Example
///
/// ```
/// use delite_core::preview::preview_side;
///
/// assert_eq!(preview_side(15), 0);
/// assert_eq!(preview_side(16), 4);
/// assert_eq!(preview_side(25), 4);
/// assert_eq!(preview_side(64), 8);
/// ```
pub fn preview_side(count: usize) -> usize {
    floor_sqrt(count) & !3
}

/// Largest `r` with `r * r <= n`.
fn floor_sqrt(n: usize) -> usize {
    if n < 2 {
        return n;
    }
    // f64 gets within one of the answer for any usize; fix up the rounding
    let mut r = (n as f64).sqrt() as usize;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_takes_high_byte() {
        assert_eq!(scale_16_to_8(0), 0);
        assert_eq!(scale_16_to_8(255), 0);
        assert_eq!(scale_16_to_8(256), 1);
        assert_eq!(scale_16_to_8(0x80FF), 0x80);
        assert_eq!(scale_16_to_8(u16::MAX), 255);
    }

    #[test]
    fn test_floor_sqrt() {
        for n in 0..2000usize {
            let r = floor_sqrt(n);
            assert!(r * r <= n && (r + 1) * (r + 1) > n, "n = {n}, r = {r}");
        }
        assert_eq!(floor_sqrt(usize::MAX), (1usize << (usize::BITS / 2)) - 1);
    }

    #[test]
    fn test_preview_side_rounds_down_to_multiple_of_four() {
        assert_eq!(preview_side(0), 0);
        assert_eq!(preview_side(16), 4);
        assert_eq!(preview_side(63), 4);
        assert_eq!(preview_side(64), 8);
        assert_eq!(preview_side(143), 8);
        assert_eq!(preview_side(144), 12);
        assert_eq!(preview_side(1_000_000), 1000);
    }
}
