//! Shared date-band and index helpers for the classifiers.

/// An inclusive `(month, day)` range, possibly wrapping past 31 December.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBand {
    pub start: (u32, u32),
    pub end: (u32, u32),
}

impl DateBand {
    pub const fn new(start_month: u32, start_day: u32, end_month: u32, end_day: u32) -> Self {
        Self {
            start: (start_month, start_day),
            end: (end_month, end_day),
        }
    }

    /// Whether `(month, day)` falls inside the band.
    pub fn contains(&self, month: u32, day: u32) -> bool {
        let md = (month, day);
        if self.start <= self.end {
            self.start <= md && md <= self.end
        } else {
            md >= self.start || md <= self.end
        }
    }
}

/// Index of the first band containing `(month, day)`, or 0 when none does.
pub fn band_index<'a, I>(bands: I, month: u32, day: u32) -> usize
where
    I: IntoIterator<Item = &'a DateBand>,
{
    bands
        .into_iter()
        .position(|band| band.contains(month, day))
        .unwrap_or(0)
}

/// Thirty-day-month day count: `(month - 1) * 30 + day`.
///
/// A coarse stand-in for the day of the year shared by the Vedic and Mayan
/// classifiers. Ranges over 1..=361 for valid dates.
pub const fn approx_day_count(month: u32, day: u32) -> u32 {
    month.saturating_sub(1) * 30 + day
}

/// Clamp an index into `[0, len)`, falling back to 0.
pub const fn clamp_index(index: usize, len: usize) -> usize {
    if index < len { index } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_band() {
        let band = DateBand::new(3, 21, 4, 19);
        assert!(band.contains(3, 21));
        assert!(band.contains(4, 19));
        assert!(!band.contains(3, 20));
        assert!(!band.contains(4, 20));
    }

    #[test]
    fn wrapping_band() {
        let band = DateBand::new(12, 22, 1, 19);
        assert!(band.contains(12, 31));
        assert!(band.contains(1, 1));
        assert!(band.contains(1, 19));
        assert!(!band.contains(1, 20));
        assert!(!band.contains(12, 21));
    }

    #[test]
    fn unmatched_falls_back_to_zero() {
        let bands = [DateBand::new(5, 1, 5, 31)];
        assert_eq!(band_index(&bands, 7, 4), 0);
    }

    #[test]
    fn approx_day_count_range() {
        assert_eq!(approx_day_count(1, 1), 1);
        assert_eq!(approx_day_count(12, 31), 361);
    }

    #[test]
    fn clamp() {
        assert_eq!(clamp_index(5, 3), 0);
        assert_eq!(clamp_index(2, 3), 2);
    }
}
