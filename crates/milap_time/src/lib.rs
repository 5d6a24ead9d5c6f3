//! Civil birth moment and Julian Day conversion.
//!
//! A [`BirthMoment`] is a plain calendar date and local civil time with
//! minute precision — no timezone modeling, per the matching contract.
//! [`BirthMoment::to_julian_day`] converts it to a continuous Julian Day
//! using the Gregorian-calendar formula the scoring pipeline is calibrated
//! against. The coefficients are fixed; changing them changes every chart
//! downstream.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const JULIAN_CENTURY_DAYS: f64 = 36_525.0;

/// A calendar birth date and local civil time, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl BirthMoment {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Convert to Julian Day (noon-epoch convention).
    ///
    /// ```text
    /// JD = 367 y − ⌊7 (y + ⌊(m + 9) / 12⌋) / 4⌋ + ⌊275 m / 9⌋ + d
    ///      + 1721013.5 + (h + min/60) / 24
    /// ```
    ///
    /// Valid for Gregorian dates. The fractional part encodes time of day
    /// as a fraction of a solar day starting at noon: midnight lands on
    /// `.5`, noon on `.0`.
    pub fn to_julian_day(&self) -> f64 {
        let y = self.year as f64;
        let m = self.month as f64;
        let d = self.day as f64;

        367.0 * y - (7.0 * (y + ((m + 9.0) / 12.0).floor()) / 4.0).floor()
            + (275.0 * m / 9.0).floor()
            + d
            + 1_721_013.5
            + (self.hour as f64 + self.minute as f64 / 60.0) / 24.0
    }
}

impl std::fmt::Display for BirthMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let m = BirthMoment::new(2000, 1, 1, 6, 0);
        assert_eq!(m.year, 2000);
        assert_eq!(m.month, 1);
        assert_eq!(m.day, 1);
        assert_eq!(m.hour, 6);
        assert_eq!(m.minute, 0);
    }

    #[test]
    fn jd_at_j2000_noon() {
        let jd = BirthMoment::new(2000, 1, 1, 12, 0).to_julian_day();
        assert!((jd - J2000_JD).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn jd_quarter_day_before_j2000() {
        let jd = BirthMoment::new(2000, 1, 1, 6, 0).to_julian_day();
        assert!((jd - 2_451_544.75).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn jd_midnight_half_fraction() {
        // Noon convention: civil midnight falls on .5
        let jd = BirthMoment::new(2024, 3, 20, 0, 0).to_julian_day();
        assert!((jd.fract().abs() - 0.5).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn jd_minute_resolution() {
        let a = BirthMoment::new(2024, 3, 20, 10, 30).to_julian_day();
        let b = BirthMoment::new(2024, 3, 20, 10, 31).to_julian_day();
        assert!((b - a - 1.0 / 1_440.0).abs() < 1e-9);
    }

    #[test]
    fn jd_monotonic_over_day() {
        let mut prev = f64::NEG_INFINITY;
        for hour in 0..24 {
            for minute in [0, 15, 30, 45] {
                let jd = BirthMoment::new(2002, 5, 15, hour, minute).to_julian_day();
                assert!(jd > prev, "not monotonic at {hour:02}:{minute:02}");
                prev = jd;
            }
        }
    }

    #[test]
    fn jd_consecutive_days_differ_by_one() {
        let a = BirthMoment::new(1999, 12, 31, 9, 0).to_julian_day();
        let b = BirthMoment::new(2000, 1, 1, 9, 0).to_julian_day();
        assert!((b - a - 1.0).abs() < 1e-9);
    }

    #[test]
    fn jd_month_boundary_february() {
        let a = BirthMoment::new(2004, 2, 29, 12, 0).to_julian_day();
        let b = BirthMoment::new(2004, 3, 1, 12, 0).to_julian_day();
        assert!((b - a - 1.0).abs() < 1e-9);
    }

    #[test]
    fn display_format() {
        let m = BirthMoment::new(2002, 5, 15, 14, 30);
        assert_eq!(m.to_string(), "2002-05-15 14:30");
    }
}
