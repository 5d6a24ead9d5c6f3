//! Apparent solar ecliptic longitude from a three-term equation of center.

use crate::util::julian_centuries;

/// Apparent geocentric ecliptic longitude of the Sun in degrees (tropical).
///
/// Mean longitude plus a three-term equation-of-center correction in the
/// mean anomaly. The result is intentionally not normalized; callers
/// subtract the ayanamsa first and normalize once at the classification
/// boundary.
pub fn sun_longitude(jd: f64) -> f64 {
    let t = julian_centuries(jd);

    // Mean longitude and mean anomaly, degrees.
    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
    let m_deg = 357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t;
    let m = m_deg.to_radians();

    // Equation of center: sin M, sin 2M, sin 3M with linear-in-T amplitudes.
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    l0 + c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::normalize_360;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sun_at_j2000() {
        // Near perihelion: equation of center pulls the mean longitude back.
        assert_abs_diff_eq!(sun_longitude(2_451_545.0), 280.382_158_5, epsilon = 1e-6);
    }

    #[test]
    fn sun_advances_about_one_degree_per_day() {
        let a = normalize_360(sun_longitude(2_452_000.0));
        let b = normalize_360(sun_longitude(2_452_001.0));
        let step = (b - a).rem_euclid(360.0);
        assert!((0.9..1.1).contains(&step), "daily step = {step}");
    }

    #[test]
    fn sun_returns_after_tropical_year() {
        let a = normalize_360(sun_longitude(2_451_545.0));
        let b = normalize_360(sun_longitude(2_451_545.0 + 365.2422));
        let diff = (b - a).abs().min(360.0 - (b - a).abs());
        assert!(diff < 0.1, "drift over one year = {diff}");
    }

    #[test]
    fn sun_deterministic() {
        let jd = 2_452_410.104_166_666_5;
        assert_eq!(sun_longitude(jd).to_bits(), sun_longitude(jd).to_bits());
    }
}
