//! Apparent lunar ecliptic longitude from a four-term perturbation series.

use crate::util::julian_centuries;

/// Apparent geocentric ecliptic longitude of the Moon in degrees (tropical).
///
/// Mean longitude plus the four largest periodic terms, taken in the mean
/// anomaly `M` and the argument of latitude `F`. As with the Sun, the
/// result is not normalized here.
pub fn moon_longitude(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // Mean elements, degrees (quartic polynomials in T).
    let l0 = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let m_deg = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f_deg = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    let m = m_deg.to_radians();
    let f = f_deg.to_radians();

    // Leading periodic terms: M, 2F − M, 2F, 2M.
    let perturbation = 6.289 * m.sin()
        + 1.274 * (2.0 * f - m).sin()
        + 0.658 * (2.0 * f).sin()
        + 0.214 * (2.0 * m).sin();

    l0 + perturbation
}
