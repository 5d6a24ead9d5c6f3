//! Ayanamsa (precession offset) between the tropical and sidereal zodiacs.
//!
//! A truncated Lahiri-style polynomial. Not astronomically exact, but the
//! classifier output depends on reproducing it bit-for-bit.

use crate::util::{julian_centuries, normalize_360};

/// Ayanamsa in degrees at a given Julian Day.
///
/// `23.85 + 0.3812 T + 0.0012 T²` where T is Julian centuries from J2000.0.
pub fn ayanamsa(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    23.85 + 0.3812 * t + 0.0012 * t * t
}

/// Sidereal longitude from a tropical longitude, normalized to [0, 360).
pub fn sidereal_longitude(tropical_lon_deg: f64, jd: f64) -> f64 {
    normalize_360(tropical_lon_deg - ayanamsa(jd))
}
