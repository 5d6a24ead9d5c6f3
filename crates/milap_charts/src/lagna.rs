//! Simplified ascendant angle from local sidereal time.

use milap_ephem::{julian_centuries, normalize_360};

/// Tropical ascendant angle in degrees for an observer.
///
/// Greenwich sidereal time in hours (quadratic in T), localized by
/// `longitude / 15`, converted back to degrees, with the observer's
/// latitude added directly:
///
/// ```text
/// gst = 6.697374558 + 2400.051336 T + 0.000025862 T²   (hours)
/// asc = normalize(15 (gst + longitude/15) + latitude)
/// ```
///
/// This is not a rigorous Lagna computation — folding raw latitude into a
/// time-derived angle has no astronomical meaning. It is kept exactly as
/// is because every existing report's ascendant depends on this numeric
/// behavior.
pub fn ascendant_longitude(jd: f64, latitude_deg: f64, longitude_deg: f64) -> f64 {
    let t = julian_centuries(jd);
    let gst_hours = 6.697_374_558 + 2_400.051_336 * t + 0.000_025_862 * t * t;
    let lst_hours = gst_hours + longitude_deg / 15.0;
    normalize_360(lst_hours * 15.0 + latitude_deg)
}
