//! Birth chart assembly: one classified chart per person.

use crate::lagna::ascendant_longitude;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude};
use milap_ephem::{ayanamsa, moon_longitude, normalize_360, sun_longitude};

/// Default observer latitude (New Delhi).
pub const DEFAULT_LATITUDE: f64 = 28.6139;

/// Default observer longitude (New Delhi).
pub const DEFAULT_LONGITUDE: f64 = 77.2090;

/// The classified chart the scorer consumes: lunar mansion, solar sign,
/// and ascendant sign. Ephemeral — built once per request, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthChart {
    /// Nakshatra of the Moon.
    pub nakshatra: Nakshatra,
    /// Rashi of the Sun.
    pub rashi: Rashi,
    /// Rashi of the ascendant angle.
    pub ascendant: Rashi,
}

/// Classify a birth chart from a Julian Day and observer coordinates.
///
/// Each longitude is reduced to sidereal (tropical minus ayanamsa,
/// normalized once here) and then classified by table lookup.
pub fn birth_chart(jd: f64, latitude_deg: f64, longitude_deg: f64) -> BirthChart {
    let aya = ayanamsa(jd);
    let moon_sidereal = normalize_360(moon_longitude(jd) - aya);
    let sun_sidereal = normalize_360(sun_longitude(jd) - aya);
    let asc_sidereal = normalize_360(ascendant_longitude(jd, latitude_deg, longitude_deg) - aya);

    BirthChart {
        nakshatra: nakshatra_from_longitude(moon_sidereal),
        rashi: rashi_from_longitude(sun_sidereal),
        ascendant: rashi_from_longitude(asc_sidereal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_deterministic() {
        let jd = 2_451_544.75;
        let a = birth_chart(jd, DEFAULT_LATITUDE, DEFAULT_LONGITUDE);
        let b = birth_chart(jd, DEFAULT_LATITUDE, DEFAULT_LONGITUDE);
        assert_eq!(a, b);
    }

    #[test]
    fn chart_boy_2000_01_01_0600() {
        let chart = birth_chart(2_451_544.75, DEFAULT_LATITUDE, DEFAULT_LONGITUDE);
        assert_eq!(chart.nakshatra, Nakshatra::Swati);
        assert_eq!(chart.rashi, Rashi::Dhanu);
        assert_eq!(chart.ascendant, Rashi::Tula);
    }

    #[test]
    fn chart_girl_2002_05_15_1430() {
        let chart = birth_chart(2_452_410.104_166_666_5, DEFAULT_LATITUDE, DEFAULT_LONGITUDE);
        assert_eq!(chart.nakshatra, Nakshatra::Ardra);
        assert_eq!(chart.rashi, Rashi::Vrishabha);
        assert_eq!(chart.ascendant, Rashi::Kumbha);
    }

    #[test]
    fn default_observer_is_new_delhi() {
        assert!((DEFAULT_LATITUDE - 28.6139).abs() < 1e-9);
        assert!((DEFAULT_LONGITUDE - 77.2090).abs() < 1e-9);
    }
}
