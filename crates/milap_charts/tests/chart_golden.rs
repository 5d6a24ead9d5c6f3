//! Integration tests for the classification pipeline (pure math, no I/O).

use milap_charts::{
    ALL_NAKSHATRAS, ALL_RASHIS, BirthChart, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, NAKSHATRA_SPAN,
    Nakshatra, Planet, Rashi, birth_chart, nakshatra_from_longitude, rashi_from_longitude,
};
use milap_time::BirthMoment;

#[test]
fn nakshatra_sweep_midpoints() {
    for (i, expected) in ALL_NAKSHATRAS.iter().enumerate() {
        let lon = (i as f64 + 0.5) * NAKSHATRA_SPAN;
        assert_eq!(nakshatra_from_longitude(lon), *expected, "midpoint of {i}");
    }
}

#[test]
fn rashi_sweep_midpoints() {
    for (i, expected) in ALL_RASHIS.iter().enumerate() {
        let lon = i as f64 * 30.0 + 15.0;
        assert_eq!(rashi_from_longitude(lon), *expected, "midpoint of {i}");
    }
}

#[test]
fn vimshottari_lords_distribute_three_nakshatras_each() {
    for lord in [
        Planet::Ketu,
        Planet::Venus,
        Planet::Sun,
        Planet::Moon,
        Planet::Mars,
        Planet::Rahu,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Mercury,
    ] {
        let count = ALL_NAKSHATRAS.iter().filter(|n| n.lord() == lord).count();
        assert_eq!(count, 3, "{} should rule 3 nakshatras", lord.name());
    }
}

#[test]
fn end_to_end_chart_from_birth_moment() {
    let jd = BirthMoment::new(2000, 1, 1, 6, 0).to_julian_day();
    let chart = birth_chart(jd, DEFAULT_LATITUDE, DEFAULT_LONGITUDE);
    assert_eq!(
        chart,
        BirthChart {
            nakshatra: Nakshatra::Swati,
            rashi: Rashi::Dhanu,
            ascendant: Rashi::Tula,
        }
    );
    // Swati's lord anchors the boy side of the golden match scenario.
    assert_eq!(chart.nakshatra.lord(), Planet::Rahu);
}

#[test]
fn charts_always_resolve() {
    // Any finite epoch and coordinates must classify; modulo arithmetic
    // guarantees a table entry.
    for day in 0..120 {
        let jd = 2_440_000.0 + day as f64 * 173.3;
        for (lat, lon) in [(0.0, 0.0), (-89.9, 179.9), (51.5, -0.1), (28.6139, 77.2090)] {
            let _ = birth_chart(jd, lat, lon);
        }
    }
}
