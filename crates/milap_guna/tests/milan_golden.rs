//! Integration tests for the full scoring pipeline (pure math, no I/O).

use milap_charts::{
    BirthChart, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, Nakshatra, Rashi, birth_chart,
};
use milap_guna::{ALL_GUNAS, MAX_TOTAL, Verdict, score};
use milap_time::BirthMoment;

fn golden_pair() -> (BirthChart, BirthChart) {
    let boy_jd = BirthMoment::new(2000, 1, 1, 6, 0).to_julian_day();
    let girl_jd = BirthMoment::new(2002, 5, 15, 14, 30).to_julian_day();
    (
        birth_chart(boy_jd, DEFAULT_LATITUDE, DEFAULT_LONGITUDE),
        birth_chart(girl_jd, DEFAULT_LATITUDE, DEFAULT_LONGITUDE),
    )
}

#[test]
fn golden_scenario_charts() {
    let (boy, girl) = golden_pair();
    assert_eq!(boy.nakshatra, Nakshatra::Swati);
    assert_eq!(boy.rashi, Rashi::Dhanu);
    assert_eq!(girl.nakshatra, Nakshatra::Ardra);
    assert_eq!(girl.rashi, Rashi::Vrishabha);
}

#[test]
fn golden_scenario_report() {
    let (boy, girl) = golden_pair();
    let report = score(&boy, &girl);

    assert!(report.total <= MAX_TOTAL);
    assert_eq!(report.gunas.len(), 8);
    let sum: u8 = report.gunas.iter().map(|g| g.score).sum();
    assert_eq!(sum, report.total);

    // Both moons are Rahu-ruled: Gana matches (6), Nadi clashes (0);
    // star distance 9 earns Tara's 3; sign distance 7 folds to 5 for
    // Bhakoot's 7. Everything else scores zero.
    assert_eq!(report.total, 16);
    assert_eq!(report.verdict, Verdict::BelowAverage);

    let by_name: Vec<(&str, u8)> = report
        .gunas
        .iter()
        .map(|g| (g.guna.name(), g.score))
        .collect();
    assert_eq!(
        by_name,
        vec![
            ("Varna", 0),
            ("Vashya", 0),
            ("Tara", 3),
            ("Yoni", 0),
            ("Graha Maitri", 0),
            ("Gana", 6),
            ("Bhakoot", 7),
            ("Nadi", 0),
        ]
    );
}

#[test]
fn report_guna_order_fixed() {
    let (boy, girl) = golden_pair();
    let report = score(&boy, &girl);
    for (entry, expected) in report.gunas.iter().zip(ALL_GUNAS.iter()) {
        assert_eq!(entry.guna, *expected);
    }
}

#[test]
fn swapping_partners_keeps_distance_gunas() {
    let (boy, girl) = golden_pair();
    let forward = score(&boy, &girl);
    let reversed = score(&girl, &boy);
    // Tara (index 2) and Bhakoot (index 6) are symmetric by construction.
    assert_eq!(forward.gunas[2].score, reversed.gunas[2].score);
    assert_eq!(forward.gunas[6].score, reversed.gunas[6].score);
}

#[test]
fn guidance_tier_for_golden_total() {
    let (boy, girl) = golden_pair();
    let report = score(&boy, &girl);
    // Total 16 falls in the low guidance tier: the longer list.
    assert_eq!(report.recommendations().len(), 4);
    assert_eq!(report.remedies().len(), 4);
}
