//! Verdict tiers, guidance tiers, and the assembled compatibility report.

use crate::gunas::{GunaScore, all_guna_scores};
use milap_charts::BirthChart;

/// Maximum total score across all eight gunas.
pub const MAX_TOTAL: u8 = 36;

/// The six verdict tiers, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Poor,
    BelowAverage,
    Average,
    Good,
    VeryGood,
    Excellent,
}

impl Verdict {
    /// Display name of the tier.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::BelowAverage => "Below Average",
            Self::Average => "Average",
            Self::Good => "Good",
            Self::VeryGood => "Very Good",
            Self::Excellent => "Excellent",
        }
    }

    /// Consumer-facing description of the tier.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Poor => {
                "The charts show significant friction. This match needs careful \
                 consideration and guidance before moving forward."
            }
            Self::BelowAverage => {
                "Compatibility is below the recommended threshold. Several gunas \
                 indicate areas that will require patience and effort."
            }
            Self::Average => {
                "A workable match. The charts agree on some fronts and differ on \
                 others; mutual understanding will be the deciding factor."
            }
            Self::Good => {
                "A favorable match. Most gunas align well and the charts support \
                 a stable, harmonious partnership."
            }
            Self::VeryGood => {
                "A strong match. The charts complement each other across nearly \
                 every guna, promising deep harmony."
            }
            Self::Excellent => {
                "An exceptional match. The charts are in rare alignment; this \
                 pairing carries the highest blessings of compatibility."
            }
        }
    }
}

/// Select the verdict tier for a total score (lower bounds inclusive).
pub const fn verdict_for(total: u8) -> Verdict {
    if total >= 32 {
        Verdict::Excellent
    } else if total >= 28 {
        Verdict::VeryGood
    } else if total >= 24 {
        Verdict::Good
    } else if total >= 20 {
        Verdict::Average
    } else if total >= 16 {
        Verdict::BelowAverage
    } else {
        Verdict::Poor
    }
}

/// Recommendations by guidance tier. The guidance split (`<24`, `24..28`,
/// `≥28`) is deliberately coarser than the six verdict tiers and does not
/// align with them.
pub const fn recommendations_for(total: u8) -> &'static [&'static str] {
    if total >= 28 {
        &[
            "Proceed with confidence; the charts strongly support this union",
            "Choose an auspicious muhurta for the ceremony to seal the harmony",
            "Nurture the natural strengths this match already carries",
        ]
    } else if total >= 24 {
        &[
            "A favorable match; proceed after discussing long-term expectations",
            "Consult on an auspicious wedding date to strengthen the union",
            "Give attention to the gunas that scored low in this report",
        ]
    } else {
        &[
            "Seek detailed guidance from an experienced astrologer before deciding",
            "Discuss the weaker gunas openly with both families",
            "Consider a deeper horoscope analysis covering doshas and dashas",
            "Do not rush; revisit the match after remedial measures",
        ]
    }
}

/// Remedies by the same guidance tier as [`recommendations_for`].
pub const fn remedies_for(total: u8) -> &'static [&'static str] {
    if total >= 28 {
        &["No specific remedies required; offer gratitude prayers together"]
    } else if total >= 24 {
        &[
            "Recite the Vishnu Sahasranama together on auspicious days",
            "Offer prayers on Fridays to strengthen the bond",
        ]
    } else {
        &[
            "Perform a compatibility puja before proceeding",
            "Donate grains and clothing on Saturdays",
            "Recite the Maha Mrityunjaya mantra for harmony",
            "Wear gemstones only after consulting an astrologer",
        ]
    }
}

/// The complete scoring outcome for one pair of charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityReport {
    /// Sum of the eight awarded scores, 0-36.
    pub total: u8,
    /// Verdict tier for the total.
    pub verdict: Verdict,
    /// The eight evaluated gunas in fixed order (Varna .. Nadi).
    pub gunas: [GunaScore; 8],
}

impl CompatibilityReport {
    /// Guidance strings for this report's total.
    pub fn recommendations(&self) -> &'static [&'static str] {
        recommendations_for(self.total)
    }

    /// Remedy strings for this report's total.
    pub fn remedies(&self) -> &'static [&'static str] {
        remedies_for(self.total)
    }
}

/// Score a pair of charts: evaluate all eight gunas, total them, and
/// select the verdict. Pure and total — every chart pair produces a
/// complete report.
pub fn score(boy: &BirthChart, girl: &BirthChart) -> CompatibilityReport {
    let gunas = all_guna_scores(boy, girl);
    let total: u8 = gunas.iter().map(|g| g.score).sum();
    CompatibilityReport {
        total,
        verdict: verdict_for(total),
        gunas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use milap_charts::{ALL_NAKSHATRAS, ALL_RASHIS, Nakshatra, Rashi};

    fn chart(nakshatra: Nakshatra, rashi: Rashi) -> BirthChart {
        BirthChart {
            nakshatra,
            rashi,
            ascendant: Rashi::Mesha,
        }
    }

    #[test]
    fn tier_boundaries() {
        let cases = [
            (32, Verdict::Excellent),
            (31, Verdict::VeryGood),
            (28, Verdict::VeryGood),
            (27, Verdict::Good),
            (24, Verdict::Good),
            (23, Verdict::Average),
            (20, Verdict::Average),
            (19, Verdict::BelowAverage),
            (16, Verdict::BelowAverage),
            (15, Verdict::Poor),
        ];
        for (total, expected) in cases {
            assert_eq!(verdict_for(total), expected, "total = {total}");
        }
    }

    #[test]
    fn tier_extremes() {
        assert_eq!(verdict_for(0), Verdict::Poor);
        assert_eq!(verdict_for(36), Verdict::Excellent);
    }

    #[test]
    fn verdict_names_and_descriptions_nonempty() {
        for v in [
            Verdict::Poor,
            Verdict::BelowAverage,
            Verdict::Average,
            Verdict::Good,
            Verdict::VeryGood,
            Verdict::Excellent,
        ] {
            assert!(!v.name().is_empty());
            assert!(!v.description().is_empty());
        }
    }

    #[test]
    fn guidance_tiers_are_coarser_than_verdicts() {
        // 24 (Good) and 27 (Good) share guidance; 27 and 28 (Very Good) do not.
        assert_eq!(recommendations_for(24), recommendations_for(27));
        assert_ne!(recommendations_for(27), recommendations_for(28));
        // 20 (Average) shares the low guidance tier with 15 (Poor).
        assert_eq!(recommendations_for(20), recommendations_for(15));
    }

    #[test]
    fn guidance_never_empty() {
        for total in 0..=36 {
            assert!(!recommendations_for(total).is_empty(), "total {total}");
            assert!(!remedies_for(total).is_empty(), "total {total}");
        }
    }

    #[test]
    fn score_total_matches_guna_sum() {
        let boy = chart(Nakshatra::Swati, Rashi::Dhanu);
        let girl = chart(Nakshatra::Ardra, Rashi::Vrishabha);
        let report = score(&boy, &girl);
        let sum: u8 = report.gunas.iter().map(|g| g.score).sum();
        assert_eq!(report.total, sum);
        assert_eq!(report.verdict, verdict_for(report.total));
    }

    #[test]
    fn score_bounds_exhaustive_over_nakshatras() {
        for na in ALL_NAKSHATRAS {
            for nb in ALL_NAKSHATRAS {
                for ra in [Rashi::Mesha, Rashi::Kanya] {
                    for rb in ALL_RASHIS {
                        let report = score(&chart(na, ra), &chart(nb, rb));
                        assert!(report.total <= MAX_TOTAL);
                        assert_eq!(report.gunas.len(), 8);
                    }
                }
            }
        }
    }

    #[test]
    fn score_deterministic() {
        let boy = chart(Nakshatra::Rohini, Rashi::Karka);
        let girl = chart(Nakshatra::Hasta, Rashi::Meena);
        assert_eq!(score(&boy, &girl), score(&boy, &girl));
    }
}
