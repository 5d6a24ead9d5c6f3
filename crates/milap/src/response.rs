//! Serializable response DTOs for the matching contract.
//!
//! Field names follow the external JSON contract (camelCase), so the
//! structs here are the source of truth for what callers see on the wire.

use milap_charts::BirthChart;
use milap_guna::CompatibilityReport;
use serde::{Deserialize, Serialize};

/// One scored guna as it appears in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GunDetail {
    pub name: String,
    pub description: String,
    pub score: u8,
    pub details: String,
}

/// One person's classified chart as it appears in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSummary {
    pub nakshatra: String,
    pub rashi: String,
    pub ascendant: String,
}

impl From<&BirthChart> for ChartSummary {
    fn from(chart: &BirthChart) -> Self {
        Self {
            nakshatra: chart.nakshatra.name().to_string(),
            rashi: chart.rashi.english_name().to_string(),
            ascendant: chart.ascendant.english_name().to_string(),
        }
    }
}

/// Both charts, keyed by partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthCharts {
    pub boy: ChartSummary,
    pub girl: ChartSummary,
}

/// The complete matching response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub total_score: u8,
    pub compatibility_level: String,
    pub compatibility_description: String,
    pub gun_details: Vec<GunDetail>,
    pub recommendations: Vec<String>,
    pub remedies: Vec<String>,
    pub birth_charts: BirthCharts,
}

impl MatchResponse {
    /// Assemble the wire response from a scored report and the two charts.
    pub fn assemble(report: &CompatibilityReport, boy: &BirthChart, girl: &BirthChart) -> Self {
        Self {
            total_score: report.total,
            compatibility_level: report.verdict.name().to_string(),
            compatibility_description: report.verdict.description().to_string(),
            gun_details: report
                .gunas
                .iter()
                .map(|g| GunDetail {
                    name: g.guna.name().to_string(),
                    description: g.guna.description().to_string(),
                    score: g.score,
                    details: g.details.clone(),
                })
                .collect(),
            recommendations: report
                .recommendations()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            remedies: report.remedies().iter().map(|s| s.to_string()).collect(),
            birth_charts: BirthCharts {
                boy: boy.into(),
                girl: girl.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use milap_charts::{Nakshatra, Rashi};
    use milap_guna::score;

    #[test]
    fn assemble_has_eight_gun_details() {
        let boy = BirthChart {
            nakshatra: Nakshatra::Swati,
            rashi: Rashi::Dhanu,
            ascendant: Rashi::Tula,
        };
        let girl = BirthChart {
            nakshatra: Nakshatra::Ardra,
            rashi: Rashi::Vrishabha,
            ascendant: Rashi::Kumbha,
        };
        let resp = MatchResponse::assemble(&score(&boy, &girl), &boy, &girl);
        assert_eq!(resp.gun_details.len(), 8);
        assert_eq!(resp.gun_details[0].name, "Varna");
        assert_eq!(resp.gun_details[7].name, "Nadi");
        assert_eq!(resp.birth_charts.boy.rashi, "Sagittarius");
        assert_eq!(resp.birth_charts.girl.ascendant, "Aquarius");
    }
}
