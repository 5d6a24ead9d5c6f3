//! Ashta-koota (eight guna) compatibility scoring.
//!
//! Takes two classified birth charts and evaluates the eight traditional
//! compatibility rules, totalling them into a 0-36 score with a tiered
//! verdict and guidance. Everything here is table-driven and pure: the
//! enums in `milap_charts` make every lookup exhaustive, so scoring is
//! total over valid charts.

pub mod gunas;
pub mod report;
pub mod tables;

pub use gunas::{
    ALL_GUNAS, Guna, GunaScore, all_guna_scores, bhakoot_score, gana_score, graha_maitri_score,
    nadi_score, tara_score, varna_score, vashya_score, yoni_score,
};
pub use report::{
    CompatibilityReport, MAX_TOTAL, Verdict, recommendations_for, remedies_for, score, verdict_for,
};
pub use tables::{
    COMPATIBLE_LORD_PAIRS, Gana, Nadi, friends_of, gana_of, lords_compatible, mutual_friends,
    nadi_of,
};
