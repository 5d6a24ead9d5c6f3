//! Boundary facade for the Gun Milan matching engine.
//!
//! Validates raw request input (`YYYY-MM-DD` dates, `HH:MM` times,
//! optional observer coordinates), runs the pipeline once per person, and
//! assembles the serializable [`MatchResponse`]. Either the whole request
//! validates and a complete report comes back, or a [`MilapError`] is
//! returned — there are no partial results.

pub mod error;
pub mod response;

use serde::{Deserialize, Serialize};

use milap_charts::{BirthChart, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, birth_chart};
use milap_guna::score;
use milap_time::BirthMoment;

pub use error::MilapError;
pub use response::{BirthCharts, ChartSummary, GunDetail, MatchResponse};

/// Raw birth details for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetails {
    /// `YYYY-MM-DD`.
    pub date_of_birth: String,
    /// `HH:MM`, 24-hour local civil time.
    pub time_of_birth: String,
}

/// A full matching request: two people plus an optional shared observer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub boy: PersonDetails,
    pub girl: PersonDetails,
    /// Observer latitude in decimal degrees; New Delhi when omitted.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Observer longitude in decimal degrees; New Delhi when omitted.
    #[serde(default)]
    pub longitude: Option<f64>,
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
            if leap { 29 } else { 28 }
        }
        _ => 0,
    }
}

/// Parse and validate one person's birth details into a [`BirthMoment`].
pub fn parse_birth_moment(details: &PersonDetails) -> Result<BirthMoment, MilapError> {
    let bad_date = || MilapError::InvalidDate(details.date_of_birth.clone());
    let bad_time = || MilapError::InvalidTime(details.time_of_birth.clone());

    let mut date_parts = details.date_of_birth.split('-');
    let year: i32 = date_parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(bad_date)?;
    let month: u32 = date_parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(bad_date)?;
    let day: u32 = date_parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(bad_date)?;
    if date_parts.next().is_some() {
        return Err(bad_date());
    }
    if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
        return Err(bad_date());
    }

    let mut time_parts = details.time_of_birth.split(':');
    let hour: u32 = time_parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(bad_time)?;
    let minute: u32 = time_parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(bad_time)?;
    if time_parts.next().is_some() || hour > 23 || minute > 59 {
        return Err(bad_time());
    }

    Ok(BirthMoment::new(year, month, day, hour, minute))
}

fn resolve_observer(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<(f64, f64), MilapError> {
    let lat = latitude.unwrap_or(DEFAULT_LATITUDE);
    let lon = longitude.unwrap_or(DEFAULT_LONGITUDE);
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(MilapError::InvalidCoordinate("latitude must be within [-90, 90]"));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(MilapError::InvalidCoordinate("longitude must be within [-180, 180]"));
    }
    Ok((lat, lon))
}

/// Classify one person's chart from raw details and optional coordinates.
pub fn chart_for(
    details: &PersonDetails,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<BirthChart, MilapError> {
    let moment = parse_birth_moment(details)?;
    let (lat, lon) = resolve_observer(latitude, longitude)?;
    Ok(birth_chart(moment.to_julian_day(), lat, lon))
}

/// Run the full matching pipeline for one request.
pub fn match_report(request: &MatchRequest) -> Result<MatchResponse, MilapError> {
    let (lat, lon) = resolve_observer(request.latitude, request.longitude)?;
    let boy = birth_chart(
        parse_birth_moment(&request.boy)?.to_julian_day(),
        lat,
        lon,
    );
    let girl = birth_chart(
        parse_birth_moment(&request.girl)?.to_julian_day(),
        lat,
        lon,
    );
    let report = score(&boy, &girl);
    Ok(MatchResponse::assemble(&report, &boy, &girl))
}
