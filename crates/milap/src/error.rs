//! Boundary error type for the matching facade.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation errors raised before the pipeline runs.
///
/// The pipeline itself is total: once a request parses, classification and
/// scoring cannot fail, so everything here is caller error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MilapError {
    /// Birth date is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// Birth time is not a valid `HH:MM` civil time.
    InvalidTime(String),
    /// Observer coordinate outside its legal range.
    InvalidCoordinate(&'static str),
}

impl Display for MilapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(input) => write!(f, "invalid birth date: {input:?}"),
            Self::InvalidTime(input) => write!(f, "invalid birth time: {input:?}"),
            Self::InvalidCoordinate(msg) => write!(f, "invalid coordinate: {msg}"),
        }
    }
}

impl Error for MilapError {}
