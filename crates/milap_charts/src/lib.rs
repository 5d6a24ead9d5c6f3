//! Birth chart classification for the matching engine.
//!
//! Maps sidereal ecliptic longitudes onto the discrete categories the
//! scorer consumes: 27 nakshatras (lunar mansions), 12 rashis (zodiac
//! signs), and an ascendant rashi from a simplified local-sidereal-time
//! angle. All tables are fixed enums with exhaustive lookups; a classifier
//! can never fail to resolve an entry.

pub mod chart;
pub mod lagna;
pub mod nakshatra;
pub mod planet;
pub mod rashi;

pub use chart::{BirthChart, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, birth_chart};
pub use lagna::ascendant_longitude;
pub use nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, nakshatra_from_longitude};
pub use planet::{ALL_PLANETS, Planet};
pub use rashi::{ALL_RASHIS, Element, RASHI_SPAN, Rashi, rashi_from_longitude};
