//! Celestial longitude estimation from truncated series.
//!
//! Low-order approximations of the apparent geocentric ecliptic longitudes
//! of the Sun and Moon, plus a Lahiri-style ayanamsa polynomial. These are
//! deliberately not ephemeris-grade: the scoring pipeline is calibrated
//! against these exact coefficients, and every function is a pure function
//! of Julian Day through the Julian-century parameter
//! `T = (jd − 2451545.0) / 36525`.

pub mod ayanamsa;
pub mod moon;
pub mod sun;
pub mod util;

pub use ayanamsa::{ayanamsa, sidereal_longitude};
pub use moon::moon_longitude;
pub use sun::sun_longitude;
pub use util::{julian_centuries, normalize_360};
