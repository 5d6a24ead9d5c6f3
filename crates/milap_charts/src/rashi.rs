//! Rashi (zodiac sign) table and classification.
//!
//! Twelve equal 30-degree signs starting from Mesha (Aries) at 0 degrees
//! sidereal. Each rashi carries the element and ruling planet the Vashya
//! and Graha Maitri gunas score against.

use crate::planet::Planet;
use milap_ephem::normalize_360;

/// Rashi span in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The four classical elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha .. 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// English (Western zodiac) name, used in the consumer-facing report.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha = 0 .. Meena = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based ordinal for display (Mesha = 1 .. Meena = 12).
    pub const fn ordinal(self) -> u8 {
        self.index() + 1
    }

    /// Element of the rashi (fire/earth/air/water triplicities).
    pub const fn element(self) -> Element {
        match self {
            Self::Mesha | Self::Simha | Self::Dhanu => Element::Fire,
            Self::Vrishabha | Self::Kanya | Self::Makara => Element::Earth,
            Self::Mithuna | Self::Tula | Self::Kumbha => Element::Air,
            Self::Karka | Self::Vrischika | Self::Meena => Element::Water,
        }
    }

    /// Ruling planet of the rashi (standard lordship assignment).
    pub const fn lord(self) -> Planet {
        match self {
            Self::Mesha | Self::Vrischika => Planet::Mars,
            Self::Vrishabha | Self::Tula => Planet::Venus,
            Self::Mithuna | Self::Kanya => Planet::Mercury,
            Self::Karka => Planet::Moon,
            Self::Simha => Planet::Sun,
            Self::Dhanu | Self::Meena => Planet::Jupiter,
            Self::Makara | Self::Kumbha => Planet::Saturn,
        }
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Select the rashi for a sidereal longitude.
///
/// Index = `floor(sidereal / 30) mod 12`, zero-based into the table.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> Rashi {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = (lon / RASHI_SPAN).floor() as usize % 12;
    ALL_RASHIS[idx]
}
