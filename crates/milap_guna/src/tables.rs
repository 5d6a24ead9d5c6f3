//! Fixed classification tables keyed by ruling planet.
//!
//! Every table is exhaustive over the 9 planets, so a guna rule can never
//! hit a missing entry. The pairings here are the calibration the verdict
//! tiers were tuned against; treat them as data, not as astronomy to fix.

use milap_charts::Planet;

/// Gana (temperament) categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

impl Gana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deva => "Deva",
            Self::Manushya => "Manushya",
            Self::Rakshasa => "Rakshasa",
        }
    }
}

/// Nadi (constitution) categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nadi {
    Vata,
    Pitta,
    Kapha,
}

impl Nadi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
        }
    }
}

/// Gana of a ruling planet: benefics are Deva, luminous/active planets
/// Manushya, Saturn and the nodes Rakshasa.
pub const fn gana_of(planet: Planet) -> Gana {
    match planet {
        Planet::Moon | Planet::Jupiter | Planet::Venus => Gana::Deva,
        Planet::Sun | Planet::Mars | Planet::Mercury => Gana::Manushya,
        Planet::Saturn | Planet::Rahu | Planet::Ketu => Gana::Rakshasa,
    }
}

/// Nadi of a ruling planet (traditional planetary dosha assignment).
pub const fn nadi_of(planet: Planet) -> Nadi {
    match planet {
        Planet::Saturn | Planet::Rahu | Planet::Mercury => Nadi::Vata,
        Planet::Sun | Planet::Mars | Planet::Ketu => Nadi::Pitta,
        Planet::Moon | Planet::Venus | Planet::Jupiter => Nadi::Kapha,
    }
}

/// The five compatible lord pairs shared by the Varna and Yoni rules.
/// Order-insensitive.
pub const COMPATIBLE_LORD_PAIRS: [(Planet, Planet); 5] = [
    (Planet::Sun, Planet::Moon),
    (Planet::Sun, Planet::Jupiter),
    (Planet::Moon, Planet::Mercury),
    (Planet::Mars, Planet::Jupiter),
    (Planet::Venus, Planet::Saturn),
];

/// Whether two lords form one of the five compatible pairs.
pub fn lords_compatible(a: Planet, b: Planet) -> bool {
    COMPATIBLE_LORD_PAIRS
        .iter()
        .any(|&(x, y)| (a == x && b == y) || (a == y && b == x))
}

/// The two friends of each planet, for the Graha Maitri rule.
pub const fn friends_of(planet: Planet) -> [Planet; 2] {
    match planet {
        Planet::Sun => [Planet::Moon, Planet::Jupiter],
        Planet::Moon => [Planet::Sun, Planet::Mercury],
        Planet::Mars => [Planet::Sun, Planet::Jupiter],
        Planet::Mercury => [Planet::Sun, Planet::Venus],
        Planet::Jupiter => [Planet::Sun, Planet::Moon],
        Planet::Venus => [Planet::Mercury, Planet::Saturn],
        Planet::Saturn => [Planet::Mercury, Planet::Venus],
        Planet::Rahu => [Planet::Venus, Planet::Saturn],
        Planet::Ketu => [Planet::Mars, Planet::Jupiter],
    }
}

/// Whether each planet appears in the other's friend list.
pub fn mutual_friends(a: Planet, b: Planet) -> bool {
    friends_of(a).contains(&b) && friends_of(b).contains(&a)
}
