//! The eight guna rules.
//!
//! Each rule is a pure function of the two charts and returns an awarded
//! score in `[0, max]` plus a one-line rationale. Maxima run 1 through 8
//! in the fixed order Varna, Vashya, Tara, Yoni, Graha Maitri, Gana,
//! Bhakoot, Nadi, summing to 36.

use crate::tables::{gana_of, lords_compatible, mutual_friends, nadi_of};
use milap_charts::{BirthChart, Element};

/// The eight gunas in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guna {
    Varna,
    Vashya,
    Tara,
    Yoni,
    GrahaMaitri,
    Gana,
    Bhakoot,
    Nadi,
}

/// All 8 gunas in the fixed report order.
pub const ALL_GUNAS: [Guna; 8] = [
    Guna::Varna,
    Guna::Vashya,
    Guna::Tara,
    Guna::Yoni,
    Guna::GrahaMaitri,
    Guna::Gana,
    Guna::Bhakoot,
    Guna::Nadi,
];

impl Guna {
    /// Display name of the guna.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Varna => "Varna",
            Self::Vashya => "Vashya",
            Self::Tara => "Tara",
            Self::Yoni => "Yoni",
            Self::GrahaMaitri => "Graha Maitri",
            Self::Gana => "Gana",
            Self::Bhakoot => "Bhakoot",
            Self::Nadi => "Nadi",
        }
    }

    /// What the guna measures, for the report.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Varna => "Spiritual compatibility and ego balance",
            Self::Vashya => "Mutual attraction and influence",
            Self::Tara => "Destiny and well-being of the bond",
            Self::Yoni => "Physical and instinctive compatibility",
            Self::GrahaMaitri => "Mental compatibility and friendship",
            Self::Gana => "Temperament match",
            Self::Bhakoot => "Emotional bond and family prosperity",
            Self::Nadi => "Health and progeny",
        }
    }

    /// Maximum points awardable for this guna.
    pub const fn max_points(self) -> u8 {
        match self {
            Self::Varna => 1,
            Self::Vashya => 2,
            Self::Tara => 3,
            Self::Yoni => 4,
            Self::GrahaMaitri => 5,
            Self::Gana => 6,
            Self::Bhakoot => 7,
            Self::Nadi => 8,
        }
    }
}

/// One evaluated guna: the awarded score and its rationale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GunaScore {
    pub guna: Guna,
    pub score: u8,
    pub details: String,
}

/// Varna (max 1): one point when the two nakshatra lords form one of the
/// five compatible pairs.
pub fn varna_score(boy: &BirthChart, girl: &BirthChart) -> GunaScore {
    let (b, g) = (boy.nakshatra.lord(), girl.nakshatra.lord());
    let (score, details) = if lords_compatible(b, g) {
        (
            1,
            format!("{} and {} form a compatible pair of lords", b.name(), g.name()),
        )
    } else {
        (
            0,
            format!("{} and {} do not form a compatible pair of lords", b.name(), g.name()),
        )
    };
    GunaScore {
        guna: Guna::Varna,
        score,
        details,
    }
}

/// Vashya (max 2): full points for the Fire/Air and Earth/Water element
/// pairings, one point for matching elements.
pub fn vashya_score(boy: &BirthChart, girl: &BirthChart) -> GunaScore {
    let (b, g) = (boy.rashi.element(), girl.rashi.element());
    let fire_air = matches!(
        (b, g),
        (Element::Fire, Element::Air) | (Element::Air, Element::Fire)
    );
    let earth_water = matches!(
        (b, g),
        (Element::Earth, Element::Water) | (Element::Water, Element::Earth)
    );
    let (score, details) = if fire_air {
        (2, "Fire and Air signs energize each other".to_string())
    } else if earth_water {
        (2, "Earth and Water signs nourish each other".to_string())
    } else if b == g {
        (1, format!("Both signs share the {} element", b.name()))
    } else {
        (
            0,
            format!("{} and {} elements pull in different directions", b.name(), g.name()),
        )
    };
    GunaScore {
        guna: Guna::Vashya,
        score,
        details,
    }
}

/// Tara (max 3): nakshatra distance folded into [0, 13].
///
/// Distances {2,3,4,5,7,9,10,11,13} score 3, {1,6,8,12} score 1, and the
/// rest score 0. A distance of 0 (same nakshatra) scoring 0 is part of the
/// published table, not an oversight.
pub fn tara_score(boy: &BirthChart, girl: &BirthChart) -> GunaScore {
    let mut d = (boy.nakshatra.index() as i32 - girl.nakshatra.index() as i32).abs();
    if d > 13 {
        d = 27 - d;
    }
    let score = match d {
        2 | 3 | 4 | 5 | 7 | 9 | 10 | 11 | 13 => 3,
        1 | 6 | 8 | 12 => 1,
        _ => 0,
    };
    let quality = match score {
        3 => "favorable",
        1 => "mixed",
        _ => "unfavorable",
    };
    GunaScore {
        guna: Guna::Tara,
        score,
        details: format!("Birth star distance {d} is {quality}"),
    }
}

/// Yoni (max 4): full points when the nakshatra lords form one of the same
/// five compatible pairs used by Varna.
pub fn yoni_score(boy: &BirthChart, girl: &BirthChart) -> GunaScore {
    let (b, g) = (boy.nakshatra.lord(), girl.nakshatra.lord());
    let (score, details) = if lords_compatible(b, g) {
        (
            4,
            format!("{} and {} are an instinctively matched pair", b.name(), g.name()),
        )
    } else {
        (
            0,
            format!("{} and {} are not an instinctively matched pair", b.name(), g.name()),
        )
    };
    GunaScore {
        guna: Guna::Yoni,
        score,
        details,
    }
}

/// Graha Maitri (max 5): full points when the two rashi lords are mutual
/// friends in the fixed adjacency table.
pub fn graha_maitri_score(boy: &BirthChart, girl: &BirthChart) -> GunaScore {
    let (b, g) = (boy.rashi.lord(), girl.rashi.lord());
    let (score, details) = if mutual_friends(b, g) {
        (5, format!("{} and {} are mutual friends", b.name(), g.name()))
    } else {
        (
            0,
            format!("{} and {} are not mutual friends", b.name(), g.name()),
        )
    };
    GunaScore {
        guna: Guna::GrahaMaitri,
        score,
        details,
    }
}

/// Gana (max 6): full points for matching temperament categories, partial
/// for the agreeable Deva/Manushya pairing.
pub fn gana_score(boy: &BirthChart, girl: &BirthChart) -> GunaScore {
    use crate::tables::Gana;
    let (b, g) = (gana_of(boy.nakshatra.lord()), gana_of(girl.nakshatra.lord()));
    let deva_manushya = matches!(
        (b, g),
        (Gana::Deva, Gana::Manushya) | (Gana::Manushya, Gana::Deva)
    );
    let (score, details) = if b == g {
        (6, format!("Both lords belong to the {} gana", b.name()))
    } else if deva_manushya {
        (4, "Deva and Manushya ganas are agreeable".to_string())
    } else {
        (0, format!("{} and {} ganas clash", b.name(), g.name()))
    };
    GunaScore {
        guna: Guna::Gana,
        score,
        details,
    }
}

/// Bhakoot (max 7): rashi distance folded into [0, 6].
///
/// Distances {1,2,3,4,5,9,10,11} score 7, everything else 0. After the
/// fold the distance can never exceed 6, so the 9/10/11 members of the
/// favorable set cannot fire; the published table lists them and they are
/// retained verbatim rather than pruned.
pub fn bhakoot_score(boy: &BirthChart, girl: &BirthChart) -> GunaScore {
    let mut d = (boy.rashi.index() as i32 - girl.rashi.index() as i32).abs();
    if d > 6 {
        d = 12 - d;
    }
    let score = match d {
        1 | 2 | 3 | 4 | 5 | 9 | 10 | 11 => 7,
        _ => 0,
    };
    let quality = if score == 7 { "auspicious" } else { "inauspicious" };
    GunaScore {
        guna: Guna::Bhakoot,
        score,
        details: format!("Sign distance {d} is {quality}"),
    }
}

/// Nadi (max 8): full points when the two lords fall in different nadi
/// categories, zero when they share one.
pub fn nadi_score(boy: &BirthChart, girl: &BirthChart) -> GunaScore {
    let (b, g) = (nadi_of(boy.nakshatra.lord()), nadi_of(girl.nakshatra.lord()));
    let (score, details) = if b != g {
        (
            8,
            format!("{} and {} nadis complement each other", b.name(), g.name()),
        )
    } else {
        (0, format!("Both lords share the {} nadi", b.name()))
    };
    GunaScore {
        guna: Guna::Nadi,
        score,
        details,
    }
}

/// Evaluate all eight gunas in report order.
pub fn all_guna_scores(boy: &BirthChart, girl: &BirthChart) -> [GunaScore; 8] {
    [
        varna_score(boy, girl),
        vashya_score(boy, girl),
        tara_score(boy, girl),
        yoni_score(boy, girl),
        graha_maitri_score(boy, girl),
        gana_score(boy, girl),
        bhakoot_score(boy, girl),
        nadi_score(boy, girl),
    ]
}
