//! Vedic nakshatra (lunar mansion) classification, 27-scheme.
//!
//! There is no sidereal Moon position here: the classifier counts days on a
//! thirty-day-month calendar and steps through the nakshatras every 13.5
//! days. Results are stable for a given month/day regardless of year.

use cosmo_calendar::CalendarDate;
use serde::{Serialize, Serializer};

use crate::util::approx_day_count;

/// Days per nakshatra step on the approximate calendar.
pub const DAYS_PER_NAKSHATRA: f64 = 13.5;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }

    pub fn entry(self) -> &'static VedicEntry {
        &VEDIC_NAKSHATRAS[self.index() as usize]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL_NAKSHATRAS
            .iter()
            .copied()
            .find(|n| n.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl Serialize for Nakshatra {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A planet or deity and the influence it lends the nakshatra.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct PlanetaryInfluence {
    pub planet: &'static str,
    pub influence: &'static str,
}

/// Reference data for one nakshatra.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VedicEntry {
    pub nakshatra: Nakshatra,
    /// 1-based position in the cycle.
    pub number: u8,
    pub meaning: &'static str,
    pub ruler: &'static str,
    pub moon_sign: &'static str,
    pub spiritual_traits: &'static [&'static str],
    pub description: &'static str,
    pub planetary_influences: &'static [PlanetaryInfluence],
}

const fn influence(planet: &'static str, influence: &'static str) -> PlanetaryInfluence {
    PlanetaryInfluence { planet, influence }
}

pub static VEDIC_NAKSHATRAS: [VedicEntry; 27] = [
    VedicEntry {
        nakshatra: Nakshatra::Ashwini,
        number: 1,
        meaning: "The Horsemen",
        ruler: "Ketu",
        moon_sign: "Aries",
        spiritual_traits: &["Healing abilities", "Swift action", "Pioneer spirit"],
        description: "You possess natural healing abilities and pioneer new paths with swift, decisive action.",
        planetary_influences: &[
            influence("Ketu", "Spiritual liberation"),
            influence("Mars", "Action and courage"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Bharani,
        number: 2,
        meaning: "The Bearer",
        ruler: "Venus",
        moon_sign: "Aries",
        spiritual_traits: &["Transformation", "Creative power", "Life-death mysteries"],
        description: "You understand life's transformative processes and hold creative power over manifestation.",
        planetary_influences: &[
            influence("Venus", "Beauty and creativity"),
            influence("Mars", "Transformation energy"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Krittika,
        number: 3,
        meaning: "The Cutter",
        ruler: "Sun",
        moon_sign: "Aries/Taurus",
        spiritual_traits: &["Purification", "Sharp insight", "Burning away illusions"],
        description: "You have the ability to cut through illusions and purify situations with sharp insight.",
        planetary_influences: &[
            influence("Sun", "Leadership and clarity"),
            influence("Agni", "Transformation through fire"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Rohini,
        number: 4,
        meaning: "The Red One",
        ruler: "Moon",
        moon_sign: "Taurus",
        spiritual_traits: &["Growth", "Beauty", "Material manifestation"],
        description: "You excel at creating beauty and manifesting abundance in the material world.",
        planetary_influences: &[
            influence("Moon", "Emotional nurturing"),
            influence("Brahma", "Creative power"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Mrigashira,
        number: 5,
        meaning: "The Deer's Head",
        ruler: "Mars",
        moon_sign: "Taurus/Gemini",
        spiritual_traits: &["Seeking", "Curiosity", "Gentle pursuit"],
        description: "You are a gentle seeker who pursues knowledge and truth with curiosity and grace.",
        planetary_influences: &[
            influence("Mars", "Active seeking"),
            influence("Soma", "Divine nectar of knowledge"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Ardra,
        number: 6,
        meaning: "The Moist One",
        ruler: "Rahu",
        moon_sign: "Gemini",
        spiritual_traits: &["Transformation", "Storms", "Renewal"],
        description: "You bring necessary storms and transformation that clear the way for new growth.",
        planetary_influences: &[
            influence("Rahu", "Revolutionary change"),
            influence("Rudra", "Destructive transformation"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Punarvasu,
        number: 7,
        meaning: "The Returner",
        ruler: "Jupiter",
        moon_sign: "Gemini/Cancer",
        spiritual_traits: &["Renewal", "Optimism", "Return to source"],
        description: "You have the gift of renewal and can help others return to their true nature.",
        planetary_influences: &[
            influence("Jupiter", "Wisdom and expansion"),
            influence("Aditi", "Infinite mother energy"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Pushya,
        number: 8,
        meaning: "The Nourisher",
        ruler: "Saturn",
        moon_sign: "Cancer",
        spiritual_traits: &["Nourishment", "Growth", "Spiritual teacher"],
        description: "You are a natural nourisher and spiritual teacher who helps others grow.",
        planetary_influences: &[
            influence("Saturn", "Disciplined nourishment"),
            influence("Brihaspati", "Spiritual wisdom"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Ashlesha,
        number: 9,
        meaning: "The Embrace",
        ruler: "Mercury",
        moon_sign: "Cancer",
        spiritual_traits: &["Hypnotic power", "Wisdom", "Coiled energy"],
        description: "You possess hypnotic wisdom and the ability to embrace and transform through your influence.",
        planetary_influences: &[
            influence("Mercury", "Serpent wisdom"),
            influence("Nagas", "Coiled kundalini energy"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Magha,
        number: 10,
        meaning: "The Mighty One",
        ruler: "Ketu",
        moon_sign: "Leo",
        spiritual_traits: &["Royal power", "Ancestral connection", "Leadership"],
        description: "You carry royal energy and connect strongly with ancestral wisdom and leadership.",
        planetary_influences: &[
            influence("Ketu", "Past life karma"),
            influence("Pitrs", "Ancestral blessings"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::PurvaPhalguni,
        number: 11,
        meaning: "The Former Red One",
        ruler: "Venus",
        moon_sign: "Leo",
        spiritual_traits: &["Creativity", "Pleasure", "Artistic expression"],
        description: "You bring beauty and creative pleasure to the world through artistic expression.",
        planetary_influences: &[
            influence("Venus", "Beauty and harmony"),
            influence("Bhaga", "Good fortune and pleasure"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::UttaraPhalguni,
        number: 12,
        meaning: "The Latter Red One",
        ruler: "Sun",
        moon_sign: "Leo/Virgo",
        spiritual_traits: &["Organization", "Service", "Reliable support"],
        description: "You provide organized support and reliable service to help others achieve their goals.",
        planetary_influences: &[
            influence("Sun", "Leadership through service"),
            influence("Aryaman", "Noble friendship"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Hasta,
        number: 13,
        meaning: "The Hand",
        ruler: "Moon",
        moon_sign: "Virgo",
        spiritual_traits: &["Skillful hands", "Healing touch", "Dexterity"],
        description: "You have skillful hands and healing touch, able to manifest through dexterous work.",
        planetary_influences: &[
            influence("Moon", "Intuitive skill"),
            influence("Savitar", "Divine craftsmanship"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Chitra,
        number: 14,
        meaning: "The Bright One",
        ruler: "Mars",
        moon_sign: "Virgo/Libra",
        spiritual_traits: &["Artistic creation", "Beauty", "Divine architect"],
        description: "You are a divine architect who creates beauty and bright artistic works.",
        planetary_influences: &[
            influence("Mars", "Creative energy"),
            influence("Tvastar", "Divine architect"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Swati,
        number: 15,
        meaning: "The Independent One",
        ruler: "Rahu",
        moon_sign: "Libra",
        spiritual_traits: &["Independence", "Movement", "Flexibility"],
        description: "You value independence and move through life with flexible adaptation.",
        planetary_influences: &[
            influence("Rahu", "Independent thinking"),
            influence("Vayu", "Wind-like movement"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Vishakha,
        number: 16,
        meaning: "The Forked One",
        ruler: "Jupiter",
        moon_sign: "Libra/Scorpio",
        spiritual_traits: &["Determination", "Goal achievement", "Forked path"],
        description: "You have strong determination to achieve goals despite facing forked paths and choices.",
        planetary_influences: &[
            influence("Jupiter", "Wisdom in choices"),
            influence("Indra-Agni", "Power and transformation"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Anuradha,
        number: 17,
        meaning: "The Following Star",
        ruler: "Saturn",
        moon_sign: "Scorpio",
        spiritual_traits: &["Devotion", "Friendship", "Balance"],
        description: "You bring devotion and balance to friendships and relationships.",
        planetary_influences: &[
            influence("Saturn", "Disciplined devotion"),
            influence("Mitra", "Divine friendship"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Jyeshtha,
        number: 18,
        meaning: "The Eldest",
        ruler: "Mercury",
        moon_sign: "Scorpio",
        spiritual_traits: &["Protection", "Responsibility", "Elder wisdom"],
        description: "You carry elder wisdom and feel responsibility to protect and guide others.",
        planetary_influences: &[
            influence("Mercury", "Protective communication"),
            influence("Indra", "Leadership and protection"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Mula,
        number: 19,
        meaning: "The Root",
        ruler: "Ketu",
        moon_sign: "Sagittarius",
        spiritual_traits: &["Investigation", "Destruction", "Getting to roots"],
        description: "You investigate deeply and destroy what doesn't serve to get to the root truth.",
        planetary_influences: &[
            influence("Ketu", "Spiritual investigation"),
            influence("Nirriti", "Destruction of falsehood"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::PurvaAshadha,
        number: 20,
        meaning: "The Former Invincible One",
        ruler: "Venus",
        moon_sign: "Sagittarius",
        spiritual_traits: &["Invincibility", "Purification", "Early victory"],
        description: "You possess invincible energy and the ability to purify through early victories.",
        planetary_influences: &[
            influence("Venus", "Invincible beauty"),
            influence("Apas", "Water purification"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::UttaraAshadha,
        number: 21,
        meaning: "The Latter Invincible One",
        ruler: "Sun",
        moon_sign: "Sagittarius/Capricorn",
        spiritual_traits: &["Final victory", "Leadership", "Universal good"],
        description: "You achieve final victory through leadership dedicated to universal good.",
        planetary_influences: &[
            influence("Sun", "Universal leadership"),
            influence("Vishvadevas", "Universal gods blessing"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Shravana,
        number: 22,
        meaning: "The Hearing",
        ruler: "Moon",
        moon_sign: "Capricorn",
        spiritual_traits: &["Listening", "Learning", "Communication"],
        description: "You excel at listening and learning, becoming a conduit for higher communication.",
        planetary_influences: &[
            influence("Moon", "Intuitive listening"),
            influence("Vishnu", "Preservation through knowledge"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Dhanishtha,
        number: 23,
        meaning: "The Wealthiest",
        ruler: "Mars",
        moon_sign: "Capricorn/Aquarius",
        spiritual_traits: &["Wealth", "Music", "Fame"],
        description: "You attract wealth and fame through musical and rhythmic abilities.",
        planetary_influences: &[
            influence("Mars", "Dynamic wealth creation"),
            influence("Ashta Vasus", "Eight types of abundance"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Shatabhisha,
        number: 24,
        meaning: "The Hundred Healers",
        ruler: "Rahu",
        moon_sign: "Aquarius",
        spiritual_traits: &["Healing", "Mystery", "Independence"],
        description: "You possess hundred forms of healing and work with mysterious independent energy.",
        planetary_influences: &[
            influence("Rahu", "Innovative healing"),
            influence("Varuna", "Cosmic waters of healing"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::PurvaBhadrapada,
        number: 25,
        meaning: "The Former Lucky Feet",
        ruler: "Jupiter",
        moon_sign: "Aquarius/Pisces",
        spiritual_traits: &["Transformation", "Sacrifice", "Spiritual fire"],
        description: "You transform through sacrifice and carry spiritual fire for purification.",
        planetary_influences: &[
            influence("Jupiter", "Wise transformation"),
            influence("Ajaikapat", "One-footed spiritual fire"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::UttaraBhadrapada,
        number: 26,
        meaning: "The Latter Lucky Feet",
        ruler: "Saturn",
        moon_sign: "Pisces",
        spiritual_traits: &["Depth", "Kundalini", "Cosmic serpent"],
        description: "You access cosmic depths and work with kundalini serpent energy.",
        planetary_influences: &[
            influence("Saturn", "Deep spiritual discipline"),
            influence("Ahir Budhanya", "Cosmic serpent of depths"),
        ],
    },
    VedicEntry {
        nakshatra: Nakshatra::Revati,
        number: 27,
        meaning: "The Wealthy",
        ruler: "Mercury",
        moon_sign: "Pisces",
        spiritual_traits: &["Completion", "Guidance", "Spiritual wealth"],
        description: "You guide others to completion and fulfillment. Your soul carries the wisdom of endings that lead to new beginnings.",
        planetary_influences: &[
            influence("Mercury", "Communication, wisdom"),
            influence("Pushan", "Protective guidance"),
        ],
    },
];

/// Nakshatra index for `(month, day)` on the thirty-day-month calendar.
///
/// `floor((day_count - 1) / 13.5) mod 27`, clamped to [0, 26].
pub fn nakshatra_index(month: u32, day: u32) -> usize {
    let day_count = approx_day_count(month, day);
    let step = (day_count.saturating_sub(1) as f64 / DAYS_PER_NAKSHATRA).floor() as usize;
    (step % ALL_NAKSHATRAS.len()).min(ALL_NAKSHATRAS.len() - 1)
}

/// Classify a date into its nakshatra.
pub fn vedic_sign(date: CalendarDate) -> &'static VedicEntry {
    let idx = nakshatra_index(date.month(), date.day());
    tracing::trace!(%date, idx, "nakshatra");
    &VEDIC_NAKSHATRAS[idx]
}
