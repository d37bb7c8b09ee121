//! Mayan day-sign classification.
//!
//! The day count uses the same thirty-day-month approximation as the Vedic
//! classifier, taken modulo the length of the selected catalog. Two
//! catalogs exist: the full 20-sign tzolk'in and the abbreviated 3-sign
//! catalog that earlier profiles were computed with.

use cosmo_calendar::CalendarDate;
use serde::{Deserialize, Serialize};

use crate::error::ZodiacError;
use crate::util::approx_day_count;

/// The 20 tzolk'in day signs in traditional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DaySign {
    Imix,
    Ik,
    Akbal,
    Kan,
    Chicchan,
    Cimi,
    Manik,
    Lamat,
    Muluc,
    Oc,
    Chuen,
    Eb,
    Ben,
    Ix,
    Men,
    Cib,
    Caban,
    Etznab,
    Cauac,
    Ahau,
}

/// All 20 day signs in order (0 = Imix, 19 = Ahau).
pub const ALL_DAY_SIGNS: [DaySign; 20] = [
    DaySign::Imix,
    DaySign::Ik,
    DaySign::Akbal,
    DaySign::Kan,
    DaySign::Chicchan,
    DaySign::Cimi,
    DaySign::Manik,
    DaySign::Lamat,
    DaySign::Muluc,
    DaySign::Oc,
    DaySign::Chuen,
    DaySign::Eb,
    DaySign::Ben,
    DaySign::Ix,
    DaySign::Men,
    DaySign::Cib,
    DaySign::Caban,
    DaySign::Etznab,
    DaySign::Cauac,
    DaySign::Ahau,
];

/// Signs of the abbreviated catalog, in classification order.
pub const ABBREVIATED_DAY_SIGNS: [DaySign; 3] = [DaySign::Imix, DaySign::Ik, DaySign::Ben];

impl DaySign {
    /// Yucatec name of the day sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Imix => "Imix",
            Self::Ik => "Ik",
            Self::Akbal => "Akbal",
            Self::Kan => "Kan",
            Self::Chicchan => "Chicchan",
            Self::Cimi => "Cimi",
            Self::Manik => "Manik",
            Self::Lamat => "Lamat",
            Self::Muluc => "Muluc",
            Self::Oc => "Oc",
            Self::Chuen => "Chuen",
            Self::Eb => "Eb",
            Self::Ben => "Ben",
            Self::Ix => "Ix",
            Self::Men => "Men",
            Self::Cib => "Cib",
            Self::Caban => "Caban",
            Self::Etznab => "Etznab",
            Self::Cauac => "Cauac",
            Self::Ahau => "Ahau",
        }
    }

    /// 0-based tzolk'in position (Imix=0 .. Ahau=19).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [DaySign; 20] {
        &ALL_DAY_SIGNS
    }

    pub fn entry(self) -> &'static MayanEntry {
        &MAYAN_DAY_SIGNS[self.index() as usize]
    }

    /// Look up by name. "Ak" is accepted for Ben, as stored by older profiles.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("ak") {
            return Some(Self::Ben);
        }
        ALL_DAY_SIGNS
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

/// Which day-sign catalog the classifier cycles through.
///
/// Text and config files are read through the same [`FromStr`] rules, so
/// `full` and `legacy` are accepted in both, case-insensitively.
///
/// [`FromStr`]: std::str::FromStr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum MayanCatalog {
    #[default]
    Tzolkin,
    Abbreviated,
}

impl MayanCatalog {
    /// Signs the classifier cycles through, in order.
    pub const fn signs(self) -> &'static [DaySign] {
        match self {
            Self::Tzolkin => &ALL_DAY_SIGNS,
            Self::Abbreviated => &ABBREVIATED_DAY_SIGNS,
        }
    }

    pub const fn len(self) -> usize {
        self.signs().len()
    }

    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Canonical lowercase name, as written in config files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tzolkin => "tzolkin",
            Self::Abbreviated => "abbreviated",
        }
    }
}

impl std::str::FromStr for MayanCatalog {
    type Err = ZodiacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tzolkin" | "full" => Ok(Self::Tzolkin),
            "abbreviated" | "legacy" => Ok(Self::Abbreviated),
            _ => Err(ZodiacError::UnknownCatalog(s.trim().to_string())),
        }
    }
}

impl TryFrom<String> for MayanCatalog {
    type Error = ZodiacError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct SacredGift {
    pub gift: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MayanEntry {
    pub day_sign: DaySign,
    /// Traditional 1-based tzolk'in number.
    pub number: u8,
    pub meaning: &'static str,
    pub spiritual_qualities: &'static [&'static str],
    pub description: &'static str,
    pub sacred_gifts: &'static [SacredGift],
}

const fn gift(gift: &'static str, description: &'static str) -> SacredGift {
    SacredGift { gift, description }
}

pub static MAYAN_DAY_SIGNS: [MayanEntry; 20] = [
    MayanEntry {
        day_sign: DaySign::Imix,
        number: 1,
        meaning: "Crocodile",
        spiritual_qualities: &["Nurturing", "Material foundation", "Primal energy"],
        description: "You provide nurturing foundation and primal creative energy to all endeavors.",
        sacred_gifts: &[
            gift("Creation", "Ability to birth new ideas and projects"),
            gift("Nurturing", "Natural caretaker and provider of foundation"),
        ],
    },
    MayanEntry {
        day_sign: DaySign::Ik,
        number: 2,
        meaning: "Wind",
        spiritual_qualities: &["Communication", "Spirit", "Divine breath"],
        description: "You carry divine messages and inspiration through communication and spiritual connection.",
        sacred_gifts: &[
            gift("Communication", "Channel for divine messages and wisdom"),
            gift("Inspiration", "Ability to breathe life into ideas"),
        ],
    },
    MayanEntry {
        day_sign: DaySign::Akbal,
        number: 3,
        meaning: "Night",
        spiritual_qualities: &["Dreaming", "Inner sanctuary", "Mystery"],
        description: "You move easily through the inner night, finding answers in dreams and quiet reflection.",
        sacred_gifts: &[
            gift("Dreaming", "Receives guidance through dreams and visions"),
            gift("Sanctuary", "Creates safe spaces where others can rest and heal"),
        ],
    },
    MayanEntry {
        day_sign: DaySign::Kan,
        number: 4,
        meaning: "Seed",
        spiritual_qualities: &["Growth", "Abundance", "Potential"],
        description: "You plant seeds of possibility and patiently tend them until they flourish.",
        sacred_gifts: &[
            gift("Growth", "Ability to help others grow and reach their potential"),
            gift("Abundance", "Draws prosperity through patient cultivation"),
        ],
    },
    MayanEntry {
        day_sign: DaySign::Chicchan,
        number: 5,
        meaning: "Serpent",
        spiritual_qualities: &["Life force", "Instinct", "Vitality"],
        description: "You carry strong life force and trust the wisdom of your body and instincts.",
        sacred_gifts: &[
            gift("Vitality", "Awakens energy and passion in others"),
            gift("Instinct", "Senses danger and opportunity before others do"),
        ],
    },
    MayanEntry {
        day_sign: DaySign::Cimi,
        number: 6,
        meaning: "Death",
        spiritual_qualities: &["Transformation", "Release", "Ancestral connection"],
        description: "You understand endings as doorways and help others release what no longer serves them.",
        sacred_gifts: &[
            gift("Transformation", "Guides others through endings and rebirth"),
            gift("Ancestry", "Connects with the wisdom of those who came before"),
        ],
    },
    MayanEntry {
        day_sign: DaySign::Manik,
        number: 7,
        meaning: "Deer",
        spiritual_qualities: &["Healing", "Service", "Grace"],
        description: "You are a gentle healer who serves others with grace and an open heart.",
        sacred_gifts: &[
            gift("Healing", "Natural ability to restore balance in body and spirit"),
            gift("Service", "Offers help freely and without expectation"),
        ],
    },
    MayanEntry {
        day_sign: DaySign::Lamat,
        number: 8,
        meaning: "Star",
        spiritual_qualities: &["Harmony", "Beauty", "Abundance"],
        description: "You bring harmony and beauty into the world, shining like the morning star.",
        sacred_gifts: &[
            gift("Harmony", "Restores balance where there is discord"),
            gift("Abundance", "Multiplies whatever is shared with love"),
        ],
    },
    MayanEntry {
        day_sign: DaySign::Muluc,
        number: 9,
        meaning: "Water",
        spiritual_qualities: &["Emotion", "Purification", "Offering"],
        description: "You feel deeply and purify situations through emotional honesty and generosity.",
        sacred_gifts: &[
            gift("Purification", "Cleanses stagnant energy and emotions"),
            gift("Offering", "Gives generously to sustain the community"),
        ],
    },
    MayanEntry {
        day_sign: DaySign::Oc,
        number: 10,
        meaning: "Dog",
        spiritual_qualities: &["Loyalty", "Guidance", "Heart"],
        description: "You are a loyal companion and guide, leading others with an open and faithful heart.",
        sacred_gifts: &[
            gift("Loyalty", "Stands beside others through every trial"),
            gift("Guidance", "Leads others safely through unfamiliar territory"),
        ],
    },
    MayanEntry {
        day_sign: DaySign::Chuen,
        number: 11,
        meaning: "Monkey",
        spiritual_qualities: &["Creativity", "Play", "Artistry"],
        description: "You weave creativity and play together, turning ordinary moments into art.",
        sacred_gifts: &[
            gift("Artistry", "Expresses the sacred through creative work"),
            gift("Play", "Brings joy and lightness to heavy situations"),
        ],
    },
    MayanEntry {
        day_sign: DaySign::Eb,
        number: 12,
        meaning: "Road",
        spiritual_qualities: &["Journey", "Community", "Destiny"],
        description: "You walk the road of destiny and help build paths that others can follow.",
        sacred_gifts: &[
            gift("Pathfinding", "Finds the way forward when others are lost"),
            gift("Community", "Brings people together on a shared journey"),
        ],
    },
    MayanEntry {
        day_sign: DaySign::Ben,
        number: 13,
        meaning: "Reed",
        spiritual_qualities: &["Protection", "Guidance", "Spiritual warrior"],
        description: "You're a natural protector and guide, with the ability to help others navigate through life's challenges with wisdom and strength.",
        sacred_gifts: &[
            gift("Protection", "Natural guardian energy that shields others from harm"),
            gift("Growth", "Ability to help others grow and reach their potential"),
        ],
    },
    MayanEntry {
        day_sign: DaySign::Ix,
        number: 14,
        meaning: "Jaguar",
        spiritual_qualities: &["Magic", "Earth connection", "Shamanic power"],
        description: "You walk between worlds with the quiet power of the jaguar and a deep bond with the earth.",
        sacred_gifts: &[
            gift("Magic", "Works with unseen forces of nature"),
            gift("Earth wisdom", "Hears the voice of the land and its creatures"),
        ],
    },
    MayanEntry {
        day_sign: DaySign::Men,
        number: 15,
        meaning: "Eagle",
        spiritual_qualities: &["Vision", "Aspiration", "Higher perspective"],
        description: "You see far and high, holding a vision that inspires others to rise.",
        sacred_gifts: &[
            gift("Vision", "Perceives the larger pattern behind events"),
            gift("Aspiration", "Lifts others toward their highest goals"),
        ],
    },
    MayanEntry {
        day_sign: DaySign::Cib,
        number: 16,
        meaning: "Owl",
        spiritual_qualities: &["Wisdom", "Forgiveness", "Inner knowing"],
        description: "You carry ancient wisdom and the courage to forgive, trusting your inner knowing.",
        sacred_gifts: &[
            gift("Wisdom", "Draws on the knowledge of the ancestors"),
            gift("Forgiveness", "Releases old wounds for self and others"),
        ],
    },
    MayanEntry {
        day_sign: DaySign::Caban,
        number: 17,
        meaning: "Earth",
        spiritual_qualities: &["Synchronicity", "Evolution", "Grounding"],
        description: "You are attuned to the rhythms of the earth and notice the synchronicities that guide change.",
        sacred_gifts: &[
            gift("Synchronicity", "Recognizes meaningful signs and timing"),
            gift("Grounding", "Anchors ideas in practical reality"),
        ],
    },
    MayanEntry {
        day_sign: DaySign::Etznab,
        number: 18,
        meaning: "Flint",
        spiritual_qualities: &["Truth", "Clarity", "Reflection"],
        description: "You cut through illusion with the sharp mirror of truth and clear reflection.",
        sacred_gifts: &[
            gift("Truth", "Reflects reality back without distortion"),
            gift("Clarity", "Separates what is essential from what is not"),
        ],
    },
    MayanEntry {
        day_sign: DaySign::Cauac,
        number: 19,
        meaning: "Storm",
        spiritual_qualities: &["Renewal", "Catalyst", "Purification"],
        description: "You arrive like a storm that clears the air, catalysing renewal wherever you go.",
        sacred_gifts: &[
            gift("Renewal", "Clears the way for fresh beginnings"),
            gift("Catalyst", "Sparks change that others were waiting for"),
        ],
    },
    MayanEntry {
        day_sign: DaySign::Ahau,
        number: 20,
        meaning: "Sun",
        spiritual_qualities: &["Enlightenment", "Wholeness", "Unconditional love"],
        description: "You radiate warmth and wholeness, reminding others of the light within them.",
        sacred_gifts: &[
            gift("Enlightenment", "Illuminates the path toward wholeness"),
            gift("Love", "Offers warmth that asks for nothing in return"),
        ],
    },
];

/// Position within a catalog of `len` signs. Returns 0 for an empty catalog.
pub fn mayan_index(month: u32, day: u32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (approx_day_count(month, day).saturating_sub(1) as usize) % len
}

/// Classify a date into a day sign from the given catalog.
pub fn mayan_sign(date: CalendarDate, catalog: MayanCatalog) -> &'static MayanEntry {
    let signs = catalog.signs();
    let idx = mayan_index(date.month(), date.day(), signs.len());
    let sign = signs.get(idx).copied().unwrap_or(DaySign::Imix);
    tracing::trace!(%date, idx, catalog = catalog.name(), "mayan day sign");
    sign.entry()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn table_order_matches_enum() {
        for (i, entry) in MAYAN_DAY_SIGNS.iter().enumerate() {
            assert_eq!(entry.day_sign.index() as usize, i);
            assert_eq!(entry.number as usize, i + 1);
        }
    }

    #[test]
    fn abbreviated_catalog_cycles_three() {
        let c = MayanCatalog::Abbreviated;
        assert_eq!(mayan_sign(date(2000, 1, 1), c).day_sign, DaySign::Imix);
        assert_eq!(mayan_sign(date(2000, 1, 2), c).day_sign, DaySign::Ik);
        assert_eq!(mayan_sign(date(2000, 1, 3), c).day_sign, DaySign::Ben);
        assert_eq!(mayan_sign(date(2000, 1, 4), c).day_sign, DaySign::Imix);
    }

    #[test]
    fn tzolkin_catalog_is_default_and_cycles_twenty() {
        let c = MayanCatalog::default();
        assert_eq!(c, MayanCatalog::Tzolkin);
        assert_eq!(mayan_sign(date(2000, 1, 20), c).day_sign, DaySign::Ahau);
        assert_eq!(mayan_sign(date(2000, 1, 21), c).day_sign, DaySign::Imix);
        // day count 31 -> index 10
        assert_eq!(mayan_sign(date(2000, 2, 1), c).day_sign, DaySign::Chuen);
    }

    #[test]
    fn empty_catalog_guard() {
        assert_eq!(mayan_index(6, 15, 0), 0);
    }

    #[test]
    fn legacy_ak_name_maps_to_ben() {
        assert_eq!(DaySign::from_name("Ak"), Some(DaySign::Ben));
        assert_eq!(DaySign::from_name("ahau"), Some(DaySign::Ahau));
        assert_eq!("legacy".parse::<MayanCatalog>(), Ok(MayanCatalog::Abbreviated));
    }

    #[test]
    fn catalog_text_and_serde_agree() {
        for (text, expected) in [
            ("tzolkin", MayanCatalog::Tzolkin),
            ("full", MayanCatalog::Tzolkin),
            ("abbreviated", MayanCatalog::Abbreviated),
            ("legacy", MayanCatalog::Abbreviated),
            ("Tzolkin", MayanCatalog::Tzolkin),
        ] {
            assert_eq!(text.parse::<MayanCatalog>(), Ok(expected), "{text}");
            let json = format!("\"{text}\"");
            assert_eq!(serde_json::from_str::<MayanCatalog>(&json).unwrap(), expected, "{text}");
        }
        // serialization keeps the canonical names
        assert_eq!(serde_json::to_string(&MayanCatalog::Abbreviated).unwrap(), "\"abbreviated\"");

        assert_eq!(
            "short".parse::<MayanCatalog>(),
            Err(ZodiacError::UnknownCatalog("short".to_string()))
        );
        assert!(serde_json::from_str::<MayanCatalog>("\"short\"").is_err());
    }
}
