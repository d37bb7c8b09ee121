//! Western tropical zodiac: 12 signs on fixed calendar bands.
//!
//! Band edges follow the common newspaper convention (Aries = Mar 21 - Apr 19).
//! Capricorn wraps the year boundary. A date outside every band falls back
//! to Aries.

use cosmo_calendar::CalendarDate;
use serde::Serialize;

use crate::util::{DateBand, band_index, clamp_index};

/// The 12 Western signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum WesternSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_WESTERN_SIGNS: [WesternSign; 12] = [
    WesternSign::Aries,
    WesternSign::Taurus,
    WesternSign::Gemini,
    WesternSign::Cancer,
    WesternSign::Leo,
    WesternSign::Virgo,
    WesternSign::Libra,
    WesternSign::Scorpio,
    WesternSign::Sagittarius,
    WesternSign::Capricorn,
    WesternSign::Aquarius,
    WesternSign::Pisces,
];

impl WesternSign {
    /// English name, e.g. "Gemini".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [WesternSign; 12] {
        &ALL_WESTERN_SIGNS
    }

    /// Reference entry for this sign.
    pub fn entry(self) -> &'static WesternEntry {
        &WESTERN_SIGNS[self.index() as usize]
    }

    /// Look up a sign by its English name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_WESTERN_SIGNS
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Classical element of a Western sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    /// Capitalized element name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

/// Reference data for one Western sign.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WesternEntry {
    pub sign: WesternSign,
    pub symbol: &'static str,
    pub element: Element,
    pub traits: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub growth_areas: &'static [&'static str],
    pub description: &'static str,
    pub detailed_description: &'static str,
    #[serde(skip)]
    pub band: DateBand,
}

pub static WESTERN_SIGNS: [WesternEntry; 12] = [
    WesternEntry {
        sign: WesternSign::Aries,
        symbol: "\u{2648}",
        element: Element::Fire,
        traits: &["Bold", "Energetic", "Independent", "Competitive"],
        strengths: &["Natural leadership", "Courage", "Initiative"],
        growth_areas: &["Patience", "Diplomacy", "Follow-through"],
        description: "Dynamic and pioneering, you charge forward with enthusiasm and courage.",
        detailed_description: "Fire element gives you passion and drive to initiate new projects and lead others.",
        band: DateBand::new(3, 21, 4, 19),
    },
    WesternEntry {
        sign: WesternSign::Taurus,
        symbol: "\u{2649}",
        element: Element::Earth,
        traits: &["Reliable", "Patient", "Practical", "Devoted"],
        strengths: &["Stability", "Determination", "Sensuality"],
        growth_areas: &["Flexibility", "Change adaptation", "Risk-taking"],
        description: "Grounded and reliable, you build lasting foundations with patience and determination.",
        detailed_description: "Earth element provides you with practical wisdom and the ability to manifest dreams into reality.",
        band: DateBand::new(4, 20, 5, 20),
    },
    WesternEntry {
        sign: WesternSign::Gemini,
        symbol: "\u{264A}",
        element: Element::Air,
        traits: &["Curious", "Adaptable", "Communicative", "Witty"],
        strengths: &["Mental agility", "Communication", "Versatility"],
        growth_areas: &["Focus", "Depth", "Consistency"],
        description: "Quick-minded and adaptable, you excel at communication and connecting ideas.",
        detailed_description: "Air element gives you the gift of seeing multiple perspectives and communicating complex ideas.",
        band: DateBand::new(5, 21, 6, 20),
    },
    WesternEntry {
        sign: WesternSign::Cancer,
        symbol: "\u{264B}",
        element: Element::Water,
        traits: &["Nurturing", "Intuitive", "Protective", "Emotional"],
        strengths: &["Empathy", "Intuition", "Loyalty"],
        growth_areas: &["Boundaries", "Self-protection", "Objectivity"],
        description: "Deeply intuitive and nurturing, you care for others with profound emotional intelligence.",
        detailed_description: "Water element flows through you, providing psychic abilities and deep emotional understanding.",
        band: DateBand::new(6, 21, 7, 22),
    },
    WesternEntry {
        sign: WesternSign::Leo,
        symbol: "\u{264C}",
        element: Element::Fire,
        traits: &["Confident", "Generous", "Creative", "Dramatic"],
        strengths: &["Leadership", "Creativity", "Warmth"],
        growth_areas: &["Humility", "Listening", "Sharing spotlight"],
        description: "Radiant and generous, you light up rooms with your natural charisma and creativity.",
        detailed_description: "Fire element burns bright within you, inspiring others and fueling your creative expression.",
        band: DateBand::new(7, 23, 8, 22),
    },
    WesternEntry {
        sign: WesternSign::Virgo,
        symbol: "\u{264D}",
        element: Element::Earth,
        traits: &["Analytical", "Practical", "Helpful", "Perfectionist"],
        strengths: &["Attention to detail", "Service", "Organization"],
        growth_areas: &["Self-acceptance", "Perfectionism", "Criticism"],
        description: "Meticulous and helpful, you excel at improving systems and caring for others' needs.",
        detailed_description: "Earth element grounds your analytical nature, helping you create order and healing in the world.",
        band: DateBand::new(8, 23, 9, 22),
    },
    WesternEntry {
        sign: WesternSign::Libra,
        symbol: "\u{264E}",
        element: Element::Air,
        traits: &["Diplomatic", "Harmonious", "Fair", "Social"],
        strengths: &["Balance", "Diplomacy", "Aesthetics"],
        growth_areas: &["Decisiveness", "Self-advocacy", "Conflict resolution"],
        description: "Graceful and diplomatic, you seek beauty and harmony in all relationships.",
        detailed_description: "Air element helps you see all sides of situations and create balance through understanding.",
        band: DateBand::new(9, 23, 10, 22),
    },
    WesternEntry {
        sign: WesternSign::Scorpio,
        symbol: "\u{264F}",
        element: Element::Water,
        traits: &["Intense", "Passionate", "Mysterious", "Transformative"],
        strengths: &["Depth", "Intuition", "Transformation"],
        growth_areas: &["Trust", "Vulnerability", "Letting go"],
        description: "Powerful and transformative, you dive deep into life's mysteries with intense passion.",
        detailed_description: "Water element runs deep in you, providing psychic abilities and power to transform others.",
        band: DateBand::new(10, 23, 11, 21),
    },
    WesternEntry {
        sign: WesternSign::Sagittarius,
        symbol: "\u{2650}",
        element: Element::Fire,
        traits: &["Adventurous", "Philosophical", "Free-spirited", "Optimistic"],
        strengths: &["Wisdom", "Adventure", "Teaching"],
        growth_areas: &["Commitment", "Details", "Sensitivity"],
        description: "Free-spirited and wise, you seek truth and adventure in philosophical exploration.",
        detailed_description: "Fire element fuels your quest for knowledge and drives you to expand horizons.",
        band: DateBand::new(11, 22, 12, 21),
    },
    WesternEntry {
        sign: WesternSign::Capricorn,
        symbol: "\u{2651}",
        element: Element::Earth,
        traits: &["Ambitious", "Disciplined", "Responsible", "Traditional"],
        strengths: &["Perseverance", "Leadership", "Tradition"],
        growth_areas: &["Flexibility", "Playfulness", "Emotional expression"],
        description: "Ambitious and disciplined, you climb mountains with steady determination and wisdom.",
        detailed_description: "Earth element provides you with unshakeable foundations and the power to achieve lasting success.",
        band: DateBand::new(12, 22, 1, 19),
    },
    WesternEntry {
        sign: WesternSign::Aquarius,
        symbol: "\u{2652}",
        element: Element::Air,
        traits: &["Independent", "Humanitarian", "Innovative", "Eccentric"],
        strengths: &["Innovation", "Friendship", "Vision"],
        growth_areas: &["Emotion", "Intimacy", "Tradition"],
        description: "Visionary and humanitarian, you innovate for the collective good with unique perspective.",
        detailed_description: "Air element connects you to collective consciousness and fuels your revolutionary spirit.",
        band: DateBand::new(1, 20, 2, 18),
    },
    WesternEntry {
        sign: WesternSign::Pisces,
        symbol: "\u{2653}",
        element: Element::Water,
        traits: &["Intuitive", "Compassionate", "Artistic", "Spiritual"],
        strengths: &["Deep intuition", "Creative vision", "Emotional intelligence"],
        growth_areas: &["Boundary setting", "Practical decisions", "Self-care habits"],
        description: "Intuitive, compassionate, artistic, and deeply empathetic. You feel everything deeply and possess natural healing abilities.",
        detailed_description: "Water Element: Your emotions flow like water, adapting to any container while maintaining your essential nature. This gives you incredible empathy and healing abilities.",
        band: DateBand::new(2, 19, 3, 20),
    },
];

/// Index of the Western sign whose band contains `(month, day)`.
pub fn western_index(month: u32, day: u32) -> usize {
    let idx = band_index(WESTERN_SIGNS.iter().map(|e| &e.band), month, day);
    clamp_index(idx, WESTERN_SIGNS.len())
}

/// Classify a date into its Western sign.
pub fn western_sign(date: CalendarDate) -> &'static WesternEntry {
    let idx = western_index(date.month(), date.day());
    tracing::trace!(%date, idx, "western sign");
    &WESTERN_SIGNS[idx]
}
