//! Personality trait metrics across systems.
//!
//! Western scores depend on the sign and Chinese scores on the element.
//! Vedic, Mayan and Celtic use fixed baselines. Anything without a table
//! scores [`DEFAULT_TRAIT_SCORE`].

use cosmo_zodiac::{ChineseElement, WesternSign, ZodiacProfile, ZodiacSystem};
use serde::Serialize;

pub const DEFAULT_TRAIT_SCORE: u8 = 75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PersonalityTrait {
    Leadership,
    Creativity,
    Intuition,
    Empathy,
    Ambition,
    Balance,
}

pub const ALL_TRAITS: [PersonalityTrait; 6] = [
    PersonalityTrait::Leadership,
    PersonalityTrait::Creativity,
    PersonalityTrait::Intuition,
    PersonalityTrait::Empathy,
    PersonalityTrait::Ambition,
    PersonalityTrait::Balance,
];

impl PersonalityTrait {
    /// Display name, e.g. "Leadership".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Leadership => "Leadership",
            Self::Creativity => "Creativity",
            Self::Intuition => "Intuition",
            Self::Empathy => "Empathy",
            Self::Ambition => "Ambition",
            Self::Balance => "Balance",
        }
    }

    /// Position in the metrics array.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL_TRAITS
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }
}

// Rows follow ALL_WESTERN_SIGNS, columns follow ALL_TRAITS.
const WESTERN_TRAIT_SCORES: [[u8; 6]; 12] = [
    [90, 75, 65, 60, 95, 50], // Aries
    [70, 80, 70, 85, 75, 90], // Taurus
    [75, 95, 80, 70, 70, 60], // Gemini
    [65, 85, 95, 95, 60, 75], // Cancer
    [95, 90, 70, 75, 90, 65], // Leo
    [80, 75, 85, 80, 85, 95], // Virgo
    [75, 88, 80, 90, 70, 95], // Libra
    [85, 80, 98, 75, 95, 70], // Scorpio
    [80, 90, 75, 70, 85, 65], // Sagittarius
    [95, 70, 75, 70, 98, 80], // Capricorn
    [85, 95, 90, 75, 80, 70], // Aquarius
    [60, 98, 98, 98, 65, 80], // Pisces
];

// Rows follow ALL_CHINESE_ELEMENTS.
const CHINESE_TRAIT_SCORES: [[u8; 6]; 5] = [
    [85, 90, 80, 85, 80, 75], // Wood
    [95, 95, 75, 70, 90, 60], // Fire
    [75, 70, 80, 90, 75, 95], // Earth
    [90, 75, 85, 70, 95, 85], // Metal
    [70, 85, 95, 95, 70, 90], // Water
];

const VEDIC_BASELINE: [u8; 6] = [75, 85, 92, 80, 78, 82];
const MAYAN_BASELINE: [u8; 6] = [70, 90, 88, 85, 72, 80];
const CELTIC_BASELINE: [u8; 6] = [68, 88, 85, 90, 75, 87];

pub fn western_trait_score(sign: WesternSign, t: PersonalityTrait) -> u8 {
    WESTERN_TRAIT_SCORES
        .get(sign.index() as usize)
        .map_or(DEFAULT_TRAIT_SCORE, |row| row[t.index()])
}

pub fn chinese_trait_score(element: ChineseElement, t: PersonalityTrait) -> u8 {
    CHINESE_TRAIT_SCORES
        .get(element.index() as usize)
        .map_or(DEFAULT_TRAIT_SCORE, |row| row[t.index()])
}

/// Look up a score by system and key name (Western sign, Chinese element).
///
/// Unknown names, and systems without a table, fall back to
/// [`DEFAULT_TRAIT_SCORE`]. Vedic, Mayan and Celtic ignore `key`.
pub fn trait_score(system: ZodiacSystem, key: &str, t: PersonalityTrait) -> u8 {
    match system {
        ZodiacSystem::Western => WesternSign::from_name(key)
            .map_or(DEFAULT_TRAIT_SCORE, |s| western_trait_score(s, t)),
        ZodiacSystem::Chinese => ChineseElement::from_name(key)
            .map_or(DEFAULT_TRAIT_SCORE, |e| chinese_trait_score(e, t)),
        ZodiacSystem::Vedic => VEDIC_BASELINE[t.index()],
        ZodiacSystem::Mayan => MAYAN_BASELINE[t.index()],
        ZodiacSystem::Celtic => CELTIC_BASELINE[t.index()],
        ZodiacSystem::Arabic => DEFAULT_TRAIT_SCORE,
    }
}

/// One trait row of the metrics table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PersonalityMetric {
    #[serde(rename = "trait")]
    pub personality_trait: PersonalityTrait,
    pub western: u8,
    pub chinese: u8,
    pub vedic: u8,
    pub mayan: u8,
    pub celtic: u8,
    /// Mean of the five system scores.
    pub mean: f64,
}

impl PersonalityMetric {
    pub fn scores(&self) -> [(ZodiacSystem, u8); 5] {
        [
            (ZodiacSystem::Western, self.western),
            (ZodiacSystem::Chinese, self.chinese),
            (ZodiacSystem::Vedic, self.vedic),
            (ZodiacSystem::Mayan, self.mayan),
            (ZodiacSystem::Celtic, self.celtic),
        ]
    }
}

/// Six trait rows for a profile, in [`ALL_TRAITS`] order.
pub fn personality_metrics(profile: &ZodiacProfile) -> [PersonalityMetric; 6] {
    ALL_TRAITS.map(|t| {
        let western = western_trait_score(profile.western.sign, t);
        let chinese = chinese_trait_score(profile.chinese.element, t);
        let vedic = VEDIC_BASELINE[t.index()];
        let mayan = MAYAN_BASELINE[t.index()];
        let celtic = CELTIC_BASELINE[t.index()];
        let sum: u32 = [western, chinese, vedic, mayan, celtic]
            .iter()
            .map(|&s| u32::from(s))
            .sum();
        PersonalityMetric {
            personality_trait: t,
            western,
            chinese,
            vedic,
            mayan,
            celtic,
            mean: f64::from(sum) / 5.0,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmo_zodiac::parse_and_classify;

    #[test]
    fn aries_metal_rooster() {
        let profile = parse_and_classify("31/03/1981", None).unwrap();
        let rows = personality_metrics(&profile);
        let leadership = rows[0];
        assert_eq!(leadership.personality_trait, PersonalityTrait::Leadership);
        assert_eq!(leadership.western, 90);
        assert_eq!(leadership.chinese, 90);
        assert_eq!((leadership.vedic, leadership.mayan, leadership.celtic), (75, 70, 68));
        assert!((leadership.mean - 78.6).abs() < 1e-9);
    }

    #[test]
    fn unknown_keys_default() {
        assert_eq!(
            trait_score(ZodiacSystem::Western, "Ophiuchus", PersonalityTrait::Balance),
            DEFAULT_TRAIT_SCORE
        );
        assert_eq!(
            trait_score(ZodiacSystem::Arabic, "Al-Qalb", PersonalityTrait::Empathy),
            DEFAULT_TRAIT_SCORE
        );
        assert_eq!(
            trait_score(ZodiacSystem::Chinese, "water", PersonalityTrait::Intuition),
            95
        );
    }

    #[test]
    fn json_uses_trait_key() {
        let profile = parse_and_classify("2000-01-01", None).unwrap();
        let json = serde_json::to_value(personality_metrics(&profile)).unwrap();
        assert_eq!(json[5]["trait"], "Balance");
    }
}
