//! Sentence templates for compatibility insights.
//!
//! All user-facing wording lives behind [`InsightTemplates`] so a caller can
//! swap in another language or tone without touching the engine.

use cosmo_zodiac::{ZodiacProfile, ZodiacSystem};

use crate::compat_types::MatchTier;

/// Number of entries in each advice list.
pub const ADVICE_LIST_LEN: usize = 5;

pub trait InsightTemplates {
    /// Description of a single counterpart. `own` is the profile's key in
    /// the same system.
    fn match_description(
        &self,
        system: ZodiacSystem,
        tier: MatchTier,
        counterpart: &str,
        own: &str,
    ) -> String;

    fn match_advice(&self, system: ZodiacSystem, tier: MatchTier) -> String;

    fn empowering_connections(&self, profile: &ZodiacProfile) -> Vec<String>;

    fn growth_opportunities(&self, profile: &ZodiacProfile) -> Vec<String>;

    fn communication_tips(&self, profile: &ZodiacProfile) -> Vec<String>;
}

/// The default English wording.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishTemplates;

impl InsightTemplates for EnglishTemplates {
    fn match_description(
        &self,
        system: ZodiacSystem,
        tier: MatchTier,
        counterpart: &str,
        own: &str,
    ) -> String {
        use MatchTier::{Best, Challenging};
        match (system, tier) {
            (ZodiacSystem::Western, Best) => format!(
                "{counterpart} harmonizes beautifully with your {own} energy, creating natural understanding and mutual support."
            ),
            (ZodiacSystem::Western, Challenging) => format!(
                "{counterpart} may present growth challenges for your {own} nature, requiring extra understanding and patience."
            ),
            (ZodiacSystem::Chinese, Best) => {
                format!("{counterpart} and {own} share complementary energies and life approaches.")
            }
            (ZodiacSystem::Chinese, Challenging) => format!(
                "{counterpart} may clash with {own} energy patterns, requiring conscious effort to harmonize."
            ),
            (ZodiacSystem::Vedic, Best) => format!(
                "{counterpart} nakshatra creates harmonious spiritual and emotional connections with {own}."
            ),
            (ZodiacSystem::Vedic, Challenging) => format!(
                "{counterpart} may present karmic lessons and growth opportunities for {own}."
            ),
            (_, Best) => format!("{counterpart} resonates with your {own} energy."),
            (_, Challenging) => format!("{counterpart} asks your {own} energy to stretch and adapt."),
        }
    }

    fn match_advice(&self, system: ZodiacSystem, tier: MatchTier) -> String {
        use MatchTier::{Best, Challenging};
        let text = match (system, tier) {
            (ZodiacSystem::Western, Best) => {
                "Embrace shared adventures and creative projects. Your energies complement each other naturally."
            }
            (ZodiacSystem::Western, Challenging) => {
                "Focus on finding common ground and appreciating different perspectives. Growth happens through understanding differences."
            }
            (ZodiacSystem::Chinese, Best) => {
                "Build on shared values and support each other's natural strengths."
            }
            (ZodiacSystem::Chinese, Challenging) => {
                "Practice patience and seek to understand different timing and approaches to life."
            }
            (ZodiacSystem::Vedic, Best) => {
                "Focus on shared spiritual growth and emotional understanding."
            }
            (ZodiacSystem::Vedic, Challenging) => {
                "Approach with compassion and see challenges as opportunities for spiritual growth."
            }
            (_, Best) => "Lean into what comes easily between you.",
            (_, Challenging) => "Give each other room and move at a shared pace.",
        };
        text.to_string()
    }

    fn empowering_connections(&self, profile: &ZodiacProfile) -> Vec<String> {
        vec![
            format!(
                "Fire signs (Aries, Leo, Sagittarius) boost your {} confidence and motivation",
                profile.western.sign.name()
            ),
            format!(
                "{} element people share your life rhythm and energy patterns",
                profile.chinese.element.name()
            ),
            format!(
                "Fellow {} moon signs provide emotional understanding and support",
                profile.vedic.moon_sign
            ),
            format!(
                "People with strong {} energy amplify your natural strengths",
                profile.western.element.name()
            ),
            format!(
                "Those who appreciate {} tree wisdom can mentor your spiritual growth",
                profile.celtic.tree.name()
            ),
        ]
    }

    fn growth_opportunities(&self, profile: &ZodiacProfile) -> Vec<String> {
        vec![
            format!(
                "Earth signs can help ground your {} energy and provide practical wisdom",
                profile.western.sign.name()
            ),
            "Water signs offer emotional depth to balance your natural tendencies".to_string(),
            "Air signs bring new perspectives and intellectual stimulation to your worldview"
                .to_string(),
            "Opposite zodiac signs challenge you to develop complementary qualities".to_string(),
            "Different cultural zodiac systems expand your understanding of personality and relationships"
                .to_string(),
        ]
    }

    fn communication_tips(&self, profile: &ZodiacProfile) -> Vec<String> {
        vec![
            "With Fire signs: Be direct and enthusiastic, match their energy and passion"
                .to_string(),
            "With Earth signs: Be practical and reliable, show concrete examples and plans"
                .to_string(),
            "With Air signs: Engage intellectually, discuss ideas and possibilities openly"
                .to_string(),
            "With Water signs: Lead with emotions, create safe spaces for deeper sharing"
                .to_string(),
            format!(
                "Remember your {} communication style and adapt when needed",
                profile.western.sign.name()
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmo_zodiac::parse_and_classify;

    #[test]
    fn advice_lists_have_five_entries() {
        let profile = parse_and_classify("31/03/1981", None).unwrap();
        let t = EnglishTemplates;
        assert_eq!(t.empowering_connections(&profile).len(), ADVICE_LIST_LEN);
        assert_eq!(t.growth_opportunities(&profile).len(), ADVICE_LIST_LEN);
        assert_eq!(t.communication_tips(&profile).len(), ADVICE_LIST_LEN);
    }

    #[test]
    fn profile_values_are_templated() {
        let profile = parse_and_classify("31/03/1981", None).unwrap();
        let lines = EnglishTemplates.empowering_connections(&profile);
        assert!(lines[0].contains("your Aries confidence"), "{}", lines[0]);
        assert!(lines[1].starts_with("Metal element"), "{}", lines[1]);
    }

    #[test]
    fn description_names_both_sides() {
        let text = EnglishTemplates.match_description(
            ZodiacSystem::Chinese,
            MatchTier::Challenging,
            "Rabbit",
            "Rooster",
        );
        assert_eq!(
            text,
            "Rabbit may clash with Rooster energy patterns, requiring conscious effort to harmonize."
        );
    }
}
