//! Compatibility engine.
//!
//! Matches are gathered Western, then Chinese, then Vedic, and truncated in
//! that insertion order. Scores carry a uniform random component drawn from
//! the caller's generator, so a seeded generator reproduces a result exactly.

use cosmo_zodiac::{ZodiacProfile, ZodiacSystem};
use rand::Rng;

use crate::affinity::{VEDIC_POOL, chinese_affinity, western_affinity};
use crate::compat_types::{
    CompatibilityLimits, CompatibilityMatch, MatchTier, Relationship, RelationshipInsights,
    ScoreBand,
};
use crate::templates::{EnglishTemplates, InsightTemplates};

/// Score band for a system and tier. Systems without affinity tables reuse
/// the Vedic bands.
pub const fn score_band(system: ZodiacSystem, tier: MatchTier) -> ScoreBand {
    match (system, tier) {
        (ZodiacSystem::Western, MatchTier::Best) => {
            ScoreBand::new(85.0, 10.0, Relationship::Excellent)
        }
        (ZodiacSystem::Western, MatchTier::Challenging) => {
            ScoreBand::new(35.0, 20.0, Relationship::Challenging)
        }
        (ZodiacSystem::Chinese, MatchTier::Best) => ScoreBand::new(80.0, 15.0, Relationship::Good),
        (ZodiacSystem::Chinese, MatchTier::Challenging) => {
            ScoreBand::new(25.0, 25.0, Relationship::Complex)
        }
        (_, MatchTier::Best) => ScoreBand::new(75.0, 20.0, Relationship::Good),
        (_, MatchTier::Challenging) => ScoreBand::new(30.0, 30.0, Relationship::Challenging),
    }
}

struct MatchBuilder<'a, T: ?Sized, R: ?Sized> {
    templates: &'a T,
    rng: &'a mut R,
}

impl<T, R> MatchBuilder<'_, T, R>
where
    T: InsightTemplates + ?Sized,
    R: Rng + ?Sized,
{
    fn build(
        &mut self,
        system: ZodiacSystem,
        tier: MatchTier,
        counterpart: &str,
        own: &str,
    ) -> CompatibilityMatch {
        let band = score_band(system, tier);
        let score = band.score(self.rng.r#gen::<f64>());
        CompatibilityMatch {
            sign: counterpart.to_string(),
            system,
            score,
            relationship: band.relationship,
            description: self
                .templates
                .match_description(system, tier, counterpart, own),
            advice: self.templates.match_advice(system, tier),
        }
    }
}

/// Compute insights with the default limits and English templates.
pub fn compute_compatibility<R: Rng + ?Sized>(
    profile: &ZodiacProfile,
    rng: &mut R,
) -> RelationshipInsights {
    compute_compatibility_with(
        profile,
        CompatibilityLimits::default(),
        &EnglishTemplates,
        rng,
    )
}

/// Compute insights with explicit limits and templates.
pub fn compute_compatibility_with<T, R>(
    profile: &ZodiacProfile,
    limits: CompatibilityLimits,
    templates: &T,
    rng: &mut R,
) -> RelationshipInsights
where
    T: InsightTemplates + ?Sized,
    R: Rng + ?Sized,
{
    let mut best = Vec::new();
    let mut challenging = Vec::new();
    let mut builder = MatchBuilder { templates, rng };

    let own = profile.western.sign;
    let (w_best, w_challenging) = western_affinity(own);
    for sign in w_best {
        best.push(builder.build(ZodiacSystem::Western, MatchTier::Best, sign.name(), own.name()));
    }
    for sign in w_challenging {
        challenging.push(builder.build(
            ZodiacSystem::Western,
            MatchTier::Challenging,
            sign.name(),
            own.name(),
        ));
    }

    let own = profile.chinese.animal;
    let (c_best, c_challenging) = chinese_affinity(own);
    for animal in c_best {
        best.push(builder.build(ZodiacSystem::Chinese, MatchTier::Best, animal.name(), own.name()));
    }
    for animal in c_challenging {
        challenging.push(builder.build(
            ZodiacSystem::Chinese,
            MatchTier::Challenging,
            animal.name(),
            own.name(),
        ));
    }

    // Both Vedic counterparts are drawn before either score.
    let own = profile.vedic.nakshatra;
    let best_pick = VEDIC_POOL[builder.rng.gen_range(0..VEDIC_POOL.len())];
    let challenging_pick = VEDIC_POOL[builder.rng.gen_range(0..VEDIC_POOL.len())];
    best.push(builder.build(ZodiacSystem::Vedic, MatchTier::Best, best_pick.name(), own.name()));
    challenging.push(builder.build(
        ZodiacSystem::Vedic,
        MatchTier::Challenging,
        challenging_pick.name(),
        own.name(),
    ));

    tracing::debug!(
        western = profile.western.sign.name(),
        chinese = profile.chinese.animal.name(),
        vedic = profile.vedic.nakshatra.name(),
        best = best.len(),
        challenging = challenging.len(),
        "compatibility matches gathered"
    );

    let limits = limits.clamped();
    best.truncate(limits.best);
    challenging.truncate(limits.challenging);

    RelationshipInsights {
        best_matches: best,
        challenging_matches: challenging,
        empowering_connections: templates.empowering_connections(profile),
        growth_opportunities: templates.growth_opportunities(profile),
        communication_tips: templates.communication_tips(profile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat_types::{MAX_BEST_MATCHES, MAX_CHALLENGING_MATCHES};
    use cosmo_zodiac::parse_and_classify;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn bands_match_relationship_tags() {
        assert_eq!(
            score_band(ZodiacSystem::Western, MatchTier::Best).relationship,
            Relationship::Excellent
        );
        assert_eq!(
            score_band(ZodiacSystem::Chinese, MatchTier::Challenging).relationship,
            Relationship::Complex
        );
        assert_eq!(
            score_band(ZodiacSystem::Vedic, MatchTier::Challenging).relationship,
            Relationship::Challenging
        );
    }

    #[test]
    fn insertion_order_survives_truncation() {
        let profile = parse_and_classify("31/03/1981", None).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let insights = compute_compatibility(&profile, &mut rng);

        // Aries: 4 Western best, then Rooster's 2 Chinese best; Vedic is cut
        let names: Vec<&str> = insights.best_matches.iter().map(|m| m.sign.as_str()).collect();
        assert_eq!(names, ["Leo", "Sagittarius", "Gemini", "Aquarius", "Ox", "Snake"]);

        let names: Vec<&str> = insights
            .challenging_matches
            .iter()
            .map(|m| m.sign.as_str())
            .collect();
        assert_eq!(names, ["Cancer", "Capricorn", "Rabbit", "Dog"]);
    }

    #[test]
    fn scores_stay_in_band() {
        let profile = parse_and_classify("15/08/1990", None).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..50 {
            let insights = compute_compatibility(&profile, &mut rng);
            for m in insights.best_matches.iter() {
                assert!(score_band(m.system, MatchTier::Best).contains(m.score), "{m:?}");
            }
            for m in insights.challenging_matches.iter() {
                assert!(score_band(m.system, MatchTier::Challenging).contains(m.score), "{m:?}");
            }
        }
    }

    #[test]
    fn oversized_limits_are_clamped() {
        let profile = parse_and_classify("31/03/1981", None).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let limits = CompatibilityLimits {
            best: 10,
            challenging: 10,
        };
        let insights = compute_compatibility_with(&profile, limits, &EnglishTemplates, &mut rng);
        assert_eq!(insights.best_matches.len(), MAX_BEST_MATCHES);
        assert_eq!(insights.challenging_matches.len(), MAX_CHALLENGING_MATCHES);
        assert!(
            insights
                .best_matches
                .iter()
                .all(|m| m.system != ZodiacSystem::Vedic)
        );
    }

    #[test]
    fn clamped_keeps_smaller_caps() {
        let limits = CompatibilityLimits {
            best: 2,
            challenging: 9,
        }
        .clamped();
        assert_eq!(limits.best, 2);
        assert_eq!(limits.challenging, MAX_CHALLENGING_MATCHES);
    }
}
