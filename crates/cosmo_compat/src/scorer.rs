//! Cross-profile scorer: how a candidate's Western sign lands in the
//! primary profile's compatibility lists.

use cosmo_zodiac::ZodiacProfile;
use rand::Rng;

use crate::compat_types::{CompatibilityLimits, MatchScore, Relationship, RelationshipInsights};
use crate::engine::compute_compatibility_with;
use crate::templates::{EnglishTemplates, InsightTemplates};

/// Default scores fall in `[DEFAULT_SCORE_MIN, DEFAULT_SCORE_MAX)`, whole numbers.
pub const DEFAULT_SCORE_MIN: u32 = 60;
pub const DEFAULT_SCORE_MAX: u32 = 100;

/// Score against already computed insights.
///
/// Best matches are searched first, then challenging matches. A sign in
/// neither list gets a whole-number default score tagged `good`.
pub fn score_against<R: Rng + ?Sized>(
    insights: &RelationshipInsights,
    candidate: &ZodiacProfile,
    rng: &mut R,
) -> MatchScore {
    let sign = candidate.western.sign.name();
    let found = insights
        .best_matches
        .iter()
        .find(|m| m.sign == sign)
        .or_else(|| insights.challenging_matches.iter().find(|m| m.sign == sign));

    match found {
        Some(m) => MatchScore {
            score: m.score,
            relationship: m.relationship,
        },
        None => {
            let score = rng.gen_range(DEFAULT_SCORE_MIN..DEFAULT_SCORE_MAX);
            tracing::debug!(sign, score, "candidate not in affinity lists, default score");
            MatchScore {
                score: f64::from(score),
                relationship: Relationship::Good,
            }
        }
    }
}

/// Score `candidate` against `primary` with default limits and templates.
pub fn score_match<R: Rng + ?Sized>(
    primary: &ZodiacProfile,
    candidate: &ZodiacProfile,
    rng: &mut R,
) -> MatchScore {
    score_match_with(
        primary,
        candidate,
        CompatibilityLimits::default(),
        &EnglishTemplates,
        rng,
    )
}

pub fn score_match_with<T, R>(
    primary: &ZodiacProfile,
    candidate: &ZodiacProfile,
    limits: CompatibilityLimits,
    templates: &T,
    rng: &mut R,
) -> MatchScore
where
    T: InsightTemplates + ?Sized,
    R: Rng + ?Sized,
{
    let insights = compute_compatibility_with(primary, limits, templates, rng);
    score_against(&insights, candidate, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmo_zodiac::parse_and_classify;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn best_match_reuses_score() {
        let aries = parse_and_classify("31/03/1981", None).unwrap();
        let leo = parse_and_classify("01/08/1985", None).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let result = score_match(&aries, &leo, &mut rng);
        assert_eq!(result.relationship, Relationship::Excellent);
        assert!((85.0..95.0).contains(&result.score));
    }

    #[test]
    fn challenging_match_reuses_score() {
        let aries = parse_and_classify("31/03/1981", None).unwrap();
        let cancer = parse_and_classify("01/07/1985", None).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let result = score_match(&aries, &cancer, &mut rng);
        assert_eq!(result.relationship, Relationship::Challenging);
        assert!((35.0..55.0).contains(&result.score));
    }

    #[test]
    fn unlisted_sign_gets_whole_default() {
        let aries = parse_and_classify("31/03/1981", None).unwrap();
        let taurus = parse_and_classify("01/05/1985", None).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..20 {
            let result = score_match(&aries, &taurus, &mut rng);
            assert_eq!(result.relationship, Relationship::Good);
            assert!((60.0..100.0).contains(&result.score));
            assert_eq!(result.score.fract(), 0.0);
        }
    }
}
