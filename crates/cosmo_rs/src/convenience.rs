//! High-level calls over the installed configuration.

use cosmo_compat::{
    EnglishTemplates, MatchScore, PersonalityMetric, RelationshipInsights,
    compute_compatibility_with, score_match_with,
};
use cosmo_config::CosmoConfig;
use cosmo_zodiac::{ZodiacProfile, parse_and_classify_with};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::CosmoError;
use crate::global::config;

/// Generator for one call: seeded when `compatibility.seed` is set.
///
/// A fixed seed makes every call with the same inputs return the same
/// scores.
fn rng_for(config: &CosmoConfig) -> Box<dyn RngCore> {
    match config.compatibility.seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    }
}

/// Parse a birth date and classify it under the installed settings.
///
/// Accepts `DD/MM/YYYY` or `YYYY-MM-DD`. The optional time is validated
/// but does not change any result.
pub fn parse_and_classify(
    birth_date: &str,
    birth_time: Option<&str>,
) -> Result<ZodiacProfile, CosmoError> {
    Ok(parse_and_classify_with(
        birth_date,
        birth_time,
        &config().profile.options(),
    )?)
}

/// Best and challenging matches plus advice lists, using the configured
/// limits and generator.
pub fn compute_compatibility(profile: &ZodiacProfile) -> RelationshipInsights {
    let cfg = config();
    let mut rng = rng_for(cfg);
    compute_compatibility_with(
        profile,
        cfg.compatibility.limits(),
        &EnglishTemplates,
        rng.as_mut(),
    )
}

/// Score `candidate` against `primary`.
pub fn score_match(primary: &ZodiacProfile, candidate: &ZodiacProfile) -> MatchScore {
    let cfg = config();
    let mut rng = rng_for(cfg);
    let result = score_match_with(
        primary,
        candidate,
        cfg.compatibility.limits(),
        &EnglishTemplates,
        rng.as_mut(),
    );
    tracing::debug!(
        primary = primary.western.sign.name(),
        candidate = candidate.western.sign.name(),
        score = result.score,
        relationship = %result.relationship,
        "scored match"
    );
    result
}

/// Per-trait scores across systems.
pub fn personality_metrics(profile: &ZodiacProfile) -> [PersonalityMetric; 6] {
    cosmo_compat::personality_metrics(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generator_repeats() {
        let mut cfg = CosmoConfig::default();
        cfg.compatibility.seed = Some(11);
        let a = rng_for(&cfg).next_u64();
        let b = rng_for(&cfg).next_u64();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_date_is_calendar_error() {
        let err = parse_and_classify("31/02/2001", None).unwrap_err();
        assert!(matches!(err, CosmoError::Calendar(_)));
    }
}
