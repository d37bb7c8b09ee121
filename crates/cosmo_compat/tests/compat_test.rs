//! Integration tests for the compatibility engine and scorer.

use cosmo_calendar::CalendarDate;
use cosmo_compat::{
    CompatibilityLimits, EnglishTemplates, InsightTemplates, MatchTier, Relationship,
    compute_compatibility, compute_compatibility_with, score_against, score_match,
};
use cosmo_zodiac::{ProfileOptions, ZodiacProfile, ZodiacSystem, classify, parse_and_classify};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn profile(text: &str) -> ZodiacProfile {
    parse_and_classify(text, None).unwrap()
}

#[test]
fn same_seed_same_insights() {
    let p = profile("31/03/1981");
    let a = compute_compatibility(&p, &mut ChaCha8Rng::seed_from_u64(42));
    let b = compute_compatibility(&p, &mut ChaCha8Rng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn different_seeds_differ_in_scores() {
    let p = profile("31/03/1981");
    let a = compute_compatibility(&p, &mut ChaCha8Rng::seed_from_u64(1));
    let b = compute_compatibility(&p, &mut ChaCha8Rng::seed_from_u64(2));
    assert_ne!(a.best_matches[0].score, b.best_matches[0].score);
    // the counterpart names do not depend on the generator
    assert_eq!(a.best_matches[0].sign, b.best_matches[0].sign);
}

#[test]
fn list_limits_hold_for_every_day() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let options = ProfileOptions::default();
    for month in 1..=12 {
        for day in [1, 10, 20, 28] {
            let p = classify(CalendarDate::new(1995, month, day).unwrap(), &options);
            let insights = compute_compatibility(&p, &mut rng);
            assert!(insights.best_matches.len() <= 6);
            assert!(insights.challenging_matches.len() <= 4);
            assert_eq!(insights.empowering_connections.len(), 5);
            assert_eq!(insights.growth_opportunities.len(), 5);
            assert_eq!(insights.communication_tips.len(), 5);
        }
    }
}

#[test]
fn custom_limits_truncate() {
    let p = profile("31/03/1981");
    let limits = CompatibilityLimits {
        best: 2,
        challenging: 1,
    };
    let insights = compute_compatibility_with(
        &p,
        limits,
        &EnglishTemplates,
        &mut ChaCha8Rng::seed_from_u64(0),
    );
    assert_eq!(insights.best_matches.len(), 2);
    assert_eq!(insights.challenging_matches.len(), 1);
    assert!(
        insights
            .best_matches
            .iter()
            .all(|m| m.system == ZodiacSystem::Western)
    );
}

struct Terse;

impl InsightTemplates for Terse {
    fn match_description(&self, _: ZodiacSystem, _: MatchTier, counterpart: &str, _: &str) -> String {
        counterpart.to_string()
    }

    fn match_advice(&self, _: ZodiacSystem, tier: MatchTier) -> String {
        format!("{tier:?}")
    }

    fn empowering_connections(&self, _: &ZodiacProfile) -> Vec<String> {
        vec!["e".into()]
    }

    fn growth_opportunities(&self, _: &ZodiacProfile) -> Vec<String> {
        vec!["g".into()]
    }

    fn communication_tips(&self, _: &ZodiacProfile) -> Vec<String> {
        vec!["c".into()]
    }
}

#[test]
fn templates_are_replaceable() {
    let p = profile("31/03/1981");
    let insights = compute_compatibility_with(
        &p,
        CompatibilityLimits::default(),
        &Terse,
        &mut ChaCha8Rng::seed_from_u64(0),
    );
    assert_eq!(insights.best_matches[0].description, "Leo");
    assert_eq!(insights.best_matches[0].advice, "Best");
    assert_eq!(insights.communication_tips, vec!["c".to_string()]);
}

#[test]
fn score_against_shared_insights_is_consistent() {
    let primary = profile("31/03/1981");
    let leo = profile("01/08/1985");
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let insights = compute_compatibility(&primary, &mut rng);
    let first = score_against(&insights, &leo, &mut rng);
    let second = score_against(&insights, &leo, &mut rng);
    assert_eq!(first, second);
    assert_eq!(first.relationship, Relationship::Excellent);
    assert_eq!(first.score, insights.best_matches[0].score);
}

#[test]
fn score_match_reproducible_with_seed() {
    let primary = profile("15/06/1990");
    let candidate = profile("15/11/1992");
    let a = score_match(&primary, &candidate, &mut ChaCha8Rng::seed_from_u64(8));
    let b = score_match(&primary, &candidate, &mut ChaCha8Rng::seed_from_u64(8));
    assert_eq!(a, b);
}

#[test]
fn insights_json_shape() {
    let p = profile("31/03/1981");
    let insights = compute_compatibility(&p, &mut ChaCha8Rng::seed_from_u64(0));
    let json = serde_json::to_value(&insights).unwrap();
    assert_eq!(json["bestMatches"][0]["system"], "western");
    assert_eq!(json["bestMatches"][0]["relationship"], "excellent");
    assert_eq!(json["challengingMatches"][2]["relationship"], "complex");
    assert!(json["communicationTips"].is_array());
}
