//! Integration tests for cosmo_rs through the global settings.

use std::sync::Once;

use cosmo_rs::*;
use pretty_assertions::assert_eq;

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let mut config = CosmoConfig::default();
        config.compatibility.seed = Some(42);
        config.compatibility.best_limit = 4;
        config.profile.mayan_catalog = MayanCatalog::Abbreviated;
        init(config).expect("settings init");
    });
}

fn profile(date: &str) -> ZodiacProfile {
    parse_and_classify(date, None).expect("valid date")
}

#[test]
fn is_initialized_after_init() {
    ensure_init();
    assert!(is_initialized());
    assert_eq!(config().compatibility.seed, Some(42));
}

#[test]
fn second_init_rejected() {
    ensure_init();
    let err = init(CosmoConfig::default()).unwrap_err();
    assert!(matches!(err, CosmoError::AlreadyInitialized));
}

#[test]
fn init_rejects_limits_above_maximum() {
    let mut config = CosmoConfig::default();
    config.compatibility.best_limit = 10;
    config.compatibility.challenging_limit = 10;
    let err = init(config).unwrap_err();
    assert!(matches!(err, CosmoError::Config(_)));
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[test]
fn profile_uses_configured_catalog() {
    ensure_init();
    let p = parse_and_classify("1990-07-04", Some("14:30")).unwrap();
    assert_eq!(p.western.sign.name(), "Cancer");
    assert!(MayanCatalog::Abbreviated.signs().contains(&p.mayan.day_sign));
}

#[test]
fn invalid_date_surfaces_calendar_error() {
    ensure_init();
    for bad in ["29/02/2023", "not a date", "2000-13-01"] {
        let err = parse_and_classify(bad, None).unwrap_err();
        assert!(matches!(err, CosmoError::Calendar(_)), "{bad}");
    }
}

#[test]
fn profile_serializes_camel_case() {
    ensure_init();
    let json = serde_json::to_value(profile("31/03/1981")).unwrap();
    assert!(json.get("unifiedThemes").is_some());
    assert!(json.get("integrationOpportunities").is_some());
}

#[test]
fn cached_profile_scores_like_fresh_one() {
    ensure_init();
    let primary = profile("31/03/1981");
    let candidate = profile("15/11/1992");
    let cached = serde_json::to_string(&candidate).unwrap();
    let restored: ZodiacProfile = serde_json::from_str(&cached).unwrap();
    assert_eq!(restored, candidate);
    assert_eq!(score_match(&primary, &restored), score_match(&primary, &candidate));
}

// ---------------------------------------------------------------------------
// Compatibility
// ---------------------------------------------------------------------------

#[test]
fn seeded_compatibility_is_repeatable() {
    ensure_init();
    let p = profile("31/03/1981");
    let a = compute_compatibility(&p);
    let b = compute_compatibility(&p);
    assert_eq!(a, b);
    assert_eq!(a.best_matches.len(), 4);
    assert!(a.challenging_matches.len() <= 4);
}

#[test]
fn match_score_in_range() {
    ensure_init();
    let primary = profile("31/03/1981");
    let candidate = profile("15/11/1992");
    let result = score_match(&primary, &candidate);
    assert!((0.0..100.0).contains(&result.score));
    assert_eq!(result, score_match(&primary, &candidate));
}

#[test]
fn metrics_cover_all_traits() {
    ensure_init();
    let metrics = personality_metrics(&profile("12/12/2012"));
    assert_eq!(metrics.len(), 6);
    for m in &metrics {
        assert!(m.mean > 0.0 && m.mean <= 100.0);
    }
}
