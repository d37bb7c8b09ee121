//! Relationship compatibility built on zodiac profiles.
//!
//! This crate provides:
//! - Static Western and Chinese affinity tables and the Vedic counterpart pool
//! - The compatibility engine producing scored best/challenging matches
//! - Cross-profile match scoring for a candidate person
//! - Replaceable sentence templates for the advice lists
//! - Per-trait personality metrics across systems
//!
//! Randomness is always injected: pass `rand::thread_rng()` for varied
//! output or a seeded `ChaCha8Rng` for reproducible output.

pub mod affinity;
pub mod compat_types;
pub mod engine;
pub mod metrics;
pub mod scorer;
pub mod templates;

pub use affinity::{
    Affinity, CHINESE_AFFINITY, VEDIC_POOL, WESTERN_AFFINITY, chinese_affinity, western_affinity,
};
pub use compat_types::{
    CompatibilityLimits, CompatibilityMatch, MAX_BEST_MATCHES, MAX_CHALLENGING_MATCHES, MatchScore,
    MatchTier, Relationship, RelationshipInsights, ScoreBand,
};
pub use engine::{compute_compatibility, compute_compatibility_with, score_band};
pub use metrics::{
    ALL_TRAITS, DEFAULT_TRAIT_SCORE, PersonalityMetric, PersonalityTrait, chinese_trait_score,
    personality_metrics, trait_score, western_trait_score,
};
pub use scorer::{score_against, score_match, score_match_with};
pub use templates::{ADVICE_LIST_LEN, EnglishTemplates, InsightTemplates};
