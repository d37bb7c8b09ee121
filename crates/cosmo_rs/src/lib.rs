//! Convenience wrapper for the profile calculator.
//!
//! Provides a process-wide settings singleton and high-level functions that
//! apply the installed configuration, so callers never build
//! `ProfileOptions` or manage a random generator by hand.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use cosmo_rs::*;
//!
//! init(CosmoConfig::load()?)?;
//!
//! let p = parse_and_classify("31/03/1981", None)?;
//! println!("{} / {}", p.western.sign.name(), p.chinese.animal.name());
//!
//! let insights = compute_compatibility(&p);
//! println!("{} best matches", insights.best_matches.len());
//! ```

pub mod convenience;
pub mod error;
pub mod global;

pub use convenience::{compute_compatibility, parse_and_classify, personality_metrics, score_match};
pub use error::CosmoError;
pub use global::{config, init, is_initialized};

// Re-export the types the convenience functions return.
pub use cosmo_calendar::{CalendarDate, CalendarError, is_leap_year};
pub use cosmo_compat::{
    CompatibilityMatch, MatchScore, PersonalityMetric, PersonalityTrait, Relationship,
    RelationshipInsights,
};
pub use cosmo_config::{ConfigError, CosmoConfig};
pub use cosmo_zodiac::{
    MayanCatalog, SystemSign, ZodiacError, ZodiacProfile, ZodiacSystem, arabic_position,
};
