//! Types for compatibility insights and match scoring.

use cosmo_zodiac::ZodiacSystem;
use serde::{Deserialize, Serialize};

/// Qualitative tag attached to a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Excellent,
    Good,
    Challenging,
    Complex,
}

impl Relationship {
    /// Lowercase label used in JSON and reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Challenging => "challenging",
            Self::Complex => "complex",
        }
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which side of an affinity table a counterpart came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchTier {
    Best,
    Challenging,
}

/// One counterpart sign with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityMatch {
    /// Counterpart key: Western sign, Chinese animal or nakshatra name.
    pub sign: String,
    pub system: ZodiacSystem,
    /// Score in [0, 100).
    pub score: f64,
    pub relationship: Relationship,
    pub description: String,
    pub advice: String,
}

/// Full compatibility readout for one profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipInsights {
    pub best_matches: Vec<CompatibilityMatch>,
    pub challenging_matches: Vec<CompatibilityMatch>,
    pub empowering_connections: Vec<String>,
    pub growth_opportunities: Vec<String>,
    pub communication_tips: Vec<String>,
}

/// Score and tag for a candidate person against a primary profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchScore {
    pub score: f64,
    pub relationship: Relationship,
}

/// Upper bound on `best_matches` for any profile.
pub const MAX_BEST_MATCHES: usize = 6;

/// Upper bound on `challenging_matches` for any profile.
pub const MAX_CHALLENGING_MATCHES: usize = 4;

/// Caps applied to the aggregated match lists, in insertion order.
///
/// Values above [`MAX_BEST_MATCHES`] / [`MAX_CHALLENGING_MATCHES`] are
/// clamped by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatibilityLimits {
    pub best: usize,
    pub challenging: usize,
}

impl CompatibilityLimits {
    /// Limits with each cap held to its maximum.
    pub const fn clamped(self) -> Self {
        Self {
            best: if self.best < MAX_BEST_MATCHES {
                self.best
            } else {
                MAX_BEST_MATCHES
            },
            challenging: if self.challenging < MAX_CHALLENGING_MATCHES {
                self.challenging
            } else {
                MAX_CHALLENGING_MATCHES
            },
        }
    }
}

impl Default for CompatibilityLimits {
    fn default() -> Self {
        Self {
            best: MAX_BEST_MATCHES,
            challenging: MAX_CHALLENGING_MATCHES,
        }
    }
}

/// Score band for one (system, tier) pair: `base + U[0,1) * span`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBand {
    pub base: f64,
    pub span: f64,
    pub relationship: Relationship,
}

impl ScoreBand {
    pub const fn new(base: f64, span: f64, relationship: Relationship) -> Self {
        Self {
            base,
            span,
            relationship,
        }
    }

    /// Score for a uniform sample `u` in [0, 1).
    pub fn score(&self, u: f64) -> f64 {
        self.base + u * self.span
    }

    pub fn contains(&self, score: f64) -> bool {
        score >= self.base && score < self.base + self.span
    }
}
