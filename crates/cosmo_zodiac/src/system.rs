//! The six systems and a uniform view over their classification results.

use serde::{Deserialize, Serialize};

use crate::arabic::MansionEntry;
use crate::celtic::CelticEntry;
use crate::chinese::ChineseSign;
use crate::mayan::MayanEntry;
use crate::vedic::VedicEntry;
use crate::western::WesternEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSystem {
    Western,
    Chinese,
    Vedic,
    Mayan,
    Celtic,
    Arabic,
}

pub const ALL_SYSTEMS: [ZodiacSystem; 6] = [
    ZodiacSystem::Western,
    ZodiacSystem::Chinese,
    ZodiacSystem::Vedic,
    ZodiacSystem::Mayan,
    ZodiacSystem::Celtic,
    ZodiacSystem::Arabic,
];

impl ZodiacSystem {
    /// Capitalized system name, as used in themes and reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Western => "Western",
            Self::Chinese => "Chinese",
            Self::Vedic => "Vedic",
            Self::Mayan => "Mayan",
            Self::Celtic => "Celtic",
            Self::Arabic => "Arabic",
        }
    }

    /// Position in [`ALL_SYSTEMS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [ZodiacSystem; 6] {
        &ALL_SYSTEMS
    }
}

impl std::fmt::Display for ZodiacSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One system's classification, carrying its typed reference entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "system", content = "sign", rename_all = "lowercase")]
pub enum SystemSign {
    Western(&'static WesternEntry),
    Chinese(ChineseSign),
    Vedic(&'static VedicEntry),
    Mayan(&'static MayanEntry),
    Celtic(&'static CelticEntry),
    Arabic(&'static MansionEntry),
}

impl SystemSign {
    /// The system this result belongs to.
    pub const fn system(&self) -> ZodiacSystem {
        match self {
            Self::Western(_) => ZodiacSystem::Western,
            Self::Chinese(_) => ZodiacSystem::Chinese,
            Self::Vedic(_) => ZodiacSystem::Vedic,
            Self::Mayan(_) => ZodiacSystem::Mayan,
            Self::Celtic(_) => ZodiacSystem::Celtic,
            Self::Arabic(_) => ZodiacSystem::Arabic,
        }
    }

    /// Display name of the sign within its system.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Western(e) => e.sign.name(),
            Self::Chinese(s) => s.animal.name(),
            Self::Vedic(e) => e.nakshatra.name(),
            Self::Mayan(e) => e.day_sign.name(),
            Self::Celtic(e) => e.tree.name(),
            Self::Arabic(e) => e.arabic_name,
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Western(e) => e.description,
            Self::Chinese(s) => s.description,
            Self::Vedic(e) => e.description,
            Self::Mayan(e) => e.description,
            Self::Celtic(e) => e.description,
            Self::Arabic(e) => e.description,
        }
    }

    /// The trait-like keyword list each system carries: Western and Chinese
    /// traits, Vedic spiritual traits, Mayan and Arabic spiritual qualities,
    /// Celtic gifts.
    pub const fn qualities(&self) -> &'static [&'static str] {
        match self {
            Self::Western(e) => e.traits,
            Self::Chinese(s) => s.traits,
            Self::Vedic(e) => e.spiritual_traits,
            Self::Mayan(e) => e.spiritual_qualities,
            Self::Celtic(e) => e.gifts,
            Self::Arabic(e) => e.spiritual_qualities,
        }
    }
}
