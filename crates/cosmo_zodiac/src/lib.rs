//! Reference tables and calendar classifiers for six zodiac systems.
//!
//! This crate provides:
//! - Western tropical signs on fixed date bands
//! - Chinese animal and element from the Gregorian year
//! - Vedic nakshatras and Mayan day signs on a thirty-day-month day count
//! - Celtic tree-calendar signs on fixed date bands
//! - Arabic lunar mansions from the approximate solar longitude
//! - Profile composition with cross-system themes
//!
//! Every classifier is a pure function over a validated
//! [`CalendarDate`](cosmo_calendar::CalendarDate) and returns an entry of a
//! static table.

pub mod arabic;
pub mod celtic;
pub mod chinese;
pub mod error;
pub mod mayan;
pub mod profile;
pub mod system;
pub mod themes;
pub mod util;
pub mod vedic;
pub mod western;

pub use arabic::{
    ALL_LUNAR_MANSIONS, ARABIC_MANSIONS, LunarMansion, MANSION_SPAN_DEG, MagicalUse,
    MansionEntry, MansionPosition, arabic_position, arabic_sign, mansion_index,
};
pub use celtic::{ALL_CELTIC_TREES, CELTIC_TREES, CelticEntry, CelticTree, celtic_index, celtic_sign};
pub use chinese::{
    ALL_CHINESE_ANIMALS, ALL_CHINESE_ELEMENTS, AnimalEntry, CHINESE_ANIMALS, Characteristics,
    ChineseAnimal, ChineseElement, ChineseSign, chinese_animal_index, chinese_element_index,
    chinese_sign,
};
pub use error::ZodiacError;
pub use mayan::{
    ALL_DAY_SIGNS, DaySign, MAYAN_DAY_SIGNS, MayanCatalog, MayanEntry, SacredGift, mayan_index,
    mayan_sign,
};
pub use profile::{ProfileOptions, ZodiacProfile, classify, parse_and_classify, parse_and_classify_with};
pub use system::{ALL_SYSTEMS, SystemSign, ZodiacSystem};
pub use vedic::{
    ALL_NAKSHATRAS, Nakshatra, PlanetaryInfluence, VEDIC_NAKSHATRAS, VedicEntry, nakshatra_index,
    vedic_sign,
};
pub use western::{ALL_WESTERN_SIGNS, Element, WESTERN_SIGNS, WesternEntry, WesternSign, western_index, western_sign};
