//! Profile composer: one date in, six classifications out.

use cosmo_calendar::{BirthTime, CalendarDate, CalendarError};
use serde::{Deserialize, Serialize};

use crate::arabic::{LunarMansion, MansionEntry, arabic_sign};
use crate::celtic::{CelticEntry, CelticTree, celtic_sign};
use crate::chinese::{ChineseAnimal, ChineseElement, ChineseSign, chinese_sign};
use crate::error::ZodiacError;
use crate::mayan::{DaySign, MayanCatalog, MayanEntry, mayan_sign};
use crate::system::{SystemSign, ZodiacSystem};
use crate::themes::{integration_opportunities, unified_themes};
use crate::vedic::{Nakshatra, VedicEntry, vedic_sign};
use crate::western::{WesternEntry, WesternSign, western_sign};

/// Knobs for the composer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileOptions {
    pub mayan_catalog: MayanCatalog,
}

/// A person's classification across all six systems.
///
/// Entries borrow the static tables. Deserializing reads only the sign keys
/// of a serialized profile and looks the entries up again; the theme lists
/// are recomputed from those signs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CachedProfile")]
pub struct ZodiacProfile {
    pub western: &'static WesternEntry,
    pub chinese: ChineseSign,
    pub vedic: &'static VedicEntry,
    pub mayan: &'static MayanEntry,
    pub celtic: &'static CelticEntry,
    pub arabic: &'static MansionEntry,
    pub unified_themes: Vec<String>,
    pub integration_opportunities: Vec<String>,
}

impl ZodiacProfile {
    /// The six results in system order.
    pub fn signs(&self) -> [SystemSign; 6] {
        [
            SystemSign::Western(self.western),
            SystemSign::Chinese(self.chinese),
            SystemSign::Vedic(self.vedic),
            SystemSign::Mayan(self.mayan),
            SystemSign::Celtic(self.celtic),
            SystemSign::Arabic(self.arabic),
        ]
    }
}

fn compose(
    western: &'static WesternEntry,
    chinese: ChineseSign,
    vedic: &'static VedicEntry,
    mayan: &'static MayanEntry,
    celtic: &'static CelticEntry,
    arabic: &'static MansionEntry,
) -> ZodiacProfile {
    let signs = [
        SystemSign::Western(western),
        SystemSign::Chinese(chinese),
        SystemSign::Vedic(vedic),
        SystemSign::Mayan(mayan),
        SystemSign::Celtic(celtic),
        SystemSign::Arabic(arabic),
    ];
    ZodiacProfile {
        western,
        chinese,
        vedic,
        mayan,
        celtic,
        arabic,
        unified_themes: unified_themes(&signs),
        integration_opportunities: integration_opportunities(western, &chinese),
    }
}

// Sign keys of a serialized profile. Everything else in the JSON is
// reference text and is ignored.

#[derive(Deserialize)]
struct CachedWestern {
    sign: String,
}

#[derive(Deserialize)]
struct CachedChinese {
    animal: String,
    element: String,
    year: i32,
}

#[derive(Deserialize)]
struct CachedVedic {
    nakshatra: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CachedMayan {
    day_sign: String,
}

#[derive(Deserialize)]
struct CachedCeltic {
    tree: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CachedArabic {
    arabic_name: String,
}

#[derive(Deserialize)]
struct CachedProfile {
    western: CachedWestern,
    chinese: CachedChinese,
    vedic: CachedVedic,
    mayan: CachedMayan,
    celtic: CachedCeltic,
    arabic: CachedArabic,
}

fn lookup<T>(
    system: ZodiacSystem,
    name: &str,
    find: impl Fn(&str) -> Option<T>,
) -> Result<T, ZodiacError> {
    find(name).ok_or_else(|| ZodiacError::UnknownSign {
        system,
        name: name.to_string(),
    })
}

fn check_chinese(cached: &CachedChinese) -> Result<ChineseSign, ZodiacError> {
    let animal = lookup(ZodiacSystem::Chinese, &cached.animal, ChineseAnimal::from_name)?;
    let element = lookup(ZodiacSystem::Chinese, &cached.element, ChineseElement::from_name)?;
    let sign = chinese_sign(cached.year);
    if sign.animal != animal || sign.element != element {
        return Err(ZodiacError::ChineseYearMismatch {
            year: cached.year,
            expected: format!("{} {}", sign.element.name(), sign.animal.name()),
            found: format!("{} {}", element.name(), animal.name()),
        });
    }
    Ok(sign)
}

impl TryFrom<CachedProfile> for ZodiacProfile {
    type Error = ZodiacError;

    fn try_from(cached: CachedProfile) -> Result<Self, Self::Error> {
        let western = lookup(ZodiacSystem::Western, &cached.western.sign, WesternSign::from_name)?;
        let chinese = check_chinese(&cached.chinese)?;
        let vedic = lookup(ZodiacSystem::Vedic, &cached.vedic.nakshatra, Nakshatra::from_name)?;
        let mayan = lookup(ZodiacSystem::Mayan, &cached.mayan.day_sign, DaySign::from_name)?;
        let celtic = lookup(ZodiacSystem::Celtic, &cached.celtic.tree, CelticTree::from_name)?;
        let arabic = lookup(
            ZodiacSystem::Arabic,
            &cached.arabic.arabic_name,
            LunarMansion::from_name,
        )?;
        tracing::trace!(
            western = western.name(),
            year = cached.chinese.year,
            "rehydrated profile"
        );
        Ok(compose(
            western.entry(),
            chinese,
            vedic.entry(),
            mayan.entry(),
            celtic.entry(),
            arabic.entry(),
        ))
    }
}

/// Classify an already-validated date.
pub fn classify(date: CalendarDate, options: &ProfileOptions) -> ZodiacProfile {
    let western = western_sign(date);
    let chinese = chinese_sign(date.year());
    let vedic = vedic_sign(date);
    let mayan = mayan_sign(date, options.mayan_catalog);
    let celtic = celtic_sign(date);
    let arabic = arabic_sign(date);

    tracing::debug!(
        %date,
        western = western.sign.name(),
        chinese = chinese.animal.name(),
        vedic = vedic.nakshatra.name(),
        mayan = mayan.day_sign.name(),
        celtic = celtic.tree.name(),
        arabic = arabic.arabic_name,
        "classified profile"
    );

    compose(western, chinese, vedic, mayan, celtic, arabic)
}

/// Parse a birth date (and optional time) and classify it with default options.
pub fn parse_and_classify(
    birth_date: &str,
    birth_time: Option<&str>,
) -> Result<ZodiacProfile, CalendarError> {
    parse_and_classify_with(birth_date, birth_time, &ProfileOptions::default())
}

/// Parse and classify with explicit options.
///
/// Fails only on an invalid date. The birth time does not affect any
/// classifier; a malformed one is logged and ignored.
pub fn parse_and_classify_with(
    birth_date: &str,
    birth_time: Option<&str>,
    options: &ProfileOptions,
) -> Result<ZodiacProfile, CalendarError> {
    let date: CalendarDate = birth_date.parse()?;
    if let Some(text) = birth_time.map(str::trim).filter(|t| !t.is_empty()) {
        match text.parse::<BirthTime>() {
            Ok(time) => tracing::debug!(%time, "birth time accepted"),
            Err(err) => tracing::warn!(time = text, %err, "ignoring malformed birth time"),
        }
    }
    Ok(classify(date, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_formats_agree() {
        let a = parse_and_classify("15/06/1990", None).unwrap();
        let b = parse_and_classify("1990-06-15", None).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.western.sign, WesternSign::Gemini);
    }

    #[test]
    fn invalid_date_is_the_only_failure() {
        assert!(matches!(
            parse_and_classify("not-a-date", None),
            Err(CalendarError::InvalidDateFormat(_))
        ));
        assert!(parse_and_classify("15/06/1990", Some("25:99")).is_ok());
    }

    #[test]
    fn catalog_option_changes_mayan_only() {
        let date = CalendarDate::new(2000, 1, 5).unwrap();
        let full = classify(date, &ProfileOptions::default());
        let short = classify(
            date,
            &ProfileOptions {
                mayan_catalog: MayanCatalog::Abbreviated,
            },
        );
        assert_eq!(full.mayan.day_sign, DaySign::Chicchan);
        assert_eq!(short.mayan.day_sign, DaySign::Ik);
        assert_eq!(full.western, short.western);
        assert_eq!(full.arabic, short.arabic);
    }

    #[test]
    fn signs_in_system_order() {
        let profile = parse_and_classify("01/01/2000", None).unwrap();
        let systems: Vec<ZodiacSystem> = profile.signs().iter().map(|s| s.system()).collect();
        assert_eq!(systems, crate::system::ALL_SYSTEMS.to_vec());
        assert_eq!(profile.unified_themes.len(), 4);
        assert_eq!(profile.integration_opportunities.len(), 4);
    }

    #[test]
    fn cached_json_rehydrates() {
        for (date, catalog) in [
            ("15/06/1990", MayanCatalog::Tzolkin),
            ("31/03/1981", MayanCatalog::Abbreviated),
            ("0044-03-15", MayanCatalog::Tzolkin),
        ] {
            let date: CalendarDate = date.parse().unwrap();
            let profile = classify(date, &ProfileOptions { mayan_catalog: catalog });
            let json = serde_json::to_string(&profile).unwrap();
            let back: ZodiacProfile = serde_json::from_str(&json).unwrap();
            assert_eq!(back, profile, "{date}");
        }
    }

    #[test]
    fn rehydration_reads_sign_keys_only() {
        let json = serde_json::json!({
            "western": { "sign": "leo" },
            "chinese": { "animal": "Rooster", "element": "Metal", "year": 1981 },
            "vedic": { "nakshatra": "Ashwini" },
            "mayan": { "daySign": "Ak" },
            "celtic": { "tree": "Oak" },
            "arabic": { "arabicName": "Al-Sharatain" },
        });
        let profile: ZodiacProfile = serde_json::from_value(json).unwrap();
        assert_eq!(profile.western.sign, WesternSign::Leo);
        assert_eq!(profile.chinese, chinese_sign(1981));
        assert_eq!(profile.mayan.day_sign, DaySign::Ben);
        assert_eq!(profile.unified_themes.len(), 4);
    }

    #[test]
    fn rehydration_rejects_unknown_or_inconsistent_signs() {
        let mut json = serde_json::to_value(parse_and_classify("15/06/1990", None).unwrap()).unwrap();
        json["celtic"]["tree"] = "Baobab".into();
        let err = serde_json::from_value::<ZodiacProfile>(json).unwrap_err();
        assert!(err.to_string().contains("unknown Celtic sign"), "{err}");

        let mut json = serde_json::to_value(parse_and_classify("15/06/1990", None).unwrap()).unwrap();
        json["chinese"]["year"] = 1991.into();
        let err = serde_json::from_value::<ZodiacProfile>(json).unwrap_err();
        assert!(err.to_string().contains("chinese sign for 1991"), "{err}");
    }
}
