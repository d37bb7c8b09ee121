//! Cross-system theme synthesis.
//!
//! Unified themes are quality keywords that recur in two or more systems.
//! Integration opportunities pair the Western growth areas and Chinese
//! challenges with the profile's elements. Both lists are padded from the
//! reference sentences to exactly [`THEME_COUNT`] entries.

use crate::chinese::ChineseSign;
use crate::system::{SystemSign, ZodiacSystem};
use crate::western::WesternEntry;

pub const THEME_COUNT: usize = 4;

pub const REFERENCE_THEMES: [(&str, &str); THEME_COUNT] = [
    (
        "Compassion",
        "All systems highlight your deep empathy and healing nature",
    ),
    (
        "Growth",
        "Natural ability to nurture others and help them evolve",
    ),
    (
        "Intuition",
        "Consistent psychic and spiritual gifts across traditions",
    ),
    (
        "Connection",
        "Strong ability to bridge different worlds and perspectives",
    ),
];

pub const REFERENCE_OPPORTUNITIES: [(&str, &str); THEME_COUNT] = [
    (
        "Balance",
        "Use elemental flexibility to set healthy boundaries",
    ),
    (
        "Protection",
        "Apply spiritual warrior energy to defend your sensitive nature",
    ),
    ("Timing", "Honor lunar wisdom in your spiritual practices"),
    (
        "Wisdom",
        "Integrate ancient knowledge with modern understanding",
    ),
];

// Words too generic to count as a shared theme.
const STOPWORDS: &[&str] = &[
    "ability", "abilities", "divine", "energy", "from", "into", "life", "natural", "power",
    "spiritual", "that", "their", "them", "through", "with", "your",
];

const MIN_KEYWORD_LEN: usize = 4;

struct Keyword {
    word: String,
    systems: Vec<ZodiacSystem>,
}

fn keywords(quality: &str) -> impl Iterator<Item = String> + '_ {
    quality
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|w| w.len() >= MIN_KEYWORD_LEN)
        .map(str::to_ascii_lowercase)
        .filter(|w| !STOPWORDS.contains(&w.as_str()))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "A", "A and B", "A, B and C".
pub fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => (*only).to_string(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

fn pad_to_count(mut lines: Vec<(String, String)>, reference: &[(&str, &str)]) -> Vec<String> {
    for (title, text) in reference {
        if lines.len() >= THEME_COUNT {
            break;
        }
        if !lines.iter().any(|(t, _)| t.eq_ignore_ascii_case(title)) {
            lines.push(((*title).to_string(), (*text).to_string()));
        }
    }
    lines.truncate(THEME_COUNT);
    lines
        .into_iter()
        .map(|(title, text)| format!("{title}: {text}"))
        .collect()
}

/// Keywords shared by at least two systems, most widely shared first.
pub fn unified_themes(signs: &[SystemSign]) -> Vec<String> {
    let mut found: Vec<Keyword> = Vec::new();
    for sign in signs {
        let system = sign.system();
        for quality in sign.qualities() {
            for word in keywords(quality) {
                match found.iter_mut().find(|k| k.word == word) {
                    Some(k) if !k.systems.contains(&system) => k.systems.push(system),
                    Some(_) => {}
                    None => found.push(Keyword {
                        word,
                        systems: vec![system],
                    }),
                }
            }
        }
    }

    found.retain(|k| k.systems.len() >= 2);
    // stable: ties keep first-seen order
    found.sort_by(|a, b| b.systems.len().cmp(&a.systems.len()));

    let derived = found
        .iter()
        .take(THEME_COUNT)
        .map(|k| {
            let names: Vec<&str> = k.systems.iter().map(|s| s.name()).collect();
            (
                title_case(&k.word),
                format!("Echoed across the {} traditions", join_names(&names)),
            )
        })
        .collect();
    tracing::trace!(shared = found.len(), "unified themes");
    pad_to_count(derived, &REFERENCE_THEMES)
}

/// Growth prompts drawn from the Western and Chinese results.
pub fn integration_opportunities(western: &WesternEntry, chinese: &ChineseSign) -> Vec<String> {
    let mut derived = Vec::with_capacity(THEME_COUNT);
    if let Some(area) = western.growth_areas.first() {
        derived.push((
            title_case(area),
            format!(
                "Cultivate {} alongside the {} strengths of your {} sign",
                area.to_lowercase(),
                western.element.name(),
                western.sign.name()
            ),
        ));
    }
    if let Some(challenge) = chinese.characteristics.challenges.first() {
        derived.push((
            title_case(challenge),
            format!(
                "Turn the {} tendency toward {} into a conscious choice",
                chinese.animal.name(),
                challenge.to_lowercase()
            ),
        ));
    }
    derived.push((
        "Elements".to_string(),
        format!(
            "Blend the {} of {} with the {} of your {} year",
            western.element.name(),
            western.sign.name(),
            chinese.element.name(),
            chinese.animal.name()
        ),
    ));
    pad_to_count(derived, &REFERENCE_OPPORTUNITIES)
}
