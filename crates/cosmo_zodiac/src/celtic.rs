//! Celtic tree calendar: 13 lunar-month trees on fixed calendar bands.
//!
//! Birch wraps the year boundary (Dec 24 - Jan 20). Bands are contiguous, so
//! every day of the year has exactly one tree.

use cosmo_calendar::CalendarDate;
use serde::Serialize;

use crate::util::{DateBand, band_index, clamp_index};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CelticTree {
    Birch,
    Rowan,
    Ash,
    Alder,
    Willow,
    Hawthorn,
    Oak,
    Holly,
    Hazel,
    Vine,
    Ivy,
    Reed,
    Elder,
}

/// All 13 trees in calendar order starting from Birch.
pub const ALL_CELTIC_TREES: [CelticTree; 13] = [
    CelticTree::Birch,
    CelticTree::Rowan,
    CelticTree::Ash,
    CelticTree::Alder,
    CelticTree::Willow,
    CelticTree::Hawthorn,
    CelticTree::Oak,
    CelticTree::Holly,
    CelticTree::Hazel,
    CelticTree::Vine,
    CelticTree::Ivy,
    CelticTree::Reed,
    CelticTree::Elder,
];

impl CelticTree {
    /// Common English name of the tree.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Birch => "Birch",
            Self::Rowan => "Rowan",
            Self::Ash => "Ash",
            Self::Alder => "Alder",
            Self::Willow => "Willow",
            Self::Hawthorn => "Hawthorn",
            Self::Oak => "Oak",
            Self::Holly => "Holly",
            Self::Hazel => "Hazel",
            Self::Vine => "Vine",
            Self::Ivy => "Ivy",
            Self::Reed => "Reed",
            Self::Elder => "Elder",
        }
    }

    /// 0-based calendar position (Birch=0 .. Elder=12).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [CelticTree; 13] {
        &ALL_CELTIC_TREES
    }

    pub fn entry(self) -> &'static CelticEntry {
        &CELTIC_TREES[self.index() as usize]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL_CELTIC_TREES
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CelticEntry {
    pub tree: CelticTree,
    pub date_range: &'static str,
    pub meaning: &'static str,
    pub lunar_connection: &'static str,
    pub gifts: &'static [&'static str],
    pub description: &'static str,
    pub celtic_wisdom: &'static str,
    #[serde(skip)]
    pub band: DateBand,
}

pub static CELTIC_TREES: [CelticEntry; 13] = [
    CelticEntry {
        tree: CelticTree::Birch,
        date_range: "December 24 - January 20",
        meaning: "The Achiever",
        lunar_connection: "New Moon energy brings fresh starts and new beginnings to your spiritual practice.",
        gifts: &["Vision", "Connection", "Guidance", "Wisdom"],
        description: "You embody new beginnings and have the ability to start fresh in any situation.",
        celtic_wisdom: "Like the birch tree, you are resilient and can thrive in harsh conditions while maintaining your grace.",
        band: DateBand::new(12, 24, 1, 20),
    },
    CelticEntry {
        tree: CelticTree::Rowan,
        date_range: "January 21 - February 17",
        meaning: "The Thinker",
        lunar_connection: "Waxing Moon energy enhances your intuitive and protective abilities.",
        gifts: &["Protection", "Intuition", "Wisdom", "Vision"],
        description: "You possess natural protective abilities and can ward off negative influences.",
        celtic_wisdom: "The rowan tree's berries were used for protection - you naturally shield others from harm.",
        band: DateBand::new(1, 21, 2, 17),
    },
    CelticEntry {
        tree: CelticTree::Ash,
        date_range: "February 18 - March 17",
        meaning: "The Enchanter",
        lunar_connection: "Your tree's energy waxes and wanes with the moon cycles, giving you natural intuition about timing and rhythms of life.",
        gifts: &["Vision", "Connection", "Guidance", "Wisdom"],
        description: "Connected to the World Tree Yggdrasil, you bridge different worlds and possess deep spiritual insight and connection to universal wisdom.",
        celtic_wisdom: "As the World Tree, you connect heaven and earth, serving as a bridge between different realms of existence.",
        band: DateBand::new(2, 18, 3, 17),
    },
    CelticEntry {
        tree: CelticTree::Alder,
        date_range: "March 18 - April 14",
        meaning: "The Trailblazer",
        lunar_connection: "Spring energy flows through you, bringing renewal and fresh perspectives.",
        gifts: &["Guidance", "Protection", "Intuition", "Courage"],
        description: "You are a natural pathfinder who helps others navigate new territories.",
        celtic_wisdom: "Like the alder by the water, you provide guidance and protection on journeys.",
        band: DateBand::new(3, 18, 4, 14),
    },
    CelticEntry {
        tree: CelticTree::Willow,
        date_range: "April 15 - May 12",
        meaning: "The Observer",
        lunar_connection: "Moon energy enhances your intuitive and psychic abilities.",
        gifts: &["Intuition", "Healing", "Flexibility", "Wisdom"],
        description: "You possess deep intuitive wisdom and natural healing abilities.",
        celtic_wisdom: "The willow bends but does not break, teaching flexibility and resilience.",
        band: DateBand::new(4, 15, 5, 12),
    },
    CelticEntry {
        tree: CelticTree::Hawthorn,
        date_range: "May 13 - June 9",
        meaning: "The Illusionist",
        lunar_connection: "Your connection to fairy realm energy brings magical perspectives.",
        gifts: &["Magic", "Protection", "Creativity", "Hope"],
        description: "You understand the mystical and can work with magical energies.",
        celtic_wisdom: "Sacred to the fairies, you bridge the magical and mundane worlds.",
        band: DateBand::new(5, 13, 6, 9),
    },
    CelticEntry {
        tree: CelticTree::Oak,
        date_range: "June 10 - July 7",
        meaning: "The Stabilizer",
        lunar_connection: "Steady lunar energy provides strength and endurance.",
        gifts: &["Strength", "Protection", "Leadership", "Wisdom"],
        description: "You are a natural leader with strength and wisdom to guide others.",
        celtic_wisdom: "The mighty oak stands strong through all seasons, embodying endurance.",
        band: DateBand::new(6, 10, 7, 7),
    },
    CelticEntry {
        tree: CelticTree::Holly,
        date_range: "July 8 - August 4",
        meaning: "The Ruler",
        lunar_connection: "Solar energy during your season enhances leadership abilities.",
        gifts: &["Leadership", "Protection", "Courage", "Honor"],
        description: "You possess natural authority and the ability to protect what matters.",
        celtic_wisdom: "Holly remains evergreen, symbolizing eternal strength and protection.",
        band: DateBand::new(7, 8, 8, 4),
    },
    CelticEntry {
        tree: CelticTree::Hazel,
        date_range: "August 5 - September 1",
        meaning: "The Knower",
        lunar_connection: "Harvest moon energy brings wisdom and knowledge gathering.",
        gifts: &["Wisdom", "Knowledge", "Intuition", "Truth"],
        description: "You are a natural seeker of wisdom and truth.",
        celtic_wisdom: "The hazel nut contains wisdom - you help others find inner knowledge.",
        band: DateBand::new(8, 5, 9, 1),
    },
    CelticEntry {
        tree: CelticTree::Vine,
        date_range: "September 2 - September 29",
        meaning: "The Equalizer",
        lunar_connection: "Equinox energy brings balance and harmony to your nature.",
        gifts: &["Balance", "Growth", "Transformation", "Celebration"],
        description: "You understand balance and help others find equilibrium in life.",
        celtic_wisdom: "The vine grows by adapting and finding support, teaching flexibility.",
        band: DateBand::new(9, 2, 9, 29),
    },
    CelticEntry {
        tree: CelticTree::Ivy,
        date_range: "September 30 - October 27",
        meaning: "The Survivor",
        lunar_connection: "Autumn energy enhances your ability to thrive in any condition.",
        gifts: &["Resilience", "Loyalty", "Determination", "Growth"],
        description: "You possess remarkable resilience and loyalty.",
        celtic_wisdom: "Ivy grows anywhere and clings faithfully, showing true devotion.",
        band: DateBand::new(9, 30, 10, 27),
    },
    CelticEntry {
        tree: CelticTree::Reed,
        date_range: "October 28 - November 24",
        meaning: "The Inquisitor",
        lunar_connection: "Dark moon energy enhances your ability to see hidden truths.",
        gifts: &["Truth", "Protection", "Secrets", "Guidance"],
        description: "You can see through deception and uncover hidden truths.",
        celtic_wisdom: "Reeds bend with the wind but remain rooted, teaching adaptability with purpose.",
        band: DateBand::new(10, 28, 11, 24),
    },
    CelticEntry {
        tree: CelticTree::Elder,
        date_range: "November 25 - December 23",
        meaning: "The Seeker",
        lunar_connection: "Winter energy brings deep introspection and spiritual seeking.",
        gifts: &["Wisdom", "Transformation", "Regeneration", "Magic"],
        description: "You seek transformation and regeneration through spiritual wisdom.",
        celtic_wisdom: "The elder renews itself completely, teaching the power of transformation.",
        band: DateBand::new(11, 25, 12, 23),
    },
];

pub fn celtic_index(month: u32, day: u32) -> usize {
    let idx = band_index(CELTIC_TREES.iter().map(|e| &e.band), month, day);
    clamp_index(idx, CELTIC_TREES.len())
}

/// Classify a date into its Celtic tree.
pub fn celtic_sign(date: CalendarDate) -> &'static CelticEntry {
    let idx = celtic_index(date.month(), date.day());
    tracing::trace!(%date, idx, "celtic tree");
    &CELTIC_TREES[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birch_wraps_year_end() {
        assert_eq!(CELTIC_TREES[celtic_index(12, 24)].tree, CelticTree::Birch);
        assert_eq!(CELTIC_TREES[celtic_index(1, 20)].tree, CelticTree::Birch);
        assert_eq!(CELTIC_TREES[celtic_index(12, 23)].tree, CelticTree::Elder);
    }

    #[test]
    fn late_september_split() {
        assert_eq!(CELTIC_TREES[celtic_index(9, 29)].tree, CelticTree::Vine);
        assert_eq!(CELTIC_TREES[celtic_index(9, 30)].tree, CelticTree::Ivy);
        assert_eq!(CELTIC_TREES[celtic_index(9, 1)].tree, CelticTree::Hazel);
    }

    #[test]
    fn every_day_matches_exactly_one_band() {
        for month in 1..=12 {
            for day in 1..=cosmo_calendar::days_in_month(2000, month) {
                let hits = CELTIC_TREES
                    .iter()
                    .filter(|e| e.band.contains(month, day))
                    .count();
                assert_eq!(hits, 1, "{month}/{day}");
            }
        }
    }
}
