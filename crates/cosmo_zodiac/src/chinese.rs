//! Chinese zodiac: 12 animals crossed with 5 elements.
//!
//! The cycle is anchored on 1924 (Wood Rat) and keyed by the Gregorian year
//! alone; lunar new year is not taken into account. Both cycles are
//! normalised with `rem_euclid`, so years before the epoch stay in range.

use serde::Serialize;

use crate::util::clamp_index;

/// Gregorian year whose animal index and element index are both 0.
pub const CHINESE_EPOCH_YEAR: i32 = 1924;

/// The 12 animals starting from the Rat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ChineseAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All 12 animals in cycle order (0 = Rat).
pub const ALL_CHINESE_ANIMALS: [ChineseAnimal; 12] = [
    ChineseAnimal::Rat,
    ChineseAnimal::Ox,
    ChineseAnimal::Tiger,
    ChineseAnimal::Rabbit,
    ChineseAnimal::Dragon,
    ChineseAnimal::Snake,
    ChineseAnimal::Horse,
    ChineseAnimal::Goat,
    ChineseAnimal::Monkey,
    ChineseAnimal::Rooster,
    ChineseAnimal::Dog,
    ChineseAnimal::Pig,
];

impl ChineseAnimal {
    /// English name of the animal.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    /// 0-based position in the twelve-year cycle (Rat=0 .. Pig=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn entry(self) -> &'static AnimalEntry {
        &CHINESE_ANIMALS[self.index() as usize]
    }

    /// Look up an animal by name. "Sheep" and "Ram" are accepted for the Goat.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("sheep") || name.eq_ignore_ascii_case("ram") {
            return Some(Self::Goat);
        }
        ALL_CHINESE_ANIMALS
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(name))
    }
}

/// The 5 elements of the ten-year stem cycle, two consecutive years each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ChineseElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

pub const ALL_CHINESE_ELEMENTS: [ChineseElement; 5] = [
    ChineseElement::Wood,
    ChineseElement::Fire,
    ChineseElement::Earth,
    ChineseElement::Metal,
    ChineseElement::Water,
];

impl ChineseElement {
    /// English name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// 0-based position in the stem cycle (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn description(self) -> &'static str {
        CHINESE_ELEMENT_DESCRIPTIONS[self.index() as usize]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL_CHINESE_ELEMENTS
            .iter()
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Strengths and challenges of an animal.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Characteristics {
    pub positive: &'static [&'static str],
    pub challenges: &'static [&'static str],
}

/// Reference data for one animal.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct AnimalEntry {
    pub animal: ChineseAnimal,
    pub traits: &'static [&'static str],
    pub characteristics: Characteristics,
    pub description: &'static str,
}

pub static CHINESE_ANIMALS: [AnimalEntry; 12] = [
    AnimalEntry {
        animal: ChineseAnimal::Rat,
        traits: &["Intelligent", "Adaptable", "Charming"],
        characteristics: Characteristics {
            positive: &["Quick wit", "Resourcefulness"],
            challenges: &["Opportunistic", "Restless"],
        },
        description: "Clever and adaptable, you navigate life with intelligence and charm.",
    },
    AnimalEntry {
        animal: ChineseAnimal::Ox,
        traits: &["Reliable", "Strong", "Determined"],
        characteristics: Characteristics {
            positive: &["Dependable", "Hardworking"],
            challenges: &["Stubborn", "Slow to change"],
        },
        description: "Strong and reliable, you build lasting success through steady effort.",
    },
    AnimalEntry {
        animal: ChineseAnimal::Tiger,
        traits: &["Brave", "Competitive", "Confident"],
        characteristics: Characteristics {
            positive: &["Courage", "Leadership"],
            challenges: &["Impulsive", "Aggressive"],
        },
        description: "Bold and brave, you lead with courage and natural authority.",
    },
    AnimalEntry {
        animal: ChineseAnimal::Rabbit,
        traits: &["Gentle", "Quiet", "Elegant"],
        characteristics: Characteristics {
            positive: &["Diplomatic", "Peaceful"],
            challenges: &["Avoidant", "Overly cautious"],
        },
        description: "Gentle and diplomatic, you bring peace and elegance to all situations.",
    },
    AnimalEntry {
        animal: ChineseAnimal::Dragon,
        traits: &["Energetic", "Intelligent", "Confident"],
        characteristics: Characteristics {
            positive: &["Charismatic", "Ambitious"],
            challenges: &["Arrogant", "Impatient"],
        },
        description: "Powerful and charismatic, you inspire others with your natural magnetism.",
    },
    AnimalEntry {
        animal: ChineseAnimal::Snake,
        traits: &["Wise", "Enigmatic", "Intuitive"],
        characteristics: Characteristics {
            positive: &["Deep wisdom", "Intuition"],
            challenges: &["Secretive", "Jealous"],
        },
        description: "Wise and mysterious, you possess deep intuition and ancient wisdom.",
    },
    AnimalEntry {
        animal: ChineseAnimal::Horse,
        traits: &["Energetic", "Independent", "Free-spirited"],
        characteristics: Characteristics {
            positive: &["Freedom-loving", "Energetic"],
            challenges: &["Impatient", "Selfish"],
        },
        description: "Free-spirited and energetic, you gallop through life with independence.",
    },
    AnimalEntry {
        animal: ChineseAnimal::Goat,
        traits: &["Gentle", "Mild", "Sympathetic"],
        characteristics: Characteristics {
            positive: &["Artistic", "Compassionate"],
            challenges: &["Pessimistic", "Disorganized"],
        },
        description: "Gentle and artistic, you create beauty and bring compassion to the world.",
    },
    AnimalEntry {
        animal: ChineseAnimal::Monkey,
        traits: &["Witty", "Intelligent", "Curious"],
        characteristics: Characteristics {
            positive: &["Clever", "Innovative"],
            challenges: &["Mischievous", "Restless"],
        },
        description: "Clever and playful, you solve problems with wit and innovation.",
    },
    AnimalEntry {
        animal: ChineseAnimal::Rooster,
        traits: &["Observant", "Hardworking", "Courageous"],
        characteristics: Characteristics {
            positive: &["Confident", "Organized"],
            challenges: &["Boastful", "Critical"],
        },
        description: "Confident and observant, you herald new beginnings with courage.",
    },
    AnimalEntry {
        animal: ChineseAnimal::Dog,
        traits: &["Loyal", "Responsible", "Reliable"],
        characteristics: Characteristics {
            positive: &["Honest", "Faithful"],
            challenges: &["Pessimistic", "Anxious"],
        },
        description: "Loyal and faithful, you protect and serve others with unwavering dedication.",
    },
    AnimalEntry {
        animal: ChineseAnimal::Pig,
        traits: &["Honest", "Generous", "Reliable"],
        characteristics: Characteristics {
            positive: &["Honest & loyal", "Generous nature"],
            challenges: &["Overly trusting", "Material focus"],
        },
        description: "Generous, optimistic, and growth-oriented. You approach life with kindness and have a natural ability to nurture others and ideas.",
    },
];

const CHINESE_ELEMENT_DESCRIPTIONS: [&str; 5] = [
    "Wood energy gives you flexibility, creativity, and the ability to grow through challenges. You're naturally innovative and can bend without breaking.",
    "Fire energy provides passion, leadership, and dynamic action. You inspire others and create transformative change.",
    "Earth energy grounds you with stability, practicality, and nurturing abilities. You build lasting foundations.",
    "Metal energy gives you structure, determination, and the ability to cut through illusions to reach truth.",
    "Water energy flows with adaptability, intuition, and emotional depth. You navigate life with fluid wisdom.",
];

/// Classification result: animal and element for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChineseSign {
    pub animal: ChineseAnimal,
    pub element: ChineseElement,
    pub year: i32,
    pub traits: &'static [&'static str],
    pub characteristics: &'static Characteristics,
    pub description: &'static str,
    pub element_description: &'static str,
}

/// `(year - 1924) mod 12`, normalised into [0, 12).
pub fn chinese_animal_index(year: i32) -> usize {
    (i64::from(year) - i64::from(CHINESE_EPOCH_YEAR)).rem_euclid(12) as usize
}

/// `floor(((year - 1924) mod 10) / 2)`, normalised into [0, 5).
pub fn chinese_element_index(year: i32) -> usize {
    ((i64::from(year) - i64::from(CHINESE_EPOCH_YEAR)).rem_euclid(10) / 2) as usize
}

/// Classify a Gregorian year into its animal and element.
pub fn chinese_sign(year: i32) -> ChineseSign {
    let animal_idx = clamp_index(chinese_animal_index(year), CHINESE_ANIMALS.len());
    let element_idx = clamp_index(chinese_element_index(year), ALL_CHINESE_ELEMENTS.len());
    tracing::trace!(year, animal_idx, element_idx, "chinese sign");

    let entry = &CHINESE_ANIMALS[animal_idx];
    let element = ALL_CHINESE_ELEMENTS[element_idx];
    ChineseSign {
        animal: entry.animal,
        element,
        year,
        traits: entry.traits,
        characteristics: &entry.characteristics,
        description: entry.description,
        element_description: element.description(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_wood_rat() {
        let s = chinese_sign(1924);
        assert_eq!(s.animal, ChineseAnimal::Rat);
        assert_eq!(s.element, ChineseElement::Wood);
    }

    #[test]
    fn year_1981_is_metal_rooster() {
        // (1981 - 1924) = 57; 57 mod 12 = 9; (57 mod 10) / 2 = 3
        assert_eq!(chinese_animal_index(1981), 9);
        assert_eq!(chinese_element_index(1981), 3);
        let s = chinese_sign(1981);
        assert_eq!(s.animal, ChineseAnimal::Rooster);
        assert_eq!(s.element, ChineseElement::Metal);
        assert_eq!(s.year, 1981);
    }

    #[test]
    fn years_before_epoch_wrap() {
        // 1923 - 1924 = -1 -> 11 (Pig); -1 rem 10 = 9 -> 4 (Water)
        let s = chinese_sign(1923);
        assert_eq!(s.animal, ChineseAnimal::Pig);
        assert_eq!(s.element, ChineseElement::Water);
    }

    #[test]
    fn extreme_years_stay_in_range() {
        for year in [i32::MIN, -5000, 0, 1, 9999, i32::MAX] {
            assert!(chinese_animal_index(year) < 12);
            assert!(chinese_element_index(year) < 5);
        }
    }

    #[test]
    fn table_order_matches_enum() {
        for (i, entry) in CHINESE_ANIMALS.iter().enumerate() {
            assert_eq!(entry.animal.index() as usize, i);
        }
    }

    #[test]
    fn sheep_alias() {
        assert_eq!(ChineseAnimal::from_name("Sheep"), Some(ChineseAnimal::Goat));
        assert_eq!(ChineseAnimal::from_name("rooster"), Some(ChineseAnimal::Rooster));
        assert_eq!(ChineseElement::from_name("metal"), Some(ChineseElement::Metal));
    }
}
