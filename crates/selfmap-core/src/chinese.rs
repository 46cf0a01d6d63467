use crate::stats::{Attribute, AttributeBlock};
use serde::{Deserialize, Serialize};
use std::fmt;

/// First year of the reference sexagenary cycle (a Wood Rat year).
const BASE_YEAR: i32 = 1924;

// ---------------------------------------------------------------------------
// Elements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChineseElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl ChineseElement {
    pub fn all() -> &'static [ChineseElement] {
        &[
            ChineseElement::Wood,
            ChineseElement::Fire,
            ChineseElement::Earth,
            ChineseElement::Metal,
            ChineseElement::Water,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChineseElement::Wood => "wood",
            ChineseElement::Fire => "fire",
            ChineseElement::Earth => "earth",
            ChineseElement::Metal => "metal",
            ChineseElement::Water => "water",
        }
    }

    pub fn traits(self) -> &'static [&'static str] {
        match self {
            ChineseElement::Wood => &["Growth", "Creativity", "Flexibility", "Generosity"],
            ChineseElement::Fire => &["Passion", "Enthusiasm", "Energy", "Assertiveness"],
            ChineseElement::Earth => &["Stability", "Reliability", "Practicality", "Endurance"],
            ChineseElement::Metal => &["Strength", "Determination", "Discipline", "Clarity"],
            ChineseElement::Water => &["Adaptability", "Intuition", "Wisdom", "Reflection"],
        }
    }

    pub fn modifier(self) -> &'static [(Attribute, i32)] {
        match self {
            ChineseElement::Wood => &[(Attribute::Wisdom, 1), (Attribute::Charisma, 1)],
            ChineseElement::Fire => &[(Attribute::Charisma, 1), (Attribute::Strength, 1)],
            ChineseElement::Earth => &[(Attribute::Constitution, 1), (Attribute::Wisdom, 1)],
            ChineseElement::Metal => &[(Attribute::Strength, 1), (Attribute::Intelligence, 1)],
            ChineseElement::Water => &[(Attribute::Wisdom, 1), (Attribute::Intelligence, 1)],
        }
    }
}

impl fmt::Display for ChineseElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChineseElement {
    type Err = crate::error::SelfmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wood" => Ok(ChineseElement::Wood),
            "fire" => Ok(ChineseElement::Fire),
            "earth" => Ok(ChineseElement::Earth),
            "metal" => Ok(ChineseElement::Metal),
            "water" => Ok(ChineseElement::Water),
            _ => Err(crate::error::SelfmapError::UnknownElement(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Animals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Animal {
    pub name: &'static str,
    pub key_traits: [&'static str; 4],
    pub challenges: [&'static str; 4],
    pub stats: AttributeBlock,
}

/// The twelve animals in cycle order, Rat through Pig.
pub const ANIMALS: &[Animal] = &[
    Animal {
        name: "Rat",
        key_traits: ["Intelligent", "Adaptable", "Quick-witted", "Resourceful"],
        challenges: ["Untrustworthy", "Opportunistic", "Manipulative", "Too cautious"],
        stats: AttributeBlock::new(-1, 1, -1, 2, 0, 0),
    },
    Animal {
        name: "Ox",
        key_traits: ["Reliable", "Diligent", "Patient", "Strong"],
        challenges: ["Stubborn", "Conservative", "Overly serious", "Resistant to change"],
        stats: AttributeBlock::new(2, -1, 1, 0, 0, -1),
    },
    Animal {
        name: "Tiger",
        key_traits: ["Brave", "Competitive", "Confident", "Charismatic"],
        challenges: ["Impulsive", "Reckless", "Hot-headed", "Overbearing"],
        stats: AttributeBlock::new(2, 0, 0, -1, -1, 1),
    },
    Animal {
        name: "Rabbit",
        key_traits: ["Gentle", "Compassionate", "Artistic", "Diplomatic"],
        challenges: ["Overly cautious", "Indecisive", "Easily influenced", "Withdrawn"],
        stats: AttributeBlock::new(-1, 0, -1, 0, 2, 1),
    },
    Animal {
        name: "Dragon",
        key_traits: ["Ambitious", "Confident", "Dynamic", "Natural leader"],
        challenges: ["Arrogant", "Intolerant", "Overly ambitious", "Stubborn"],
        stats: AttributeBlock::new(1, -1, 0, 0, -1, 2),
    },
    Animal {
        name: "Snake",
        key_traits: ["Wise", "Discreet", "Intuitive", "Sophisticated"],
        challenges: ["Secretive", "Possessive", "Overly critical", "Cynical"],
        stats: AttributeBlock::new(-1, 0, -1, 1, 2, 0),
    },
    Animal {
        name: "Horse",
        key_traits: ["Energetic", "Independent", "Free-spirited", "Enthusiastic"],
        challenges: ["Impulsive", "Hot-tempered", "Restless", "Difficult to control"],
        stats: AttributeBlock::new(1, 2, 0, -1, -1, 0),
    },
    Animal {
        name: "Goat (or Sheep)",
        key_traits: ["Peaceful", "Creative", "Gentle", "Compassionate"],
        challenges: ["Pessimistic", "Indecisive", "Overly sensitive", "Easily discouraged"],
        stats: AttributeBlock::new(-1, 0, -1, 0, 2, 1),
    },
    Animal {
        name: "Monkey",
        key_traits: ["Intelligent", "Curious", "Playful", "Versatile"],
        challenges: ["Deceptive", "Irresponsible", "Self-indulgent", "Unpredictable"],
        stats: AttributeBlock::new(-1, 1, -1, 2, 0, 0),
    },
    Animal {
        name: "Rooster",
        key_traits: ["Observant", "Hardworking", "Courageous", "Confident"],
        challenges: ["Critical", "Arrogant", "Impatient", "Overly blunt"],
        stats: AttributeBlock::new(0, -1, 2, -1, 1, 0),
    },
    Animal {
        name: "Dog",
        key_traits: ["Loyal", "Honest", "Responsible", "Protective"],
        challenges: ["Worrying", "Pessimistic", "Critical of others", "Stubborn"],
        stats: AttributeBlock::new(0, -1, 2, -1, 1, 0),
    },
    Animal {
        name: "Pig",
        key_traits: ["Generous", "Compassionate", "Diligent", "Optimistic"],
        challenges: ["Naive", "Gullible", "Materialistic", "Overly trusting"],
        stats: AttributeBlock::new(0, -1, 2, -1, 0, 1),
    },
];

// ---------------------------------------------------------------------------
// Year lookups
// ---------------------------------------------------------------------------

/// Animal for a calendar year. Euclidean remainder, so years before the
/// base year wrap instead of indexing negatively.
pub fn animal_for_year(year: i32) -> &'static Animal {
    let idx = (year - BASE_YEAR).rem_euclid(12) as usize;
    &ANIMALS[idx]
}

/// Element for a calendar year. Each element holds twelve consecutive
/// years of the 60-year cycle.
pub fn element_for_year(year: i32) -> ChineseElement {
    let position = (year - BASE_YEAR).rem_euclid(60);
    ChineseElement::all()[(position / 12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_animals_in_cycle_order() {
        assert_eq!(ANIMALS.len(), 12);
        assert_eq!(ANIMALS[0].name, "Rat");
        assert_eq!(ANIMALS[11].name, "Pig");
    }

    #[test]
    fn base_year_is_wood_rat() {
        assert_eq!(animal_for_year(1924).name, "Rat");
        assert_eq!(element_for_year(1924), ChineseElement::Wood);
    }

    #[test]
    fn animal_cycles_every_twelve_years() {
        assert_eq!(animal_for_year(2024).name, "Dragon");
        assert_eq!(animal_for_year(2023).name, "Rabbit");
        assert_eq!(animal_for_year(1997).name, "Ox");
    }

    #[test]
    fn years_before_base_wrap() {
        // 1900 is 24 years before the base, two full animal cycles.
        assert_eq!(animal_for_year(1900).name, "Rat");
        // 1923 sits at cycle position 59, the last Water year.
        assert_eq!(animal_for_year(1923).name, "Pig");
        assert_eq!(element_for_year(1923), ChineseElement::Water);
    }

    #[test]
    fn element_bands_of_the_sixty_year_cycle() {
        assert_eq!(element_for_year(1935), ChineseElement::Wood);
        assert_eq!(element_for_year(1936), ChineseElement::Fire);
        assert_eq!(element_for_year(1948), ChineseElement::Earth);
        assert_eq!(element_for_year(1960), ChineseElement::Metal);
        assert_eq!(element_for_year(1971), ChineseElement::Metal);
        assert_eq!(element_for_year(1972), ChineseElement::Water);
        assert_eq!(element_for_year(1983), ChineseElement::Water);
        assert_eq!(element_for_year(1984), ChineseElement::Wood);
        assert_eq!(element_for_year(2024), ChineseElement::Metal);
    }

    #[test]
    fn element_parses_from_str() {
        assert_eq!("metal".parse::<ChineseElement>().unwrap(), ChineseElement::Metal);
        assert!("gold".parse::<ChineseElement>().is_err());
    }

    #[test]
    fn goat_carries_its_long_name() {
        assert_eq!(animal_for_year(2015).name, "Goat (or Sheep)");
    }
}
