use crate::matcher;
use crate::stats::{Attribute, AttributeBlock};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub fn all() -> &'static [Element] {
        &[Element::Fire, Element::Earth, Element::Air, Element::Water]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }

    pub fn traits(self) -> &'static [&'static str] {
        match self {
            Element::Fire => &["Passionate", "Energetic", "Enthusiastic", "Adventurous"],
            Element::Earth => &["Grounded", "Practical", "Reliable", "Stable"],
            Element::Air => &["Intellectual", "Communicative", "Social", "Objective"],
            Element::Water => &["Emotional", "Intuitive", "Nurturing", "Empathetic"],
        }
    }

    pub fn modifier(self) -> &'static [(Attribute, i32)] {
        match self {
            Element::Fire => &[(Attribute::Charisma, 1), (Attribute::Strength, 1)],
            Element::Earth => &[(Attribute::Constitution, 1), (Attribute::Wisdom, 1)],
            Element::Air => &[(Attribute::Intelligence, 1), (Attribute::Dexterity, 1)],
            Element::Water => &[(Attribute::Wisdom, 1), (Attribute::Charisma, 1)],
        }
    }

    pub fn signs(self) -> impl Iterator<Item = &'static Sign> {
        SIGNS.iter().filter(move |s| s.element == self)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Element {
    type Err = crate::error::SelfmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fire" => Ok(Element::Fire),
            "earth" => Ok(Element::Earth),
            "air" => Ok(Element::Air),
            "water" => Ok(Element::Water),
            _ => Err(crate::error::SelfmapError::UnknownElement(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Modality
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    pub fn all() -> &'static [Modality] {
        &[Modality::Cardinal, Modality::Fixed, Modality::Mutable]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Modality::Cardinal => "cardinal",
            Modality::Fixed => "fixed",
            Modality::Mutable => "mutable",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Modality::Cardinal => "Initiators of change",
            Modality::Fixed => "Stabilizers and maintainers",
            Modality::Mutable => "Adapters and flexible",
        }
    }

    pub fn modifier(self) -> &'static [(Attribute, i32)] {
        match self {
            Modality::Cardinal => &[(Attribute::Dexterity, 1)],
            Modality::Fixed => &[(Attribute::Constitution, 1)],
            Modality::Mutable => &[(Attribute::Intelligence, 1)],
        }
    }

    pub fn signs(self) -> impl Iterator<Item = &'static Sign> {
        SIGNS.iter().filter(move |s| s.modality == self)
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Modality {
    type Err = crate::error::SelfmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cardinal" => Ok(Modality::Cardinal),
            "fixed" => Ok(Modality::Fixed),
            "mutable" => Ok(Modality::Mutable),
            _ => Err(crate::error::SelfmapError::UnknownModality(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Signs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Sign {
    pub name: &'static str,
    pub date_range: &'static str,
    pub element: Element,
    pub modality: Modality,
    pub key_traits: [&'static str; 4],
    pub challenges: [&'static str; 4],
    pub stats: AttributeBlock,
}

/// The twelve signs in wheel order, Aries through Pisces.
pub const SIGNS: &[Sign] = &[
    Sign {
        name: "Aries",
        date_range: "March 21 - April 19",
        element: Element::Fire,
        modality: Modality::Cardinal,
        key_traits: ["Energetic", "Courageous", "Independent", "Passionate"],
        challenges: ["Impulsive", "Aggressive", "Impatient", "Overly competitive"],
        stats: AttributeBlock::new(2, 0, 0, -1, -1, 1),
    },
    Sign {
        name: "Taurus",
        date_range: "April 20 - May 20",
        element: Element::Earth,
        modality: Modality::Fixed,
        key_traits: ["Reliable", "Practical", "Patient", "Sensual"],
        challenges: ["Stubborn", "Possessive", "Resistant to change", "Indulgent"],
        stats: AttributeBlock::new(0, -1, 2, -1, 1, 0),
    },
    Sign {
        name: "Gemini",
        date_range: "May 21 - June 20",
        element: Element::Air,
        modality: Modality::Mutable,
        key_traits: ["Curious", "Adaptable", "Communicative", "Witty"],
        challenges: ["Inconsistent", "Superficial", "Anxious", "Indecisive"],
        stats: AttributeBlock::new(-1, 1, -1, 2, 0, 0),
    },
    Sign {
        name: "Cancer",
        date_range: "June 21 - July 22",
        element: Element::Water,
        modality: Modality::Cardinal,
        key_traits: ["Nurturing", "Empathetic", "Intuitive", "Protective"],
        challenges: ["Moody", "Insecure", "Overly sensitive", "Clingy"],
        stats: AttributeBlock::new(-1, -1, 0, 0, 2, 1),
    },
    Sign {
        name: "Leo",
        date_range: "July 23 - August 22",
        element: Element::Fire,
        modality: Modality::Fixed,
        key_traits: ["Confident", "Charismatic", "Creative", "Generous"],
        challenges: ["Arrogant", "Stubborn", "Demanding", "Overly dramatic"],
        stats: AttributeBlock::new(1, 0, 0, -1, -1, 2),
    },
    Sign {
        name: "Virgo",
        date_range: "August 23 - September 22",
        element: Element::Earth,
        modality: Modality::Mutable,
        key_traits: ["Analytical", "Detail-oriented", "Practical", "Diligent"],
        challenges: ["Perfectionistic", "Critical", "Overly cautious", "Anxious"],
        stats: AttributeBlock::new(-1, 0, 0, 2, 1, -1),
    },
    Sign {
        name: "Libra",
        date_range: "September 23 - October 22",
        element: Element::Air,
        modality: Modality::Cardinal,
        key_traits: ["Diplomatic", "Charming", "Fair-minded", "Social"],
        challenges: ["Indecisive", "Superficial", "Avoids confrontation", "Dependent"],
        stats: AttributeBlock::new(-1, 0, -1, 1, 0, 2),
    },
    Sign {
        name: "Scorpio",
        date_range: "October 23 - November 21",
        element: Element::Water,
        modality: Modality::Fixed,
        key_traits: ["Intense", "Passionate", "Resourceful", "Transformative"],
        challenges: ["Jealous", "Secretive", "Vengeful", "Obsessive"],
        stats: AttributeBlock::new(-1, -1, 1, 0, 2, 0),
    },
    Sign {
        name: "Sagittarius",
        date_range: "November 22 - December 21",
        element: Element::Fire,
        modality: Modality::Mutable,
        key_traits: ["Adventurous", "Optimistic", "Philosophical", "Freedom-loving"],
        challenges: ["Reckless", "Blunt", "Irresponsible", "Restless"],
        stats: AttributeBlock::new(0, 2, -1, -1, 1, 0),
    },
    Sign {
        name: "Capricorn",
        date_range: "December 22 - January 19",
        element: Element::Earth,
        modality: Modality::Cardinal,
        key_traits: ["Ambitious", "Disciplined", "Practical", "Patient"],
        challenges: ["Pessimistic", "Rigid", "Workaholic", "Overly serious"],
        stats: AttributeBlock::new(0, -1, 2, 1, 0, -1),
    },
    Sign {
        name: "Aquarius",
        date_range: "January 20 - February 18",
        element: Element::Air,
        modality: Modality::Fixed,
        key_traits: ["Innovative", "Independent", "Humanitarian", "Eccentric"],
        challenges: ["Detached", "Unpredictable", "Aloof", "Rebellious"],
        stats: AttributeBlock::new(-1, 1, -1, 2, 0, 0),
    },
    Sign {
        name: "Pisces",
        date_range: "February 19 - March 20",
        element: Element::Water,
        modality: Modality::Mutable,
        key_traits: ["Compassionate", "Imaginative", "Sensitive", "Artistic"],
        challenges: ["Escapist", "Overly emotional", "Gullible", "Indecisive"],
        stats: AttributeBlock::new(-1, 0, -1, 0, 2, 1),
    },
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Sign containing `date`. Total: the twelve ranges cover the calendar.
pub fn sign_for_date(date: NaiveDate) -> &'static Sign {
    let (month, day) = (date.month(), date.day());
    let idx = match month {
        1 => {
            if day <= 19 {
                9
            } else {
                10
            }
        }
        2 => {
            if day <= 18 {
                10
            } else {
                11
            }
        }
        3 => {
            if day <= 20 {
                11
            } else {
                0
            }
        }
        4 => {
            if day <= 19 {
                0
            } else {
                1
            }
        }
        5 => {
            if day <= 20 {
                1
            } else {
                2
            }
        }
        6 => {
            if day <= 20 {
                2
            } else {
                3
            }
        }
        7 => {
            if day <= 22 {
                3
            } else {
                4
            }
        }
        8 => {
            if day <= 22 {
                4
            } else {
                5
            }
        }
        9 => {
            if day <= 22 {
                5
            } else {
                6
            }
        }
        10 => {
            if day <= 22 {
                6
            } else {
                7
            }
        }
        11 => {
            if day <= 21 {
                7
            } else {
                8
            }
        }
        _ => {
            if day <= 21 {
                8
            } else {
                9
            }
        }
    };
    &SIGNS[idx]
}

/// Sign for raw month/day numbers. `None` when the pair is not a valid
/// calendar date (leap day allowed).
pub fn sign_for(month: u32, day: u32) -> Option<&'static Sign> {
    // 2000 is a leap year, so Feb 29 validates.
    let date = NaiveDate::from_ymd_opt(2000, month, day)?;
    Some(sign_for_date(date))
}

/// Sign by name, case-insensitive.
pub fn sign_named(name: &str) -> Option<&'static Sign> {
    let needle = matcher::normalize(name);
    SIGNS.iter().find(|s| matcher::normalize(s.name) == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn twelve_signs_in_wheel_order() {
        assert_eq!(SIGNS.len(), 12);
        assert_eq!(SIGNS[0].name, "Aries");
        assert_eq!(SIGNS[11].name, "Pisces");
    }

    #[test]
    fn boundary_dates() {
        assert_eq!(sign_for_date(date(2024, 3, 20)).name, "Pisces");
        assert_eq!(sign_for_date(date(2024, 3, 21)).name, "Aries");
        assert_eq!(sign_for_date(date(2024, 4, 19)).name, "Aries");
        assert_eq!(sign_for_date(date(2024, 4, 20)).name, "Taurus");
        assert_eq!(sign_for_date(date(2024, 12, 21)).name, "Sagittarius");
        assert_eq!(sign_for_date(date(2024, 12, 22)).name, "Capricorn");
        assert_eq!(sign_for_date(date(2025, 1, 19)).name, "Capricorn");
        assert_eq!(sign_for_date(date(2025, 1, 20)).name, "Aquarius");
        assert_eq!(sign_for_date(date(2025, 2, 18)).name, "Aquarius");
        assert_eq!(sign_for_date(date(2025, 2, 19)).name, "Pisces");
    }

    #[test]
    fn leap_day_is_pisces() {
        assert_eq!(sign_for_date(date(2024, 2, 29)).name, "Pisces");
    }

    #[test]
    fn sign_for_rejects_invalid_pairs() {
        assert!(sign_for(13, 1).is_none());
        assert!(sign_for(2, 30).is_none());
        assert!(sign_for(0, 10).is_none());
        assert_eq!(sign_for(2, 29).unwrap().name, "Pisces");
    }

    #[test]
    fn sign_named_ignores_case() {
        assert_eq!(sign_named("scorpio").unwrap().name, "Scorpio");
        assert_eq!(sign_named(" LEO ").unwrap().name, "Leo");
        assert!(sign_named("ophiuchus").is_none());
    }

    #[test]
    fn element_groups_match_authored_lists() {
        let fire: Vec<_> = Element::Fire.signs().map(|s| s.name).collect();
        assert_eq!(fire, ["Aries", "Leo", "Sagittarius"]);
        let cardinal: Vec<_> = Modality::Cardinal.signs().map(|s| s.name).collect();
        assert_eq!(cardinal, ["Aries", "Cancer", "Libra", "Capricorn"]);
    }

    #[test]
    fn aries_stats_match_authored_values() {
        let aries = sign_named("Aries").unwrap();
        assert_eq!(aries.stats.strength, 2);
        assert_eq!(aries.stats.charisma, 1);
        assert_eq!(aries.stats.intelligence, -1);
        assert_eq!(aries.stats.wisdom, -1);
        assert_eq!(aries.stats.dexterity, 0);
        assert_eq!(aries.stats.constitution, 0);
    }

    #[test]
    fn element_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Element::Fire).unwrap(), "\"fire\"");
        let back: Element = serde_json::from_str("\"water\"").unwrap();
        assert_eq!(back, Element::Water);
    }
}
