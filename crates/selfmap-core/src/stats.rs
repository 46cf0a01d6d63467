use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Attribute
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Attribute {
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Strength,
            Attribute::Dexterity,
            Attribute::Constitution,
            Attribute::Intelligence,
            Attribute::Wisdom,
            Attribute::Charisma,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::Strength => "strength",
            Attribute::Dexterity => "dexterity",
            Attribute::Constitution => "constitution",
            Attribute::Intelligence => "intelligence",
            Attribute::Wisdom => "wisdom",
            Attribute::Charisma => "charisma",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Attribute {
    type Err = crate::error::SelfmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strength" => Ok(Attribute::Strength),
            "dexterity" => Ok(Attribute::Dexterity),
            "constitution" => Ok(Attribute::Constitution),
            "intelligence" => Ok(Attribute::Intelligence),
            "wisdom" => Ok(Attribute::Wisdom),
            "charisma" => Ok(Attribute::Charisma),
            _ => Err(crate::error::SelfmapError::UnknownAttribute(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// AttributeBlock
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeBlock {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl AttributeBlock {
    /// Field order: strength, dexterity, constitution, intelligence,
    /// wisdom, charisma.
    pub const fn new(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        charisma: i32,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    pub fn get(&self, attr: Attribute) -> i32 {
        match attr {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, attr: Attribute, value: i32) {
        match attr {
            Attribute::Strength => self.strength = value,
            Attribute::Dexterity => self.dexterity = value,
            Attribute::Constitution => self.constitution = value,
            Attribute::Intelligence => self.intelligence = value,
            Attribute::Wisdom => self.wisdom = value,
            Attribute::Charisma => self.charisma = value,
        }
    }

    /// Add `other` scaled by `factor`, rounding each contribution
    /// (half away from zero).
    pub fn add_scaled(&mut self, other: &AttributeBlock, factor: f64) {
        for attr in Attribute::all() {
            let scaled = (other.get(*attr) as f64 * factor).round() as i32;
            self.set(*attr, self.get(*attr) + scaled);
        }
    }

    /// Add a sparse modifier, unscaled.
    pub fn add_modifier(&mut self, modifier: &[(Attribute, i32)]) {
        for (attr, delta) in modifier {
            self.set(*attr, self.get(*attr) + delta);
        }
    }

    /// Sum of the positive attributes only.
    pub fn positive_total(&self) -> i32 {
        Attribute::all().iter().map(|a| self.get(*a).max(0)).sum()
    }

    /// If the positive total exceeds `budget`, rescale every attribute
    /// (negatives included) so the positives sum to roughly the budget.
    pub fn scale_to_budget(&mut self, budget: i32) {
        let total = self.positive_total();
        if total <= budget {
            return;
        }
        let factor = budget as f64 / total as f64;
        for attr in Attribute::all() {
            let scaled = (self.get(*attr) as f64 * factor).round() as i32;
            self.set(*attr, scaled);
        }
    }

    /// Clamp every attribute into `[min, max]`.
    pub fn clamp_all(&mut self, min: i32, max: i32) {
        for attr in Attribute::all() {
            self.set(*attr, self.get(*attr).clamp(min, max));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_roundtrip() {
        let mut block = AttributeBlock::default();
        for (i, attr) in Attribute::all().iter().enumerate() {
            block.set(*attr, i as i32);
        }
        for (i, attr) in Attribute::all().iter().enumerate() {
            assert_eq!(block.get(*attr), i as i32);
        }
    }

    #[test]
    fn add_scaled_rounds_each_contribution() {
        let mut block = AttributeBlock::default();
        let other = AttributeBlock::new(1, 2, 3, -1, 0, 1);
        block.add_scaled(&other, 0.5);
        // 0.5 -> 1, 1.0 -> 1, 1.5 -> 2, -0.5 -> -1, 0.0 -> 0, 0.5 -> 1
        assert_eq!(block, AttributeBlock::new(1, 1, 2, -1, 0, 1));
    }

    #[test]
    fn add_modifier_is_sparse() {
        let mut block = AttributeBlock::new(1, 0, 0, 0, 0, 0);
        block.add_modifier(&[(Attribute::Strength, 1), (Attribute::Charisma, 2)]);
        assert_eq!(block, AttributeBlock::new(2, 0, 0, 0, 0, 2));
    }

    #[test]
    fn positive_total_ignores_negatives() {
        let block = AttributeBlock::new(3, -2, 4, 0, -1, 2);
        assert_eq!(block.positive_total(), 9);
    }

    #[test]
    fn scale_to_budget_noop_under_budget() {
        let mut block = AttributeBlock::new(3, 1, 2, 0, 1, 2);
        let before = block;
        block.scale_to_budget(10);
        assert_eq!(block, before);
    }

    #[test]
    fn scale_to_budget_rescales_when_over() {
        // Positive total 20, budget 10: everything halves.
        let mut block = AttributeBlock::new(6, 4, 4, 2, 4, -2);
        block.scale_to_budget(10);
        assert_eq!(block, AttributeBlock::new(3, 2, 2, 1, 2, -1));
        assert!(block.positive_total() <= 10);
    }

    #[test]
    fn clamp_all_bounds_every_attribute() {
        let mut block = AttributeBlock::new(9, -7, 3, 0, 6, -2);
        block.clamp_all(-2, 5);
        assert_eq!(block, AttributeBlock::new(5, -2, 3, 0, 5, -2));
    }

    #[test]
    fn attribute_strings_roundtrip() {
        for attr in Attribute::all() {
            let parsed: Attribute = attr.as_str().parse().unwrap();
            assert_eq!(parsed, *attr);
        }
        assert!("luck".parse::<Attribute>().is_err());
    }

    #[test]
    fn block_serializes_as_flat_map() {
        let block = AttributeBlock::new(1, 0, 2, 0, 1, 3);
        let json = serde_json::to_string(&block).unwrap();
        let back: AttributeBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
        assert!(json.contains("\"strength\":1"));
        assert!(json.contains("\"charisma\":3"));
    }
}
