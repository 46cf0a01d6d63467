use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// Reduction
// ---------------------------------------------------------------------------

fn is_master(n: u64) -> bool {
    matches!(n, 11 | 22 | 33)
}

fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeatedly sums the digits of `value`'s absolute value until a single
/// digit remains. With `keep_master` the reduction stops at 11, 22 or 33
/// instead of collapsing them further.
pub fn reduce(value: i64, keep_master: bool) -> u32 {
    let mut current = value.unsigned_abs();
    while current > 9 {
        if keep_master && is_master(current) {
            break;
        }
        current = digit_sum(current);
    }
    current as u32
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberKind {
    Base,
    Master,
    KarmicDebt,
}

impl NumberKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NumberKind::Base => "base",
            NumberKind::Master => "master",
            NumberKind::KarmicDebt => "karmic_debt",
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub number: u32,
    pub reduced_to: u32,
    pub kind: NumberKind,
    pub title: &'static str,
    pub keywords: &'static [&'static str],
    pub gifts: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub growth: &'static [&'static str],
}

/// Core meanings of the nine base numbers.
pub const BASE_PROFILES: &[Profile] = &[
    Profile {
        number: 1,
        reduced_to: 1,
        kind: NumberKind::Base,
        title: "The Pioneer",
        keywords: &["independence", "initiative", "leadership", "willpower"],
        gifts: &["self-starter", "courageous", "innovative", "decisive"],
        challenges: &["impatience", "ego clashes", "isolation", "stubbornness"],
        growth: &["collaboration", "humility", "listening", "shared purpose"],
    },
    Profile {
        number: 2,
        reduced_to: 2,
        kind: NumberKind::Base,
        title: "The Diplomat",
        keywords: &["partnership", "harmony", "sensitivity", "cooperation"],
        gifts: &["mediation", "empathy", "supportive", "tactful"],
        challenges: &["indecision", "people-pleasing", "oversensitivity", "passivity"],
        growth: &["boundaries", "self-trust", "clear voice", "balanced give-and-take"],
    },
    Profile {
        number: 3,
        reduced_to: 3,
        kind: NumberKind::Base,
        title: "The Creator",
        keywords: &["expression", "joy", "communication", "imagination"],
        gifts: &["creative", "witty", "inspiring", "social"],
        challenges: &["scattered focus", "superficiality", "dramatization", "avoidance"],
        growth: &["discipline", "completion", "grounding", "emotional honesty"],
    },
    Profile {
        number: 4,
        reduced_to: 4,
        kind: NumberKind::Base,
        title: "The Builder",
        keywords: &["structure", "stability", "order", "duty"],
        gifts: &["reliable", "practical", "persistent", "methodical"],
        challenges: &["rigidity", "workaholism", "fear of change", "pessimism"],
        growth: &["flexibility", "trust in flow", "playfulness", "delegation"],
    },
    Profile {
        number: 5,
        reduced_to: 5,
        kind: NumberKind::Base,
        title: "The Explorer",
        keywords: &["freedom", "change", "adventure", "versatility"],
        gifts: &["adaptable", "curious", "resourceful", "progressive"],
        challenges: &["restlessness", "impulsiveness", "excess", "inconsistency"],
        growth: &["moderation", "consistency", "commitment", "inner stability"],
    },
    Profile {
        number: 6,
        reduced_to: 6,
        kind: NumberKind::Base,
        title: "The Guardian",
        keywords: &["responsibility", "care", "beauty", "service"],
        gifts: &["nurturing", "protective", "harmonizing", "loyal"],
        challenges: &["control", "perfectionism", "martyrdom", "overgiving"],
        growth: &["balance", "self-care", "allowing", "healthy boundaries"],
    },
    Profile {
        number: 7,
        reduced_to: 7,
        kind: NumberKind::Base,
        title: "The Sage",
        keywords: &["analysis", "introspection", "wisdom", "spirituality"],
        gifts: &["insightful", "perceptive", "research-driven", "mystical"],
        challenges: &["isolation", "skepticism", "overthinking", "emotional distance"],
        growth: &["trust", "openness", "integration", "grounded faith"],
    },
    Profile {
        number: 8,
        reduced_to: 8,
        kind: NumberKind::Base,
        title: "The Executive",
        keywords: &["power", "ambition", "material mastery", "authority"],
        gifts: &["strategic", "efficient", "leaderly", "resilient"],
        challenges: &["domination", "materialism", "work imbalance", "control"],
        growth: &["integrity", "generosity", "service-minded leadership", "inner balance"],
    },
    Profile {
        number: 9,
        reduced_to: 9,
        kind: NumberKind::Base,
        title: "The Humanitarian",
        keywords: &["compassion", "completion", "universality", "forgiveness"],
        gifts: &["empathetic", "big-picture", "inspiring", "philanthropic"],
        challenges: &["martyrdom", "detachment", "idealism", "emotional overwhelm"],
        growth: &["healthy closure", "discernment", "boundaries", "acceptance"],
    },
];

/// Master numbers keep their own profile; `reduced_to` is the base they
/// collapse to when reduction ignores them.
pub const MASTER_PROFILES: &[Profile] = &[
    Profile {
        number: 11,
        reduced_to: 2,
        kind: NumberKind::Master,
        title: "The Illuminator (11/2)",
        keywords: &["vision", "intuition", "inspiration", "spiritual leadership"],
        gifts: &["channeler", "high sensitivity", "creative catalyst", "uplifting"],
        challenges: &["nervous tension", "self-doubt", "overwhelm", "idealism"],
        growth: &["grounded practice", "focus", "emotional steadiness", "service"],
    },
    Profile {
        number: 22,
        reduced_to: 4,
        kind: NumberKind::Master,
        title: "The Master Builder (22/4)",
        keywords: &["legacy", "manifestation", "organization", "global impact"],
        gifts: &["visionary pragmatism", "scale builder", "responsibility", "endurance"],
        challenges: &["pressure", "overcontrol", "fear of failure", "overwork"],
        growth: &["humility", "delegation", "balance", "faith in process"],
    },
    Profile {
        number: 33,
        reduced_to: 6,
        kind: NumberKind::Master,
        title: "The Master Teacher (33/6)",
        keywords: &["compassion", "healing", "service", "sacrifice"],
        gifts: &["uplifter", "teacher-healer", "unconditional love", "devotion"],
        challenges: &["self-neglect", "rescuer patterns", "emotional burden", "idealism"],
        growth: &["self-care", "boundaries", "practical service", "joyful giving"],
    },
];

/// Karmic debt overlays: compound-number lessons with an authored reduction.
pub const KARMIC_PROFILES: &[Profile] = &[
    Profile {
        number: 13,
        reduced_to: 4,
        kind: NumberKind::KarmicDebt,
        title: "Karmic Debt 13/4",
        keywords: &["discipline", "transformation", "work ethic", "rebuilding"],
        gifts: &["grit", "craftsmanship", "steady progress", "resilience"],
        challenges: &["shortcuts", "procrastination", "resistance to routine"],
        growth: &["consistent effort", "patience", "mastery through practice"],
    },
    Profile {
        number: 14,
        reduced_to: 5,
        kind: NumberKind::KarmicDebt,
        title: "Karmic Debt 14/5",
        keywords: &["freedom through discipline", "moderation", "adaptability"],
        gifts: &["versatility", "communication", "resourcefulness"],
        challenges: &["excess", "escapism", "instability", "overindulgence"],
        growth: &["self-control", "healthy boundaries", "balanced freedom"],
    },
    Profile {
        number: 16,
        reduced_to: 7,
        kind: NumberKind::KarmicDebt,
        title: "Karmic Debt 16/7",
        keywords: &["humility", "inner truth", "ego dissolution", "spiritual insight"],
        gifts: &["awakening", "depth", "wisdom", "clarity"],
        challenges: &["pride", "isolation", "sudden upheaval", "disillusionment"],
        growth: &["surrender", "faith", "inner alignment", "authenticity"],
    },
    Profile {
        number: 19,
        reduced_to: 1,
        kind: NumberKind::KarmicDebt,
        title: "Karmic Debt 19/1",
        keywords: &["self-reliance with service", "independence", "leadership"],
        gifts: &["courage", "initiative", "personal power"],
        challenges: &["egoism", "lone-wolf patterns", "stubbornness"],
        growth: &["humble leadership", "collaboration", "service-oriented success"],
    },
];

/// Profile for a number. Masters and karmic debts answer for themselves;
/// anything else reduces (master-aware) and answers with the base profile.
/// `None` when the reduction lands outside the base table, which happens
/// for 0 and for inputs that reduce to a master number.
pub fn profile_for(value: u32) -> Option<Profile> {
    if let Some(p) = MASTER_PROFILES.iter().find(|p| p.number == value) {
        return Some(p.clone());
    }
    if let Some(p) = KARMIC_PROFILES.iter().find(|p| p.number == value) {
        return Some(p.clone());
    }
    let reduced = reduce(i64::from(value), true);
    let base = BASE_PROFILES.iter().find(|p| p.number == reduced)?;
    Some(Profile {
        number: value,
        reduced_to: reduced,
        ..base.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_collapses_to_a_single_digit() {
        assert_eq!(reduce(39, true), 3);
        assert_eq!(reduce(999, true), 9);
        assert_eq!(reduce(5, true), 5);
        assert_eq!(reduce(0, true), 0);
    }

    #[test]
    fn reduce_stops_at_master_numbers() {
        assert_eq!(reduce(29, true), 11);
        assert_eq!(reduce(38, true), 11);
        assert_eq!(reduce(29, false), 2);
        assert_eq!(reduce(22, false), 4);
    }

    #[test]
    fn reduce_takes_the_absolute_value() {
        assert_eq!(reduce(-39, true), 3);
    }

    #[test]
    fn master_numbers_answer_for_themselves() {
        let p = profile_for(11).unwrap();
        assert_eq!(p.title, "The Illuminator (11/2)");
        assert_eq!(p.reduced_to, 2);
        assert_eq!(p.kind, NumberKind::Master);
    }

    #[test]
    fn karmic_debts_carry_their_authored_reduction() {
        let p = profile_for(16).unwrap();
        assert_eq!(p.kind, NumberKind::KarmicDebt);
        assert_eq!(p.reduced_to, 7);
        assert_eq!(p.title, "Karmic Debt 16/7");
    }

    #[test]
    fn other_numbers_reduce_to_a_base_profile() {
        let p = profile_for(39).unwrap();
        assert_eq!(p.number, 39);
        assert_eq!(p.reduced_to, 3);
        assert_eq!(p.title, "The Creator");
        assert_eq!(p.kind, NumberKind::Base);
    }

    #[test]
    fn zero_has_no_profile() {
        assert!(profile_for(0).is_none());
    }

    #[test]
    fn master_bound_inputs_have_no_base_profile() {
        // 29 reduces to 11, which lives outside the base table; callers
        // ask for 11 directly.
        assert!(profile_for(29).is_none());
    }
}
