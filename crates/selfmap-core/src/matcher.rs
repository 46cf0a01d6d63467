use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// MatchTier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    InputContainsKey,
    KeyContainsInput,
    Fallback,
}

impl MatchTier {
    pub fn all() -> &'static [MatchTier] {
        &[
            MatchTier::Exact,
            MatchTier::InputContainsKey,
            MatchTier::KeyContainsInput,
            MatchTier::Fallback,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::InputContainsKey => "input_contains_key",
            MatchTier::KeyContainsInput => "key_contains_input",
            MatchTier::Fallback => "fallback",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MatchTier {
    type Err = crate::error::SelfmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(MatchTier::Exact),
            "input_contains_key" => Ok(MatchTier::InputContainsKey),
            "key_contains_input" => Ok(MatchTier::KeyContainsInput),
            "fallback" => Ok(MatchTier::Fallback),
            _ => Err(crate::error::SelfmapError::UnknownTier(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution (output)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Resolution<'a, T> {
    /// Canonical key that matched, authored case preserved.
    pub key: &'a str,
    pub value: &'a T,
    /// Rule that fired. Substring tiers resolve to the first key in authored
    /// order, so surfacing the tier keeps that order dependence visible.
    pub tier: MatchTier,
}

// ---------------------------------------------------------------------------
// MatchRule
// ---------------------------------------------------------------------------

/// A fn-pointer rule over (normalized input, normalized key).
pub struct MatchRule {
    pub tier: MatchTier,
    pub matches: fn(&str, &str) -> bool,
}

fn exact(input: &str, key: &str) -> bool {
    input == key
}

fn input_contains_key(input: &str, key: &str) -> bool {
    input.contains(key)
}

fn key_contains_input(input: &str, key: &str) -> bool {
    key.contains(input)
}

/// Tiers in priority order. A rule is tried against every entry before the
/// next rule runs; within a rule the first entry in authored order wins.
pub const MATCH_RULES: &[MatchRule] = &[
    MatchRule {
        tier: MatchTier::Exact,
        matches: exact,
    },
    MatchRule {
        tier: MatchTier::InputContainsKey,
        matches: input_contains_key,
    },
    MatchRule {
        tier: MatchTier::KeyContainsInput,
        matches: key_contains_input,
    },
];

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Lowercased, trimmed copy of `input` for comparison. Stored key case is
/// never altered; normalization applies to comparisons only.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Try each tier in order against `entries`. Returns `None` when nothing
/// matches, including for input that normalizes to empty (an empty string is
/// a substring of every key, which would make the contains tiers vacuous).
pub fn find<'a, T>(input: &str, entries: &'a [(&'static str, T)]) -> Option<Resolution<'a, T>> {
    let needle = normalize(input);
    if needle.is_empty() {
        return None;
    }
    for rule in MATCH_RULES {
        for (key, value) in entries {
            if (rule.matches)(&needle, &normalize(key)) {
                return Some(Resolution {
                    key,
                    value,
                    tier: rule.tier,
                });
            }
        }
    }
    None
}

/// Total lookup: like [`find`], but a miss returns `fallback` with
/// `MatchTier::Fallback` instead of `None`.
pub fn resolve<'a, T>(
    input: &str,
    entries: &'a [(&'static str, T)],
    fallback: &'a (&'static str, T),
) -> Resolution<'a, T> {
    match find(input, entries) {
        Some(hit) => hit,
        None => Resolution {
            key: fallback.0,
            value: &fallback.1,
            tier: MatchTier::Fallback,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRIES: &[(&str, u32)] = &[("Acceptance", 1), ("Safety", 2), ("Self-Acceptance", 3)];

    #[test]
    fn exact_match_wins() {
        let hit = find("safety", ENTRIES).unwrap();
        assert_eq!(hit.key, "Safety");
        assert_eq!(*hit.value, 2);
        assert_eq!(hit.tier, MatchTier::Exact);
    }

    #[test]
    fn exact_beats_substring_of_earlier_entry() {
        // "Self-Acceptance" contains "Acceptance"; the exact tier scans the
        // whole table before any substring tier runs.
        let hit = find("self-acceptance", ENTRIES).unwrap();
        assert_eq!(hit.key, "Self-Acceptance");
        assert_eq!(hit.tier, MatchTier::Exact);
    }

    #[test]
    fn input_containing_key_matches() {
        let hit = find("I want more safety at work", ENTRIES).unwrap();
        assert_eq!(hit.key, "Safety");
        assert_eq!(hit.tier, MatchTier::InputContainsKey);
    }

    #[test]
    fn key_containing_input_matches() {
        let hit = find("saf", ENTRIES).unwrap();
        assert_eq!(hit.key, "Safety");
        assert_eq!(hit.tier, MatchTier::KeyContainsInput);
    }

    #[test]
    fn first_entry_wins_within_a_tier() {
        // "acc" is a substring of both "Acceptance" and "Self-Acceptance".
        let hit = find("acc", ENTRIES).unwrap();
        assert_eq!(hit.key, "Acceptance");
        assert_eq!(hit.tier, MatchTier::KeyContainsInput);
    }

    #[test]
    fn trims_and_ignores_case() {
        let hit = find("  ACCEPTANCE  ", ENTRIES).unwrap();
        assert_eq!(hit.key, "Acceptance");
        assert_eq!(hit.tier, MatchTier::Exact);
    }

    #[test]
    fn empty_input_finds_nothing() {
        assert!(find("", ENTRIES).is_none());
        assert!(find("   ", ENTRIES).is_none());
    }

    #[test]
    fn no_match_finds_nothing() {
        assert!(find("xyzzy", ENTRIES).is_none());
    }

    #[test]
    fn resolve_falls_back() {
        let hit = resolve("xyzzy", ENTRIES, &ENTRIES[0]);
        assert_eq!(hit.key, "Acceptance");
        assert_eq!(hit.tier, MatchTier::Fallback);

        let hit = resolve("", ENTRIES, &ENTRIES[0]);
        assert_eq!(hit.tier, MatchTier::Fallback);
    }

    #[test]
    fn resolve_is_idempotent() {
        let a = resolve("belong", ENTRIES, &ENTRIES[0]);
        let b = resolve("belong", ENTRIES, &ENTRIES[0]);
        assert_eq!(a.key, b.key);
        assert_eq!(a.tier, b.tier);
        assert_eq!(a.value, b.value);
    }

    #[test]
    fn tier_strings_roundtrip() {
        for tier in MatchTier::all() {
            let parsed: MatchTier = tier.as_str().parse().unwrap();
            assert_eq!(parsed, *tier);
        }
        assert!("bogus".parse::<MatchTier>().is_err());
    }
}
