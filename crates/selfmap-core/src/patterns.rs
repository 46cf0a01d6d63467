use crate::matcher::{self, Resolution};

/// Relational and coping patterns mapped to the needs each leaves unmet.
/// "Secure Attachment" maps to the empty slice: nothing unmet.
pub const PATTERNS: &[(&str, &[&str])] = &[
    (
        "Defeat",
        &[
            "acceptance",
            "support",
            "compassion",
            "clarity",
            "self-respect",
            "understanding",
            "to matter",
            "growth",
        ],
    ),
    (
        "Perfectionism",
        &[
            "competence",
            "acceptance",
            "appreciation",
            "clarity",
            "safety",
            "stability",
            "self-respect",
            "to matter",
            "respect~self-respect",
            "ease",
            "order",
            "approval",
            "being esteemed",
        ],
    ),
    (
        "Rationalization",
        &[
            "self-respect",
            "safety",
            "acceptance",
            "understanding",
            "clarity",
            "compassion",
            "being right",
        ],
    ),
    (
        "Projection",
        &[
            "trust",
            "safety",
            "closeness",
            "empathy",
            "acceptance",
            "self-respect",
            "understanding",
            "being right",
            "stability",
        ],
    ),
    (
        "Comparative Disregard",
        &[
            "acceptance",
            "appreciation",
            "community",
            "self-respect",
            "stability",
            "safety",
            "understanding",
            "approval",
        ],
    ),
    (
        "Overcompensation",
        &[
            "acceptance",
            "love",
            "community",
            "self-respect",
            "security",
            "independence",
            "appreciation",
            "growth",
            "competence",
            "support",
            "contribution",
            "being esteemed",
        ],
    ),
    (
        "Surrendered Acceptance",
        &[
            "safety",
            "compassion",
            "closeness",
            "self-respect",
            "support",
            "clarity",
            "community",
            "peace",
        ],
    ),
    (
        "Avoidant Optimism",
        &[
            "safety",
            "trust",
            "clarity",
            "support",
            "companionship",
            "empathy",
            "understanding",
            "presence",
            "peace",
            "ease",
        ],
    ),
    (
        "Creative Stagnation",
        &[
            "self-expression",
            "inspiration",
            "freedom",
            "playfulness",
            "to matter",
            "competence",
            "clarity",
            "growth",
        ],
    ),
    (
        "Avoidance of Responsibility",
        &[
            "competence",
            "self-respect",
            "consistency",
            "integrity",
            "stability",
            "order",
            "safety",
            "acceptance",
        ],
    ),
    (
        "Persistent Self-Criticism",
        &[
            "acceptance",
            "compassion",
            "self-respect",
            "safety",
            "understanding",
            "clarity",
            "to matter",
            "competence",
        ],
    ),
    (
        "Low Confidence",
        &[
            "acceptance",
            "appreciation",
            "self-respect",
            "support",
            "companionship",
            "security",
            "encouragement",
            "clarity",
            "trust",
        ],
    ),
    (
        "Dependence on Others",
        &[
            "acceptance",
            "trust",
            "security",
            "stability",
            "belonging",
            "closeness",
            "companionship",
            "respect~self-respect",
            "support",
            "empathy",
            "autonomy",
        ],
    ),
    (
        "Lack of Empathy",
        &[
            "empathy",
            "understanding",
            "closeness",
            "community",
            "connection",
            "compassion",
            "companionship",
            "self-respect",
        ],
    ),
    (
        "Fear of Challenges",
        &[
            "safety",
            "growth",
            "acceptance",
            "clarity",
            "encouragement",
            "support",
            "competence",
            "challenge",
            "understanding",
        ],
    ),
    (
        "Lack of Practical Wisdom",
        &[
            "clarity",
            "competence",
            "understanding",
            "authenticity",
            "presence",
            "support",
        ],
    ),
    (
        "Emotional Detachment",
        &[
            "unconditional love",
            "compassion",
            "connection",
            "warmth",
            "empathy",
            "security",
            "stability",
        ],
    ),
    ("Secure Attachment", &[]),
    (
        "Anxious Attachment",
        &[
            "security",
            "stability",
            "closeness",
            "consistency",
            "acceptance",
            "support",
            "understanding",
            "trust",
            "love",
            "being wanted",
        ],
    ),
    (
        "Avoidant Attachment",
        &[
            "closeness",
            "connection",
            "empathy",
            "companionship",
            "nurturing",
            "acceptance",
            "safety",
            "respect~self-respect",
        ],
    ),
    (
        "Disorganized Attachment",
        &[
            "safety",
            "security",
            "stability",
            "trust",
            "consistency",
            "closeness",
            "compassion",
            "companionship",
            "self-respect",
        ],
    ),
    (
        "Emotional Neglect",
        &[
            "safety",
            "security",
            "closeness",
            "empathy",
            "nurturing",
            "belonging",
            "to matter",
            "compassion",
            "being wanted",
        ],
    ),
    (
        "Physical Neglect and Abuse",
        &[
            "nourishment",
            "safety",
            "shelter",
            "touch",
            "physical well-being",
            "consistency",
            "security",
            "stability",
            "support",
            "respect~self-respect",
        ],
    ),
    (
        "Inconsistent / Unpredictable Caregiving",
        &[
            "consistency",
            "trust",
            "security",
            "stability",
            "closeness",
            "empathy",
            "support",
            "community",
        ],
    ),
    (
        "Sexual Abuse",
        &[
            "safety",
            "autonomy",
            "respect~self-respect",
            "intimacy",
            "trust",
            "security",
            "self-respect",
        ],
    ),
    (
        "Emotional Abuse",
        &[
            "acceptance",
            "respect~self-respect",
            "empathy",
            "safety",
            "security",
            "stability",
            "compassion",
        ],
    ),
    (
        "Loss of a Caregiver",
        &[
            "belonging",
            "companionship",
            "support",
            "stability",
            "closeness",
            "mourning",
            "compassion",
            "community",
        ],
    ),
];

/// Fuzzy pattern lookup.
pub fn lookup(pattern: &str) -> Option<Resolution<'static, &'static [&'static str]>> {
    matcher::find(pattern, PATTERNS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchTier;

    #[test]
    fn twenty_seven_patterns() {
        assert_eq!(PATTERNS.len(), 27);
    }

    #[test]
    fn secure_attachment_has_no_unmet_needs() {
        let hit = lookup("Secure Attachment").unwrap();
        assert_eq!(hit.tier, MatchTier::Exact);
        assert!(hit.value.is_empty());
    }

    #[test]
    fn lookup_by_fragment() {
        // "perfect" is a fragment of exactly one key.
        let hit = lookup("perfect").unwrap();
        assert_eq!(hit.key, "Perfectionism");
        assert_eq!(hit.tier, MatchTier::KeyContainsInput);
    }

    #[test]
    fn ambiguous_fragment_takes_first_listed() {
        // Four patterns end in "Attachment"; "Secure Attachment" is listed
        // first among them.
        let hit = lookup("attachment").unwrap();
        assert_eq!(hit.key, "Secure Attachment");
    }

    #[test]
    fn unknown_pattern_is_none() {
        assert!(lookup("flourishing").is_none());
    }
}
