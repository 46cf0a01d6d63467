use crate::matcher::{self, Resolution};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// One vocabulary category with its ordered need words.
#[derive(Debug, Clone, Serialize)]
pub struct NeedCategory {
    pub name: &'static str,
    pub needs: &'static [&'static str],
}

/// The six need categories. A word may appear under more than one category;
/// [`category_of`] resolves to the first listing.
pub const CATEGORIES: &[NeedCategory] = &[
    NeedCategory {
        name: "Connection",
        needs: &[
            "acceptance",
            "affection",
            "appreciation",
            "belonging",
            "cooperation",
            "communication",
            "closeness",
            "community",
            "companionship",
            "compassion",
            "consideration",
            "consistency",
            "empathy",
            "inclusion",
            "intimacy",
            "love",
            "mutuality",
            "nurturing",
            "respect",
            "self-respect",
            "safety",
            "security",
            "stability",
            "support",
            "to know and be known",
            "to see and be seen",
            "to understand and be understood",
            "trust",
            "warmth",
        ],
    },
    NeedCategory {
        name: "Physical Well-Being",
        needs: &[
            "movement",
            "exercise",
            "sleep",
            "sexual expression",
            "safe-space",
            "shelter",
            "touch",
            "air",
            "food",
            "flow",
            "nutrition",
            "nourishment",
            "rest",
            "flexibility",
            "adaptability",
            "hydration",
            "elimination",
            "clearing",
            "growth",
            "progress",
            "elemental",
        ],
    },
    NeedCategory {
        name: "Honesty (Elucidation)",
        needs: &[
            "authenticity",
            "integrity",
            "presence",
            "joy",
            "humor",
            "fun",
            "adventure",
        ],
    },
    NeedCategory {
        name: "Peace",
        needs: &[
            "beauty",
            "communion",
            "ease",
            "equality",
            "harmony",
            "inspiration",
            "order",
        ],
    },
    NeedCategory {
        name: "Autonomy",
        needs: &["choice", "freedom", "independence", "space", "spontaneity"],
    },
    NeedCategory {
        name: "Meaning",
        needs: &[
            "awareness",
            "celebration of life",
            "challenge",
            "clarity",
            "competence",
            "consciousness",
            "contribution",
            "creativity",
            "discovery",
            "efficacy",
            "effectiveness",
            "growth",
            "hope",
            "learning",
            "mourning",
            "participation",
            "purpose",
            "self-expression",
            "stimulation",
            "to matter",
            "understanding",
            "safe space",
            "being liked",
            "being esteemed",
            "approval",
            "being wanted",
            "being right",
            "being loved",
            "companionship",
            "trust in something greater than self",
        ],
    },
];

// ---------------------------------------------------------------------------
// Signatures
// ---------------------------------------------------------------------------

/// How an unmet need shows up: the compulsion chases it, the aversion guards
/// against its lack.
#[derive(Debug, Clone, Serialize)]
pub struct NeedSignature {
    pub compulsion: &'static str,
    pub aversion: &'static str,
}

pub const SIGNATURES: &[(&str, NeedSignature)] = &[
    (
        "Acceptance",
        NeedSignature {
            compulsion: "Constantly seeking validation from others, changing oneself to fit in, people-pleasing",
            aversion: "Avoiding social situations, rejecting praise, self-isolation, avoiding closeness to prevent potential rejection",
        },
    ),
    (
        "Affection",
        NeedSignature {
            compulsion: "Excessive physical touch or intimacy-seeking, using flattery or charm",
            aversion: "Avoiding physical closeness or touch, dismissing emotional connections as unimportant",
        },
    ),
    (
        "Appreciation",
        NeedSignature {
            compulsion: "Constantly seeking acknowledgment, overworking to be noticed",
            aversion: "Avoiding situations where achievements are acknowledged, downplaying one's own efforts",
        },
    ),
    (
        "Belonging",
        NeedSignature {
            compulsion: "Joining multiple groups or communities, sacrificing individuality for acceptance",
            aversion: "Avoiding commitments to groups, rejecting labels or associations to maintain independence",
        },
    ),
    (
        "Compassion",
        NeedSignature {
            compulsion: "Overly involved in others' problems, acting as a rescuer or martyr",
            aversion: "Distancing from others' struggles, displaying emotional coldness, avoiding vulnerability",
        },
    ),
    (
        "Competence",
        NeedSignature {
            compulsion: "Taking on unnecessary tasks, perfectionism, overworking to prove oneself",
            aversion: "Avoiding new responsibilities, procrastinating on challenging tasks, rejecting situations where skills may be tested",
        },
    ),
    (
        "Closeness",
        NeedSignature {
            compulsion: "Seeking constant intimacy, oversharing, prioritizing time with others over self-care",
            aversion: "Maintaining emotional distance, avoiding deep relationships, isolating oneself emotionally",
        },
    ),
    (
        "Community",
        NeedSignature {
            compulsion: "Joining multiple groups, seeking strong group identity, needing group activities",
            aversion: "Rejecting group affiliation, refusing to engage in community events, avoiding teamwork",
        },
    ),
    (
        "Companionship",
        NeedSignature {
            compulsion: "Spending excessive time with others, always seeking a companion, neglecting self-time",
            aversion: "Preferring isolation, avoiding relationships, rejecting offers to join social activities",
        },
    ),
    (
        "Consistency",
        NeedSignature {
            compulsion: "Over-planning, rigid adherence to routines, controlling every aspect of the environment",
            aversion: "Avoiding structure, rejecting routines, embracing unpredictability",
        },
    ),
    (
        "Connection",
        NeedSignature {
            compulsion: "Over-sharing personal details, intense bonding with others quickly",
            aversion: "Avoiding intimacy, rejecting offers of closeness, disengaging from social settings",
        },
    ),
    (
        "Communication",
        NeedSignature {
            compulsion: "Talking excessively, oversharing, needing constant feedback or discussions",
            aversion: "Avoiding conversations, withholding opinions, avoiding sharing thoughts and feelings",
        },
    ),
    (
        "Creativity",
        NeedSignature {
            compulsion: "Engaging in constant creative projects, obsessive artistic expression",
            aversion: "Avoiding creative activities, self-censoring creative ideas, ignoring creative outlets",
        },
    ),
    (
        "Empathy",
        NeedSignature {
            compulsion: "Always prioritizing others' needs, excessive emotional involvement in others' lives",
            aversion: "Suppressing emotions, appearing indifferent, avoiding emotionally charged situations",
        },
    ),
    (
        "Freedom",
        NeedSignature {
            compulsion: "Seeking excessive autonomy, resisting authority, pursuing rebellious behavior",
            aversion: "Over-committing, avoiding independent decisions, conforming to avoid freedom-related challenges",
        },
    ),
    (
        "Growth",
        NeedSignature {
            compulsion: "Continuously seeking self-improvement, pursuing constant new challenges",
            aversion: "Avoiding challenges, stagnating, withdrawing from situations that require personal development",
        },
    ),
    (
        "Honesty",
        NeedSignature {
            compulsion: "Unfiltered, blunt communication, confessing excessively",
            aversion: "Withholding truth, avoiding transparency, diverting from vulnerable conversations",
        },
    ),
    (
        "Independence",
        NeedSignature {
            compulsion: "Refusing assistance, overly self-reliant, isolating to maintain autonomy",
            aversion: "Avoiding decision-making, relying heavily on others, yielding to group decisions to avoid responsibility",
        },
    ),
    (
        "Integrity",
        NeedSignature {
            compulsion: "Overly moralistic, rigid adherence to values, holding oneself and others to extreme standards",
            aversion: "Engaging in behaviors contradictory to one's beliefs, avoiding accountability, compromising values",
        },
    ),
    (
        "Intimacy",
        NeedSignature {
            compulsion: "Seeking frequent closeness, being overly vulnerable, relying on others for emotional regulation",
            aversion: "Avoiding vulnerable interactions, maintaining superficial relationships, rejecting emotional support",
        },
    ),
    (
        "Joy",
        NeedSignature {
            compulsion: "Excessive pursuit of pleasure, escapism, thrill-seeking behaviors",
            aversion: "Avoiding social or joyful situations, suppressing emotions, detaching from pleasure activities",
        },
    ),
    (
        "Love",
        NeedSignature {
            compulsion: "Constantly seeking relationships, excessive need for affirmation, over-giving",
            aversion: "Rejecting offers of love, resisting vulnerability, withdrawing from affectionate relationships",
        },
    ),
    (
        "Meaning",
        NeedSignature {
            compulsion: "Pursuing multiple causes, over-involvement in impactful projects, excessive identity with a purpose",
            aversion: "Avoiding commitments, rejecting significance in activities, cynicism toward purpose-driven initiatives",
        },
    ),
    (
        "Nurturing",
        NeedSignature {
            compulsion: "Overly care-taking, sacrificing own needs to nurture others",
            aversion: "Avoiding responsibility, distancing from caregiving roles, ignoring others' emotional needs",
        },
    ),
    (
        "Order",
        NeedSignature {
            compulsion: "Obsessive organizing, rigid structure adherence, over-controlling environment",
            aversion: "Rejecting structure, disordering intentionally, avoiding routines",
        },
    ),
    (
        "Presence",
        NeedSignature {
            compulsion: "Over-focus on mindfulness practices, excessive grounding routines, hyper-attentiveness to the moment",
            aversion: "Distraction-seeking, avoidance of being present, engaging in escapist behavior",
        },
    ),
    (
        "Purpose",
        NeedSignature {
            compulsion: "Overworking to feel useful, constantly seeking new goals, self-identifying with achievements",
            aversion: "Avoiding goals, dismissing meaningful activities, passivity, resisting long-term commitment",
        },
    ),
    (
        "Respect~Self-respect",
        NeedSignature {
            compulsion: "Seeking external validation, people-pleasing, demanding respect from others excessively",
            aversion: "Self-neglect, engaging in self-deprecating behavior, avoiding assertiveness in order to blend in",
        },
    ),
    (
        "Rest",
        NeedSignature {
            compulsion: "Excessive relaxation, indulgence in inactivity",
            aversion: "Overworking, neglecting self-care, avoiding rest, looking for conflict, snappy responses, guarded and suspicious attitude, unable to stop",
        },
    ),
    (
        "Safety",
        NeedSignature {
            compulsion: "Hyper-vigilance, strict control over environment, avoidance of unfamiliar or unpredictable situations",
            aversion: "Risk-seeking, embracing dangerous activities, disregarding potential consequences",
        },
    ),
    (
        "Security",
        NeedSignature {
            compulsion: "Hoarding resources, seeking stable routine, attaching to stable relationships excessively",
            aversion: "Neglecting planning, dismissing stability, embracing uncertainty",
        },
    ),
    (
        "Self-expression",
        NeedSignature {
            compulsion: "Oversharing, pursuing visible recognition for self-expression, constant creative display",
            aversion: "Withholding opinions, self-censorship, reluctance to share personal work",
        },
    ),
    (
        "Space",
        NeedSignature {
            compulsion: "Constantly seeking solitude, withdrawing to create space, avoiding commitments",
            aversion: "Over-socializing, rejecting alone time, merging closely with others",
        },
    ),
    (
        "Spontaneity",
        NeedSignature {
            compulsion: "Risk-taking, impulsivity, seeking constant new experiences",
            aversion: "Sticking to routines, rigidly structured plans, resisting new opportunities",
        },
    ),
    (
        "Stability",
        NeedSignature {
            compulsion: "Rigid adherence to known routines, clinging to relationships or environments",
            aversion: "Embracing chaos, avoiding predictable commitments, impulsively changing situations",
        },
    ),
    (
        "Support",
        NeedSignature {
            compulsion: "Excessively seeking advice, overly dependent on others for reassurance",
            aversion: "Rejecting help, isolating, insisting on self-reliance",
        },
    ),
    (
        "Trust",
        NeedSignature {
            compulsion: "Overly trusting, being overly open with others",
            aversion: "Withholding trust, suspicion, isolation",
        },
    ),
    (
        "Understanding",
        NeedSignature {
            compulsion: "Seeking constant validation for one's viewpoints, repeating oneself to feel understood",
            aversion: "Avoiding explanations, giving minimal responses, refraining from sharing beliefs",
        },
    ),
    (
        "Warmth",
        NeedSignature {
            compulsion: "Overly affectionate, frequent need for closeness and comfort",
            aversion: "Emotionally distant, cold or reserved behavior, avoidance of displays of affection",
        },
    ),
    (
        "To Matter",
        NeedSignature {
            compulsion: "Over-involvement in activities to seek significance, pursuing high-stakes roles",
            aversion: "Avoiding responsibilities, detaching from roles, self-isolation",
        },
    ),
    (
        "To See and Be Seen",
        NeedSignature {
            compulsion: "Over-sharing personal details, constantly seeking social visibility",
            aversion: "Avoiding attention, staying anonymous, downplaying achievements",
        },
    ),
    (
        "To Know and Be Known",
        NeedSignature {
            compulsion: "Persistent pursuit of information, excessive self-disclosure",
            aversion: "Withholding information, withdrawing from deeper conversations, maintaining superficial interactions",
        },
    ),
    (
        "To Understand and Be Understood",
        NeedSignature {
            compulsion: "Seeking constant reassurance for shared understanding, excessive explanation of beliefs, teaching others",
            aversion: "Avoiding discussions on beliefs, withholding opinions, resisting opportunities for meaningful discourse",
        },
    ),
    (
        "Being Right",
        NeedSignature {
            compulsion: "Over-asserting opinions, engaging in arguments to prove correctness",
            aversion: "Avoiding debates or discussions, conceding to others without sharing true beliefs",
        },
    ),
    (
        "Contribution",
        NeedSignature {
            compulsion: "Over-committing to community roles, taking on excess responsibilities",
            aversion: "Avoiding participation, rejecting roles that offer visibility or responsibility",
        },
    ),
    (
        "Flow",
        NeedSignature {
            compulsion: "Constantly seeking new experiences or intense focus activities to maintain momentum",
            aversion: "Avoiding challenging tasks, maintaining inertia in routine tasks, disengaging from activities that require concentration",
        },
    ),
    (
        "Mourning",
        NeedSignature {
            compulsion: "Frequently revisiting past memories, over-emphasizing loss or regrets, seeking out the company of sadness, worst case causing pain in others",
            aversion: "Avoiding reflective periods, refusing to discuss or acknowledge loss, rushing through grieving processes, inability to cry or interrupting processing",
        },
    ),
    (
        "Being Wanted",
        NeedSignature {
            compulsion: "Pursuing relationships excessively, seeking affirmation from others constantly",
            aversion: "Avoiding close relationships, disregarding others' affections, distancing from environments where one is accepted, not pursuing desires for fear of failure or rejection",
        },
    ),
    (
        "Ease",
        NeedSignature {
            compulsion: "Avoiding challenging or demanding activities, pursuing comfort activities",
            aversion: "Over-committing, constantly engaging in demanding activities, rejecting relaxation",
        },
    ),
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// First category listing `need` (exact word, case-insensitive).
pub fn category_of(need: &str) -> Option<&'static NeedCategory> {
    let needle = matcher::normalize(need);
    CATEGORIES
        .iter()
        .find(|c| c.needs.iter().any(|n| *n == needle))
}

/// Category by display name, case-insensitive.
pub fn category_named(name: &str) -> Option<&'static NeedCategory> {
    let needle = matcher::normalize(name);
    CATEGORIES
        .iter()
        .find(|c| matcher::normalize(c.name) == needle)
}

/// Fuzzy signature lookup.
pub fn signature(need: &str) -> Option<Resolution<'static, NeedSignature>> {
    matcher::find(need, SIGNATURES)
}

/// Every vocabulary word in category order. Words listed under two
/// categories appear twice.
pub fn all_needs() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().flat_map(|c| c.needs.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchTier;

    #[test]
    fn six_categories() {
        assert_eq!(CATEGORIES.len(), 6);
        assert_eq!(CATEGORIES[0].name, "Connection");
        assert_eq!(CATEGORIES[0].needs.len(), 29);
        assert_eq!(CATEGORIES[5].name, "Meaning");
        assert_eq!(CATEGORIES[5].needs.len(), 30);
    }

    #[test]
    fn forty_nine_signatures() {
        assert_eq!(SIGNATURES.len(), 49);
    }

    #[test]
    fn category_lookup_ignores_case() {
        let cat = category_of("Belonging").unwrap();
        assert_eq!(cat.name, "Connection");
    }

    #[test]
    fn duplicate_word_resolves_to_first_category() {
        // "growth" is listed under Physical Well-Being and Meaning.
        let cat = category_of("growth").unwrap();
        assert_eq!(cat.name, "Physical Well-Being");
        // "companionship" is listed under Connection and Meaning.
        let cat = category_of("companionship").unwrap();
        assert_eq!(cat.name, "Connection");
    }

    #[test]
    fn unknown_word_has_no_category() {
        assert!(category_of("xyzzy").is_none());
    }

    #[test]
    fn category_named_lookup() {
        assert_eq!(category_named("peace").unwrap().name, "Peace");
        assert!(category_named("nope").is_none());
    }

    #[test]
    fn signature_exact_and_fuzzy() {
        let hit = signature("rest").unwrap();
        assert_eq!(hit.key, "Rest");
        assert_eq!(hit.tier, MatchTier::Exact);

        let hit = signature("I want to matter to someone").unwrap();
        assert_eq!(hit.key, "To Matter");
        assert_eq!(hit.tier, MatchTier::InputContainsKey);

        assert!(signature("qqqq").is_none());
    }

    #[test]
    fn all_needs_keeps_duplicates() {
        let words: Vec<_> = all_needs().collect();
        assert_eq!(words.len(), 29 + 21 + 7 + 7 + 5 + 30);
        assert_eq!(words.iter().filter(|w| **w == "growth").count(), 2);
    }
}
