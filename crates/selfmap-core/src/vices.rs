use crate::matcher::{self, Resolution};
use serde::Serialize;

/// A vice here is an emotional coping posture, not a moral failure: a
/// habitual response to unmet needs. `chronic` names long-standing deficits,
/// `acute` the immediate triggers.
#[derive(Debug, Clone, Serialize)]
pub struct Vice {
    pub definition: &'static str,
    pub chronic: &'static [&'static str],
    pub acute: &'static [&'static str],
}

/// Glossary and need mappings, alphabetical by key.
pub const VICES: &[(&str, Vice)] = &[
    (
        "Anger",
        Vice {
            definition: "Intense displeasure or irritation in response to perceived injustice, insult, or frustration.",
            chronic: &["Autonomy", "Acceptance", "Peace", "Communication", "Respect~Self-respect"],
            acute: &["Compassion", "Consistency", "Safety", "Trust", "Clarity"],
        },
    ),
    (
        "Anguish",
        Vice {
            definition: "Severe emotional distress, often from prolonged suffering or loss.",
            chronic: &["Belonging", "Love", "Companionship", "Closeness", "To know and be known"],
            acute: &["Support", "Empathy", "To matter", "Compassion", "Inclusion"],
        },
    ),
    (
        "Animosity",
        Vice {
            definition: "Strong hostility or active dislike toward others.",
            chronic: &["Acceptance", "Compassion", "Empathy", "Consistency", "Closeness"],
            acute: &["Understanding", "Appreciation", "Belonging", "Community", "Warmth"],
        },
    ),
    (
        "Anxiety",
        Vice {
            definition: "Persistent worry, tension, or unease, often about uncertain outcomes or potential threats.",
            chronic: &["Safety", "Stability", "Security", "Clarity", "Support"],
            acute: &["Trust", "Acceptance", "Harmony", "Peace", "Consistency"],
        },
    ),
    (
        "Avarice",
        Vice {
            definition: "Extreme greed for material wealth or gain, often at the expense of others.",
            chronic: &["Safety", "Stability", "Security", "Support", "Growth"],
            acute: &["Independence", "Control", "Clarity", "Physical well-being", "Nourishment"],
        },
    ),
    (
        "Bitterness",
        Vice {
            definition: "Resentful or cynical feelings stemming from perceived unfair treatment or unmet expectations.",
            chronic: &["Appreciation", "Respect~Self-respect", "Compassion", "Belonging", "Acceptance"],
            acute: &["Inclusion", "Understanding", "Consistency", "Warmth", "Support"],
        },
    ),
    (
        "Desperation",
        Vice {
            definition: "A state of intense need or hopelessness that leads to irrational or extreme actions.",
            chronic: &["Support", "Companionship", "Security", "Safety", "Stability"],
            acute: &["Autonomy", "Consistency", "Closeness", "Empathy", "Trust"],
        },
    ),
    (
        "Disappointment",
        Vice {
            definition: "Sadness or dissatisfaction from unmet expectations or goals.",
            chronic: &["Trust", "Stability", "Consistency", "Peace", "Order"],
            acute: &["Clarity", "Support", "Acceptance", "Warmth", "Belonging"],
        },
    ),
    (
        "Disgust",
        Vice {
            definition: "Strong aversion or repulsion, often toward something offensive or morally wrong.",
            chronic: &["Empathy", "Acceptance", "Trust", "Safety", "Compassion"],
            acute: &["Community", "Closeness", "Warmth", "Harmony", "Respect~Self-respect"],
        },
    ),
    (
        "Elitism",
        Vice {
            definition: "A belief in or behavior that favors a perceived superior group over others.",
            chronic: &["Respect~Self-respect", "Approval", "Competence", "Autonomy", "Belonging"],
            acute: &["To be seen", "Recognition", "Safety", "Worthiness", "Inclusion"],
        },
    ),
    (
        "Envy",
        Vice {
            definition: "Resentful longing for others' qualities, achievements, or possessions.",
            chronic: &["Appreciation", "Belonging", "Being liked", "Respect~Self-respect", "Inclusion"],
            acute: &["Competence", "Recognition", "Appreciation", "To be seen", "Approval"],
        },
    ),
    (
        "Fear",
        Vice {
            definition: "Intense emotional response to perceived danger, threat, or harm.",
            chronic: &["Security", "Trust", "Safety", "Stability", "Consistency"],
            acute: &["Autonomy", "Clarity", "Support", "Order", "Harmony"],
        },
    ),
    (
        "Frustration",
        Vice {
            definition: "Feelings of annoyance and helplessness from unmet goals or obstructed efforts.",
            chronic: &["Clarity", "Competence", "Understanding", "Communication", "Autonomy"],
            acute: &["Order", "Harmony", "Consistency", "Trust", "Efficacy"],
        },
    ),
    (
        "Gluttony",
        Vice {
            definition: "Overindulgence in or excessive consumption of food, wealth, or other resources.",
            chronic: &["Nourishment", "Physical well-being", "Comfort", "Safety", "Support"],
            acute: &["Flexibility", "Control", "Order", "Consistency", "Independence"],
        },
    ),
    (
        "Greed",
        Vice {
            definition: "Intense desire for more than one needs or deserves, often concerning wealth, status, or power.",
            chronic: &["Stability", "Security", "Safety", "Support", "Closeness"],
            acute: &["Freedom", "Autonomy", "Flexibility", "Choice", "Independence"],
        },
    ),
    (
        "Guilt",
        Vice {
            definition: "A sense of remorse or responsibility for perceived wrongs or mistakes.",
            chronic: &["Acceptance", "Self-respect", "Understanding", "Honesty", "Safety"],
            acute: &["Consistency", "Support", "Clarity", "Security", "Trust"],
        },
    ),
    (
        "Hate",
        Vice {
            definition: "Extreme aversion, animosity, or hostility toward a person, group, or concept.",
            chronic: &["Love", "Compassion", "Inclusion", "Understanding", "Closeness"],
            acute: &["Belonging", "Empathy", "Trust", "Acceptance", "Mutuality"],
        },
    ),
    (
        "Impatience",
        Vice {
            definition: "Intolerance of delay, opposition, or others' needs, often leading to irritability.",
            chronic: &["Order", "Peace", "Autonomy", "Clarity", "Consistency"],
            acute: &["Harmony", "Trust", "Respect~Self-respect", "Stability", "Communication"],
        },
    ),
    (
        "Inferiority",
        Vice {
            definition: "Feelings of inadequacy or low self-worth in comparison to others.",
            chronic: &["Competence", "Self-respect", "Acceptance", "Appreciation", "Respect~Self-respect"],
            acute: &["Approval", "Trust", "Recognition", "Inclusion", "Belonging"],
        },
    ),
    (
        "Intolerance",
        Vice {
            definition: "Inability or unwillingness to accept differing views, practices, or people.",
            chronic: &["Peace", "Harmony", "Compassion", "Empathy", "Order"],
            acute: &["Consistency", "Understanding", "Respect~Self-respect", "Inclusion", "Community"],
        },
    ),
    (
        "Lust",
        Vice {
            definition: "Intense, often obsessive, desire for physical gratification or pleasure.",
            chronic: &["Intimacy", "Affection", "Closeness", "Connection", "To know and be known"],
            acute: &["Approval", "Acceptance", "Being wanted", "Consistency", "Physical well-being"],
        },
    ),
    (
        "Masochism",
        Vice {
            definition: "The tendency to derive pleasure from one's own suffering, pain, or humiliation. Often takes the form of a belief that nature is here to hurt you, or that suffering is right.",
            chronic: &["Compassion", "Acceptance", "Connection", "Belonging", "Support"],
            acute: &["Closeness", "Safety", "Trust", "To matter", "Self-respect"],
        },
    ),
    (
        "Rage / Outrage",
        Vice {
            definition: "Uncontrolled anger or wrath, often with an urge to take destructive action. To be enraged is to be consumed by a storm of anger that overrides reason, typically tied to a personal wound or offense. To be outraged is to experience indignation grounded in moral reasoning, often tied to a broader cause or value system.",
            chronic: &["Safety", "Respect~Self-respect", "Consistency", "Communication", "Peace"],
            acute: &["Autonomy", "Order", "Security", "Clarity", "Trust"],
        },
    ),
    (
        "Resentment",
        Vice {
            definition: "Lingering negative feelings toward someone or something perceived as unfair or unjust.",
            chronic: &["Appreciation", "Acceptance", "Fairness", "Trust", "Stability"],
            acute: &["To be seen", "Respect~Self-respect", "Understanding", "Safety", "Compassion"],
        },
    ),
    (
        "Shame",
        Vice {
            definition: "Painful feelings of humiliation or worthlessness due to perceived personal failings.",
            chronic: &["Self-respect", "Intimacy", "Safety", "Closeness", "Belonging"],
            acute: &["Acceptance", "Compassion", "Approval", "To be seen", "Respect~Self-respect"],
        },
    ),
    (
        "Sloth",
        Vice {
            definition: "Reluctance to exert effort or laziness, especially in responsibilities or duties.",
            chronic: &["Growth (and progress)", "Purpose", "Challenge", "Self-expression", "Clarity"],
            acute: &["Contribution", "Support", "Motivation", "Inspiration", "Freedom", "Community"],
        },
    ),
    (
        "Worthlessness",
        Vice {
            definition: "A sense of lacking value, significance, or usefulness.",
            chronic: &["Competence", "Self-respect", "Appreciation", "Acceptance", "Purpose"],
            acute: &["To matter", "Belonging", "Closeness", "Respect~Self-respect", "Trust"],
        },
    ),
    (
        "Wrath",
        Vice {
            definition: "Intense anger with a strong desire for retribution or punishment.",
            chronic: &["Self-respect", "Autonomy", "Security", "Stability", "Integrity"],
            acute: &["Competence", "Trust", "Support", "Consistency", "Honesty"],
        },
    ),
];

/// Fuzzy vice lookup.
pub fn lookup(vice: &str) -> Option<Resolution<'static, Vice>> {
    matcher::find(vice, VICES)
}
