use crate::stats::{Attribute, AttributeBlock};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// 2024-07-26, kin 1 of the reference cycle, as chrono days from CE.
const REFERENCE_DAYS_FROM_CE: i32 = 739_093;

/// Length of the Tzolkin round: 20 seals x 13 tones.
pub const CYCLE_DAYS: i32 = 260;

// ---------------------------------------------------------------------------
// Day seals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Seal {
    pub name: &'static str,
    pub glyph: &'static str,
    pub theme: &'static str,
    pub ability: &'static str,
    pub shadow: &'static str,
    pub stats: AttributeBlock,
}

/// The twenty day seals in cycle order, Red Dragon through Yellow Sun.
pub const SEALS: &[Seal] = &[
    Seal {
        name: "Red Dragon",
        glyph: "IMIX",
        theme: "Birth & Nurturing",
        ability: "Grounded Caregiver - Strongly protective and supportive, creating safe environments.",
        shadow: "Overprotective Stifler - May smother others, hindering independence.",
        stats: AttributeBlock::new(0, -1, 2, -1, 1, 0),
    },
    Seal {
        name: "White Wind",
        glyph: "IK",
        theme: "Spirit & Communication",
        ability: "Intuitive Connector - Naturally reads people and situations, fostering communication.",
        shadow: "Disconnected Speaker - Struggles to convey thoughts, leading to misunderstandings.",
        stats: AttributeBlock::new(-1, 0, -1, 0, 1, 2),
    },
    Seal {
        name: "Blue Night",
        glyph: "AKBAL",
        theme: "Dreams & Abundance",
        ability: "Visionary Problem-Solver - Introspective and creative in finding unique solutions.",
        shadow: "Escapist Dreamer - Retreats into daydreams, avoiding reality and practical solutions.",
        stats: AttributeBlock::new(-1, 0, -1, 2, 1, 0),
    },
    Seal {
        name: "Yellow Seed",
        glyph: "KAN",
        theme: "Flowering & Growth",
        ability: "Growth Enabler - Inspires others to reach their potential, excelling in mentorship.",
        shadow: "Pushy Visionary - Pressures others for results, becoming overly critical.",
        stats: AttributeBlock::new(-1, -1, 0, 0, 2, 1),
    },
    Seal {
        name: "Red Serpent",
        glyph: "CHICCHAN",
        theme: "Life-force & Survival",
        ability: "Instinctive Reactor - Quick to respond, attuned to physical and emotional signals.",
        shadow: "Reckless Instinct - Acts impulsively, misinterpreting signals and creating chaos.",
        stats: AttributeBlock::new(0, 2, 1, -1, 0, -1),
    },
    Seal {
        name: "White World-Bridger",
        glyph: "CIMI",
        theme: "Death & Equalization",
        ability: "Level-Headed Mediator - Finds common ground and bridges differences effectively.",
        shadow: "Indecisive Mediator - Struggles to take a stand, leading to prolonged tensions.",
        stats: AttributeBlock::new(-1, -1, 0, 1, 2, 0),
    },
    Seal {
        name: "Blue Hand",
        glyph: "MANIK",
        theme: "Accomplishment & Healing",
        ability: "Practical Healer - Resourceful and dependable, adept at finding healing solutions.",
        shadow: "Overbearing Fixer - Takes on others' burdens, fostering dependency.",
        stats: AttributeBlock::new(-1, -1, 1, 0, 2, 0),
    },
    Seal {
        name: "Yellow Star",
        glyph: "LAMAT",
        theme: "Elegance & Beauty",
        ability: "Harmony Creator - Sensitive to aesthetics, creating a sense of calm.",
        shadow: "Superficial Aesthetician - Prioritizes appearances over substance, lacking meaningful connections.",
        stats: AttributeBlock::new(-1, 1, -1, 0, 0, 2),
    },
    Seal {
        name: "Red Moon",
        glyph: "MULAC",
        theme: "Universal Water & Purification",
        ability: "Emotional Cleanser - Skilled in processing emotions, supporting renewal.",
        shadow: "Overly Emotional - May become engulfed by feelings, hindering objectivity.",
        stats: AttributeBlock::new(-1, -1, 0, 0, 2, 1),
    },
    Seal {
        name: "White Dog",
        glyph: "OC",
        theme: "Heart & Loyalty",
        ability: "Unshakeable Loyalty - Deep commitment and trustworthiness.",
        shadow: "Overly Attached - Can become clingy, stifling others' independence.",
        stats: AttributeBlock::new(0, -1, 1, -1, 0, 2),
    },
    Seal {
        name: "Blue Monkey",
        glyph: "CHUEN",
        theme: "Magic & Play",
        ability: "Dynamic Improviser - Creative and flexible, excels in quick-thinking scenarios.",
        shadow: "Irresponsible Trickster - May take playfulness too far, causing disruption.",
        stats: AttributeBlock::new(-1, 2, -1, 0, 0, 1),
    },
    Seal {
        name: "Yellow Human",
        glyph: "EB",
        theme: "Free Will & Influence",
        ability: "Empowerment Catalyst - Motivates others towards independence and autonomy.",
        shadow: "Manipulative Influence - Can unintentionally coerce others into decisions.",
        stats: AttributeBlock::new(-1, 0, -1, 1, 0, 2),
    },
    Seal {
        name: "Red Skywalker",
        glyph: "BEN",
        theme: "Exploration & Space",
        ability: "Boundary Pusher - Explores new ideas and challenges norms.",
        shadow: "Reckless Adventurer - May leap into new experiences without planning.",
        stats: AttributeBlock::new(1, 2, -1, 0, -1, 0),
    },
    Seal {
        name: "White Wizard",
        glyph: "IX",
        theme: "Enchantment & Timelessness",
        ability: "Wise Sage - Provides profound insights with quiet authority.",
        shadow: "Approval-Seeking - May rely on external validation for self-worth.",
        stats: AttributeBlock::new(-1, -1, 0, 1, 2, 0),
    },
    Seal {
        name: "Blue Eagle",
        glyph: "MEN",
        theme: "Vision & Creation",
        ability: "Strategic Visionary - Sees long-term outcomes and inspires direction.",
        shadow: "Detached Planner - Can become too focused on vision, neglecting present details.",
        stats: AttributeBlock::new(-1, 0, -1, 2, 1, 0),
    },
    Seal {
        name: "Yellow Warrior",
        glyph: "CIB",
        theme: "Intelligence & Questioning",
        ability: "Analytical Strategist - Delves deeply into analysis and problem-solving.",
        shadow: "Cynical Critic - Can become overly critical, stifling creativity.",
        stats: AttributeBlock::new(1, -1, 0, 2, 0, -1),
    },
    Seal {
        name: "Red Earth",
        glyph: "CABAN",
        theme: "Navigation & Evolution",
        ability: "Grounded Guide - Offers practical advice and mentorship through transitions.",
        shadow: "Stubbornly Fixed - May resist change, hindering growth.",
        stats: AttributeBlock::new(0, -1, 2, 0, 1, -1),
    },
    Seal {
        name: "White Mirror",
        glyph: "ETZNAB",
        theme: "Reflection & Endlessness",
        ability: "Reflective Observer - Encourages self-reflection and introspection.",
        shadow: "Self-Critical - Can become overly harsh on themselves and others.",
        stats: AttributeBlock::new(-1, -1, 0, 1, 2, 0),
    },
    Seal {
        name: "Blue Storm",
        glyph: "CAUAC",
        theme: "Self-Generation & Catalysis",
        ability: "Self-Renewer - Adaptable and transformative, sparking change in others.",
        shadow: "Chaotic Disruptor - May create confusion or instability in their pursuit of change.",
        stats: AttributeBlock::new(-1, 2, 1, 0, -1, 0),
    },
    Seal {
        name: "Yellow Sun",
        glyph: "AHAU",
        theme: "Enlightenment & Universal Fire",
        ability: "Inspiring Luminary - Radiates warmth and insight, uplifting others.",
        shadow: "Overbearing Optimist - Can overlook practical issues due to excessive positivity.",
        stats: AttributeBlock::new(0, -1, -1, 0, 1, 2),
    },
];

// ---------------------------------------------------------------------------
// Galactic tones
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Tone {
    pub name: &'static str,
    pub number: u32,
    pub theme: &'static str,
    pub approach: &'static str,
    pub shadow: &'static str,
    pub modifier: &'static [(Attribute, i32)],
}

/// The thirteen galactic tones, Magnetic through Cosmic.
pub const TONES: &[Tone] = &[
    Tone {
        name: "Magnetic",
        number: 1,
        theme: "Unity",
        approach: "Unified Influence - Draws people together effortlessly, cultivating a sense of unity and purpose in groups.",
        shadow: "Coercive Unifier - May pressure others into conformity, undermining individual expression and autonomy.",
        modifier: &[(Attribute::Charisma, 1)],
    },
    Tone {
        name: "Lunar",
        number: 2,
        theme: "Relationships & Polarity",
        approach: "Balanced Opposer - Skilled at handling contrasting views, seeing both sides and helping find balance in conflict.",
        shadow: "Conflict Avoider - Can ignore real issues in relationships, leading to unresolved tensions and deeper conflicts.",
        modifier: &[(Attribute::Wisdom, 1)],
    },
    Tone {
        name: "Electric",
        number: 3,
        theme: "Rhythm & Change",
        approach: "Dynamic Initiator - Instinctively brings energy and momentum to projects, excelling in dynamic environments where quick adaptability is needed.",
        shadow: "Erratic Initiator - May introduce change without consideration, creating confusion and instability.",
        modifier: &[(Attribute::Dexterity, 1)],
    },
    Tone {
        name: "Self-Existing",
        number: 4,
        theme: "Measure & Discipline",
        approach: "Disciplined Planner - Grounded and methodical, skilled in maintaining focus and organization, often serving as the backbone in structured settings.",
        shadow: "Rigid Planner - Can become overly strict and inflexible, stifling creativity and adaptability.",
        modifier: &[(Attribute::Constitution, 1)],
    },
    Tone {
        name: "Overtone",
        number: 5,
        theme: "Center & Core Purpose",
        approach: "Purpose-Driven Leader - Centers actions around core values, inspiring others to connect with their own purpose and contribute meaningfully.",
        shadow: "Dogmatic Leader - May impose their vision on others without regard for their needs or perspectives.",
        modifier: &[(Attribute::Charisma, 1), (Attribute::Strength, 1)],
    },
    Tone {
        name: "Rhythmic",
        number: 6,
        theme: "Organic Balance",
        approach: "Harmonizer - Naturally attuned to rhythms and cycles, they bring balance and flow to situations, excelling in roles requiring adaptability.",
        shadow: "Inconsistent Harmonizer - Can struggle to maintain balance, leading to chaotic or erratic dynamics.",
        modifier: &[(Attribute::Wisdom, 1), (Attribute::Dexterity, 1)],
    },
    Tone {
        name: "Resonant",
        number: 7,
        theme: "Mystical Power",
        approach: "Insightful Mediator - Able to tune into subtleties and intuitively connect people, facilitating deeper understanding and empathy.",
        shadow: "Detached Mediator - May become so focused on intuition that they fail to address concrete issues, leaving others confused.",
        modifier: &[(Attribute::Wisdom, 1), (Attribute::Charisma, 1)],
    },
    Tone {
        name: "Galactic",
        number: 8,
        theme: "Harmonic Resonance",
        approach: "Consensus Builder - Skilled in fostering harmony and teamwork, building cohesion by aligning group goals with individual motivations.",
        shadow: "Idealistic Consensus Builder - Can become unrealistic in seeking harmony, neglecting necessary conflict and growth.",
        modifier: &[(Attribute::Charisma, 1), (Attribute::Intelligence, 1)],
    },
    Tone {
        name: "Solar",
        number: 9,
        theme: "Greater Cycles & Expansion",
        approach: "Expansive Thinker - Has a natural knack for long-term planning, can see opportunities for growth, making them ideal strategists.",
        shadow: "Overly Ambitious Visionary - May overlook immediate needs in pursuit of grand visions, leading to frustration among team members.",
        modifier: &[(Attribute::Intelligence, 1), (Attribute::Wisdom, 1)],
    },
    Tone {
        name: "Planetary",
        number: 10,
        theme: "Manifestation",
        approach: "Grounded Realist - Focused on practical outcomes and tangible results, excelling in roles that demand clear, measurable progress.",
        shadow: "Narrow Focused Realist - Can become overly concerned with practicality, stifling creativity and broader possibilities.",
        modifier: &[(Attribute::Constitution, 1), (Attribute::Strength, 1)],
    },
    Tone {
        name: "Spectral",
        number: 11,
        theme: "Dissonance & Letting Go",
        approach: "Release Facilitator - Skilled in helping others let go of unproductive habits or beliefs, often creating transformative change through reflection.",
        shadow: "Dismissive Release Facilitator - May encourage letting go without adequate support, leaving individuals feeling abandoned.",
        modifier: &[(Attribute::Wisdom, 1), (Attribute::Dexterity, 1)],
    },
    Tone {
        name: "Crystal",
        number: 12,
        theme: "Complex Stability",
        approach: "Systematic Stabilizer - Brings order to chaos, adept at establishing stable systems and clear protocols, often a key organizer in group efforts.",
        shadow: "Rigid Stabilizer - Can impose order to the detriment of creativity and flexibility, leading to resentment.",
        modifier: &[(Attribute::Intelligence, 1), (Attribute::Constitution, 1)],
    },
    Tone {
        name: "Cosmic",
        number: 13,
        theme: "Universal Movement",
        approach: "Visionary Conductor - Sees the broader picture and influences people towards a shared vision, acting as a guide for collective progress.",
        shadow: "Detached Visionary - May become too focused on the big picture, losing sight of individual needs and contributions.",
        modifier: &[(Attribute::Charisma, 1), (Attribute::Intelligence, 1)],
    },
];

// ---------------------------------------------------------------------------
// Kin lookup
// ---------------------------------------------------------------------------

/// A day in the 260-day round: kin number plus its seal and tone.
#[derive(Debug, Clone, Serialize)]
pub struct Kin {
    pub number: u32,
    pub seal: &'static Seal,
    pub tone: &'static Tone,
}

/// Kin for a calendar date. Total for any date, past or future: days
/// before the reference wrap backwards through the cycle.
pub fn kin_for_date(date: NaiveDate) -> Kin {
    let days = date.num_days_from_ce() - REFERENCE_DAYS_FROM_CE;
    let index = days.rem_euclid(CYCLE_DAYS) as usize;
    Kin {
        number: index as u32 + 1,
        seal: &SEALS[index % 20],
        tone: &TONES[index % 13],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn twenty_seals_thirteen_tones() {
        assert_eq!(SEALS.len(), 20);
        assert_eq!(SEALS[0].name, "Red Dragon");
        assert_eq!(SEALS[19].name, "Yellow Sun");
        assert_eq!(TONES.len(), 13);
        for (i, tone) in TONES.iter().enumerate() {
            assert_eq!(tone.number, i as u32 + 1);
        }
    }

    #[test]
    fn reference_date_is_kin_one() {
        let kin = kin_for_date(date(2024, 7, 26));
        assert_eq!(kin.number, 1);
        assert_eq!(kin.seal.name, "Red Dragon");
        assert_eq!(kin.tone.name, "Magnetic");
    }

    #[test]
    fn day_after_reference_advances_both_wheels() {
        let kin = kin_for_date(date(2024, 7, 27));
        assert_eq!(kin.number, 2);
        assert_eq!(kin.seal.name, "White Wind");
        assert_eq!(kin.tone.name, "Lunar");
    }

    #[test]
    fn day_before_reference_wraps_to_kin_260() {
        let kin = kin_for_date(date(2024, 7, 25));
        assert_eq!(kin.number, 260);
        assert_eq!(kin.seal.name, "Yellow Sun");
        assert_eq!(kin.tone.name, "Cosmic");
    }

    #[test]
    fn cycle_repeats_after_260_days() {
        let kin = kin_for_date(date(2025, 4, 12));
        assert_eq!(kin.number, 1);
        assert_eq!(kin.seal.name, "Red Dragon");
    }

    #[test]
    fn seal_and_tone_wheels_run_independently() {
        // 159 days after the reference: seal index 19, tone index 3.
        let kin = kin_for_date(date(2025, 1, 1));
        assert_eq!(kin.number, 160);
        assert_eq!(kin.seal.name, "Yellow Sun");
        assert_eq!(kin.tone.name, "Self-Existing");
    }

    #[test]
    fn distant_past_dates_still_resolve() {
        let kin = kin_for_date(date(1970, 1, 1));
        assert!(kin.number >= 1 && kin.number <= 260);
    }
}
