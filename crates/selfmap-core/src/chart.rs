use crate::chinese::{self, Animal, ChineseElement};
use crate::stats::AttributeBlock;
use crate::tzolkin::{self, Kin};
use crate::zodiac::{self, Sign};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Point budget for the positive attributes of a composed block.
const STAT_BUDGET: i32 = 10;
const STAT_MIN: i32 = -2;
const STAT_MAX: i32 = 5;

/// Inputs for a composed chart. Moon and rising are optional; most
/// callers only know the birth date.
#[derive(Debug, Clone, Copy)]
pub struct ChartInput {
    pub birth_date: NaiveDate,
    pub moon: Option<&'static Sign>,
    pub rising: Option<&'static Sign>,
}

impl ChartInput {
    pub fn new(birth_date: NaiveDate) -> Self {
        Self {
            birth_date,
            moon: None,
            rising: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    pub birth_date: NaiveDate,
    pub sun: &'static Sign,
    pub moon: Option<&'static Sign>,
    pub rising: Option<&'static Sign>,
    pub animal: &'static Animal,
    pub element: ChineseElement,
    pub kin: Kin,
    pub stats: AttributeBlock,
}

/// Compose a chart from a birth date and optional moon/rising signs.
///
/// Attribute weights: sun in full, moon halved, rising quartered, the
/// Chinese animal and the day seal quartered, element and tone modifiers
/// in full. Each scaled contribution rounds before it lands. If the
/// positive attributes then exceed the 10-point budget the whole block
/// rescales, and every attribute clamps to [-2, 5].
pub fn compose(input: ChartInput) -> Chart {
    let sun = zodiac::sign_for_date(input.birth_date);
    let year = input.birth_date.year();
    let animal = chinese::animal_for_year(year);
    let element = chinese::element_for_year(year);
    let kin = tzolkin::kin_for_date(input.birth_date);

    let mut stats = sun.stats;
    if let Some(moon) = input.moon {
        stats.add_scaled(&moon.stats, 0.5);
    }
    if let Some(rising) = input.rising {
        stats.add_scaled(&rising.stats, 0.25);
    }
    stats.add_scaled(&animal.stats, 0.25);
    stats.add_modifier(element.modifier());
    stats.add_scaled(&kin.seal.stats, 0.25);
    stats.add_modifier(kin.tone.modifier);
    stats.scale_to_budget(STAT_BUDGET);
    stats.clamp_all(STAT_MIN, STAT_MAX);

    Chart {
        birth_date: input.birth_date,
        sun,
        moon: input.moon,
        rising: input.rising,
        animal,
        element,
        kin,
        stats,
    }
}
