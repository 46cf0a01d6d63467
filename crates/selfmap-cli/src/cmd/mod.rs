use anyhow::Context;
use chrono::NaiveDate;

pub mod audit;
pub mod chart;
pub mod chinese;
pub mod config;
pub mod needs;
pub mod numerology;
pub mod pattern;
pub mod tzolkin;
pub mod vice;
pub mod zodiac;

pub(crate) fn parse_date(input: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date '{input}' (expected YYYY-MM-DD)"))
}
