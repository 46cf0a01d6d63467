pub mod actions;
pub mod audit;
pub mod chart;
pub mod chinese;
pub mod config;
pub mod error;
pub mod io;
pub mod matcher;
pub mod needs;
pub mod numerology;
pub mod patterns;
pub mod scoring;
pub mod stats;
pub mod tzolkin;
pub mod vices;
pub mod zodiac;

pub use error::{Result, SelfmapError};
