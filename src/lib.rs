//! Skill gap analyzer library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, SkillGapError};
pub use processing::analyzer::SkillGapAnalyzer;
pub use processing::scorer::GapResult;
pub use processing::taxonomy::SkillTaxonomy;
