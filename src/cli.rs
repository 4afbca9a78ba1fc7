//! CLI interface for the skill gap analyzer

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skillgap")]
#[command(about = "Skill gap analysis between job descriptions and resumes")]
#[command(
    long_about = "Extract skills from a job description and a resume, score their overlap and report the missing skills by category"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Taxonomy TOML file overriding the built-in skill vocabulary
    #[arg(short, long, global = true)]
    pub taxonomy: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze the gap between a job description and a resume
    Analyze {
        /// Path to the job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Path to the resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save the report to a file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include full extracted skill sets in the report
        #[arg(short, long)]
        detailed: bool,
    },

    /// Inspect the loaded skill vocabulary
    Taxonomy {
        #[command(subcommand)]
        action: TaxonomyAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum TaxonomyAction {
    /// List skills, optionally restricted to one category
    List {
        /// Category name to list
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List category names in declared order
    Categories,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
