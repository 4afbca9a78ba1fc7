//! Skill gap analyzer: compare a resume against a job description

mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, TaxonomyAction};
use config::Config;
use error::{Result, SkillGapError};
use input::manager::InputManager;
use log::{error, info};
use output::formatter::ReportGenerator;
use output::report::AnalysisReport;
use processing::analyzer::SkillGapAnalyzer;
use processing::taxonomy::SkillTaxonomy;
use std::process;
use std::sync::Arc;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // CLI override beats the configured taxonomy source. Either way the
    // vocabulary must load before any analysis can run.
    let taxonomy_path = cli.taxonomy.clone().or_else(|| config.taxonomy.path.clone());
    let taxonomy = match SkillTaxonomy::load(taxonomy_path.as_deref()) {
        Ok(taxonomy) => Arc::new(taxonomy),
        Err(e) => {
            error!("Failed to load skill taxonomy: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, taxonomy).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(
    command: Commands,
    config: Config,
    taxonomy: Arc<SkillTaxonomy>,
) -> Result<()> {
    match command {
        Commands::Analyze {
            job,
            resume,
            output,
            save,
            detailed,
        } => {
            info!("starting skill gap analysis");

            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| SkillGapError::InvalidInput(format!("Job description file: {}", e)))?;

            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| SkillGapError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format = match output {
                Some(format) => {
                    cli::parse_output_format(&format).map_err(SkillGapError::InvalidInput)?
                }
                None => config.output.format,
            };

            let mut input_manager =
                InputManager::new().with_max_bytes(config.processing.max_input_bytes);

            let job_text = input_manager.extract_text(&job).await?;
            let resume_text = input_manager.extract_text(&resume).await?;
            info!(
                "extracted {} bytes from job description, {} bytes from resume",
                job_text.len(),
                resume_text.len()
            );

            let analyzer = SkillGapAnalyzer::new(Arc::clone(&taxonomy))?;

            let started = Instant::now();
            let gap = analyzer.analyze(&job_text, &resume_text)?;
            let report = AnalysisReport::new(
                gap,
                job.to_string_lossy(),
                resume.to_string_lossy(),
                started.elapsed(),
            );

            let generator = ReportGenerator::new(&config.output)
                .with_format(output_format)
                .with_detailed(detailed || config.output.detailed);

            println!("{}", generator.render(&report)?);

            if let Some(path) = save {
                generator.save(&report, &path)?;
                println!("Report saved to {}", path.display());
            }
        }

        Commands::Taxonomy { action } => match action {
            TaxonomyAction::List { category } => match category {
                Some(name) => {
                    let category = taxonomy.category(&name).ok_or_else(|| {
                        SkillGapError::InvalidInput(format!("unknown category: {}", name))
                    })?;
                    println!("{} ({} skills):", category.name(), category.skills().len());
                    for skill in category.skills() {
                        println!("  - {}", skill);
                    }
                }
                None => {
                    println!("Skill taxonomy ({} skills):\n", taxonomy.skill_count());
                    for category in taxonomy.categories() {
                        println!("{}:", category.name());
                        for skill in category.skills() {
                            println!("  - {}", skill);
                        }
                        println!();
                    }
                }
            },
            TaxonomyAction::Categories => {
                for category in taxonomy.categories() {
                    println!("{}", category.name());
                }
            }
        },

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Configuration file: {}", Config::config_path().display());
                println!(
                    "Taxonomy source: {}",
                    config
                        .taxonomy
                        .path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "built-in".to_string())
                );
                println!("Max input size: {} bytes", config.processing.max_input_bytes);
                println!("Output format: {:?}", config.output.format);
                println!("Detailed output: {}", config.output.detailed);
                println!("Color output: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                Config::default().save()?;
                println!("Configuration reset to defaults");
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }
        },
    }

    Ok(())
}
