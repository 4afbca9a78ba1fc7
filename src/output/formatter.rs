//! Output formatters for gap analysis reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::output::report::AnalysisReport;
use crate::processing::scorer::MatchBand;
use colored::{Color, Colorize};
use std::path::Path;

/// Renders an [`AnalysisReport`] into one output format.
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
}

pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter;

/// Dispatches to the formatter matching the configured output format.
pub struct ReportGenerator {
    format: OutputFormat,
    detailed: bool,
    use_colors: bool,
}

fn band_color(band: MatchBand) -> Color {
    match band {
        MatchBand::Excellent => Color::Green,
        MatchBand::Good => Color::Cyan,
        MatchBand::Moderate => Color::Yellow,
        MatchBand::Low => Color::Red,
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn push_skill_list(out: &mut String, title: &str, skills: &[String]) {
        out.push_str(&format!("\n{} ({}):\n", title, skills.len()));
        if skills.is_empty() {
            out.push_str("  (none)\n");
        }
        for skill in skills {
            out.push_str(&format!("  - {}\n", skill));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let gap = &report.gap;
        let band = gap.band();
        let mut out = String::new();

        out.push_str("Skill Gap Analysis\n");
        out.push_str("==================\n");
        out.push_str(&format!(
            "Match score: {} ({})\n",
            self.paint(&format!("{:.2}%", gap.match_score), band_color(band)),
            band.label()
        ));
        out.push_str(&format!("{}\n", gap.interpretation));

        Self::push_skill_list(&mut out, "Matched skills", &gap.matched_skills);
        Self::push_skill_list(&mut out, "Missing skills", &gap.missing_skills);

        if !gap.categorized_gaps.is_empty() {
            out.push_str("\nGaps by category:\n");
            for (category, skills) in &gap.categorized_gaps {
                out.push_str(&format!("  {}: {}\n", category, skills.join(", ")));
            }
        }

        if self.detailed {
            Self::push_skill_list(&mut out, "Job description skills", &gap.requirement_skills);
            Self::push_skill_list(&mut out, "Resume skills", &gap.candidate_skills);

            out.push_str(&format!(
                "\nJob description: {}\nResume: {}\nProcessing time: {}ms\n",
                report.job_path, report.resume_path, report.processing_time_ms
            ));
        }

        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let gap = &report.gap;
        let mut out = String::new();

        out.push_str("# Skill Gap Analysis\n\n");
        out.push_str(&format!(
            "**Match score:** {:.2}% ({})\n\n",
            gap.match_score,
            gap.band().label()
        ));
        out.push_str(&format!("> {}\n\n", gap.interpretation));

        out.push_str("## Matched skills\n\n");
        if gap.matched_skills.is_empty() {
            out.push_str("_None_\n");
        }
        for skill in &gap.matched_skills {
            out.push_str(&format!("- {}\n", skill));
        }

        out.push_str("\n## Missing skills\n\n");
        if gap.missing_skills.is_empty() {
            out.push_str("_None_\n");
        }
        for (category, skills) in &gap.categorized_gaps {
            out.push_str(&format!("- **{}**: {}\n", category, skills.join(", ")));
        }

        out.push_str(&format!(
            "\n---\n\nGenerated {} from `{}` and `{}` in {}ms.\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.job_path,
            report.resume_path,
            report.processing_time_ms
        ));

        Ok(out)
    }
}

impl ReportGenerator {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            format: config.format,
            detailed: config.detailed,
            use_colors: config.color_output,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    pub fn render(&self, report: &AnalysisReport) -> Result<String> {
        match self.format {
            OutputFormat::Console => {
                ConsoleFormatter::new(self.use_colors, self.detailed).format_report(report)
            }
            OutputFormat::Json => JsonFormatter::new(true).format_report(report),
            OutputFormat::Markdown => MarkdownFormatter.format_report(report),
        }
    }

    pub fn save(&self, report: &AnalysisReport, path: &Path) -> Result<()> {
        // Saved files never carry terminal escape codes
        let content = match self.format {
            OutputFormat::Console => {
                ConsoleFormatter::new(false, self.detailed).format_report(report)?
            }
            _ => self.render(report)?,
        };
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::scorer::GapScorer;
    use crate::processing::taxonomy::SkillTaxonomy;
    use std::sync::Arc;
    use std::time::Duration;

    fn sample_report() -> AnalysisReport {
        let scorer = GapScorer::new(Arc::new(SkillTaxonomy::builtin().unwrap()));
        let requirement = ["python", "django", "aws"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let candidate = ["python", "git"].iter().map(|s| s.to_string()).collect();

        AnalysisReport::new(
            scorer.score(&requirement, &candidate),
            "job.txt",
            "resume.txt",
            Duration::from_millis(5),
        )
    }

    #[test]
    fn test_console_format() {
        let report = sample_report();
        let out = ConsoleFormatter::new(false, true).format_report(&report).unwrap();

        assert!(out.contains("Match score"));
        assert!(out.contains("python"));
        assert!(out.contains("django"));
        assert!(out.contains("Gaps by category"));
        assert!(out.contains("Processing time"));
    }

    #[test]
    fn test_json_format_preserves_contract_fields() {
        let report = sample_report();
        let out = JsonFormatter::new(false).format_report(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert!(parsed["match_score"].is_number());
        assert!(parsed["missing_skills"].is_array());
        assert!(parsed["categorized_gaps"].is_object());
        assert!(parsed["interpretation"].is_string());
    }

    #[test]
    fn test_markdown_format() {
        let report = sample_report();
        let out = MarkdownFormatter.format_report(&report).unwrap();

        assert!(out.starts_with("# Skill Gap Analysis"));
        assert!(out.contains("## Missing skills"));
        assert!(out.contains("**web_frameworks**"));
    }

    #[test]
    fn test_save_strips_colors() {
        let report = sample_report();
        let generator = ReportGenerator {
            format: OutputFormat::Console,
            detailed: false,
            use_colors: true,
        };

        let file = tempfile::NamedTempFile::new().unwrap();
        generator.save(&report, file.path()).unwrap();

        let saved = std::fs::read_to_string(file.path()).unwrap();
        assert!(!saved.contains('\u{1b}'));
        assert!(saved.contains("Match score"));
    }
}
