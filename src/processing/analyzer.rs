//! Analysis engine combining skill extraction and gap scoring

use crate::error::Result;
use crate::processing::extractor::{SkillExtractor, SkillSet};
use crate::processing::phrases::PhraseChunker;
use crate::processing::scorer::{GapResult, GapScorer};
use crate::processing::taxonomy::SkillTaxonomy;
use log::info;
use std::sync::Arc;

/// End-to-end skill gap analysis: two text blobs in, one [`GapResult`] out.
///
/// Holds no mutable state; the shared taxonomy is read-only, so one
/// analyzer can serve concurrent requests without coordination.
pub struct SkillGapAnalyzer {
    extractor: SkillExtractor,
    scorer: GapScorer,
}

impl SkillGapAnalyzer {
    /// Build an analyzer over the given taxonomy with the default chunker.
    pub fn new(taxonomy: Arc<SkillTaxonomy>) -> Result<Self> {
        Ok(Self {
            extractor: SkillExtractor::new(Arc::clone(&taxonomy))?,
            scorer: GapScorer::new(taxonomy),
        })
    }

    /// Build an analyzer with a caller-supplied phrase chunker.
    pub fn with_chunker(
        taxonomy: Arc<SkillTaxonomy>,
        chunker: Box<dyn PhraseChunker>,
    ) -> Result<Self> {
        Ok(Self {
            extractor: SkillExtractor::with_chunker(Arc::clone(&taxonomy), chunker)?,
            scorer: GapScorer::new(taxonomy),
        })
    }

    /// Compare a job description against a resume.
    pub fn analyze(&self, job_description: &str, resume_text: &str) -> Result<GapResult> {
        let requirement = self.extract(job_description)?;
        info!("extracted {} skills from job description", requirement.len());

        let candidate = self.extract(resume_text)?;
        info!("extracted {} skills from resume", candidate.len());

        let result = self.scorer.score(&requirement, &candidate);
        info!(
            "match score {:.2} ({} matched, {} missing)",
            result.match_score,
            result.matched_skills.len(),
            result.missing_skills.len()
        );

        Ok(result)
    }

    /// Extract the skill set from a single document.
    pub fn extract(&self, text: &str) -> Result<SkillSet> {
        self.extractor.extract(text)
    }
}
