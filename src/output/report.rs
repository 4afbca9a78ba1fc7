//! Analysis report envelope

use crate::processing::scorer::GapResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A [`GapResult`] plus run metadata.
///
/// The gap fields are flattened so consumers keep addressing
/// `match_score`, `missing_skills` and friends at the top level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub gap: GapResult,
    pub job_path: String,
    pub resume_path: String,
    pub processing_time_ms: u64,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn new(
        gap: GapResult,
        job_path: impl Into<String>,
        resume_path: impl Into<String>,
        elapsed: Duration,
    ) -> Self {
        Self {
            gap,
            job_path: job_path.into(),
            resume_path: resume_path.into(),
            processing_time_ms: elapsed.as_millis() as u64,
            generated_at: Utc::now(),
        }
    }
}
