//! Gap scoring between requirement and candidate skill sets

use crate::processing::extractor::SkillSet;
use crate::processing::taxonomy::{SkillTaxonomy, OTHER_CATEGORY};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Structured outcome of comparing a requirement skill set against a
/// candidate skill set.
///
/// Field names are a wire contract: downstream consumers index into
/// `missing_skills` and `match_score` by name. All lists are sorted so the
/// serialized result is byte-reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapResult {
    /// Similarity score in [0, 100], two-decimal precision.
    pub match_score: f64,
    pub requirement_skills: Vec<String>,
    pub candidate_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Missing skills grouped by taxonomy category, with an "other" bucket
    /// for skills outside the vocabulary.
    pub categorized_gaps: BTreeMap<String, Vec<String>>,
    pub interpretation: String,
}

impl GapResult {
    pub fn band(&self) -> MatchBand {
        MatchBand::from_score(self.match_score)
    }
}

/// Fixed interpretation bands over the match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchBand {
    Excellent,
    Good,
    Moderate,
    Low,
}

impl MatchBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            MatchBand::Excellent
        } else if score >= 60.0 {
            MatchBand::Good
        } else if score >= 40.0 {
            MatchBand::Moderate
        } else {
            MatchBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchBand::Excellent => "excellent match",
            MatchBand::Good => "good match",
            MatchBand::Moderate => "moderate match",
            MatchBand::Low => "low match",
        }
    }

    pub fn interpretation(&self) -> &'static str {
        match self {
            MatchBand::Excellent => "Excellent match! You're well-qualified for this position.",
            MatchBand::Good => "Good match. You have most required skills.",
            MatchBand::Moderate => "Moderate match. Consider developing some key missing skills.",
            MatchBand::Low => "Low match. Significant skill development needed.",
        }
    }
}

/// Pure scorer over two skill sets, sharing the read-only taxonomy.
///
/// The similarity metric is cosine over TF-IDF vectors of the two
/// space-joined skill lists, with the corpus being exactly those two
/// documents. With two documents IDF only separates shared terms (weight 1)
/// from one-sided terms (weight ln(3/2)+1), so the score is mostly driven
/// by shared-term count. The degenerate corpus is intentional; a general
/// TF-IDF over a larger corpus produces different numbers.
pub struct GapScorer {
    taxonomy: Arc<SkillTaxonomy>,
    token_pattern: Regex,
}

impl GapScorer {
    pub fn new(taxonomy: Arc<SkillTaxonomy>) -> Self {
        Self {
            taxonomy,
            // Tokens are runs of two or more word characters; shorter terms
            // ("r", the "c" of "c++") drop out of the vectors entirely.
            token_pattern: Regex::new(r"\b\w\w+\b").expect("invalid token pattern"),
        }
    }

    /// Score a requirement skill set against a candidate skill set.
    ///
    /// Never fails: numeric edge cases (both sets empty, one-sided empty,
    /// vectors degenerating to zero) all resolve to a score of 0.
    pub fn score(&self, requirement: &SkillSet, candidate: &SkillSet) -> GapResult {
        let match_score = if requirement.is_empty() && candidate.is_empty() {
            0.0
        } else {
            let requirement_doc = Self::join(requirement);
            let candidate_doc = Self::join(candidate);
            round2(self.cosine_tfidf(&requirement_doc, &candidate_doc) * 100.0)
        };

        let matched_skills: Vec<String> = requirement.intersection(candidate).cloned().collect();
        let missing_skills: Vec<String> = requirement.difference(candidate).cloned().collect();
        let categorized_gaps = self.categorize(&missing_skills);
        let interpretation = MatchBand::from_score(match_score).interpretation().to_string();

        GapResult {
            match_score,
            requirement_skills: requirement.iter().cloned().collect(),
            candidate_skills: candidate.iter().cloned().collect(),
            matched_skills,
            missing_skills,
            categorized_gaps,
            interpretation,
        }
    }

    fn join(skills: &SkillSet) -> String {
        skills.iter().cloned().collect::<Vec<_>>().join(" ")
    }

    /// Group missing skills by their first declared taxonomy category.
    ///
    /// Input arrives sorted, so every bucket's list is sorted too.
    fn categorize(&self, missing: &[String]) -> BTreeMap<String, Vec<String>> {
        let mut gaps: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for skill in missing {
            let category = self
                .taxonomy
                .category_of(skill)
                .unwrap_or(OTHER_CATEGORY)
                .to_string();
            gaps.entry(category).or_default().push(skill.clone());
        }

        gaps
    }

    fn tokenize(&self, doc: &str) -> Vec<String> {
        self.token_pattern
            .find_iter(doc)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Cosine similarity of smoothed TF-IDF vectors over the two-document
    /// corpus formed by `doc_a` and `doc_b`.
    fn cosine_tfidf(&self, doc_a: &str, doc_b: &str) -> f64 {
        let tokens_a = self.tokenize(doc_a);
        let tokens_b = self.tokenize(doc_b);

        let counts_a = term_counts(&tokens_a);
        let counts_b = term_counts(&tokens_b);

        if counts_a.is_empty() && counts_b.is_empty() {
            return 0.0;
        }

        // Smoothed IDF over n=2 documents: ln((1 + n) / (1 + df)) + 1
        let idf = |term: &str| {
            let df = counts_a.contains_key(term) as usize + counts_b.contains_key(term) as usize;
            (3.0 / (1.0 + df as f64)).ln() + 1.0
        };

        let mut dot = 0.0;
        let mut norm_a = 0.0;
        let mut norm_b = 0.0;

        for (&term, &tf) in &counts_a {
            let weight = tf as f64 * idf(term);
            norm_a += weight * weight;
            if let Some(&tf_b) = counts_b.get(term) {
                dot += weight * tf_b as f64 * idf(term);
            }
        }
        for (&term, &tf) in &counts_b {
            let weight = tf as f64 * idf(term);
            norm_b += weight * weight;
        }

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        dot / (norm_a.sqrt() * norm_b.sqrt())
    }
}

fn term_counts(tokens: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> GapScorer {
        GapScorer::new(Arc::new(SkillTaxonomy::builtin().unwrap()))
    }

    fn set(skills: &[&str]) -> SkillSet {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_both_empty_scores_zero() {
        let result = scorer().score(&set(&[]), &set(&[]));
        assert_eq!(result.match_score, 0.0);
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        assert!(result.categorized_gaps.is_empty());
        assert_eq!(
            result.interpretation,
            "Low match. Significant skill development needed."
        );
    }

    #[test]
    fn test_identical_sets_score_hundred() {
        let skills = set(&["python", "django", "sql", "git"]);
        let result = scorer().score(&skills, &skills);
        assert_eq!(result.match_score, 100.0);
        assert_eq!(result.matched_skills.len(), 4);
        assert!(result.missing_skills.is_empty());
        assert!(result.interpretation.starts_with("Excellent match"));
    }

    #[test]
    fn test_one_sided_empty_scores_zero() {
        let requirement = set(&["python", "git"]);
        let result = scorer().score(&requirement, &set(&[]));
        assert_eq!(result.match_score, 0.0);
        assert_eq!(result.missing_skills, vec!["git", "python"]);
        assert!(result.matched_skills.is_empty());
    }

    #[test]
    fn test_untokenizable_sets_score_zero() {
        // "c++" carries no run of two word characters, so both vectors are
        // empty and even a perfect overlap scores 0.
        let skills = set(&["c++"]);
        let result = scorer().score(&skills, &skills);
        assert_eq!(result.match_score, 0.0);
        assert_eq!(result.matched_skills, vec!["c++"]);
    }

    #[test]
    fn test_partial_overlap_score_value() {
        // Hand-computed: docs "git python" vs "python". Shared term weight 1,
        // one-sided weight ln(3/2)+1. cos = 1 / sqrt(1 + (ln(1.5)+1)^2).
        let result = scorer().score(&set(&["python", "git"]), &set(&["python"]));
        assert_eq!(result.match_score, 57.97);
        assert_eq!(result.matched_skills, vec!["python"]);
        assert_eq!(result.missing_skills, vec!["git"]);
    }

    #[test]
    fn test_disjoint_sets_score_zero() {
        let result = scorer().score(&set(&["python"]), &set(&["docker"]));
        assert_eq!(result.match_score, 0.0);
    }

    #[test]
    fn test_set_algebra() {
        let requirement = set(&["python", "django", "aws", "git"]);
        let candidate = set(&["python", "git", "linux"]);
        let result = scorer().score(&requirement, &candidate);

        assert_eq!(result.matched_skills, vec!["git", "python"]);
        assert_eq!(result.missing_skills, vec!["aws", "django"]);
        for skill in &result.missing_skills {
            assert!(!candidate.contains(skill));
        }
    }

    #[test]
    fn test_categorization_partitions_missing_skills() {
        let requirement = set(&["python", "django", "aws", "sql", "quantum basket weaving"]);
        let candidate = set(&["python"]);
        let result = scorer().score(&requirement, &candidate);

        let mut bucketed: Vec<&String> = result
            .categorized_gaps
            .values()
            .flatten()
            .collect();
        bucketed.sort();

        let mut missing: Vec<&String> = result.missing_skills.iter().collect();
        missing.sort();

        // Every missing skill lands in exactly one bucket and none is invented
        assert_eq!(bucketed, missing);
        assert_eq!(result.categorized_gaps["web_frameworks"], vec!["django"]);
        assert_eq!(result.categorized_gaps["cloud"], vec!["aws"]);
        assert_eq!(result.categorized_gaps["databases"], vec!["sql"]);
        assert_eq!(
            result.categorized_gaps[OTHER_CATEGORY],
            vec!["quantum basket weaving"]
        );
    }

    #[test]
    fn test_interpretation_thresholds() {
        let cases = [
            (80.0, "Excellent match"),
            (79.99, "Good match"),
            (60.0, "Good match"),
            (59.99, "Moderate match"),
            (40.0, "Moderate match"),
            (39.99, "Low match"),
            (0.0, "Low match"),
        ];

        for (score, prefix) in cases {
            let interpretation = MatchBand::from_score(score).interpretation();
            assert!(
                interpretation.starts_with(prefix),
                "score {} should interpret as {}, got {}",
                score,
                prefix,
                interpretation
            );
        }
    }

    #[test]
    fn test_result_is_deterministic() {
        let requirement = set(&["python", "django", "aws", "docker", "react"]);
        let candidate = set(&["python", "flask", "git"]);
        let scorer = scorer();

        let first = scorer.score(&requirement, &candidate);
        let second = scorer.score(&requirement, &candidate);
        assert_eq!(first, second);

        let mut sorted = first.missing_skills.clone();
        sorted.sort();
        assert_eq!(first.missing_skills, sorted);
    }

    #[test]
    fn test_multi_word_skills_share_tokens() {
        // "machine learning" and "learning analysis" share the token
        // "learning", so the score is nonzero without an exact skill match.
        let result = scorer().score(&set(&["machine learning"]), &set(&["learning analysis"]));
        assert!(result.match_score > 0.0);
        assert!(result.match_score < 100.0);
        assert!(result.matched_skills.is_empty());
    }
}
