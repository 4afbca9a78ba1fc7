//! Skill extraction from free text

use crate::error::{Result, SkillGapError};
use crate::processing::phrases::{HeuristicChunker, PhraseChunker};
use crate::processing::taxonomy::SkillTaxonomy;
use aho_corasick::AhoCorasick;
use log::debug;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Distinct lower-cased skill strings extracted from one document.
///
/// Backed by an ordered set so downstream output is reproducible.
pub type SkillSet = BTreeSet<String>;

/// A multi-word phrase is kept as a discovered skill only when it contains
/// one of these substrings.
const PHRASE_TRIGGERS: [&str; 5] = [
    "development",
    "analysis",
    "management",
    "programming",
    "framework",
];

/// Extracts the set of skills a document mentions.
///
/// Vocabulary matching is substring containment over the lower-cased text:
/// a skill like "go" also matches inside longer words. That permissiveness
/// is load-bearing for score stability; tightening it to word boundaries
/// changes every downstream match/missing set.
pub struct SkillExtractor {
    taxonomy: Arc<SkillTaxonomy>,
    vocabulary: AhoCorasick,
    chunker: Box<dyn PhraseChunker>,
}

impl SkillExtractor {
    /// Create an extractor with the default phrase chunker.
    pub fn new(taxonomy: Arc<SkillTaxonomy>) -> Result<Self> {
        Self::with_chunker(taxonomy, Box::new(HeuristicChunker::new()))
    }

    /// Create an extractor backed by a caller-supplied phrase chunker.
    pub fn with_chunker(
        taxonomy: Arc<SkillTaxonomy>,
        chunker: Box<dyn PhraseChunker>,
    ) -> Result<Self> {
        let vocabulary = AhoCorasick::new(taxonomy.vocabulary()).map_err(|e| {
            SkillGapError::Taxonomy(format!("failed to build vocabulary matcher: {}", e))
        })?;

        Ok(Self {
            taxonomy,
            vocabulary,
            chunker,
        })
    }

    /// Extract the skill set mentioned in `text`.
    ///
    /// Empty input yields an empty set. A failing phrase chunker propagates
    /// its error instead of degrading to vocabulary-only extraction.
    pub fn extract(&self, text: &str) -> Result<SkillSet> {
        let mut skills = SkillSet::new();

        if text.trim().is_empty() {
            return Ok(skills);
        }

        let lowered = text.to_lowercase();

        // Vocabulary pass: every pattern occurring anywhere in the text,
        // overlapping matches included ("java" inside "javascript" counts).
        for mat in self.vocabulary.find_overlapping_iter(&lowered) {
            let skill = &self.taxonomy.vocabulary()[mat.pattern().as_usize()];
            skills.insert(skill.clone());
        }

        // Phrase pass: multi-word chunks carrying a trigger term are kept
        // even when they are not in the vocabulary.
        for phrase in self.chunker.noun_phrases(&lowered)? {
            let phrase = phrase.trim();
            if phrase.split_whitespace().count() >= 2
                && PHRASE_TRIGGERS.iter().any(|t| phrase.contains(t))
            {
                skills.insert(phrase.to_string());
            }
        }

        debug!("extracted {} skills from {} bytes of text", skills.len(), text.len());
        Ok(skills)
    }

    pub fn taxonomy(&self) -> &SkillTaxonomy {
        &self.taxonomy
    }
}
