//! Noun-phrase segmentation for heuristic skill discovery

use crate::error::Result;
use regex::Regex;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Produces noun-phrase-like chunks from a block of text.
///
/// One finite pass per call. Implementations backed by an external NLP
/// service must surface their failures through the `Result` so the caller
/// never mistakes a chunking failure for an absence of phrases.
pub trait PhraseChunker: Send + Sync {
    fn noun_phrases(&self, text: &str) -> Result<Vec<String>>;
}

/// Shallow-parse approximation of noun chunks.
///
/// Sentences are split on punctuation delimiters; inside a segment, runs of
/// consecutive content words form a phrase and any function word or bare
/// number terminates the current run. Output is lower-cased and trimmed.
pub struct HeuristicChunker {
    function_words: HashSet<&'static str>,
    delimiters: Regex,
}

impl Default for HeuristicChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicChunker {
    pub fn new() -> Self {
        Self {
            function_words: Self::function_words(),
            delimiters: Regex::new(r"[,;:()\[\]{}<>/\\|•·*&+=~—–-]").expect("invalid delimiter regex"),
        }
    }

    fn segment_phrases(&self, segment: &str, phrases: &mut Vec<String>) {
        let mut current: Vec<&str> = Vec::new();

        for word in segment.unicode_words() {
            let is_break = self.function_words.contains(word)
                || word.chars().all(|c| c.is_ascii_digit());

            if is_break {
                if !current.is_empty() {
                    phrases.push(current.join(" "));
                    current.clear();
                }
            } else {
                current.push(word);
            }
        }

        if !current.is_empty() {
            phrases.push(current.join(" "));
        }
    }

    /// Articles, conjunctions, prepositions, pronouns and auxiliaries that
    /// cannot appear inside a noun phrase of interest.
    fn function_words() -> HashSet<&'static str> {
        [
            "a", "an", "the", "and", "or", "but", "nor", "so", "yet", "if", "then",
            "than", "that", "this", "these", "those", "as", "at", "by", "for",
            "from", "in", "into", "of", "off", "on", "onto", "out", "over", "to",
            "under", "up", "with", "without", "about", "across", "after",
            "against", "along", "among", "around", "before", "behind", "below",
            "beneath", "beside", "between", "beyond", "during", "except",
            "inside", "near", "outside", "per", "since", "through", "toward",
            "towards", "until", "upon", "using", "via", "within", "i", "me", "my", "mine",
            "we", "us", "our", "ours", "you", "your", "yours", "he", "him", "his",
            "she", "her", "hers", "it", "its", "they", "them", "their", "theirs",
            "who", "whom", "whose", "which", "what", "is", "am", "are", "was",
            "were", "be", "been", "being", "do", "does", "did", "done", "have",
            "has", "had", "having", "will", "would", "shall", "should", "can",
            "could", "may", "might", "must", "not", "no", "some", "any", "all",
            "both", "each", "few", "more", "most", "other", "another", "such",
            "only", "own", "same", "very", "too", "also", "just", "there", "here",
            "when", "where", "while", "why", "how", "plus", "etc",
        ]
        .into_iter()
        .collect()
    }
}

impl PhraseChunker for HeuristicChunker {
    fn noun_phrases(&self, text: &str) -> Result<Vec<String>> {
        let mut phrases = Vec::new();

        for sentence in text.unicode_sentences() {
            let lowered = sentence.to_lowercase();
            for segment in self.delimiters.split(&lowered) {
                self.segment_phrases(segment, &mut phrases);
            }
        }

        Ok(phrases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(text: &str) -> Vec<String> {
        HeuristicChunker::new().noun_phrases(text).unwrap()
    }

    #[test]
    fn test_empty_text() {
        assert!(chunks("").is_empty());
        assert!(chunks("   \n\t ").is_empty());
    }

    #[test]
    fn test_function_words_split_phrases() {
        let phrases = chunks("Flask framework and REST API development");
        assert!(phrases.contains(&"flask framework".to_string()));
        assert!(phrases.contains(&"rest api development".to_string()));
    }

    #[test]
    fn test_punctuation_splits_phrases() {
        let phrases = chunks("Python, Django, REST APIs");
        assert!(phrases.contains(&"python".to_string()));
        assert!(phrases.contains(&"django".to_string()));
        assert!(phrases.contains(&"rest apis".to_string()));
    }

    #[test]
    fn test_sentence_boundaries_split_phrases() {
        let phrases = chunks("Python programming. Data analysis");
        assert!(phrases.contains(&"python programming".to_string()));
        assert!(phrases.contains(&"data analysis".to_string()));
        assert!(!phrases.iter().any(|p| p.contains("programming data")));
    }

    #[test]
    fn test_output_is_lowercased() {
        let phrases = chunks("Agile Project Management");
        assert!(phrases.contains(&"agile project management".to_string()));
    }

    #[test]
    fn test_numbers_break_phrases() {
        let phrases = chunks("5 years software development");
        assert!(phrases.contains(&"years software development".to_string()));
        assert!(!phrases.iter().any(|p| p.contains('5')));
    }
}
