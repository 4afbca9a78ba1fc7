//! Skill taxonomy: the fixed category -> canonical skill vocabulary

use crate::error::{Result, SkillGapError};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Bucket name for missing skills that belong to no known category.
pub const OTHER_CATEGORY: &str = "other";

/// A named category with its canonical skill strings in declared order.
#[derive(Debug, Clone)]
pub struct SkillCategory {
    name: String,
    skills: Vec<String>,
}

impl SkillCategory {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

/// Immutable skill vocabulary, loaded once at startup and shared read-only.
///
/// Categories keep their declared order. A skill declared in more than one
/// category belongs to the first declaring category; the reverse index is
/// built in declared order so membership lookups stay deterministic.
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    categories: Vec<SkillCategory>,
    vocabulary: Vec<String>,
    category_index: HashMap<String, usize>,
}

#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    #[serde(rename = "category")]
    categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    name: String,
    skills: Vec<String>,
}

impl SkillTaxonomy {
    /// Build a taxonomy from (category name, skills) pairs in declared order.
    pub fn new<I, S, T>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<T>)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut categories = Vec::new();
        let mut vocabulary = Vec::new();
        let mut category_index = HashMap::new();

        for (name, skills) in entries {
            let name = name.into().trim().to_lowercase();
            if name.is_empty() {
                return Err(SkillGapError::Taxonomy(
                    "category with empty name".to_string(),
                ));
            }

            let index = categories.len();
            let mut normalized = Vec::new();
            for skill in skills {
                let skill = skill.into().trim().to_lowercase();
                if skill.is_empty() {
                    continue;
                }
                // First declaring category wins for duplicated skills; later
                // declarations are dropped so categories stay disjoint.
                if category_index.contains_key(&skill) {
                    continue;
                }
                category_index.insert(skill.clone(), index);
                vocabulary.push(skill.clone());
                normalized.push(skill);
            }

            if normalized.is_empty() {
                return Err(SkillGapError::Taxonomy(format!(
                    "category '{}' has no skills",
                    name
                )));
            }

            categories.push(SkillCategory {
                name,
                skills: normalized,
            });
        }

        if categories.is_empty() {
            return Err(SkillGapError::Taxonomy("taxonomy has no categories".to_string()));
        }

        Ok(Self {
            categories,
            vocabulary,
            category_index,
        })
    }

    /// The built-in default vocabulary.
    pub fn builtin() -> Result<Self> {
        Self::new(vec![
            (
                "programming",
                vec![
                    "python",
                    "java",
                    "javascript",
                    "c++",
                    "c#",
                    "ruby",
                    "go",
                    "rust",
                    "swift",
                    "kotlin",
                ],
            ),
            (
                "web_frameworks",
                vec![
                    "django", "flask", "react", "angular", "vue", "spring", "express",
                    "laravel",
                ],
            ),
            (
                "data_science",
                vec![
                    "machine learning",
                    "data analysis",
                    "statistics",
                    "pandas",
                    "numpy",
                    "tensorflow",
                    "pytorch",
                ],
            ),
            (
                "databases",
                vec!["sql", "mysql", "postgresql", "mongodb", "redis", "oracle"],
            ),
            (
                "cloud",
                vec!["aws", "azure", "google cloud", "docker", "kubernetes", "ci/cd"],
            ),
            (
                "tools",
                vec!["git", "jenkins", "linux", "bash", "rest api", "graphql"],
            ),
            (
                "soft_skills",
                vec![
                    "communication",
                    "leadership",
                    "problem solving",
                    "teamwork",
                    "agile",
                    "scrum",
                ],
            ),
        ])
    }

    /// Load a taxonomy from a TOML file with `[[category]]` entries.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SkillGapError::Taxonomy(format!(
                "cannot read taxonomy file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let parsed: TaxonomyFile = toml::from_str(&content).map_err(|e| {
            SkillGapError::Taxonomy(format!(
                "cannot parse taxonomy file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::new(
            parsed
                .categories
                .into_iter()
                .map(|entry| (entry.name, entry.skills)),
        )
    }

    /// Load from an optional file path, falling back to the built-in vocabulary.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&SkillCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Every distinct skill, in first-declared order. Pattern order here is
    /// the contract the extractor's matcher indexes into.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Name of the first declared category containing the skill.
    pub fn category_of(&self, skill: &str) -> Option<&str> {
        self.category_index
            .get(skill)
            .map(|&index| self.categories[index].name.as_str())
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.category_index.contains_key(skill)
    }

    pub fn skill_count(&self) -> usize {
        self.vocabulary.len()
    }
}
