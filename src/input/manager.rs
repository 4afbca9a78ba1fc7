//! Input manager routing files to the right text extractor

use crate::error::{Result, SkillGapError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    max_input_bytes: Option<usize>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
            max_input_bytes: None,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Reject documents whose extracted text exceeds `limit` bytes. The
    /// analysis core has no size cap of its own, so enforcement happens
    /// here, before extraction output is handed on.
    pub fn with_max_bytes(mut self, limit: usize) -> Self {
        self.max_input_bytes = Some(limit);
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_key = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_key) {
                info!("using cached text for {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(SkillGapError::InvalidInput(format!(
                "file does not exist: {}",
                path.display()
            )));
        }

        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("extracting text from PDF {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("reading plain text file {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("stripping markdown file {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(SkillGapError::UnsupportedFormat(format!(
                    "unsupported file type: {}",
                    path.display()
                )));
            }
        };

        if let Some(limit) = self.max_input_bytes {
            if text.len() > limit {
                return Err(SkillGapError::InvalidInput(format!(
                    "document '{}' is {} bytes, exceeding the {} byte limit",
                    path.display(),
                    text.len(),
                    limit
                )));
            }
        }

        if self.enable_cache {
            self.cache.insert(path_key, text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
