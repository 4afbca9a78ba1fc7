//! Text extraction from supported file formats

use crate::error::{Result, SkillGapError};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            SkillGapError::PdfExtraction(format!(
                "failed to extract text from '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path).await?;
        Ok(Self::to_plain_text(&markdown))
    }
}

impl MarkdownExtractor {
    /// Strip markup by walking parser events and keeping only text content.
    fn to_plain_text(markdown: &str) -> String {
        let mut text = String::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Text(chunk) | Event::Code(chunk) => text.push_str(&chunk),
                Event::SoftBreak | Event::HardBreak => text.push(' '),
                Event::End(Tag::Paragraph)
                | Event::End(Tag::Heading(..))
                | Event::End(Tag::Item) => text.push('\n'),
                _ => {}
            }
        }

        text.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_stripping() {
        let markdown = "# John Doe\n\n**Software Engineer** with `Python` skills.\n\n- React\n- Node.js\n";
        let text = MarkdownExtractor::to_plain_text(markdown);

        assert!(text.contains("John Doe"));
        assert!(text.contains("Software Engineer"));
        assert!(text.contains("Python"));
        assert!(text.contains("React"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
        assert!(!text.contains('`'));
        assert!(!text.contains('-'));
    }

    #[tokio::test]
    async fn test_plain_text_extraction() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"Python and SQL experience").unwrap();

        let text = PlainTextExtractor.extract(file.path()).await.unwrap();
        assert_eq!(text, "Python and SQL experience");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let result = PlainTextExtractor.extract(Path::new("/no/such/file.txt")).await;
        assert!(matches!(result, Err(SkillGapError::Io(_))));
    }
}
