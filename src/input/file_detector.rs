//! File type detection

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("pdf") => FileType::Pdf,
            Some("txt") => FileType::Text,
            Some("md") | Some("markdown") => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_by_extension() {
        assert_eq!(FileType::from_path(Path::new("resume.pdf")), FileType::Pdf);
        assert_eq!(FileType::from_path(Path::new("job.TXT")), FileType::Text);
        assert_eq!(FileType::from_path(Path::new("a/b/cv.markdown")), FileType::Markdown);
        assert_eq!(FileType::from_path(Path::new("archive.zip")), FileType::Unknown);
        assert_eq!(FileType::from_path(Path::new("no_extension")), FileType::Unknown);
    }
}
