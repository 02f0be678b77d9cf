//! Document → plain text. PDF and DOCX are supported.
//!
//! Parsing is CPU-bound and third-party parsers can panic on malformed input, so
//! `NativeExtractor` runs it inside `tokio::task::spawn_blocking`.

pub mod docx;
pub mod pdf;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Chooses the format from the upload's file extension (case-insensitive).
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let extension = std::path::Path::new(file_name)
            .extension()
            .and_then(|v| v.to_str())
            .map(|v| v.to_ascii_lowercase())?;

        match extension.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("DOCX archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("DOCX XML error: {0}")]
    Xml(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document contains no extractable text")]
    Empty,

    #[error("Extraction task failed: {0}")]
    TaskFailed(String),
}

/// Text extraction backend. Carried in `AppState` as `Arc<dyn DocumentExtractor>`.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(&self, format: DocumentFormat, data: Bytes)
        -> Result<String, ExtractionError>;
}

/// In-process extractor: `pdf-extract` for PDF, `zip` + `quick-xml` for DOCX.
pub struct NativeExtractor;

#[async_trait]
impl DocumentExtractor for NativeExtractor {
    async fn extract(
        &self,
        format: DocumentFormat,
        data: Bytes,
    ) -> Result<String, ExtractionError> {
        tokio::task::spawn_blocking(move || match format {
            DocumentFormat::Pdf => pdf::extract_pdf_text(&data),
            DocumentFormat::Docx => docx::extract_docx_text(&data),
        })
        .await
        .map_err(|e| ExtractionError::TaskFailed(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DocumentFormat::from_file_name("cv.pdf"),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(
            DocumentFormat::from_file_name("Jane Doe Resume.DOCX"),
            Some(DocumentFormat::Docx)
        );
        assert_eq!(
            DocumentFormat::from_file_name("archive.tar.pdf"),
            Some(DocumentFormat::Pdf)
        );
    }

    #[test]
    fn test_unsupported_formats() {
        assert_eq!(DocumentFormat::from_file_name("resume.doc"), None);
        assert_eq!(DocumentFormat::from_file_name("resume.txt"), None);
        assert_eq!(DocumentFormat::from_file_name("resume"), None);
        assert_eq!(DocumentFormat::from_file_name(""), None);
        assert_eq!(DocumentFormat::from_file_name(".pdf"), None);
    }

    #[tokio::test]
    async fn test_native_extractor_reads_docx() {
        let data = docx::build_test_docx(&["Jane Doe", "Experience"]);
        let text = NativeExtractor
            .extract(DocumentFormat::Docx, Bytes::from(data))
            .await
            .unwrap();
        assert_eq!(text, "Jane Doe\nExperience");
    }

    #[tokio::test]
    async fn test_native_extractor_rejects_garbage_pdf() {
        let result = NativeExtractor
            .extract(DocumentFormat::Pdf, Bytes::from_static(b"definitely not a pdf"))
            .await;
        assert!(result.is_err());
    }
}
