//! Corpus documents and the text-extraction seam.
//!
//! Decoding proprietary document formats happens outside this crate. An
//! extractor hands the miner either plain text or an error per document.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when turning one document into text.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Failed to read document: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Document is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Unsupported document format: {0}")]
    Unsupported(String),
}

/// One corpus document, tagged with where it came from.
#[derive(Debug)]
pub struct Document {
    /// Source path, for diagnostics only
    pub source: PathBuf,

    /// Extracted text, or why extraction failed
    pub content: Result<String, ExtractionError>,
}

impl Document {
    /// A successfully extracted document.
    pub fn text(source: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            content: Ok(text.into()),
        }
    }

    /// A document whose extraction failed.
    pub fn unreadable(source: impl Into<PathBuf>, error: ExtractionError) -> Self {
        Self {
            source: source.into(),
            content: Err(error),
        }
    }

    /// The extracted text; an unreadable document contributes empty text.
    pub fn into_text(self) -> String {
        match self.content {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(source = %self.source.display(), error = %e, "Skipping unreadable document");
                String::new()
            }
        }
    }
}

/// Turns a file on disk into plain text.
pub trait TextExtractor {
    /// Extract the text of the document at `path`.
    fn extract(&self, path: &Path) -> Result<String, ExtractionError>;

    /// Extract into a [`Document`], keeping the failure instead of returning it.
    fn document(&self, path: &Path) -> Document {
        Document {
            source: path.to_path_buf(),
            content: self.extract(path),
        }
    }
}

/// Extractor for files that already contain UTF-8 plain text.
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8(bytes)?)
    }
}
