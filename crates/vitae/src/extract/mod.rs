//! Document text extraction.
//!
//! Two formats are recognized, by extension: `.pdf` (page-oriented) and
//! `.docx` (paragraph-oriented). Anything else is an
//! [`UnsupportedFormat`](crate::VitaeError::UnsupportedFormat) error.
//! Sub-units (pages, paragraphs) that yield no text are skipped rather
//! than failing the whole document; only a file the parser cannot open
//! at all is fatal.

mod docx;
mod pdf;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Result, VitaeError};

/// Recognized résumé file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "" => Err(VitaeError::UnsupportedFormat(format!(
                "'{}' has no file extension",
                path.display()
            ))),
            other => Err(VitaeError::UnsupportedFormat(format!(".{}", other))),
        }
    }

    /// Short label for display and metadata.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }
}

/// Whether a path has one of the recognized résumé extensions.
pub fn is_supported(path: &Path) -> bool {
    DocumentFormat::from_path(path).is_ok()
}

/// Metadata about an extracted source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// Original file path.
    pub path: PathBuf,
    /// SHA-256 of the raw file bytes.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Format label ("pdf" or "docx").
    pub format: String,
    /// Word count of the extracted text.
    pub word_count: usize,
}

/// Extract plain text from a résumé document.
///
/// Page/paragraph texts are joined with newlines, in document order.
pub fn extract_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)?;
    let bytes = read_bytes(path)?;
    extract_from_bytes(&bytes, format, path)
}

/// Extract text and capture source metadata in one pass.
pub fn extract_with_metadata(path: impl AsRef<Path>) -> Result<(String, SourceMetadata)> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)?;
    let bytes = read_bytes(path)?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let hash = format!("sha256:{:x}", hasher.finalize());

    let text = extract_from_bytes(&bytes, format, path)?;
    let metadata = SourceMetadata {
        path: path.to_path_buf(),
        hash,
        size_bytes: bytes.len() as u64,
        format: format.label().to_string(),
        word_count: text.split_whitespace().count(),
    };

    Ok((text, metadata))
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| VitaeError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn extract_from_bytes(bytes: &[u8], format: DocumentFormat, path: &Path) -> Result<String> {
    match format {
        DocumentFormat::Pdf => pdf::extract(bytes, path),
        DocumentFormat::Docx => docx::extract(bytes, path),
    }
}
