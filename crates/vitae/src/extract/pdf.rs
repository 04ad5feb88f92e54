//! PDF text extraction via lopdf.

use std::path::Path;

use crate::error::{Result, VitaeError};

/// Extract text from a PDF, page by page in page order.
///
/// Pages whose text cannot be decoded, or that contain only whitespace
/// (scanned images, decorative pages), are skipped. A file lopdf cannot
/// load at all is a parse error.
pub fn extract(bytes: &[u8], path: &Path) -> Result<String> {
    let doc = lopdf::Document::load_mem(bytes).map_err(|e| VitaeError::DocumentParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut pages: Vec<String> = Vec::new();
    for (&page_number, _) in doc.get_pages().iter() {
        match doc.extract_text(&[page_number]) {
            Ok(text) if !text.trim().is_empty() => pages.push(text.trim_end().to_string()),
            _ => continue,
        }
    }

    Ok(pages.join("\n"))
}
