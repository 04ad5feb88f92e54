//! DOCX text extraction.
//!
//! A `.docx` file is a zip archive; the body lives in `word/document.xml`.
//! Paragraphs are `<w:p>` elements and their visible text is the
//! concatenation of `<w:t>` runs. This reads only the text runs; styling,
//! tables-of-contents markup, and embedded objects are ignored.

use std::io::{Cursor, Read};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, VitaeError};

static PARAGRAPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<w:p[ >].*?</w:p>").unwrap());
static TEXT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<w:t[^>]*>(.*?)</w:t>").unwrap());

/// Extract text from a DOCX, one line per non-blank paragraph, in
/// document order.
pub fn extract(bytes: &[u8], path: &Path) -> Result<String> {
    let xml = read_document_xml(bytes, path)?;

    let mut paragraphs: Vec<String> = Vec::new();
    for para in PARAGRAPH.find_iter(&xml) {
        let mut text = String::new();
        for run in TEXT_RUN.captures_iter(para.as_str()) {
            text.push_str(&unescape_xml(&run[1]));
        }
        if !text.trim().is_empty() {
            paragraphs.push(text.trim().to_string());
        }
    }

    Ok(paragraphs.join("\n"))
}

fn read_document_xml(bytes: &[u8], path: &Path) -> Result<String> {
    let parse_err = |message: String| VitaeError::DocumentParse {
        path: path.to_path_buf(),
        message,
    };

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| parse_err(format!("not a docx archive: {}", e)))?;

    let mut entry = archive
        .by_name("word/document.xml")
        .map_err(|e| parse_err(format!("missing word/document.xml: {}", e)))?;

    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|e| parse_err(format!("unreadable word/document.xml: {}", e)))?;

    Ok(xml)
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
