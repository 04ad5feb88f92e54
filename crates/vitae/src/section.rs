//! Section segmentation: slice a named section out of résumé text.

use regex::Regex;

/// Find the body of a section delimited by `headers` and `stops`.
///
/// Case-insensitive. The earliest header occurrence wins (ties between
/// alternatives at the same position resolve in list order, standard
/// leftmost-alternation semantics). The body runs from just past the
/// header (and an optional `:` or newline) to the first occurrence of
/// any stop label, or end of text, and may span multiple lines. No
/// matching header yields an empty string.
///
/// Header and stop labels are treated as literal text: they are escaped
/// before being compiled into a pattern, so user-configured labels
/// cannot produce a malformed or surprising expression.
pub fn find_section(text: &str, headers: &[String], stops: &[String]) -> String {
    let Some(header_re) = alternation(headers, "[:\n]?") else {
        return String::new();
    };

    let Some(m) = header_re.find(text) else {
        return String::new();
    };
    let tail = &text[m.end()..];

    // The regex crate has no lookahead; searching the tail for the first
    // stop occurrence is equivalent to the (?=stop) capture bound.
    let body = match alternation(stops, "").and_then(|stop_re| stop_re.find(tail)) {
        Some(stop) => &tail[..stop.start()],
        None => tail,
    };

    body.trim().to_string()
}

/// Compile a case-insensitive alternation of escaped literals, with an
/// optional trailing pattern. None if the list is empty.
fn alternation(labels: &[String], suffix: &str) -> Option<Regex> {
    if labels.is_empty() {
        return None;
    }
    let alternatives: Vec<String> = labels.iter().map(|l| regex::escape(l)).collect();
    let pattern = format!("(?i)(?:{}){}", alternatives.join("|"), suffix);
    // Escaped literals always compile.
    Regex::new(&pattern).ok()
}
