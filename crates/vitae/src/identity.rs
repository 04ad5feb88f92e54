//! Candidate name and contact extraction.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::nlp::NlpModel;

/// Sentinel returned when no candidate name can be found.
pub const NAME_NOT_FOUND: &str = "Name Not Found";

/// How much of the document the entity model sees. Names sit at the top
/// of a résumé; the rest is noise for this purpose.
const NAME_SCAN_CHARS: usize = 1000;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[\s.-])?(?:\(?\d{3}\)?[\s.-])?\d{3}[\s.-]?\d{4}").unwrap()
});

/// Extract the candidate's full name. Never fails.
///
/// Order of attempts: first person entity with at least two tokens from
/// the model (run over the top of the document), then the first line with
/// two or more title-cased tokens, then the sentinel.
pub fn extract_name(model: &dyn NlpModel, text: &str) -> String {
    let head = head_chars(text, NAME_SCAN_CHARS);

    for candidate in model.person_names(head) {
        if candidate.split_whitespace().count() >= 2 {
            return candidate;
        }
    }

    for line in text.lines() {
        let titled = line
            .split_whitespace()
            .filter(|w| is_title_case(w))
            .count();
        if titled >= 2 {
            return line.trim().to_string();
        }
    }

    NAME_NOT_FOUND.to_string()
}

/// Extract emails and phone numbers as at most two display strings:
/// `"Emails: …"` then `"Phones: …"`. No matches in either category means
/// an empty list, not an error.
pub fn extract_contacts(text: &str) -> Vec<String> {
    let emails: BTreeSet<&str> = EMAIL.find_iter(text).map(|m| m.as_str()).collect();
    let phones: BTreeSet<&str> = PHONE.find_iter(text).map(|m| m.as_str()).collect();

    let mut contacts = Vec::new();
    if !emails.is_empty() {
        contacts.push(format!(
            "Emails: {}",
            emails.into_iter().collect::<Vec<_>>().join(", ")
        ));
    }
    if !phones.is_empty() {
        contacts.push(format!(
            "Phones: {}",
            phones.into_iter().collect::<Vec<_>>().join(", ")
        ));
    }
    contacts
}

/// First `n` chars of `text`, cut on a char boundary.
fn head_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// First char uppercase, remaining chars lowercase.
fn is_title_case(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) if c.is_uppercase() => chars.all(|c| c.is_lowercase()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{MockModel, RuleModel};

    #[test]
    fn test_name_from_model_entity() {
        let model = MockModel::with_persons(["Jane Q Doe"]);
        assert_eq!(extract_name(&model, "irrelevant text"), "Jane Q Doe");
    }

    #[test]
    fn test_single_token_entities_skipped() {
        let model = MockModel::with_persons(["Jane", "John Smith"]);
        assert_eq!(extract_name(&model, "x"), "John Smith");
    }

    #[test]
    fn test_fallback_to_title_case_line() {
        let model = MockModel::new();
        let text = "resume\nJohn Allen Smith\njohn@x.com\n";
        assert_eq!(extract_name(&model, text), "John Allen Smith");
    }

    #[test]
    fn test_sentinel_when_nothing_matches() {
        let model = MockModel::new();
        assert_eq!(extract_name(&model, "lowercase only\n555-1234\n"), NAME_NOT_FOUND);
    }

    #[test]
    fn test_rule_model_end_to_end_name() {
        let model = RuleModel::new();
        let text = "John Allen Smith\njohn@x.com\nSkills: Java\n";
        assert_eq!(extract_name(&model, text), "John Allen Smith");
    }

    #[test]
    fn test_name_scan_handles_multibyte_boundary() {
        let model = MockModel::new();
        let text = "é".repeat(2000);
        // Must not panic slicing into a multibyte char
        let _ = extract_name(&model, &text);
    }

    #[test]
    fn test_contacts_email_and_phone() {
        let text = "Contact: jane@example.com or (415) 555-2671";
        let contacts = extract_contacts(text);
        assert_eq!(
            contacts,
            vec![
                "Emails: jane@example.com".to_string(),
                "Phones: (415) 555-2671".to_string()
            ]
        );
    }

    #[test]
    fn test_contacts_deduplicated_and_sorted() {
        let text = "b@x.com a@x.com b@x.com";
        assert_eq!(extract_contacts(text), vec!["Emails: a@x.com, b@x.com"]);
    }

    #[test]
    fn test_no_contacts_is_empty_not_error() {
        assert!(extract_contacts("no contact information here at all").is_empty());
    }

    #[test]
    fn test_phone_variants() {
        for phone in ["415-555-2671", "415.555.2671", "+1 415 555 2671", "5551234"] {
            let contacts = extract_contacts(phone);
            assert_eq!(contacts.len(), 1, "should match {}", phone);
            assert!(contacts[0].starts_with("Phones: "));
        }
    }
}
