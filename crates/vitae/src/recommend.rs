//! Rule-based recommendation generation.
//!
//! A fixed rule list evaluated in order; each rule independently appends
//! zero or one advice string and no rule suppresses another. An empty
//! output is a meaningful result: nothing to improve.

use std::collections::HashSet;

use crate::config::AnalyzerConfig;

pub const ADVICE_EXPERIENCE_DETAIL: &str = "Provide more detail in your experience section.";
pub const ADVICE_ADD_CONTACTS: &str = "Add contact information (email/phone).";
pub const ADVICE_TOO_LONG: &str = "Résumé is lengthy; consider shortening.";

/// Inputs the rules inspect.
pub struct RuleInputs<'a> {
    pub missing_keywords: &'a HashSet<String>,
    pub experience_text: &'a str,
    pub contacts: &'a [String],
    pub resume_word_count: usize,
}

/// Evaluate all rules against the configured thresholds.
pub fn recommendations(config: &AnalyzerConfig, inputs: &RuleInputs<'_>) -> Vec<String> {
    let mut advice = Vec::new();

    if !inputs.missing_keywords.is_empty() {
        let mut missing: Vec<&str> = inputs.missing_keywords.iter().map(String::as_str).collect();
        missing.sort_unstable();
        advice.push(format!("Add missing skills: {}", missing.join(", ")));
    }

    let experience_words = inputs.experience_text.split_whitespace().count();
    if experience_words < config.experience_min_words {
        advice.push(ADVICE_EXPERIENCE_DETAIL.to_string());
    }

    if inputs.contacts.is_empty() {
        advice.push(ADVICE_ADD_CONTACTS.to_string());
    }

    // Strictly greater: a résumé at exactly the limit is fine.
    if inputs.resume_word_count > config.resume_max_words {
        advice.push(ADVICE_TOO_LONG.to_string());
    }

    advice
}
