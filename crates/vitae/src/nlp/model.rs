//! The NLP model seam.
//!
//! The pipeline never talks to a concrete model directly: it holds an
//! `Arc<dyn NlpModel>` injected at construction, so callers control the
//! model's lifecycle and tests can substitute a stub. The model is loaded
//! once, read-only afterwards, and safe to share across threads.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::lemma::lemmatize;
use super::stopwords::is_stop_word;

/// Inference interface the pipeline depends on.
///
/// Implementations must be immutable after construction: the analyzer
/// shares one instance across all calls (and threads) without locking.
pub trait NlpModel: Send + Sync {
    /// Person-name candidates found in `text`, in document order.
    fn person_names(&self, text: &str) -> Vec<String>;

    /// Lower-cased lemmas of noun-like, non-stop-word tokens in `text`,
    /// in document order. Duplicates are preserved.
    fn content_lemmas(&self, text: &str) -> Vec<String>;

    /// Implementation name, for display.
    fn name(&self) -> &str;
}

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Verbs that hiring copy uses constantly and the stop-word list does
/// not cover. Checked after lemmatization.
static NON_NOUN_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "seek", "want", "apply", "join", "become", "bring", "make", "take", "get", "give",
        "know", "let", "mean", "put", "say", "see", "think", "try", "hire", "offer",
    ]
    .into_iter()
    .collect()
});

/// Gerund-shaped words that are ordinary nouns in résumés and job ads,
/// exempt from the `-ing` participle rule.
static ING_NOUNS: &[&str] = &[
    "engineering",
    "marketing",
    "accounting",
    "consulting",
    "training",
    "testing",
    "licensing",
    "manufacturing",
    "advertising",
];

/// Noun-likeness heuristic for a lemmatized lower-case token.
///
/// Rejects the common-verb list plus `-ing`/`-ed` forms long enough to
/// be gerunds or participles rather than short nouns ("string", "speed"
/// stay; "looking", "managed" go).
fn is_noun_like(lemma: &str) -> bool {
    if NON_NOUN_WORDS.contains(lemma) {
        return false;
    }
    if let Some(stem) = lemma.strip_suffix("ing") {
        if stem.chars().count() >= 4 && !ING_NOUNS.contains(&lemma) {
            return false;
        }
    }
    if let Some(stem) = lemma.strip_suffix("ed") {
        if stem.chars().count() >= 4 {
            return false;
        }
    }
    true
}

/// Rule-based model shipped as the default.
///
/// Person entities are runs of two or more consecutive title-cased
/// alphabetic tokens on a single line. Content terms are alphabetic
/// non-stop-word tokens reduced to their lemma and kept only when they
/// pass the noun-likeness rules. No weights to load, so construction is
/// free; the trait seam still lets callers swap in a heavier tagger.
#[derive(Debug, Default)]
pub struct RuleModel;

impl RuleModel {
    pub fn new() -> Self {
        Self
    }
}

/// A token that looks like one word of a personal name: first char
/// uppercase alphabetic, remaining chars lowercase alphabetic.
fn is_name_token(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_uppercase() && c.is_alphabetic() => {}
        _ => return false,
    }
    let mut rest_len = 0;
    for c in chars {
        if !c.is_lowercase() || !c.is_alphabetic() {
            return false;
        }
        rest_len += 1;
    }
    rest_len >= 1
}

impl NlpModel for RuleModel {
    fn person_names(&self, text: &str) -> Vec<String> {
        let mut names = Vec::new();
        for line in text.lines() {
            let mut run: Vec<&str> = Vec::new();
            for token in line.split_whitespace() {
                if is_name_token(token) {
                    run.push(token);
                } else {
                    if run.len() >= 2 {
                        names.push(run.join(" "));
                    }
                    run.clear();
                }
            }
            if run.len() >= 2 {
                names.push(run.join(" "));
            }
        }
        names
    }

    fn content_lemmas(&self, text: &str) -> Vec<String> {
        WORD.find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .filter(|t| t.chars().all(|c| c.is_alphabetic()))
            .filter(|t| !is_stop_word(t))
            .map(|t| lemmatize(&t))
            .filter(|t| is_noun_like(t))
            .collect()
    }

    fn name(&self) -> &str {
        "rule-based"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_names_found_in_order() {
        let model = RuleModel::new();
        let names = model.person_names("John Allen Smith\nSenior Engineer at Acme Corp\n");
        assert_eq!(names[0], "John Allen Smith");
        assert!(names.contains(&"Acme Corp".to_string()));
    }

    #[test]
    fn test_single_capitalized_token_is_not_a_name() {
        let model = RuleModel::new();
        assert!(model.person_names("Skills\nPython\n").is_empty());
    }

    #[test]
    fn test_all_caps_tokens_are_not_names() {
        let model = RuleModel::new();
        assert!(model.person_names("CURRICULUM VITAE\n").is_empty());
    }

    #[test]
    fn test_content_lemmas_strip_stop_words_and_plurals() {
        let model = RuleModel::new();
        let lemmas =
            model.content_lemmas("looking for python and java engineer with systems experience");
        assert!(lemmas.contains(&"python".to_string()));
        assert!(lemmas.contains(&"system".to_string()));
        assert!(!lemmas.contains(&"and".to_string()));
        assert!(!lemmas.contains(&"with".to_string()));
        assert!(!lemmas.contains(&"looking".to_string()));
    }

    #[test]
    fn test_gerunds_and_participles_are_not_content_lemmas() {
        let model = RuleModel::new();
        let lemmas = model.content_lemmas("seeking motivated developer experienced in testing");
        assert!(!lemmas.contains(&"seeking".to_string()));
        assert!(!lemmas.contains(&"motivated".to_string()));
        assert!(!lemmas.contains(&"experienced".to_string()));
        assert!(lemmas.contains(&"developer".to_string()));
        // Gerund-shaped nouns survive.
        assert!(lemmas.contains(&"testing".to_string()));
    }

    #[test]
    fn test_short_ing_and_ed_nouns_survive() {
        let model = RuleModel::new();
        let lemmas = model.content_lemmas("string parsing at wire speed");
        assert!(lemmas.contains(&"string".to_string()));
        assert!(lemmas.contains(&"speed".to_string()));
        assert!(!lemmas.contains(&"parsing".to_string()));
    }

    #[test]
    fn test_content_lemmas_skip_numbers() {
        let model = RuleModel::new();
        let lemmas = model.content_lemmas("shipped 2000 builds in 12 months");
        assert!(!lemmas.iter().any(|l| l.chars().any(|c| c.is_numeric())));
    }

    #[test]
    fn test_content_lemmas_preserve_document_order() {
        let model = RuleModel::new();
        let lemmas = model.content_lemmas("python java python");
        assert_eq!(lemmas, vec!["python", "java", "python"]);
    }
}
