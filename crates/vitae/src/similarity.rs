//! Lexical similarity between résumé and job description.
//!
//! TF-IDF over a two-document corpus (the résumé and the job
//! description are the entire corpus), cosine similarity between the
//! two weighted vectors, scaled to a 0-100 percentage.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::nlp::is_stop_word;

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Similarity percentage between two texts, rounded to 2 decimal places.
///
/// Degenerate inputs never fail: if either document is empty after
/// stop-word removal, or the two share no vocabulary, the score is 0.0
/// (cosine of a zero vector is defined as 0 here).
pub fn similarity(a: &str, b: &str) -> f64 {
    let terms_a = tokenize(a);
    let terms_b = tokenize(b);
    if terms_a.is_empty() || terms_b.is_empty() {
        return 0.0;
    }

    let tf_a = term_counts(&terms_a);
    let tf_b = term_counts(&terms_b);

    // Smoothed idf over the two-document corpus: ln((1+n)/(1+df)) + 1.
    let idf = |term: &str| {
        let df = tf_a.contains_key(term) as usize + tf_b.contains_key(term) as usize;
        ((1.0 + 2.0) / (1.0 + df as f64)).ln() + 1.0
    };

    let vec_a = weigh(&tf_a, &idf);
    let vec_b = weigh(&tf_b, &idf);

    let cosine = cosine_similarity(&vec_a, &vec_b);
    round2(cosine * 100.0)
}

/// Lower-cased tokens of at least two word characters, stop-words removed.
fn tokenize(text: &str) -> Vec<String> {
    TOKEN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter(|t| !is_stop_word(t))
        .collect()
}

fn term_counts(terms: &[String]) -> HashMap<&str, f64> {
    let mut counts: HashMap<&str, f64> = HashMap::new();
    for term in terms {
        *counts.entry(term.as_str()).or_insert(0.0) += 1.0;
    }
    counts
}

/// Apply idf weights and L2-normalize.
fn weigh<'a>(tf: &HashMap<&'a str, f64>, idf: impl Fn(&str) -> f64) -> HashMap<&'a str, f64> {
    let mut weights: HashMap<&str, f64> = tf
        .iter()
        .map(|(&term, &count)| (term, count * idf(term)))
        .collect();

    let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in weights.values_mut() {
            *w /= norm;
        }
    }
    weights
}

fn cosine_similarity(a: &HashMap<&str, f64>, b: &HashMap<&str, f64>) -> f64 {
    // Vectors are already unit length; the dot product over shared terms
    // is the cosine.
    a.iter()
        .filter_map(|(term, wa)| b.get(term).map(|wb| wa * wb))
        .sum()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
