//! English stop-word list shared by the similarity scorer and keyword
//! extraction.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Common English function words excluded from keyword and similarity
/// analysis.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    WORDS.iter().copied().collect()
});

/// Whether a (lower-cased) token is a stop-word.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

const WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "ain", "all", "am",
    "an", "and", "any", "are", "aren", "as", "at", "be", "because", "been",
    "before", "being", "below", "between", "both", "but", "by", "can",
    "cannot", "could", "couldn", "d", "did", "didn", "do", "does", "doesn",
    "doing", "don", "down", "during", "each", "few", "for", "from",
    "further", "had", "hadn", "has", "hasn", "have", "haven", "having",
    "he", "her", "here", "hers", "herself", "him", "himself", "his", "how",
    "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "just",
    "ll", "m", "ma", "may", "me", "might", "mightn", "more", "most", "must",
    "mustn", "my", "myself", "needn", "no", "nor", "not", "now", "o", "of",
    "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "re", "s", "same", "shan", "she", "should",
    "shouldn", "so", "some", "such", "t", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "ve",
    "very", "was", "wasn", "we", "were", "weren", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "won", "would",
    "wouldn", "y", "you", "your", "yours", "yourself", "yourselves",
];
