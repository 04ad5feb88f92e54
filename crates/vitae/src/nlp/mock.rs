//! Mock NLP model with canned responses for testing.

use super::model::NlpModel;

/// Returns fixed person names and echoes whitespace tokens as lemmas.
///
/// Useful for exercising the pipeline without relying on the rule
/// model's heuristics.
#[derive(Debug, Default)]
pub struct MockModel {
    persons: Vec<String>,
}

impl MockModel {
    /// A mock that finds no entities at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock that reports the given person names for any input.
    pub fn with_persons<S: Into<String>>(persons: impl IntoIterator<Item = S>) -> Self {
        Self {
            persons: persons.into_iter().map(Into::into).collect(),
        }
    }
}

impl NlpModel for MockModel {
    fn person_names(&self, _text: &str) -> Vec<String> {
        self.persons.clone()
    }

    fn content_lemmas(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(|t| t.to_lowercase()).collect()
    }

    fn name(&self) -> &str {
        "mock"
    }
}
