//! Main Analyzer struct and public API.

use std::path::Path;
use std::sync::Arc;

use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::extract;
use crate::identity;
use crate::keywords;
use crate::nlp::{NlpModel, RuleModel};
use crate::recommend::{self, RuleInputs};
use crate::report::{Analysis, Report};
use crate::section::find_section;
use crate::similarity::similarity;

/// The résumé analysis engine.
///
/// Holds an immutable config and a shared NLP model; every analysis call
/// is independent and touches no mutable state, so one `Analyzer` can
/// serve concurrent callers.
pub struct Analyzer {
    config: AnalyzerConfig,
    model: Arc<dyn NlpModel>,
}

impl Analyzer {
    /// Create an analyzer with the default config and rule-based model.
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Create an analyzer with a custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            model: Arc::new(RuleModel::new()),
        }
    }

    /// Replace the NLP model (e.g. a heavier tagger, or a mock in tests).
    pub fn with_model(mut self, model: impl NlpModel + 'static) -> Self {
        self.model = Arc::new(model);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a résumé file against a job description.
    ///
    /// Extraction is the only fallible stage; everything downstream of it
    /// always produces a value.
    pub fn analyze_file(&self, path: impl AsRef<Path>, jd_text: &str) -> Result<Analysis> {
        let (text, source) = extract::extract_with_metadata(path)?;
        let report = self.analyze_text(&text, jd_text);
        Ok(Analysis {
            source,
            report,
            analyzed_at: chrono::Utc::now(),
        })
    }

    /// Analyze already-extracted résumé text against a job description.
    /// Pure and infallible.
    pub fn analyze_text(&self, resume_text: &str, jd_text: &str) -> Report {
        let word_count = resume_text.split_whitespace().count();

        let candidate = identity::extract_name(self.model.as_ref(), resume_text);
        let contacts = identity::extract_contacts(resume_text);
        let experience = self.section_body(resume_text, "experience");
        let skills = self.section_body(resume_text, "skills");
        let match_pct = similarity(resume_text, jd_text);

        let missing = keywords::missing_keywords(
            self.model.as_ref(),
            jd_text,
            &skills,
            self.config.top_keywords,
        );

        let recommendations = recommend::recommendations(
            &self.config,
            &RuleInputs {
                missing_keywords: &missing,
                experience_text: &experience,
                contacts: &contacts,
                resume_word_count: word_count,
            },
        );

        Report {
            candidate,
            contacts,
            experience,
            skills,
            match_pct,
            recommendations,
        }
    }

    fn section_body(&self, text: &str, name: &str) -> String {
        match self.config.section(name) {
            Some(rule) => find_section(text, &rule.headers, &rule.stops),
            None => String::new(),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
