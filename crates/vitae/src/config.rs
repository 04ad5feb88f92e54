//! Analyzer configuration with YAML overlay support.
//!
//! Defaults are an immutable template. Loading a user config never mutates
//! the template: the overlay is deserialized separately and shallow-merged
//! into a fresh default, so loading multiple configs in one process cannot
//! contaminate each other.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VitaeError};

/// Header/stop boundaries for one named résumé section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRule {
    /// Labels that open the section, tried in order.
    pub headers: Vec<String>,
    /// Labels that terminate the section body.
    pub stops: Vec<String>,
}

impl SectionRule {
    pub fn new<S: Into<String>>(
        headers: impl IntoIterator<Item = S>,
        stops: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            stops: stops.into_iter().map(Into::into).collect(),
        }
    }
}

/// Configuration for résumé analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Minimum word count expected in the experience section.
    pub experience_min_words: usize,
    /// Word count above which the résumé is flagged as too long.
    pub resume_max_words: usize,
    /// How many keywords to draw from each document for gap analysis.
    pub top_keywords: usize,
    /// Named sections and their header/stop boundaries, in declaration order.
    pub sections: IndexMap<String, SectionRule>,
}

/// Section names the recommendation rules depend on. A merged config that
/// loses either of these is rejected at load time.
pub const REQUIRED_SECTIONS: &[&str] = &["experience", "skills"];

impl Default for AnalyzerConfig {
    fn default() -> Self {
        let mut sections = IndexMap::new();
        sections.insert(
            "experience".to_string(),
            SectionRule::new(
                ["Experience", "Work History", "Professional Experience"],
                ["Skills", "Education", "Projects"],
            ),
        );
        sections.insert(
            "skills".to_string(),
            SectionRule::new(
                ["Skills", "Technical Skills"],
                ["Experience", "Education", "Projects"],
            ),
        );

        Self {
            experience_min_words: 100,
            resume_max_words: 1500,
            top_keywords: 20,
            sections,
        }
    }
}

/// Partial configuration read from a user YAML file. Every key is optional;
/// present keys replace the corresponding default wholesale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverlay {
    pub experience_min_words: Option<usize>,
    pub resume_max_words: Option<usize>,
    pub top_keywords: Option<usize>,
    pub sections: Option<IndexMap<String, SectionRule>>,
}

impl AnalyzerConfig {
    /// Load a config by overlaying a YAML file onto the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| VitaeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let overlay: ConfigOverlay = serde_yaml::from_str(&contents)
            .map_err(|e| VitaeError::Config(format!("invalid config '{}': {}", path.display(), e)))?;

        Self::default().merged(overlay)
    }

    /// Apply an overlay to produce a new config. Shallow merge: each known
    /// top-level key in the overlay replaces the default value entirely.
    pub fn merged(&self, overlay: ConfigOverlay) -> Result<Self> {
        let merged = Self {
            experience_min_words: overlay.experience_min_words.unwrap_or(self.experience_min_words),
            resume_max_words: overlay.resume_max_words.unwrap_or(self.resume_max_words),
            top_keywords: overlay.top_keywords.unwrap_or(self.top_keywords),
            sections: overlay.sections.unwrap_or_else(|| self.sections.clone()),
        };
        merged.validate()?;
        Ok(merged)
    }

    /// Check the invariant that every section the recommendation engine
    /// references still exists.
    pub fn validate(&self) -> Result<()> {
        for name in REQUIRED_SECTIONS {
            if !self.sections.contains_key(*name) {
                return Err(VitaeError::Config(format!(
                    "missing required section '{}' in sections map",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Boundaries for a named section, if configured.
    pub fn section(&self, name: &str) -> Option<&SectionRule> {
        self.sections.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.experience_min_words, 100);
        assert_eq!(config.resume_max_words, 1500);
        assert_eq!(config.top_keywords, 20);
        assert!(config.section("experience").is_some());
        assert!(config.section("skills").is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overlay_replaces_scalar_keys() {
        let overlay = ConfigOverlay {
            top_keywords: Some(5),
            ..Default::default()
        };
        let merged = AnalyzerConfig::default().merged(overlay).unwrap();
        assert_eq!(merged.top_keywords, 5);
        // Untouched keys keep defaults
        assert_eq!(merged.resume_max_words, 1500);
    }

    #[test]
    fn test_overlay_does_not_mutate_defaults() {
        let defaults = AnalyzerConfig::default();
        let overlay = ConfigOverlay {
            experience_min_words: Some(1),
            ..Default::default()
        };
        let _ = defaults.merged(overlay).unwrap();
        assert_eq!(defaults.experience_min_words, 100);
        assert_eq!(AnalyzerConfig::default().experience_min_words, 100);
    }

    #[test]
    fn test_sections_replaced_wholesale() {
        let mut sections = IndexMap::new();
        sections.insert(
            "experience".to_string(),
            SectionRule::new(["Berufserfahrung"], ["Ausbildung"]),
        );
        let overlay = ConfigOverlay {
            sections: Some(sections),
            ..Default::default()
        };
        // The overlay dropped "skills", which the recommendation rules need.
        let err = AnalyzerConfig::default().merged(overlay).unwrap_err();
        assert!(matches!(err, VitaeError::Config(_)));
    }

    #[test]
    fn test_load_yaml_overlay() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "experience_min_words: 50\nresume_max_words: 800").unwrap();

        let config = AnalyzerConfig::load(file.path()).unwrap();
        assert_eq!(config.experience_min_words, 50);
        assert_eq!(config.resume_max_words, 800);
        assert_eq!(config.top_keywords, 20);
    }

    #[test]
    fn test_load_malformed_yaml_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "experience_min_words: [not, an, int]").unwrap();

        let err = AnalyzerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, VitaeError::Config(_)));
    }

    #[test]
    fn test_load_unknown_key_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "experience_minimum: 50").unwrap();

        assert!(AnalyzerConfig::load(file.path()).is_err());
    }
}
