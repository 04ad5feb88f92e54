//! The analysis report: the pipeline's single output value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::extract::SourceMetadata;

/// Result of analyzing one résumé against one job description.
///
/// Assembled once per analysis call and immutable afterwards; the
/// library does not persist reports — storage is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Candidate name, or the `"Name Not Found"` sentinel.
    pub candidate: String,
    /// Contact entries: at most one `"Emails: …"` and one `"Phones: …"`.
    pub contacts: Vec<String>,
    /// Body of the experience section (possibly empty).
    pub experience: String,
    /// Body of the skills section (possibly empty).
    pub skills: String,
    /// Lexical similarity to the job description, 0-100, 2 decimals.
    pub match_pct: f64,
    /// Advice strings in rule order; empty means no issues found.
    pub recommendations: Vec<String>,
}

/// A report together with metadata about the document it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// The analysis report.
    pub report: Report,
    /// When the analysis ran.
    pub analyzed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_json_field_names() {
        let report = Report {
            candidate: "Jane Doe".to_string(),
            contacts: vec!["Emails: jane@x.com".to_string()],
            experience: "built things".to_string(),
            skills: "rust".to_string(),
            match_pct: 42.5,
            recommendations: vec![],
        };

        let value = serde_json::to_value(&report).unwrap();
        for field in [
            "candidate",
            "contacts",
            "experience",
            "skills",
            "match_pct",
            "recommendations",
        ] {
            assert!(value.get(field).is_some(), "missing field {}", field);
        }
        assert_eq!(value["match_pct"], 42.5);
    }

    #[test]
    fn test_report_round_trips() {
        let report = Report {
            candidate: "Name Not Found".to_string(),
            contacts: vec![],
            experience: String::new(),
            skills: String::new(),
            match_pct: 0.0,
            recommendations: vec!["Add contact information (email/phone).".to_string()],
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back.candidate, report.candidate);
        assert_eq!(back.recommendations, report.recommendations);
    }
}
