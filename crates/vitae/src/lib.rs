//! Vitae: résumé analysis against a job description.
//!
//! The pipeline extracts plain text from a résumé document (PDF or
//! DOCX), pulls out the candidate's name and contacts, segments the
//! configured sections, scores lexical similarity against the job
//! description, and turns keyword gaps plus word-count thresholds into
//! concrete recommendations.
//!
//! Every analysis call is synchronous, stateless, and independent; the
//! only shared resource is the read-only NLP model injected into the
//! [`Analyzer`].
//!
//! # Example
//!
//! ```no_run
//! use vitae::Analyzer;
//!
//! # fn main() -> vitae::Result<()> {
//! let analyzer = Analyzer::new();
//! let analysis = analyzer.analyze_file("resume.pdf", "job description text")?;
//!
//! println!("Candidate: {}", analysis.report.candidate);
//! println!("Match: {}%", analysis.report.match_pct);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod identity;
pub mod keywords;
pub mod nlp;
pub mod recommend;
pub mod report;
pub mod section;
pub mod similarity;

mod analyzer;

pub use crate::analyzer::Analyzer;
pub use config::{AnalyzerConfig, ConfigOverlay, SectionRule};
pub use error::{Result, VitaeError};
pub use extract::{DocumentFormat, SourceMetadata};
pub use nlp::{MockModel, NlpModel, RuleModel};
pub use report::{Analysis, Report};
