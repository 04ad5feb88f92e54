//! Keyword gap analysis between job description and skills section.

use std::collections::HashSet;

use crate::nlp::NlpModel;

/// The first `n` content lemmas of `text`, as a set.
///
/// The lemma sequence is truncated to `n` items in document order
/// *before* de-duplication, so repeated early lemmas can leave the set
/// with fewer than `n` unique keywords.
pub fn top_keywords(model: &dyn NlpModel, text: &str, n: usize) -> HashSet<String> {
    model
        .content_lemmas(&text.to_lowercase())
        .into_iter()
        .take(n)
        .collect()
}

/// Keywords present in the job description but absent from the skills
/// section, under the same truncation bound `n`.
pub fn missing_keywords(
    model: &dyn NlpModel,
    jd_text: &str,
    skills_text: &str,
    n: usize,
) -> HashSet<String> {
    let jd = top_keywords(model, jd_text, n);
    let skills = top_keywords(model, skills_text, n);
    jd.difference(&skills).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::RuleModel;

    #[test]
    fn test_top_keywords_bounded() {
        let model = RuleModel::new();
        let kws = top_keywords(&model, "python java rust go sql", 3);
        assert_eq!(kws.len(), 3);
        assert!(kws.contains("python"));
        assert!(!kws.contains("sql"));
    }

    #[test]
    fn test_truncation_happens_before_dedup() {
        let model = RuleModel::new();
        // First three lemmas are python, python, python: the set that
        // survives the n=3 cut has a single member.
        let kws = top_keywords(&model, "python python python java sql", 3);
        assert_eq!(kws.len(), 1);
        assert!(kws.contains("python"));
    }

    #[test]
    fn test_missing_keywords_set_difference() {
        let model = RuleModel::new();
        let missing = missing_keywords(
            &model,
            "python and java engineer",
            "Skills: java",
            20,
        );
        assert!(missing.contains("python"));
        assert!(!missing.contains("java"));
    }

    #[test]
    fn test_missing_empty_when_skills_superset() {
        let model = RuleModel::new();
        let missing = missing_keywords(&model, "python java", "java python sql rust", 20);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_verbs_never_reach_the_keyword_gap() {
        let model = RuleModel::new();
        let missing = missing_keywords(
            &model,
            "Looking for Python and Java engineer with systems experience",
            "Java",
            20,
        );
        assert!(!missing.contains("looking"));
        assert!(missing.contains("python"));
        assert!(missing.contains("engineer"));
    }

    #[test]
    fn test_plurals_collapse_across_documents() {
        let model = RuleModel::new();
        let missing = missing_keywords(&model, "distributed systems", "system design", 20);
        assert!(!missing.contains("system"));
    }
}
