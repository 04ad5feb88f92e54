//! Suffix-rule lemmatization for English noun tokens.
//!
//! This is deliberately small: the keyword analyzer only needs plural
//! nouns collapsed onto their singular form so that "systems" in a job
//! description matches "system" in a skills section.

/// Reduce a lower-cased token to its lemma.
pub fn lemmatize(token: &str) -> String {
    let n = token.len();

    // "technologies" -> "technology", "libraries" -> "library"
    if n > 4 && token.ends_with("ies") {
        return format!("{}y", &token[..n - 3]);
    }

    // "processes" -> "process", "boxes" -> "box", "batches" -> "batch"
    for suffix in ["sses", "shes", "ches", "xes", "zes"] {
        if n > suffix.len() + 1 && token.ends_with(suffix) {
            return token[..n - 2].to_string();
        }
    }

    // Plain plural strip: "systems" -> "system", "skills" -> "skill".
    // Words ending in "ss"/"us"/"is" ("analysis", "status") are left alone.
    if n > 3
        && token.ends_with('s')
        && !token.ends_with("ss")
        && !token.ends_with("us")
        && !token.ends_with("is")
    {
        return token[..n - 1].to_string();
    }

    token.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_strip() {
        assert_eq!(lemmatize("systems"), "system");
        assert_eq!(lemmatize("skills"), "skill");
        assert_eq!(lemmatize("databases"), "database");
    }

    #[test]
    fn test_ies_plural() {
        assert_eq!(lemmatize("technologies"), "technology");
        assert_eq!(lemmatize("libraries"), "library");
    }

    #[test]
    fn test_es_plural() {
        assert_eq!(lemmatize("processes"), "process");
        assert_eq!(lemmatize("batches"), "batch");
    }

    #[test]
    fn test_non_plurals_untouched() {
        assert_eq!(lemmatize("analysis"), "analysis");
        assert_eq!(lemmatize("status"), "status");
        assert_eq!(lemmatize("python"), "python");
        assert_eq!(lemmatize("class"), "class");
        assert_eq!(lemmatize("aws"), "aws");
    }

    #[test]
    fn test_short_tokens_untouched() {
        assert_eq!(lemmatize("os"), "os");
        assert_eq!(lemmatize("js"), "js");
    }
}
