//! Property-based tests for the pure pipeline stages.

use proptest::prelude::*;

use vitae::section::find_section;
use vitae::similarity::similarity;

proptest! {
    #[test]
    fn prop_similarity_is_symmetric(a in ".{0,200}", b in ".{0,200}") {
        let ab = similarity(&a, &b);
        let ba = similarity(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-9, "{} != {}", ab, ba);
    }

    #[test]
    fn prop_similarity_in_percentage_range(a in "\\PC{0,200}", b in "\\PC{0,200}") {
        let score = similarity(&a, &b);
        prop_assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn prop_self_similarity_is_zero_or_full(a in "[a-z ]{0,200}") {
        // Either no vocabulary survives stop-word removal (0.0) or the
        // vectors are identical (100.0); nothing in between.
        let score = similarity(&a, &a);
        prop_assert!(score == 0.0 || score == 100.0, "score was {}", score);
    }

    #[test]
    fn prop_find_section_never_panics_on_arbitrary_labels(
        text in ".{0,300}",
        header in ".{1,20}",
        stop in ".{1,20}",
    ) {
        // Labels are escaped before compilation, so hostile input like
        // "(" or "a|b" must not produce a regex error or panic.
        let _ = find_section(&text, &[header], &[stop]);
    }

    #[test]
    fn prop_find_section_empty_when_header_absent(body in "[a-z ]{0,100}") {
        let headers = vec!["ZZHEADERZZ".to_string()];
        let stops = vec!["ZZSTOPZZ".to_string()];
        prop_assert_eq!(find_section(&body, &headers, &stops), "");
    }
}
