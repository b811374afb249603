use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Fixed tone categories and their trigger words, in display order.
const CATEGORIES: [(&str, &str); 4] = [
    ("professional", "professional|expertise|solution|effective"),
    ("friendly", "friendly|welcome|help|support"),
    ("persuasive", "best|perfect|exceptional|outstanding"),
    ("technical", "technology|system|performance|specification"),
];

static MATCHERS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    CATEGORIES
        .iter()
        .map(|(name, pattern)| {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .expect("tone patterns are static and valid");
            (*name, regex)
        })
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneScore {
    pub category: &'static str,
    /// Share of all trigger matches, 0.0..=100.0.
    pub percentage: f64,
}

/// Break the text down into the four tone categories.
///
/// Counts case-insensitive substring matches anywhere in the text; word
/// boundaries are not enforced, so "support" matches inside "supported".
/// When no trigger word matches at all, every percentage is 0 rather than
/// dividing by zero.
pub fn analyze(text: &str) -> Vec<ToneScore> {
    let counts: Vec<(&'static str, usize)> = MATCHERS
        .iter()
        .map(|(name, regex)| (*name, regex.find_iter(text).count()))
        .collect();

    let total: usize = counts.iter().map(|(_, n)| n).sum();

    counts
        .into_iter()
        .map(|(category, count)| ToneScore {
            category,
            percentage: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_keep_declaration_order() {
        let scores = analyze("");
        let names: Vec<_> = scores.iter().map(|s| s.category).collect();
        assert_eq!(
            names,
            vec!["professional", "friendly", "persuasive", "technical"]
        );
    }

    #[test]
    fn zero_matches_yield_all_zero_never_nan() {
        let scores = analyze("a plain sentence about nothing in particular");
        for s in &scores {
            assert_eq!(s.percentage, 0.0);
            assert!(!s.percentage.is_nan());
        }
    }

    #[test]
    fn percentages_split_by_match_share() {
        // "professional" x1, "friendly" triggers x2, others zero.
        let scores = analyze("A professional product with friendly help included.");
        assert!((scores[0].percentage - 100.0 / 3.0).abs() < 1e-9);
        assert!((scores[1].percentage - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(scores[2].percentage, 0.0);
        assert_eq!(scores[3].percentage, 0.0);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let scores = analyze("EXPERTISE and Welcome");
        assert_eq!(scores[0].percentage, 50.0);
        assert_eq!(scores[1].percentage, 50.0);
    }

    #[test]
    fn substring_matches_inside_longer_words() {
        // "support" inside "supported", no boundary enforcement.
        let scores = analyze("fully supported hardware");
        assert_eq!(scores[1].percentage, 100.0);
    }

    #[test]
    fn percentages_sum_to_one_hundred_when_any_match() {
        let scores =
            analyze("The best system delivers outstanding performance with expert support.");
        let sum: f64 = scores.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }
}
