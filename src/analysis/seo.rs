use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Runs of sentence terminators. A trailing terminator leaves an empty
/// final segment that still counts toward the sentence divisor; callers
/// depend on that naive-split behavior, so keep it.
static SENTENCE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("static pattern"));

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SeoScores {
    pub keyword_density: f64,
    pub readability: f64,
    pub length: f64,
    pub structure: f64,
}

impl SeoScores {
    /// Unweighted mean of the four sub-scores.
    pub fn total(&self) -> f64 {
        (self.keyword_density + self.readability + self.length + self.structure) / 4.0
    }

    /// Sub-scores in display order with their labels.
    pub fn breakdown(&self) -> [(&'static str, f64); 4] {
        [
            ("keyword density", self.keyword_density),
            ("readability", self.readability),
            ("length", self.length),
            ("structure", self.structure),
        ]
    }
}

/// Score a description against the supplied keywords.
///
/// Every sub-score lands in [0, 100]. Empty text short-circuits to all
/// zeros instead of dividing by a zero word count.
pub fn score(text: &str, keywords: &[String]) -> SeoScores {
    let word_count = text.split_whitespace().count();
    if word_count == 0 {
        return SeoScores::default();
    }

    let keyword_matches: usize = keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(|k| count_matches(text, k))
        .sum();
    let keyword_density = (keyword_matches as f64 / word_count as f64 * 100.0).min(100.0);

    let sentence_count = SENTENCE_SPLIT.split(text).count();
    let avg_words_per_sentence = word_count as f64 / sentence_count as f64;
    let readability = (100.0 - (avg_words_per_sentence - 15.0).abs() * 5.0).max(0.0);

    let length = (word_count as f64 / 300.0 * 100.0).min(100.0);

    let structure = if text.contains("**") { 100.0 } else { 50.0 };

    SeoScores {
        keyword_density,
        readability,
        length,
        structure,
    }
}

/// Case-insensitive, non-overlapping substring count.
fn count_matches(text: &str, keyword: &str) -> usize {
    RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
        .map(|re| re.find_iter(text).count())
        .unwrap_or(0)
}
