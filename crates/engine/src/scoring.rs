use crate::config::ScoringConfig;

/// Bounded keyword-coverage score between a content item and one cluster
#[derive(Debug, Clone)]
pub struct MatchScorer {
    config: ScoringConfig,
}

impl MatchScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score lowercased `search_text` against `keywords`, in `0..=score_cap`.
    ///
    /// A keyword earns `full_match_points` when it appears whole, and
    /// independently `word_match_points` for each of its words longer than
    /// `min_word_chars` that appears. The total is averaged over the keyword
    /// count, scaled by `normalization` and capped. An empty keyword list
    /// scores zero.
    #[must_use]
    pub fn score(&self, search_text: &str, keywords: &[String]) -> f64 {
        if keywords.is_empty() {
            return 0.0;
        }

        let points: f64 = keywords
            .iter()
            .map(|keyword| self.keyword_points(search_text, &keyword.to_lowercase()))
            .sum();

        (points / keywords.len() as f64 * self.config.normalization).min(self.config.score_cap)
    }

    fn keyword_points(&self, search_text: &str, keyword: &str) -> f64 {
        let mut points = 0.0;
        if search_text.contains(keyword) {
            points += self.config.full_match_points;
        }
        for word in keyword.split_whitespace() {
            if word.chars().count() > self.config.min_word_chars && search_text.contains(word) {
                points += self.config.word_match_points;
            }
        }
        points
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
