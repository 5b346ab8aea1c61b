//! Trait definitions for match strategies.

use super::MatchType;
use crate::core::distance::SimilarityScore;

/// Strategy trait for deciding when two hashes count as a match
pub trait MatchStrategy: Send + Sync {
    /// Determine if a similarity score counts as a match
    fn is_match(&self, score: SimilarityScore) -> bool;

    /// Classify the match type for a score
    fn classify(&self, score: SimilarityScore) -> MatchType;

    /// Get the minimum score used
    fn min_score(&self) -> f64;

    /// Human-readable description of the strategy
    fn description(&self) -> String;
}

/// Simple minimum-score match strategy
#[derive(Debug, Clone)]
pub struct ScoreThreshold {
    /// Lowest similarity score still reported as a match
    min_score: f64,
}

impl ScoreThreshold {
    /// Create a new score threshold
    ///
    /// Recommended minimums:
    /// - 99.5: Conservative, few false positives
    /// - 95.0: Balanced (default)
    /// - 90.0: Permissive, catches more near-matches
    pub fn new(min_score: f64) -> Self {
        Self { min_score }
    }

    /// Create a conservative strategy (minimum score 99.5)
    pub fn conservative() -> Self {
        Self::new(99.5)
    }

    /// Create a balanced strategy (minimum score 95.0)
    pub fn balanced() -> Self {
        Self::new(95.0)
    }

    /// Create a permissive strategy (minimum score 90.0)
    pub fn permissive() -> Self {
        Self::new(90.0)
    }
}

impl Default for ScoreThreshold {
    fn default() -> Self {
        Self::balanced()
    }
}

impl MatchStrategy for ScoreThreshold {
    fn is_match(&self, score: SimilarityScore) -> bool {
        score.value() >= self.min_score
    }

    fn classify(&self, score: SimilarityScore) -> MatchType {
        MatchType::from_score(score)
    }

    fn min_score(&self) -> f64 {
        self.min_score
    }

    fn description(&self) -> String {
        format!(
            "Score threshold: pairs scoring at least {} are reported as matches",
            self.min_score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::distance::{detailed_distance, DistanceMetric};
    use crate::core::hash::ImageHash;
    use crate::core::mode::ColorMode;

    fn score_of(a: &[u8], b: &[u8]) -> SimilarityScore {
        let left = ImageHash::new(ColorMode::Grayscale, a.to_vec());
        let right = ImageHash::new(ColorMode::Grayscale, b.to_vec());
        detailed_distance(&left, &right).unwrap()
    }

    #[test]
    fn threshold_is_inclusive_at_the_boundary() {
        let strategy = ScoreThreshold::new(75.0);

        // One byte apart by 255 over 4 total bytes scores exactly 75.0
        assert!(strategy.is_match(score_of(&[0x00, 0x00], &[0xFF, 0x00])));
        // Identical payloads score 100
        assert!(strategy.is_match(score_of(&[1, 2], &[1, 2])));

        let strict = ScoreThreshold::new(80.0);
        assert!(!strict.is_match(score_of(&[0x00, 0x00], &[0xFF, 0x00])));
    }

    #[test]
    fn preset_strategies() {
        assert_eq!(ScoreThreshold::conservative().min_score(), 99.5);
        assert_eq!(ScoreThreshold::balanced().min_score(), 95.0);
        assert_eq!(ScoreThreshold::permissive().min_score(), 90.0);
    }

    #[test]
    fn classify_delegates_to_score_bands() {
        let strategy = ScoreThreshold::default();
        let identical = score_of(&[1, 2, 3], &[1, 2, 3]);

        assert_eq!(strategy.classify(identical), MatchType::Identical);
    }

    #[test]
    fn description_includes_the_minimum() {
        let strategy = ScoreThreshold::new(92.5);
        assert!(strategy.description().contains("92.5"));
    }

    #[test]
    fn strategy_is_metric_agnostic() {
        // The strategy only sees scores; either metric can feed it
        let a = ImageHash::new(ColorMode::Grayscale, vec![5, 5, 5, 5]);
        let b = ImageHash::new(ColorMode::Grayscale, vec![5, 5, 5, 5]);
        let strategy = ScoreThreshold::balanced();

        for metric in [DistanceMetric::Coarse, DistanceMetric::Detailed] {
            assert!(strategy.is_match(metric.compare(&a, &b).unwrap()));
        }
    }
}
