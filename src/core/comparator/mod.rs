//! # Comparator Module
//!
//! Finds matching images among a collection of stored hashes.
//!
//! ## How It Works
//! 1. Compare all hash pairs with the chosen distance metric
//! 2. Apply a match strategy to decide which scores count
//! 3. Classify each reported pair by score band
//!
//! ## Score Bands
//! | Score      | Classification |
//! |------------|----------------|
//! | 100        | Identical      |
//! | 99.5-100   | Near-identical |
//! | 90-99.5    | Similar        |
//! | below 90   | Unrelated      |
//!
//! A mode or length mismatch anywhere in the collection aborts the whole
//! comparison: mixed-format collections are a caller bug, never silently
//! skipped.

mod traits;

pub use traits::{MatchStrategy, ScoreThreshold};

use crate::core::distance::{DistanceMetric, SimilarityScore};
use crate::core::hash::ImageHash;
use crate::error::CompareError;
use serde::{Deserialize, Serialize};

/// Result of comparing two hashes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Label of the first hash
    pub left: String,
    /// Label of the second hash
    pub right: String,
    /// Similarity score (0-100)
    pub score: SimilarityScore,
    /// Classification of the match
    pub match_type: MatchType,
}

/// Classification of match types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
    /// Score 100, byte-identical fingerprints
    Identical,
    /// Score at least 99.5, virtually indistinguishable
    NearIdentical,
    /// Score at least 90, likely the same image
    Similar,
    /// Score below 90
    Unrelated,
}

impl MatchType {
    /// Classify based on similarity score
    pub fn from_score(score: SimilarityScore) -> Self {
        let value = score.value();
        if value >= 100.0 {
            MatchType::Identical
        } else if value >= 99.5 {
            MatchType::NearIdentical
        } else if value >= 90.0 {
            MatchType::Similar
        } else {
            MatchType::Unrelated
        }
    }

    /// Check if this match type is considered a match at all
    pub fn is_match(&self) -> bool {
        !matches!(self, MatchType::Unrelated)
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Identical => write!(f, "Identical"),
            MatchType::NearIdentical => write!(f, "Near-Identical"),
            MatchType::Similar => write!(f, "Similar"),
            MatchType::Unrelated => write!(f, "Unrelated"),
        }
    }
}

/// Find all matching pairs in a collection of labelled hashes.
///
/// Compares every pair once with `metric` and reports those the strategy
/// accepts. Errors on the first incomparable pair.
pub fn find_matching_pairs(
    entries: &[(String, ImageHash)],
    metric: DistanceMetric,
    strategy: &dyn MatchStrategy,
) -> Result<Vec<MatchResult>, CompareError> {
    let mut matches = Vec::new();

    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            let (label_a, hash_a) = &entries[i];
            let (label_b, hash_b) = &entries[j];

            let score = metric.compare(hash_a, hash_b)?;

            if strategy.is_match(score) {
                matches.push(MatchResult {
                    left: label_a.clone(),
                    right: label_b.clone(),
                    score,
                    match_type: strategy.classify(score),
                });
            }
        }
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mode::ColorMode;

    fn entry(label: &str, payload: &[u8]) -> (String, ImageHash) {
        (
            label.to_string(),
            ImageHash::new(ColorMode::Grayscale, payload.to_vec()),
        )
    }

    #[test]
    fn match_type_bands() {
        let a = ImageHash::new(ColorMode::Grayscale, vec![0; 100]);
        let identical = DistanceMetric::Detailed.compare(&a, &a).unwrap();
        assert_eq!(MatchType::from_score(identical), MatchType::Identical);

        // One byte off by 26 over 102 total bytes: 100 - (26 / 26010) * 100 = 99.90
        let b = {
            let mut payload = vec![0u8; 100];
            payload[0] = 26;
            ImageHash::new(ColorMode::Grayscale, payload)
        };
        let near = DistanceMetric::Detailed.compare(&a, &b).unwrap();
        assert_eq!(MatchType::from_score(near), MatchType::NearIdentical);
    }

    #[test]
    fn match_type_is_match() {
        assert!(MatchType::Identical.is_match());
        assert!(MatchType::NearIdentical.is_match());
        assert!(MatchType::Similar.is_match());
        assert!(!MatchType::Unrelated.is_match());
    }

    #[test]
    fn find_matching_pairs_empty_input() {
        let strategy = ScoreThreshold::default();
        let pairs = find_matching_pairs(&[], DistanceMetric::Detailed, &strategy).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn find_matching_pairs_single_entry() {
        let strategy = ScoreThreshold::default();
        let entries = vec![entry("only", &[0xFF, 0xFF])];
        let pairs = find_matching_pairs(&entries, DistanceMetric::Detailed, &strategy).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn find_matching_pairs_reports_only_accepted_pairs() {
        let strategy = ScoreThreshold::new(99.0);
        let entries = vec![
            entry("a", &[0x10, 0x10]),
            entry("b", &[0x10, 0x10]),
            entry("c", &[0xFF, 0x00]),
        ];

        let pairs = find_matching_pairs(&entries, DistanceMetric::Detailed, &strategy).unwrap();

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].left, "a");
        assert_eq!(pairs[0].right, "b");
        assert_eq!(pairs[0].match_type, MatchType::Identical);
    }

    #[test]
    fn mixed_mode_collections_are_a_hard_error() {
        let strategy = ScoreThreshold::default();
        let entries = vec![
            entry("gray", &[0x10]),
            (
                "color".to_string(),
                ImageHash::new(ColorMode::Color, vec![0x10]),
            ),
        ];

        let result = find_matching_pairs(&entries, DistanceMetric::Coarse, &strategy);
        assert!(matches!(result, Err(CompareError::FormatMismatch { .. })));
    }

    #[test]
    fn mixed_length_collections_are_a_hard_error() {
        let strategy = ScoreThreshold::default();
        let entries = vec![entry("small", &[0x10, 0x10]), entry("large", &[0x10; 8])];

        let result = find_matching_pairs(&entries, DistanceMetric::Detailed, &strategy);
        assert!(matches!(result, Err(CompareError::LengthMismatch { .. })));
    }

    #[test]
    fn match_result_serializes_with_stable_field_names() {
        let result = MatchResult {
            left: "a.hash".to_string(),
            right: "b.hash".to_string(),
            score: DistanceMetric::Coarse
                .compare(
                    &ImageHash::new(ColorMode::Monochrome, vec![1]),
                    &ImageHash::new(ColorMode::Monochrome, vec![1]),
                )
                .unwrap(),
            match_type: MatchType::Identical,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["left"], "a.hash");
        assert_eq!(json["right"], "b.hash");
        assert_eq!(json["score"], 100.0);
        assert_eq!(json["match_type"], "Identical");
    }
}
