//! Hash comparison metrics.
//!
//! Two independent similarity calculations over a pair of encoded hashes.
//! Both check the 2-byte mode header first and refuse cross-mode pairs;
//! both return an explicit error for mismatched lengths instead of a
//! sentinel score.
//!
//! ## Metrics
//! | Metric   | Compares            | Length precondition  |
//! |----------|---------------------|----------------------|
//! | Coarse   | whole payload bytes | equal payload length |
//! | Detailed | byte magnitudes     | equal total length   |

use crate::core::hash::ImageHash;
use crate::error::CompareError;
use serde::{Deserialize, Serialize};

/// A similarity score in [0, 100], higher meaning more alike
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct SimilarityScore(f64);

impl SimilarityScore {
    fn new(value: f64) -> Self {
        Self(value)
    }

    /// The score as a bare number
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Which comparison algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// Whole-byte equality scan, fast and coarse
    Coarse,
    /// Byte-magnitude difference sum, finer grading
    Detailed,
}

impl DistanceMetric {
    /// Compare two hashes with this metric
    pub fn compare(
        self,
        a: &ImageHash,
        b: &ImageHash,
    ) -> Result<SimilarityScore, CompareError> {
        match self {
            DistanceMetric::Coarse => coarse_distance(a, b),
            DistanceMetric::Detailed => detailed_distance(a, b),
        }
    }

    /// Get a human-readable description of the metric
    pub fn description(&self) -> &'static str {
        match self {
            DistanceMetric::Coarse => {
                "Coarse - fraction of payload bytes that match exactly"
            }
            DistanceMetric::Detailed => {
                "Detailed - graded by summed byte-wise magnitude difference"
            }
        }
    }
}

impl std::fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistanceMetric::Coarse => write!(f, "coarse"),
            DistanceMetric::Detailed => write!(f, "detailed"),
        }
    }
}

fn check_modes(a: &ImageHash, b: &ImageHash) -> Result<(), CompareError> {
    if a.discriminator() != b.discriminator() {
        return Err(CompareError::FormatMismatch {
            left: a.discriminator(),
            right: b.discriminator(),
        });
    }
    Ok(())
}

/// Coarse similarity: the fraction of payload byte positions that match.
///
/// Every payload index is visited exactly once; a position counts as
/// matched only when both hashes carry the identical byte there. 100 means
/// every byte matched. Payload lengths must be equal.
pub fn coarse_distance(a: &ImageHash, b: &ImageHash) -> Result<SimilarityScore, CompareError> {
    check_modes(a, b)?;

    let left = a.payload();
    let right = b.payload();
    if left.len() != right.len() {
        return Err(CompareError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    // A header-only pair has no bytes to disagree on
    if left.is_empty() {
        return Ok(SimilarityScore::new(100.0));
    }

    let matched = left.iter().zip(right).filter(|(x, y)| x == y).count();
    Ok(SimilarityScore::new(
        (matched as f64 / left.len() as f64) * 100.0,
    ))
}

/// Detailed similarity: graded by summed byte-wise magnitude difference.
///
/// `current_diff` sums `|a[i] - b[i]|` over the payload; the normalization
/// constant is `total_length * 255` with the 2-byte header deliberately
/// included in the scale factor, preserving the historical wire-format
/// scoring. Total lengths must be equal.
pub fn detailed_distance(a: &ImageHash, b: &ImageHash) -> Result<SimilarityScore, CompareError> {
    check_modes(a, b)?;

    let total_len = a.as_bytes().len();
    if total_len != b.as_bytes().len() {
        return Err(CompareError::LengthMismatch {
            left: total_len,
            right: b.as_bytes().len(),
        });
    }

    let current_diff: u64 = a
        .payload()
        .iter()
        .zip(b.payload())
        .map(|(&x, &y)| (x as i32 - y as i32).unsigned_abs() as u64)
        .sum();
    let total_diff = (total_len * 255) as f64;

    Ok(SimilarityScore::new(
        100.0 - (current_diff as f64 / total_diff) * 100.0,
    ))
}
