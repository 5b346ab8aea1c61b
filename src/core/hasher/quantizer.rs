//! Per-channel average intensity.

use crate::core::grid::PixelGrid;

/// Arithmetic mean intensity per channel over every sample in the grid.
///
/// Means stay floating point; rounding them would move the threshold
/// tie-break and change encoded bits. Each sample is visited exactly once,
/// in the grid's traversal order.
pub fn channel_means(grid: &PixelGrid) -> Vec<f64> {
    let mut sums = vec![0u64; grid.mode().channels()];

    for sample in grid.samples() {
        for (index, &value) in sample.channels().iter().enumerate() {
            sums[index] += value as u64;
        }
    }

    let count = grid.pixel_count() as f64;
    sums.into_iter().map(|sum| sum as f64 / count).collect()
}
