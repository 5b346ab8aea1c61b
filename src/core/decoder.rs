//! The image decoder boundary.
//!
//! Turning fetched bytes into an NxN grid of intensity samples is the job
//! of a collaborator, not this crate: no image format decoding, resizing
//! or color conversion ships here. Hosts plug their own decoder in through
//! [`ImageDecoder`]; the shipped [`RawIntensityDecoder`] accepts buffers
//! that are already decoded intensities.

use crate::core::grid::PixelGrid;
use crate::core::mode::ColorMode;
use crate::error::DecodeError;

/// Trait for decode collaborators
pub trait ImageDecoder: Send + Sync {
    /// Decode `bytes` into an `edge` x `edge` grid in the given mode.
    ///
    /// Implementations own any format parsing, resizing and color
    /// conversion; malformed input is a [`DecodeError`].
    fn decode(&self, bytes: &[u8], edge: usize, mode: ColorMode) -> Result<PixelGrid, DecodeError>;
}

/// Decoder for pre-decoded intensity dumps.
///
/// Expects exactly `edge * edge * channels` bytes of row-major,
/// channel-interleaved intensities and performs no conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawIntensityDecoder;

impl RawIntensityDecoder {
    /// Create a new raw decoder
    pub fn new() -> Self {
        Self
    }

    /// Number of bytes a dump must hold for the given geometry
    pub fn expected_len(edge: usize, mode: ColorMode) -> usize {
        edge * edge * mode.channels()
    }
}

impl ImageDecoder for RawIntensityDecoder {
    fn decode(&self, bytes: &[u8], edge: usize, mode: ColorMode) -> Result<PixelGrid, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }

        match mode {
            ColorMode::Monochrome | ColorMode::Grayscale => PixelGrid::from_luma(edge, mode, bytes),
            ColorMode::Color => PixelGrid::from_rgb(edge, bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_luma_dump() {
        let bytes: Vec<u8> = (0..16).collect();
        let grid = RawIntensityDecoder::new()
            .decode(&bytes, 4, ColorMode::Grayscale)
            .unwrap();

        assert_eq!(grid.edge(), 4);
        assert_eq!(grid.mode(), ColorMode::Grayscale);
    }

    #[test]
    fn decodes_an_interleaved_rgb_dump() {
        let bytes = vec![0u8; 48];
        let grid = RawIntensityDecoder::new()
            .decode(&bytes, 4, ColorMode::Color)
            .unwrap();

        assert_eq!(grid.mode(), ColorMode::Color);
        assert_eq!(grid.pixel_count(), 16);
    }

    #[test]
    fn rejects_empty_input() {
        let result = RawIntensityDecoder::new().decode(&[], 4, ColorMode::Monochrome);
        assert!(matches!(result, Err(DecodeError::Empty)));
    }

    #[test]
    fn rejects_truncated_dumps() {
        let result = RawIntensityDecoder::new().decode(&[0u8; 47], 4, ColorMode::Color);
        assert!(matches!(
            result,
            Err(DecodeError::SizeMismatch {
                expected: 48,
                actual: 47
            })
        ));
    }

    #[test]
    fn expected_len_accounts_for_channels() {
        assert_eq!(RawIntensityDecoder::expected_len(8, ColorMode::Monochrome), 64);
        assert_eq!(RawIntensityDecoder::expected_len(8, ColorMode::Color), 192);
    }
}
