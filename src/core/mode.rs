//! Color modes and their wire discriminators.
//!
//! The mode fixes how many intensity channels each pixel sample carries and
//! which 2-byte code prefixes the encoded hash. Discriminator codes are part
//! of the stored wire format and are never renumbered; two hashes are only
//! comparable when their codes are equal.

use crate::error::HashError;
use serde::{Deserialize, Serialize};

/// Color mode an image was converted to before hashing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorMode {
    /// Black-and-white (bilevel), one intensity channel per pixel
    Monochrome,
    /// Grayscale, one intensity channel per pixel
    Grayscale,
    /// Full color, three channels per pixel (red, green, blue)
    Color,
}

impl ColorMode {
    /// Number of intensity channels per pixel sample
    pub const fn channels(self) -> usize {
        match self {
            ColorMode::Monochrome | ColorMode::Grayscale => 1,
            ColorMode::Color => 3,
        }
    }

    /// Wire discriminator code, stored little-endian in the first two bytes
    /// of every hash
    pub const fn discriminator(self) -> u16 {
        match self {
            ColorMode::Monochrome => 1,
            ColorMode::Grayscale => 2,
            ColorMode::Color => 3,
        }
    }

    /// The 2-byte little-endian header this mode writes
    pub fn header_bytes(self) -> [u8; 2] {
        self.discriminator().to_le_bytes()
    }

    /// Look up a mode from its wire discriminator
    pub fn from_discriminator(code: u16) -> Result<Self, HashError> {
        match code {
            1 => Ok(ColorMode::Monochrome),
            2 => Ok(ColorMode::Grayscale),
            3 => Ok(ColorMode::Color),
            _ => Err(HashError::UnknownMode { code }),
        }
    }

    /// Get a human-readable description of the mode
    pub fn description(&self) -> &'static str {
        match self {
            ColorMode::Monochrome => "Monochrome - bilevel intensities, 1 bit per pixel",
            ColorMode::Grayscale => "Grayscale - brightness intensities, 1 bit per pixel",
            ColorMode::Color => "Color - red, green and blue intensities, 3 bits per pixel",
        }
    }
}

impl Default for ColorMode {
    /// Monochrome is the historical default for callers that do not pick a
    /// mode
    fn default() -> Self {
        ColorMode::Monochrome
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Monochrome => write!(f, "monochrome"),
            ColorMode::Grayscale => write!(f, "grayscale"),
            ColorMode::Color => write!(f, "color"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_counts_per_mode() {
        assert_eq!(ColorMode::Monochrome.channels(), 1);
        assert_eq!(ColorMode::Grayscale.channels(), 1);
        assert_eq!(ColorMode::Color.channels(), 3);
    }

    #[test]
    fn discriminator_codes_are_stable() {
        // Codes are wire format; these assertions pin them forever
        assert_eq!(ColorMode::Monochrome.discriminator(), 1);
        assert_eq!(ColorMode::Grayscale.discriminator(), 2);
        assert_eq!(ColorMode::Color.discriminator(), 3);
    }

    #[test]
    fn header_bytes_are_little_endian() {
        assert_eq!(ColorMode::Monochrome.header_bytes(), [0x01, 0x00]);
        assert_eq!(ColorMode::Grayscale.header_bytes(), [0x02, 0x00]);
        assert_eq!(ColorMode::Color.header_bytes(), [0x03, 0x00]);
    }

    #[test]
    fn from_discriminator_round_trips() {
        for mode in [ColorMode::Monochrome, ColorMode::Grayscale, ColorMode::Color] {
            assert_eq!(ColorMode::from_discriminator(mode.discriminator()).unwrap(), mode);
        }
    }

    #[test]
    fn from_discriminator_rejects_unknown_codes() {
        for code in [0u16, 4, 255, u16::MAX] {
            let result = ColorMode::from_discriminator(code);
            assert!(matches!(result, Err(HashError::UnknownMode { code: c }) if c == code));
        }
    }

    #[test]
    fn default_mode_is_monochrome() {
        assert_eq!(ColorMode::default(), ColorMode::Monochrome);
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(ColorMode::Color.to_string(), "color");
    }
}
