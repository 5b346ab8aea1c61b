//! Base64-payload image source.

use super::ImageSource;
use crate::error::SourceError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

/// Decodes image bytes from a standard-alphabet base64 payload.
///
/// The payload is transport, not image data: a string that fails to
/// decode is a source failure, never a decode failure.
#[derive(Debug, Clone)]
pub struct Base64Source {
    text: String,
}

impl Base64Source {
    /// Create a source for the given base64 text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ImageSource for Base64Source {
    fn fetch(&self) -> Result<Vec<u8>, SourceError> {
        STANDARD
            .decode(self.text.trim())
            .map_err(|e| SourceError::InvalidBase64 {
                reason: e.to_string(),
            })
    }

    fn describe(&self) -> String {
        format!("base64 payload ({} chars)", self.text.len())
    }
}

/// Read a file and return its contents as standard base64.
///
/// Mirrors the fetch side: the counterpart for producing payloads that a
/// [`Base64Source`] later consumes.
pub fn file_to_base64(path: &Path) -> Result<String, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(STANDARD.encode(bytes))
}
