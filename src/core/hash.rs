//! The encoded hash artifact.
//!
//! An [`ImageHash`] is the wire format: a 2-byte little-endian color mode
//! discriminator followed by the packed threshold bits. It is created once
//! by the encoder and treated as opaque immutable bytes afterwards.

use crate::core::mode::ColorMode;
use crate::error::HashError;
use serde::{Deserialize, Serialize};

/// Length of the discriminator header in bytes
pub const HEADER_LEN: usize = 2;

/// An encoded perceptual fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHash {
    /// Color mode the discriminator encodes
    mode: ColorMode,
    /// The full wire blob: header followed by packed bits
    bytes: Vec<u8>,
}

impl ImageHash {
    /// Assemble a hash from a mode and its packed payload.
    ///
    /// Used by the encoder; the header is derived from `mode`, so the
    /// result is structurally valid by construction.
    pub fn new(mode: ColorMode, payload: Vec<u8>) -> Self {
        let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
        bytes.extend_from_slice(&mode.header_bytes());
        bytes.extend_from_slice(&payload);
        Self { mode, bytes }
    }

    /// Re-admit a stored blob.
    ///
    /// The only structural checks a hash ever gets happen here: the blob
    /// must be long enough to carry the header and the discriminator must
    /// name a known mode. The payload stays opaque; any length (including
    /// empty) is accepted so stored hashes from any encoder configuration
    /// round-trip.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, HashError> {
        if bytes.len() < HEADER_LEN {
            return Err(HashError::TooShort { len: bytes.len() });
        }
        let code = u16::from_le_bytes([bytes[0], bytes[1]]);
        let mode = ColorMode::from_discriminator(code)?;
        Ok(Self { mode, bytes })
    }

    /// Color mode this hash was encoded under
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Discriminator code from the header
    pub fn discriminator(&self) -> u16 {
        self.mode.discriminator()
    }

    /// The full wire blob, header included
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The packed-bit payload, header excluded
    pub fn payload(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..]
    }

    /// Total number of payload bits (including any trailing padding)
    pub fn bit_count(&self) -> usize {
        self.payload().len() * 8
    }

    /// The full blob as a hexadecimal string
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Consume the hash, yielding the wire blob for storage
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
