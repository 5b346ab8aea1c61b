//! Fixed-capacity bit accumulator.

/// Packs single bits into bytes, most significant bit first.
///
/// The buffer is sized up-front from the total bit count, so pushing never
/// reallocates. An incomplete final byte is zero-padded in its low-order
/// bits, matching the wire format's trailing padding rule.
#[derive(Debug)]
pub struct BitPacker {
    bytes: Vec<u8>,
    bits_used: usize,
}

impl BitPacker {
    /// Create a packer that will hold exactly `bits` bits
    pub fn with_bit_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            bits_used: 0,
        }
    }

    /// Append one bit to the buffer
    pub fn push(&mut self, bit: bool) {
        let offset = self.bits_used % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            // MSB-first within each byte
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << (7 - offset);
        }
        self.bits_used += 1;
    }

    /// Number of bits pushed so far
    pub fn bits_used(&self) -> usize {
        self.bits_used
    }

    /// Finish packing and take the byte buffer
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
