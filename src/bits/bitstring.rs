//! Append-only bit buffer with MSB-first layout.

use zeroize::Zeroizing;

/// An append-only sequence of bits.
///
/// Bits are packed eight to a byte, most-significant bit first, so the
/// first bit appended is bit 7 of byte 0. The buffer tracks its own bit
/// length and rejects reads past the end.
///
/// The backing storage is zeroed on drop because it usually carries
/// entropy. Growing past the reserved capacity reallocates and can leave
/// an unzeroed copy behind, so callers holding secrets should size the
/// buffer up front with [`BitString::with_capacity`].
#[derive(Clone)]
pub struct BitString {
    /// Packed bit storage. Unused low bits of the last byte are zero.
    bytes: Zeroizing<Vec<u8>>,
    /// Number of valid bits.
    len: usize,
}

impl BitString {
    /// Creates an empty bit string.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty bit string with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Zeroizing::new(Vec::with_capacity(bits.div_ceil(8))),
            len: 0,
        }
    }

    /// Appends the `count` most-significant bits of `byte`, MSB first.
    ///
    /// # Panics
    ///
    /// Panics if `count` is not in `1..=8`.
    pub fn push_bits(&mut self, byte: u8, count: usize) {
        assert!(
            (1..=8).contains(&count),
            "bit count must be 1-8, got {count}"
        );

        for i in 0..count {
            self.push_bit(byte & (0x80 >> i) != 0);
        }
    }

    /// Appends all eight bits of every byte in order.
    pub fn extend_from_bytes(&mut self, bytes: &[u8]) {
        if self.len % 8 == 0 {
            // Byte aligned: copy straight through.
            self.bytes.extend_from_slice(bytes);
            self.len += bytes.len() * 8;
            return;
        }

        for &byte in bytes {
            self.push_bits(byte, 8);
        }
    }

    /// Reads `width` bits starting at `offset` as an unsigned integer.
    ///
    /// The first bit read is the most significant. Returns `None` if
    /// `offset + width` runs past the end of the sequence.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not in `1..=16`.
    pub fn read_window(&self, offset: usize, width: usize) -> Option<u16> {
        assert!(
            (1..=16).contains(&width),
            "window width must be 1-16 bits, got {width}"
        );

        let end = offset.checked_add(width)?;
        if end > self.len {
            return None;
        }

        Some((offset..end).fold(0u16, |acc, i| (acc << 1) | u16::from(self.bit(i))))
    }

    /// Returns the bit at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<bool> {
        (index < self.len).then(|| self.bit(index))
    }

    /// Returns the number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no bits have been appended.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn push_bit(&mut self, bit: bool) {
        let shift = self.len % 8;
        if shift == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> shift;
        }
        self.len += 1;
    }

    #[inline]
    fn bit(&self, index: usize) -> bool {
        self.bytes[index / 8] & (0x80 >> (index % 8)) != 0
    }
}

impl Default for BitString {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitString")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
