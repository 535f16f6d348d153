//! Checksum bit extraction.

use super::hash::{HashError, Hasher, Sha256Hasher};

/// Mask selecting the `count` most-significant bits of a byte.
///
/// # Panics
///
/// Panics if `count` is not in `1..=8`.
#[inline]
pub fn top_bits_mask(count: usize) -> u8 {
    assert!(
        (1..=8).contains(&count),
        "checksum bit count must be 1-8, got {count}"
    );
    0xFFu8 << (8 - count)
}

/// Derives checksum bits from entropy.
///
/// The checksum is the leading bits of the first byte of the entropy's
/// digest. The hash itself is delegated to the injected [`Hasher`].
#[derive(Debug, Clone, Default)]
pub struct ChecksumComputer<H = Sha256Hasher> {
    hasher: H,
}

impl<H: Hasher> ChecksumComputer<H> {
    /// Creates a checksum computer over the given hasher.
    pub fn new(hasher: H) -> Self {
        Self { hasher }
    }

    /// Returns the top `bit_count` bits of the first digest byte.
    ///
    /// The bits stay in their original high positions and the low
    /// `8 - bit_count` bits are cleared, so the result can be appended
    /// directly with [`BitString::push_bits`](crate::bits::BitString::push_bits).
    ///
    /// # Panics
    ///
    /// Panics if `bit_count` is not in `1..=8`.
    pub fn leading_bits(&self, entropy: &[u8], bit_count: usize) -> Result<u8, HashError> {
        let mask = top_bits_mask(bit_count);
        let digest = self.hasher.digest(entropy)?;
        Ok(digest[0] & mask)
    }

    /// Returns the underlying hasher.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}
