//! Digest primitive used for the mnemonic checksum.
//!
//! The checksum only needs "32-byte digest of a byte buffer". That
//! capability is a trait so tests and alternative backends can stand in
//! for the default SHA-256 implementation.

use sha2::{Digest, Sha256};
use thiserror::Error;

/// Length of a digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Errors that can occur while computing a digest.
#[derive(Debug, Clone, Error)]
pub enum HashError {
    #[error("digest computation failed: {0}")]
    Failed(String),
}

/// A 32-byte digest function.
pub trait Hasher {
    /// Computes the digest of `data`.
    fn digest(&self, data: &[u8]) -> Result<[u8; DIGEST_LEN], HashError>;
}

impl<H: Hasher + ?Sized> Hasher for &H {
    fn digest(&self, data: &[u8]) -> Result<[u8; DIGEST_LEN], HashError> {
        (**self).digest(data)
    }
}

/// SHA-256, the digest BIP-39 mandates for its checksum.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl Hasher for Sha256Hasher {
    fn digest(&self, data: &[u8]) -> Result<[u8; DIGEST_LEN], HashError> {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Ok(hasher.finalize().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_empty_input() {
        let digest = Sha256Hasher.digest(&[]).unwrap();

        // SHA-256("") = e3b0c442...
        assert_eq!(&digest[..4], &[0xe3, 0xb0, 0xc4, 0x42]);
    }

    #[test]
    fn test_sha256_zero_entropy_first_byte() {
        let digest = Sha256Hasher.digest(&[0u8; 16]).unwrap();
        assert_eq!(digest[0], 0x37);
    }

    #[test]
    fn test_different_input_different_output() {
        let a = Sha256Hasher.digest(&[0x00; 32]).unwrap();
        let b = Sha256Hasher.digest(&[0x01; 32]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_hasher_by_reference() {
        let hasher = Sha256Hasher;
        let by_ref = &hasher;
        assert_eq!(
            by_ref.digest(b"abc").unwrap(),
            hasher.digest(b"abc").unwrap()
        );
    }
}
