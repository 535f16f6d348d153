//! Entropy source abstraction.
//!
//! This module provides a trait-based abstraction over randomness
//! providers, allowing the OS CSPRNG to be swapped for a caller-owned
//! generator or a deterministic stub in tests.

use rand_core::{CryptoRng, OsRng, RngCore};
use thiserror::Error;

/// Errors that can occur while drawing entropy.
#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("entropy source unavailable: {0}")]
    Unavailable(String),
    #[error("entropy source returned {got} bytes, need {need}")]
    ShortRead { got: usize, need: usize },
}

/// Trait for entropy providers.
///
/// Implementations must either fill the whole buffer with
/// unpredictable bytes or return an error. A partially filled buffer is
/// never a success.
pub trait EntropySource {
    /// Fills `dest` with random bytes.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill(dest)
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill(dest)
    }
}

/// The operating system CSPRNG.
#[derive(Debug, Default)]
pub struct OsEntropy {
    bytes_drawn: u64,
}

impl OsEntropy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of bytes supplied so far.
    pub fn bytes_drawn(&self) -> u64 {
        self.bytes_drawn
    }
}

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| EntropyError::Unavailable(e.to_string()))?;
        self.bytes_drawn += dest.len() as u64;
        Ok(())
    }
}

/// Adapts a cryptographic RNG into an entropy source.
///
/// Only generators marked [`CryptoRng`] are accepted, so a seeded
/// ChaCha20 stream qualifies while a plain PRNG does not.
pub struct RngEntropy<R> {
    rng: R,
    bytes_drawn: u64,
}

impl<R: RngCore + CryptoRng> RngEntropy<R> {
    /// Wraps the given generator.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            bytes_drawn: 0,
        }
    }

    /// Returns the total number of bytes supplied so far.
    pub fn bytes_drawn(&self) -> u64 {
        self.bytes_drawn
    }

    /// Consumes the adapter and returns the generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore + CryptoRng> EntropySource for RngEntropy<R> {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.rng
            .try_fill_bytes(dest)
            .map_err(|e| EntropyError::Unavailable(e.to_string()))?;
        self.bytes_drawn += dest.len() as u64;
        Ok(())
    }
}

impl<R> std::fmt::Debug for RngEntropy<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RngEntropy")
            .field("bytes_drawn", &self.bytes_drawn)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Generator whose every call fails.
    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {}

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
            Err(rand_core::Error::new("hardware rng offline"))
        }
    }

    impl CryptoRng for BrokenRng {}

    #[test]
    fn test_os_entropy_fills_and_counts() {
        let mut source = OsEntropy::new();
        let mut buf = [0u8; 32];

        source.fill(&mut buf).unwrap();

        assert_eq!(source.bytes_drawn(), 32);
        // 2^-256 chance of a false failure
        assert_ne!(buf, [0u8; 32]);
    }

    #[test]
    fn test_os_entropy_successive_draws_differ() {
        let mut source = OsEntropy::new();
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];

        source.fill(&mut a).unwrap();
        source.fill(&mut b).unwrap();

        assert_ne!(a, b);
        assert_eq!(source.bytes_drawn(), 32);
    }

    #[test]
    fn test_rng_entropy_failure_propagates() {
        let mut source = RngEntropy::new(BrokenRng);
        let mut buf = [0u8; 16];

        assert!(matches!(
            source.fill(&mut buf),
            Err(EntropyError::Unavailable(_))
        ));
        assert_eq!(source.bytes_drawn(), 0);
    }

    #[test]
    fn test_boxed_source() {
        let mut source: Box<dyn EntropySource> = Box::new(OsEntropy::new());
        let mut buf = [0u8; 8];
        assert!(source.fill(&mut buf).is_ok());
    }
}
