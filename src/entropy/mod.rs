//! Randomness providers.
//!
//! Mnemonic generation only needs "N uniformly random bytes". The
//! default provider is the operating system CSPRNG; any generator
//! implementing `rand_core`'s `CryptoRng` can be adapted as well.

mod source;

pub use source::{EntropyError, EntropySource, OsEntropy, RngEntropy};
