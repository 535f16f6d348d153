//! BIP-39 Mnemonic Generation Library
//!
//! Converts cryptographically random entropy into a human-memorable
//! mnemonic sentence following BIP-39.
//!
//! # Architecture
//!
//! ```text
//! entropy → checksum → bit assembly → 11-bit windows → wordlist
//! ```
//!
//! - [`entropy`]: where random bytes come from (OS CSPRNG by default)
//! - [`checksum`]: the leading bits of the entropy's SHA-256 digest
//! - [`bits`]: MSB-first bit buffer used to assemble and slice the sequence
//! - [`wordlist`]: the static 2048-word English dictionary
//! - [`mnemonic`]: the encoder tying the stages together
//!
//! # Design Principles
//!
//! - **Fail-closed**: entropy or digest failures abort the encode; no partial
//!   sentence is ever returned
//! - **Fail-fast**: unsupported word counts are rejected before any
//!   randomness is drawn
//! - **No lingering secrets**: entropy and intermediate bits are zeroed on drop
//!
//! # Example
//!
//! ```
//! use bip39_mnemonic::{MnemonicEncoder, WordCount};
//!
//! let mut encoder = MnemonicEncoder::from_os_entropy();
//! let mnemonic = encoder.generate(WordCount::Words12).unwrap();
//!
//! assert_eq!(mnemonic.words().count(), 12);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod bits;
pub mod checksum;
pub mod config;
pub mod entropy;
pub mod metrics;
pub mod mnemonic;
pub mod wordlist;

// Re-export commonly used types at crate root
pub use bits::BitString;
pub use checksum::{ChecksumComputer, HashError, Hasher, Sha256Hasher};
pub use config::{ConfigError, FileConfig};
pub use entropy::{EntropyError, EntropySource, OsEntropy, RngEntropy};
pub use mnemonic::{encode_mnemonic, EncoderStats, Mnemonic, MnemonicEncoder, MnemonicError, WordCount};
pub use wordlist::Wordlist;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
