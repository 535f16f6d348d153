//! Prometheus metrics for mnemonic generation.
//!
//! # Metrics Exposed
//!
//! - `bip39_mnemonics_encoded_total` - Mnemonics successfully encoded
//! - `bip39_rejected_requests_total` - Unsupported word counts or entropy lengths
//! - `bip39_entropy_failures_total` - Encodes aborted by the entropy source
//! - `bip39_hash_failures_total` - Encodes aborted by the checksum digest
//! - `bip39_entropy_bytes_drawn_total` - Random bytes consumed
//!
//! # Example
//!
//! ```
//! use bip39_mnemonic::{metrics::MetricsRegistry, MnemonicEncoder};
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//! let mut encoder = MnemonicEncoder::from_os_entropy();
//!
//! encoder.encode(12).unwrap();
//! registry.update(&encoder.stats());
//!
//! assert!(registry.encode().unwrap().contains("bip39_mnemonics_encoded_total 1"));
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry};
