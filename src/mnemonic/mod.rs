//! BIP-39 mnemonic encoding.
//!
//! This module turns entropy into a mnemonic sentence: the entropy is
//! extended with `ENT / 32` checksum bits, split into 11-bit groups, and
//! each group selects a word from the 2048-word dictionary.

mod encoder;
mod error;
mod sentence;
mod word_count;

pub use encoder::{EncoderStats, MnemonicEncoder};
pub use error::MnemonicError;
pub use sentence::Mnemonic;
pub use word_count::WordCount;

/// Generates a mnemonic of `words` words from the OS CSPRNG.
///
/// `words` must be 12, 15, 18, 21, or 24.
pub fn encode_mnemonic(words: usize) -> Result<Mnemonic, MnemonicError> {
    MnemonicEncoder::from_os_entropy().encode(words)
}
