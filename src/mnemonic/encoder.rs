//! Entropy to mnemonic encoding.
//!
//! # Pipeline
//!
//! ```text
//! validate → draw entropy → checksum → assemble bits → 11-bit windows → words
//! ```
//!
//! Every step either succeeds completely or aborts the encode with an
//! error. Entropy and the assembled bit sequence are held in zeroizing
//! buffers, so they are wiped on every exit path including errors.

use super::error::MnemonicError;
use super::sentence::Mnemonic;
use super::word_count::WordCount;
use crate::bits::BitString;
use crate::checksum::{ChecksumComputer, Hasher, Sha256Hasher};
use crate::entropy::{EntropySource, OsEntropy};
use crate::wordlist::{Wordlist, BITS_PER_WORD};
use zeroize::Zeroizing;

/// Running totals for an encoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncoderStats {
    /// Mnemonics successfully produced.
    pub mnemonics_encoded: u64,
    /// Requests rejected before any entropy was drawn.
    pub rejected_requests: u64,
    /// Encodes aborted because the entropy source failed.
    pub entropy_failures: u64,
    /// Encodes aborted because the checksum digest failed.
    pub hash_failures: u64,
    /// Random bytes drawn from the source.
    pub entropy_bytes_drawn: u64,
}

/// Encodes entropy into BIP-39 mnemonic sentences.
///
/// The encoder owns an [`EntropySource`] for fresh randomness and a
/// [`ChecksumComputer`] over an injected [`Hasher`]. Words come from the
/// shared English [`Wordlist`].
pub struct MnemonicEncoder<S, H = Sha256Hasher> {
    source: S,
    checksum: ChecksumComputer<H>,
    wordlist: &'static Wordlist,
    stats: EncoderStats,
}

impl MnemonicEncoder<OsEntropy> {
    /// Creates an encoder drawing from the operating system CSPRNG.
    pub fn from_os_entropy() -> Self {
        Self::new(OsEntropy::new())
    }
}

impl<S: EntropySource> MnemonicEncoder<S> {
    /// Creates an encoder over `source` using SHA-256 checksums.
    pub fn new(source: S) -> Self {
        Self::with_hasher(source, Sha256Hasher)
    }
}

impl<S: EntropySource, H: Hasher> MnemonicEncoder<S, H> {
    /// Creates an encoder with a custom digest implementation.
    pub fn with_hasher(source: S, hasher: H) -> Self {
        Self {
            source,
            checksum: ChecksumComputer::new(hasher),
            wordlist: Wordlist::english(),
            stats: EncoderStats::default(),
        }
    }

    /// Generates a mnemonic of `words` words from fresh entropy.
    ///
    /// Unsupported word counts are rejected before the entropy source is
    /// touched.
    pub fn encode(&mut self, words: usize) -> Result<Mnemonic, MnemonicError> {
        let count = match WordCount::try_from(words) {
            Ok(count) => count,
            Err(e) => {
                self.stats.rejected_requests += 1;
                tracing::debug!(words, "Rejected unsupported word count");
                return Err(e);
            }
        };

        self.generate(count)
    }

    /// Generates a mnemonic of the given length from fresh entropy.
    pub fn generate(&mut self, count: WordCount) -> Result<Mnemonic, MnemonicError> {
        let mut entropy = Zeroizing::new(vec![0u8; count.entropy_bytes()]);

        if let Err(e) = self.source.fill(&mut entropy) {
            self.stats.entropy_failures += 1;
            tracing::warn!(
                requested_bytes = entropy.len(),
                error = %e,
                "Entropy source failed, aborting encode"
            );
            return Err(e.into());
        }
        self.stats.entropy_bytes_drawn += entropy.len() as u64;

        tracing::trace!(bytes = entropy.len(), "Drew entropy");

        self.encode_with(count, &entropy)
    }

    /// Encodes caller-supplied entropy without drawing randomness.
    ///
    /// `entropy` must be 16, 20, 24, 28, or 32 bytes long.
    pub fn encode_entropy(&mut self, entropy: &[u8]) -> Result<Mnemonic, MnemonicError> {
        let count = match WordCount::from_entropy_len(entropy.len()) {
            Some(count) => count,
            None => {
                self.stats.rejected_requests += 1;
                tracing::debug!(bytes = entropy.len(), "Rejected non-standard entropy length");
                return Err(MnemonicError::InvalidEntropyLength(entropy.len()));
            }
        };

        self.encode_with(count, entropy)
    }

    /// Returns running totals for this encoder.
    pub fn stats(&self) -> EncoderStats {
        self.stats
    }

    /// Returns the entropy source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the encoder and returns the entropy source.
    pub fn into_source(self) -> S {
        self.source
    }

    fn encode_with(&mut self, count: WordCount, entropy: &[u8]) -> Result<Mnemonic, MnemonicError> {
        debug_assert_eq!(entropy.len(), count.entropy_bytes());

        let checksum = match self.checksum.leading_bits(entropy, count.checksum_bits()) {
            Ok(bits) => Zeroizing::new(bits),
            Err(e) => {
                self.stats.hash_failures += 1;
                tracing::warn!(error = %e, "Checksum digest failed, aborting encode");
                return Err(e.into());
            }
        };

        let mut bits = BitString::with_capacity(count.total_bits());
        bits.extend_from_bytes(entropy);
        bits.push_bits(*checksum, count.checksum_bits());

        let expected = count.words() * BITS_PER_WORD;
        if bits.len() != expected {
            return Err(MnemonicError::BitLayout(format!(
                "assembled {} bits, expected {}",
                bits.len(),
                expected
            )));
        }

        let mut indices = Zeroizing::new(Vec::with_capacity(count.words()));
        for i in 0..count.words() {
            let offset = i * BITS_PER_WORD;
            let index = bits.read_window(offset, BITS_PER_WORD).ok_or_else(|| {
                MnemonicError::BitLayout(format!(
                    "window at bit {} runs past {} bits",
                    offset,
                    bits.len()
                ))
            })?;
            indices.push(index);
        }

        let wordlist = self.wordlist;
        let mnemonic = Mnemonic::from_words(
            indices.iter().map(|&index| wordlist.word_at(index)),
            count,
        );

        self.stats.mnemonics_encoded += 1;

        tracing::debug!(
            words = count.words(),
            entropy_bits = count.entropy_bits(),
            checksum_bits = count.checksum_bits(),
            "Encoded mnemonic"
        );

        Ok(mnemonic)
    }
}

impl<S, H> std::fmt::Debug for MnemonicEncoder<S, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MnemonicEncoder")
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
