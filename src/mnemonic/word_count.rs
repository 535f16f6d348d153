//! Supported mnemonic lengths and their bit budgets.
//!
//! | words | ENT | CS | ENT+CS |
//! |-------|-----|----|--------|
//! | 12    | 128 | 4  | 132    |
//! | 15    | 160 | 5  | 165    |
//! | 18    | 192 | 6  | 198    |
//! | 21    | 224 | 7  | 231    |
//! | 24    | 256 | 8  | 264    |

use super::error::MnemonicError;
use crate::wordlist::BITS_PER_WORD;
use serde::{Deserialize, Serialize};

/// Number of words in a mnemonic sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum WordCount {
    /// 128 bits of entropy.
    Words12,
    /// 160 bits of entropy.
    Words15,
    /// 192 bits of entropy.
    Words18,
    /// 224 bits of entropy.
    Words21,
    /// 256 bits of entropy.
    #[default]
    Words24,
}

impl WordCount {
    /// Every supported length, shortest first.
    pub const ALL: [WordCount; 5] = [
        WordCount::Words12,
        WordCount::Words15,
        WordCount::Words18,
        WordCount::Words21,
        WordCount::Words24,
    ];

    /// Returns the number of words.
    pub const fn words(self) -> usize {
        match self {
            WordCount::Words12 => 12,
            WordCount::Words15 => 15,
            WordCount::Words18 => 18,
            WordCount::Words21 => 21,
            WordCount::Words24 => 24,
        }
    }

    /// Entropy length in bits (ENT).
    pub const fn entropy_bits(self) -> usize {
        self.words() / 3 * 32
    }

    /// Entropy length in bytes.
    pub const fn entropy_bytes(self) -> usize {
        self.entropy_bits() / 8
    }

    /// Checksum length in bits (CS).
    pub const fn checksum_bits(self) -> usize {
        self.entropy_bits() / 32
    }

    /// Length of the combined entropy and checksum sequence.
    pub const fn total_bits(self) -> usize {
        self.entropy_bits() + self.checksum_bits()
    }

    /// Looks up the length for a word count, if supported.
    pub fn from_words(words: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.words() == words)
    }

    /// Looks up the length whose entropy is `bytes` long, if supported.
    pub fn from_entropy_len(bytes: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.entropy_bytes() == bytes)
    }
}

// ENT + CS must split into whole words for every supported length.
const _: () = {
    let mut i = 0;
    while i < WordCount::ALL.len() {
        let count = WordCount::ALL[i];
        assert!(count.entropy_bits() % 32 == 0);
        assert!(count.entropy_bits() >= 128 && count.entropy_bits() <= 256);
        assert!(count.total_bits() == count.words() * BITS_PER_WORD);
        i += 1;
    }
};

impl TryFrom<usize> for WordCount {
    type Error = MnemonicError;

    fn try_from(words: usize) -> Result<Self, Self::Error> {
        Self::from_words(words).ok_or(MnemonicError::InvalidWordCount(words))
    }
}

impl From<WordCount> for usize {
    fn from(count: WordCount) -> usize {
        count.words()
    }
}

impl std::fmt::Display for WordCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.words())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_budget_table() {
        let table: Vec<_> = WordCount::ALL
            .iter()
            .map(|c| (c.words(), c.entropy_bits(), c.checksum_bits()))
            .collect();

        assert_eq!(
            table,
            [(12, 128, 4), (15, 160, 5), (18, 192, 6), (21, 224, 7), (24, 256, 8)]
        );
    }

    #[test]
    fn test_total_bits_is_whole_words() {
        for count in WordCount::ALL {
            assert_eq!(count.total_bits(), count.words() * 11);
            assert_eq!(count.entropy_bytes() * 8, count.entropy_bits());
        }
    }

    #[test]
    fn test_try_from_rejects_unsupported() {
        for words in [0, 1, 3, 11, 13, 16, 25, 27, 100] {
            assert!(matches!(
                WordCount::try_from(words),
                Err(MnemonicError::InvalidWordCount(n)) if n == words
            ));
        }
    }

    #[test]
    fn test_from_entropy_len() {
        assert_eq!(WordCount::from_entropy_len(16), Some(WordCount::Words12));
        assert_eq!(WordCount::from_entropy_len(32), Some(WordCount::Words24));
        assert_eq!(WordCount::from_entropy_len(17), None);
        assert_eq!(WordCount::from_entropy_len(0), None);
    }

    #[test]
    fn test_serde_as_integer() {
        #[derive(Debug, Deserialize, Serialize)]
        struct Wrapper {
            word_count: WordCount,
        }

        let parsed: Wrapper = toml::from_str("word_count = 18").unwrap();
        assert_eq!(parsed.word_count, WordCount::Words18);

        assert!(toml::from_str::<Wrapper>("word_count = 13").is_err());

        let out = toml::to_string(&parsed).unwrap();
        assert_eq!(out.trim(), "word_count = 18");
    }
}
