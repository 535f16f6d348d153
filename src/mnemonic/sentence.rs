//! The encoded mnemonic sentence.

use super::word_count::WordCount;
use zeroize::Zeroizing;

/// Longest word in the English wordlist.
pub(crate) const MAX_WORD_LEN: usize = 8;

/// A BIP-39 mnemonic sentence.
///
/// Words are separated by single ASCII spaces with no leading or
/// trailing whitespace. The phrase is secret material: it is zeroed on
/// drop and hidden from `Debug` output.
pub struct Mnemonic {
    phrase: Zeroizing<String>,
    word_count: WordCount,
}

impl Mnemonic {
    /// Joins `words` into a sentence.
    ///
    /// The buffer is sized for the longest possible sentence up front so
    /// it never reallocates and leaves a stray copy behind.
    pub(crate) fn from_words<'a>(
        words: impl IntoIterator<Item = &'a str>,
        word_count: WordCount,
    ) -> Self {
        let mut phrase = Zeroizing::new(String::with_capacity(
            word_count.words() * (MAX_WORD_LEN + 1),
        ));

        for (i, word) in words.into_iter().enumerate() {
            if i > 0 {
                phrase.push(' ');
            }
            phrase.push_str(word);
        }

        Self { phrase, word_count }
    }

    /// Returns the sentence.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Returns the number of words.
    #[inline]
    pub fn word_count(&self) -> WordCount {
        self.word_count
    }

    /// Iterates the words in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.phrase.split(' ')
    }
}

impl AsRef<str> for Mnemonic {
    fn as_ref(&self) -> &str {
        self.phrase()
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.phrase)
    }
}

impl std::fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.word_count.words())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_space_join() {
        let words = ["abandon"; 11].into_iter().chain(["about"]);
        let mnemonic = Mnemonic::from_words(words, WordCount::Words12);

        assert!(mnemonic.phrase().starts_with("abandon abandon"));
        assert!(mnemonic.phrase().ends_with(" about"));
        assert!(!mnemonic.phrase().contains("  "));
        assert_eq!(mnemonic.words().count(), 12);
    }

    #[test]
    fn test_debug_redacts_phrase() {
        let mnemonic = Mnemonic::from_words(["zoo"; 12], WordCount::Words12);

        let debug = format!("{:?}", mnemonic);
        assert!(debug.contains("word_count: 12"));
        assert!(!debug.contains("zoo"));
    }

    #[test]
    fn test_display_is_phrase() {
        let mnemonic = Mnemonic::from_words(["zoo"; 12], WordCount::Words12);
        assert_eq!(mnemonic.to_string(), mnemonic.phrase());
    }
}
