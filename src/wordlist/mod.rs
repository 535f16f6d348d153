//! The BIP-39 dictionary.
//!
//! A fixed, ordered sequence of 2048 unique words addressed by 11-bit
//! index. The table is a `static`, so it is initialized before any
//! caller runs and can be read from any thread without locking.

mod english;

/// Number of words in a BIP-39 wordlist.
pub const WORDLIST_LEN: usize = 2048;

/// Bits needed to index a word.
pub const BITS_PER_WORD: usize = 11;

/// An immutable ordered BIP-39 wordlist.
pub struct Wordlist {
    words: &'static [&'static str; WORDLIST_LEN],
}

static ENGLISH: Wordlist = Wordlist {
    words: &english::WORDS,
};

impl Wordlist {
    /// Returns the standard English wordlist.
    pub fn english() -> &'static Wordlist {
        &ENGLISH
    }

    /// Returns the word at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below 2048. The encoder only produces
    /// 11-bit indices, so this indicates a bug in the caller.
    #[inline]
    pub fn word_at(&self, index: u16) -> &'static str {
        let index = usize::from(index);
        assert!(
            index < WORDLIST_LEN,
            "word index {index} out of range (max {})",
            WORDLIST_LEN - 1
        );
        self.words[index]
    }

    /// Returns the word at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.words.get(index).copied()
    }

    /// Returns true if `word` is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|probe| (*probe).cmp(word))
            .is_ok()
    }

    /// Iterates the words in index order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.iter().copied()
    }

    /// Returns the number of words (always 2048).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl std::fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wordlist")
            .field("len", &self.words.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_english_size() {
        assert_eq!(Wordlist::english().len(), WORDLIST_LEN);
        assert_eq!(1 << BITS_PER_WORD, WORDLIST_LEN);
    }

    #[test]
    fn test_words_unique() {
        let unique: HashSet<_> = Wordlist::english().iter().collect();
        assert_eq!(unique.len(), WORDLIST_LEN);
    }

    #[test]
    fn test_words_sorted_lowercase_ascii() {
        let words: Vec<_> = Wordlist::english().iter().collect();

        assert!(words.windows(2).all(|w| w[0] < w[1]));
        assert!(words
            .iter()
            .all(|w| !w.is_empty() && w.bytes().all(|b| b.is_ascii_lowercase())));
    }

    #[test]
    fn test_known_indices() {
        let list = Wordlist::english();

        assert_eq!(list.word_at(0), "abandon");
        assert_eq!(list.word_at(3), "about");
        assert_eq!(list.word_at(2047), "zoo");
    }

    #[test]
    #[should_panic(expected = "word index 2048 out of range")]
    fn test_word_at_out_of_range_panics() {
        Wordlist::english().word_at(2048);
    }

    #[test]
    fn test_get_and_contains() {
        let list = Wordlist::english();

        assert_eq!(list.get(1), Some("ability"));
        assert_eq!(list.get(WORDLIST_LEN), None);
        assert!(list.contains("zoo"));
        assert!(!list.contains("zzz"));
    }

    #[test]
    fn test_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| std::thread::spawn(move || Wordlist::english().word_at(i)))
            .collect();

        let words: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(words, ["abandon", "ability", "able", "about"]);
    }
}
