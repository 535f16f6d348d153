//! Standard BIP-39 English test vectors.

use bip39_mnemonic::{EntropyError, EntropySource, MnemonicEncoder, MnemonicError, WordCount};

/// (entropy hex, expected mnemonic)
const VECTORS: &[(&str, &str)] = &[
    (
        "00000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
    ),
    (
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "legal winner thank year wave sausage worth useful legal winner thank yellow",
    ),
    (
        "80808080808080808080808080808080",
        "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
    ),
    (
        "ffffffffffffffffffffffffffffffff",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
    ),
    (
        "000000000000000000000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon \
         abandon abandon abandon abandon abandon agent",
    ),
    (
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth \
         useful legal will",
    ),
    (
        "808080808080808080808080808080808080808080808080",
        "letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor \
         acoustic avoid letter always",
    ),
    (
        "ffffffffffffffffffffffffffffffffffffffffffffffff",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo when",
    ),
    (
        "0000000000000000000000000000000000000000000000000000000000000000",
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon \
         abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art",
    ),
    (
        "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        "legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth \
         useful legal winner thank year wave sausage worth title",
    ),
    (
        "8080808080808080808080808080808080808080808080808080808080808080",
        "letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor \
         acoustic avoid letter advice cage absurd amount doctor acoustic bless",
    ),
    (
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote",
    ),
    (
        "9e885d952ad362caeb4efe34a8e91bd2",
        "ozone drill grab fiber curtain grace pudding thank cruise elder eight picnic",
    ),
    (
        "6610b25967cdcca9d59875f5cb50b0ea75433311869e930b",
        "gravity machine north sort system female filter attitude volume fold club stay feature office \
         ecology stable narrow fog",
    ),
    (
        "68a79eaca2324873eacc50cb9c6eca8cc68ea5d936f98787c60c7ebc74e6ce7c",
        "hamster diagram private dutch cause delay private meat slide toddler razor book happy fancy \
         gospel tennis maple dilemma loan word shrug inflict delay length",
    ),
    (
        "c0ba5a8e914111210f2bd131f3d5e08d",
        "scheme spot photo card baby mountain device kick cradle pact join borrow",
    ),
    (
        "0460ef47585604c5660618db2e6a7e7f",
        "afford alter spike radar gate glance object seek swamp infant panel yellow",
    ),
    (
        "f585c11aec520db57dd353c69554b21a89b20fb0650966fa0a9d6f74fd989d8f",
        "void come effort suffer camp survey warrior heavy shoot primary clutch crush open amazing \
         screen patrol group space point ten exist slush involve unfold",
    ),
];

/// Source replaying a fixed byte sequence.
struct Replay(Vec<u8>);

impl EntropySource for Replay {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if dest.len() != self.0.len() {
            return Err(EntropyError::ShortRead {
                got: self.0.len(),
                need: dest.len(),
            });
        }
        dest.copy_from_slice(&self.0);
        Ok(())
    }
}

#[test]
fn test_vectors_from_supplied_entropy() {
    let mut encoder = MnemonicEncoder::new(Replay(Vec::new()));

    for (entropy_hex, expected) in VECTORS {
        let entropy = hex::decode(entropy_hex).unwrap();
        let mnemonic = encoder.encode_entropy(&entropy).unwrap();
        assert_eq!(mnemonic.phrase(), *expected, "entropy {entropy_hex}");
    }
}

#[test]
fn test_vectors_through_entropy_source() {
    for (entropy_hex, expected) in VECTORS {
        let entropy = hex::decode(entropy_hex).unwrap();
        let words = entropy.len() / 4 * 3;

        let mut encoder = MnemonicEncoder::new(Replay(entropy));
        let mnemonic = encoder.encode(words).unwrap();

        assert_eq!(mnemonic.phrase(), *expected, "entropy {entropy_hex}");
        assert_eq!(mnemonic.word_count().words(), words);
    }
}

#[test]
fn test_odd_lengths_with_zero_entropy() {
    // SHA-256 of 20 zero bytes starts 0xde, of 28 zero bytes 0x3a
    let mut encoder = MnemonicEncoder::new(Replay(Vec::new()));

    let fifteen = encoder.encode_entropy(&[0u8; 20]).unwrap();
    assert_eq!(fifteen.word_count(), WordCount::Words15);
    assert_eq!(fifteen.words().last(), Some("address"));

    let twenty_one = encoder.encode_entropy(&[0u8; 28]).unwrap();
    assert_eq!(twenty_one.word_count(), WordCount::Words21);
    assert_eq!(twenty_one.words().last(), Some("admit"));
}

#[test]
fn test_short_read_is_entropy_failure() {
    let mut encoder = MnemonicEncoder::new(Replay(vec![0u8; 16]));

    let result = encoder.encode(24);
    assert!(matches!(
        result,
        Err(MnemonicError::EntropySourceFailure(EntropyError::ShortRead {
            got: 16,
            need: 32
        }))
    ));
}
