//! Checksum computation for mnemonic encoding.
//!
//! BIP-39 appends `ENT / 32` bits of the entropy's SHA-256 digest to the
//! entropy so transcription errors can be detected. The digest itself is
//! an injected capability; this module only selects the right bits.

mod computer;
mod hash;

pub use computer::{top_bits_mask, ChecksumComputer};
pub use hash::{HashError, Hasher, Sha256Hasher, DIGEST_LEN};
