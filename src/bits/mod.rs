//! Bit-level buffers.
//!
//! The mnemonic pipeline assembles entropy and checksum bits into a
//! single sequence and reads it back in fixed-width windows. This module
//! owns that bit layout so no caller does manual shift arithmetic.

mod bitstring;

pub use bitstring::BitString;
