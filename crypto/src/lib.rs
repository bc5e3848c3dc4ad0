//! Hashing for identity-proof commitments.
//!
//! A commitment is the SHA-256 digest of the raw identity number, hex
//! encoded. The web client produces the same bytes via
//! `crypto.subtle.digest`, so commitments written by either client match.

pub mod commitment;

pub use commitment::{proof_commitment, sha256_hex};
