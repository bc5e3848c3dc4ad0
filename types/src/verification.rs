//! Verification records and proof commitments.

use crate::identity::IdentityKey;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The stored one-way digest of a submitted identity number.
///
/// 64 lowercase hex characters (SHA-256). The commitment is public data;
/// the raw identity number it was derived from is never stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProofCommitment(String);

impl ProofCommitment {
    /// Expected length of the hex-encoded digest.
    pub const HEX_LEN: usize = 64;

    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Whether the commitment looks like a SHA-256 hex digest.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == Self::HEX_LEN && self.0.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

impl fmt::Display for ProofCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Verification state of one identity.
///
/// `verified` transitions false→true exactly once; the system defines no
/// re-verification or revocation path, so records never revert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// The identity this record belongs to.
    pub identity: IdentityKey,
    /// Whether the identity has completed the verification procedure.
    pub verified: bool,
    /// Digest of the submitted identity number, once verified.
    pub proof_commitment: Option<ProofCommitment>,
    /// When the successful submission happened.
    pub submitted_at: Option<Timestamp>,
}

impl VerificationRecord {
    /// The implicit state of an identity that has never been touched:
    /// unverified, with no commitment on file.
    pub fn unverified(identity: IdentityKey) -> Self {
        Self {
            identity,
            verified: false,
            proof_commitment: None,
            submitted_at: None,
        }
    }

    /// A verified record as written by a successful procedure run.
    pub fn verified(identity: IdentityKey, commitment: ProofCommitment, at: Timestamp) -> Self {
        Self {
            identity,
            verified: true,
            proof_commitment: Some(commitment),
            submitted_at: Some(at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_unverified_record_is_empty() {
        let rec = VerificationRecord::unverified(IdentityKey::new("0xABC"));
        assert!(!rec.verified);
        assert!(rec.proof_commitment.is_none());
        assert!(rec.submitted_at.is_none());
    }

    #[test]
    fn commitment_well_formedness() {
        let good = ProofCommitment::new("a".repeat(64));
        assert!(good.is_well_formed());
        let short = ProofCommitment::new("abc123");
        assert!(!short.is_well_formed());
        let bad_chars = ProofCommitment::new("z".repeat(64));
        assert!(!bad_chars.is_well_formed());
    }
}
