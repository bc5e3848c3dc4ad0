//! SHA-256 proof commitments.

use rentright_types::ProofCommitment;
use sha2::{Digest, Sha256};

/// Compute the lowercase hex SHA-256 digest of arbitrary data.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Compute the proof commitment for a raw identity number.
///
/// Deterministic and one-way, but NOT a secure commitment: the input space
/// of a 12-digit number (10^12 values) is small enough to enumerate, and the
/// digest is unsalted, so anyone holding a commitment can recover the number
/// offline. This mirrors the deployed client exactly and stands in for a
/// server-side identity oracle that would return a signed attestation
/// instead.
pub fn proof_commitment(digits: &str) -> ProofCommitment {
    ProofCommitment::new(sha256_hex(digits.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commitment_deterministic() {
        let a = proof_commitment("123456789012");
        let b = proof_commitment("123456789012");
        assert_eq!(a, b);
    }

    #[test]
    fn commitment_matches_webcrypto_output() {
        // Reference digests from the web client's
        // crypto.subtle.digest('SHA-256', ...) call.
        assert_eq!(
            proof_commitment("123456789012").as_hex(),
            "2a33349e7e606a8ad2e30e3c84521f9377450cf09083e162e0a9b1480ce0f972"
        );
        assert_eq!(
            proof_commitment("999999999999").as_hex(),
            "562d4aba4cc1783409cc32796c3b0243bb6768cc55e51c4dd3a7e65cb55c248a"
        );
        assert_eq!(
            proof_commitment("210987654321").as_hex(),
            "fbc809103c8e6620641bab4ff052a20ff1cfff5fed8852f8ecc146657a0ba707"
        );
    }

    #[test]
    fn different_inputs_different_commitments() {
        assert_ne!(proof_commitment("123456789012"), proof_commitment("123456789013"));
    }

    #[test]
    fn commitment_is_well_formed_hex() {
        assert!(proof_commitment("000000000000").is_well_formed());
    }
}
