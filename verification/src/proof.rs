//! Local validation of the user-entered identity number.

use std::fmt;
use thiserror::Error;
use zeroize::Zeroizing;

/// Required length of the identity number: 12 decimal digits.
pub const PROOF_INPUT_LEN: usize = 12;

/// Why a raw identity number was rejected before submission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProofInputError {
    #[error("expected {PROOF_INPUT_LEN} digits, got {0}")]
    WrongLength(usize),

    #[error("identity number must contain only digits")]
    NonDigit,
}

/// A validated identity number, ready for hashing.
///
/// The raw digits are wiped from memory on drop and are intentionally
/// excluded from `Debug` output — only the derived commitment is ever
/// stored or logged.
pub struct ProofInput(Zeroizing<String>);

impl ProofInput {
    /// Validate a raw user-entered identity number.
    ///
    /// Accepts exactly [`PROOF_INPUT_LEN`] ASCII digits; anything else is
    /// rejected locally, with no store interaction.
    pub fn parse(raw: &str) -> Result<Self, ProofInputError> {
        if raw.len() != PROOF_INPUT_LEN {
            return Err(ProofInputError::WrongLength(raw.len()));
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ProofInputError::NonDigit);
        }
        Ok(Self(Zeroizing::new(raw.to_string())))
    }

    /// The validated digits.
    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ProofInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProofInput(redacted)")
    }
}
