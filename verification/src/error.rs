use crate::proof::ProofInputError;
use rentright_store::StoreError;
use thiserror::Error;

/// Failures of the verification procedure, in increasing distance from the
/// user: bad input (fix and resubmit), unreachable store (retry later),
/// store-layer rejection (retry by re-invoking the procedure).
#[derive(Debug, Error)]
pub enum VerificationError {
    /// The identity number failed local validation; no store call was made.
    #[error("invalid identity number: {0}")]
    InvalidInput(#[from] ProofInputError),

    /// The verification store could not be reached or timed out. The
    /// identity's state is unknown — callers must not assume the submission
    /// succeeded.
    #[error("verification store unavailable: {0}")]
    StoreUnavailable(StoreError),

    /// The submission reached the store layer but was rejected. The user
    /// may re-enter the identity number and re-invoke the procedure.
    #[error("verification submission failed: {0}")]
    Failed(StoreError),
}

impl VerificationError {
    /// Whether re-invoking the procedure with the same input can succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, VerificationError::InvalidInput(_))
    }
}

impl From<StoreError> for VerificationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Timeout(_) | StoreError::Unavailable(_) => {
                VerificationError::StoreUnavailable(err)
            }
            StoreError::Rejected(_) => VerificationError::Failed(err),
        }
    }
}
