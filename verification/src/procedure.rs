//! The verification submission procedure.

use crate::error::VerificationError;
use crate::proof::ProofInput;
use rentright_crypto::proof_commitment;
use rentright_store::{VerificationStore, VerificationStoreClient};
use rentright_types::{IdentityKey, ProofCommitment, Timestamp, VerificationRecord};
use std::sync::Arc;
use std::time::Duration;

/// Validates an identity number, derives its commitment, and records it.
///
/// One submission per invocation; a failed submission leaves the identity
/// unverified and the user re-invokes with (possibly corrected) input. The
/// procedure never retries on its own.
pub struct VerificationProcedure {
    store: VerificationStoreClient,
}

impl VerificationProcedure {
    pub fn new(store: Arc<dyn VerificationStore>, store_timeout: Duration) -> Self {
        Self {
            store: VerificationStoreClient::new(store, store_timeout),
        }
    }

    /// Submit a raw identity number for `identity`.
    ///
    /// Validation happens before any store interaction; invalid input never
    /// produces a store call. On success the identity is verified in the
    /// store and the written commitment is returned. Until this returns
    /// `Ok`, callers must treat the identity as unverified.
    pub async fn submit(
        &self,
        identity: &IdentityKey,
        raw_id: &str,
    ) -> Result<ProofCommitment, VerificationError> {
        let input = ProofInput::parse(raw_id)?;
        let commitment = proof_commitment(input.digits());

        self.store
            .set_verified(identity, commitment.clone(), Timestamp::now())
            .await?;

        tracing::info!(identity = %identity.short(), "verification recorded");
        Ok(commitment)
    }

    /// Read the current verification record for `identity`.
    pub async fn status(
        &self,
        identity: &IdentityKey,
    ) -> Result<VerificationRecord, VerificationError> {
        Ok(self.store.get_verification(identity).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rentright_nullables::{NullClock, NullVerificationStore};
    use rentright_store::DEFAULT_STORE_TIMEOUT;

    fn procedure(store: Arc<NullVerificationStore>) -> VerificationProcedure {
        VerificationProcedure::new(store, DEFAULT_STORE_TIMEOUT)
    }

    #[tokio::test]
    async fn valid_submission_verifies_identity() {
        let store = Arc::new(NullVerificationStore::new());
        let proc = procedure(store.clone());
        let identity = IdentityKey::new("0xABC");

        let commitment = proc.submit(&identity, "123456789012").await.unwrap();
        assert_eq!(
            commitment.as_hex(),
            "2a33349e7e606a8ad2e30e3c84521f9377450cf09083e162e0a9b1480ce0f972"
        );

        let record = proc.status(&identity).await.unwrap();
        assert!(record.verified);
        assert_eq!(record.proof_commitment, Some(commitment));
        assert!(record.submitted_at.is_some());
    }

    #[tokio::test]
    async fn invalid_input_makes_no_store_call() {
        let store = Arc::new(NullVerificationStore::new());
        let proc = procedure(store.clone());
        let identity = IdentityKey::new("0xABC");

        for bad in ["12345", "1234567890123", "12345678901x", ""] {
            let err = proc.submit(&identity, bad).await.unwrap_err();
            assert!(matches!(err, VerificationError::InvalidInput(_)));
            assert!(!err.is_retryable());
        }
        assert_eq!(store.set_verified_calls(), 0);
    }

    #[tokio::test]
    async fn store_failure_leaves_identity_unverified() {
        let store = Arc::new(NullVerificationStore::new());
        let proc = procedure(store.clone());
        let identity = IdentityKey::new("0xABC");

        store.fail_next_call();
        let err = proc.submit(&identity, "123456789012").await.unwrap_err();
        assert!(matches!(err, VerificationError::StoreUnavailable(_)));
        assert!(err.is_retryable());

        let record = proc.status(&identity).await.unwrap();
        assert!(!record.verified);

        // Manual re-invocation succeeds.
        proc.submit(&identity, "123456789012").await.unwrap();
        assert!(proc.status(&identity).await.unwrap().verified);
    }

    #[tokio::test]
    async fn resubmission_keeps_first_timestamp() {
        // The store clock is wall time here, so drive the record directly
        // with a manual clock to pin the timestamps.
        let store = Arc::new(NullVerificationStore::new());
        let clock = NullClock::new(1_000);
        let identity = IdentityKey::new("0xABC");
        let commitment = proof_commitment("123456789012");

        store
            .set_verified(&identity, commitment.clone(), clock.now())
            .await
            .unwrap();
        clock.advance(500);
        store
            .set_verified(&identity, proof_commitment("999999999999"), clock.now())
            .await
            .unwrap();

        let record = store.get_verification(&identity).await.unwrap();
        assert_eq!(record.submitted_at, Some(Timestamp::new(1_000)));
        assert_eq!(record.proof_commitment, Some(commitment));
    }

    proptest! {
        /// Everything that is not exactly 12 ASCII digits is rejected
        /// locally.
        #[test]
        fn malformed_input_rejected(raw in "[0-9a-zA-Z ]{0,20}") {
            prop_assume!(
                raw.len() != 12 || !raw.bytes().all(|b| b.is_ascii_digit())
            );
            prop_assert!(ProofInput::parse(&raw).is_err());
        }
    }
}
