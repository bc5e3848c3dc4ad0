//! Verification record storage trait.

use crate::StoreError;
use async_trait::async_trait;
use rentright_types::{IdentityKey, ProofCommitment, Timestamp, VerificationRecord};

/// Durable storage of per-identity verification records.
#[async_trait]
pub trait VerificationStore: Send + Sync {
    /// Fetch the record for an identity.
    ///
    /// An identity that has never been touched yields the implicit
    /// default-unverified record, not an error.
    async fn get_verification(&self, key: &IdentityKey)
        -> Result<VerificationRecord, StoreError>;

    /// Mark an identity verified, storing the commitment and timestamp
    /// (merge-upsert; other fields of the backing document are untouched).
    ///
    /// Monotonic: once a record is verified, later calls are state no-ops —
    /// `verified` stays true and the original `submitted_at` and commitment
    /// are kept. There is no reverse transition.
    async fn set_verified(
        &self,
        key: &IdentityKey,
        commitment: ProofCommitment,
        now: Timestamp,
    ) -> Result<(), StoreError>;
}
