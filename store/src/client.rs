//! Deadline-wrapped store clients.
//!
//! The backing document store is remote and the upstream client exposes no
//! timeout of its own, so every call goes through `tokio::time::timeout`
//! here. Expiry surfaces as [`StoreError::Timeout`], which callers treat
//! like any other "state unknown" store failure.

use crate::{RoleStore, StoreError, VerificationStore};
use rentright_types::{IdentityKey, ProofCommitment, Role, Timestamp, VerificationRecord};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Default deadline for a single store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(10);

async fn with_deadline<T>(
    deadline: Duration,
    fut: impl Future<Output = Result<T, StoreError>>,
) -> Result<T, StoreError> {
    match tokio::time::timeout(deadline, fut).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(?deadline, "store call timed out");
            Err(StoreError::Timeout(deadline))
        }
    }
}

/// A [`RoleStore`] handle with a per-call deadline.
#[derive(Clone)]
pub struct RoleStoreClient {
    inner: Arc<dyn RoleStore>,
    deadline: Duration,
}

impl RoleStoreClient {
    pub fn new(inner: Arc<dyn RoleStore>, deadline: Duration) -> Self {
        Self { inner, deadline }
    }

    pub fn with_default_timeout(inner: Arc<dyn RoleStore>) -> Self {
        Self::new(inner, DEFAULT_STORE_TIMEOUT)
    }

    pub async fn get_role(&self, key: &IdentityKey) -> Result<Option<Role>, StoreError> {
        with_deadline(self.deadline, self.inner.get_role(key)).await
    }

    pub async fn set_role(&self, key: &IdentityKey, role: Role) -> Result<(), StoreError> {
        with_deadline(self.deadline, self.inner.set_role(key, role)).await
    }

    pub async fn clear_role(&self, key: &IdentityKey) -> Result<(), StoreError> {
        with_deadline(self.deadline, self.inner.clear_role(key)).await
    }
}

/// A [`VerificationStore`] handle with a per-call deadline.
#[derive(Clone)]
pub struct VerificationStoreClient {
    inner: Arc<dyn VerificationStore>,
    deadline: Duration,
}

impl VerificationStoreClient {
    pub fn new(inner: Arc<dyn VerificationStore>, deadline: Duration) -> Self {
        Self { inner, deadline }
    }

    pub fn with_default_timeout(inner: Arc<dyn VerificationStore>) -> Self {
        Self::new(inner, DEFAULT_STORE_TIMEOUT)
    }

    pub async fn get_verification(
        &self,
        key: &IdentityKey,
    ) -> Result<VerificationRecord, StoreError> {
        with_deadline(self.deadline, self.inner.get_verification(key)).await
    }

    pub async fn set_verified(
        &self,
        key: &IdentityKey,
        commitment: ProofCommitment,
        now: Timestamp,
    ) -> Result<(), StoreError> {
        with_deadline(self.deadline, self.inner.set_verified(key, commitment, now)).await
    }
}
