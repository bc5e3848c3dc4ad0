//! Nullable stores — thread-safe in-memory storage for testing.

use async_trait::async_trait;
use rentright_store::{RoleStore, StoreError, VerificationStore};
use rentright_types::{IdentityKey, ProofCommitment, Role, Timestamp, VerificationRecord};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// An in-memory role store for testing.
/// Thread-safe for use with tokio's multi-threaded runtime.
#[derive(Default)]
pub struct NullRoleStore {
    roles: Mutex<HashMap<String, Role>>,
    fail_next: AtomicBool,
    calls: AtomicUsize,
}

impl NullRoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed an assignment without going through the trait.
    pub fn seed(&self, key: &IdentityKey, role: Role) {
        self.roles.lock().unwrap().insert(key.to_string(), role);
    }

    /// Make the next store call fail with `StoreError::Unavailable`.
    pub fn fail_next_call(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Total trait calls served (including injected failures).
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Direct peek at the stored assignment.
    pub fn stored_role(&self, key: &IdentityKey) -> Option<Role> {
        self.roles.lock().unwrap().get(key.as_str()).copied()
    }

    fn check_injected_failure(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RoleStore for NullRoleStore {
    async fn get_role(&self, key: &IdentityKey) -> Result<Option<Role>, StoreError> {
        self.check_injected_failure()?;
        Ok(self.roles.lock().unwrap().get(key.as_str()).copied())
    }

    async fn set_role(&self, key: &IdentityKey, role: Role) -> Result<(), StoreError> {
        self.check_injected_failure()?;
        self.roles.lock().unwrap().insert(key.to_string(), role);
        Ok(())
    }

    async fn clear_role(&self, key: &IdentityKey) -> Result<(), StoreError> {
        self.check_injected_failure()?;
        self.roles.lock().unwrap().remove(key.as_str());
        Ok(())
    }
}

/// An in-memory verification record store for testing.
///
/// Implements the monotonic `set_verified` contract: a second submission
/// never overwrites the first commitment or timestamp.
#[derive(Default)]
pub struct NullVerificationStore {
    records: Mutex<HashMap<String, VerificationRecord>>,
    fail_next: AtomicBool,
    set_verified_calls: AtomicUsize,
}

impl NullVerificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next store call fail with `StoreError::Unavailable`.
    pub fn fail_next_call(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// How many times `set_verified` was invoked (including failures).
    pub fn set_verified_calls(&self) -> usize {
        self.set_verified_calls.load(Ordering::SeqCst)
    }

    /// Direct peek at the stored record.
    pub fn stored_record(&self, key: &IdentityKey) -> Option<VerificationRecord> {
        self.records.lock().unwrap().get(key.as_str()).cloned()
    }

    fn take_injected_failure(&self) -> Result<(), StoreError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl VerificationStore for NullVerificationStore {
    async fn get_verification(
        &self,
        key: &IdentityKey,
    ) -> Result<VerificationRecord, StoreError> {
        self.take_injected_failure()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .get(key.as_str())
            .cloned()
            .unwrap_or_else(|| VerificationRecord::unverified(key.clone())))
    }

    async fn set_verified(
        &self,
        key: &IdentityKey,
        commitment: ProofCommitment,
        now: Timestamp,
    ) -> Result<(), StoreError> {
        self.set_verified_calls.fetch_add(1, Ordering::SeqCst);
        self.take_injected_failure()?;
        let mut records = self.records.lock().unwrap();
        let record = records
            .entry(key.to_string())
            .or_insert_with(|| VerificationRecord::unverified(key.clone()));
        if record.verified {
            // Already verified: keep the original commitment and timestamp.
            return Ok(());
        }
        record.verified = true;
        record.proof_commitment = Some(commitment);
        record.submitted_at = Some(now);
        Ok(())
    }
}
