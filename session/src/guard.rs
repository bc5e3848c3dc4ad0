//! Store-backed access checks.

use crate::SessionError;
use rentright_gate::{can_perform, Decision};
use rentright_store::{
    RoleStore, RoleStoreClient, VerificationStore, VerificationStoreClient,
};
use rentright_types::{Action, IdentityKey, VerificationRecord};
use std::sync::Arc;
use std::time::Duration;

/// Reads role and verification state and applies the pure gate.
///
/// A store failure propagates as an error, never as a decision: the caller
/// must keep the action disabled and offer a retry. Defaulting to
/// `Allowed` — or reading an error as "no role"/"unverified" — is exactly
/// the failure mode this type exists to prevent.
pub struct AccessGuard {
    roles: RoleStoreClient,
    verifications: VerificationStoreClient,
}

impl AccessGuard {
    pub fn new(
        roles: Arc<dyn RoleStore>,
        verifications: Arc<dyn VerificationStore>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            roles: RoleStoreClient::new(roles, store_timeout),
            verifications: VerificationStoreClient::new(verifications, store_timeout),
        }
    }

    /// Decide whether `identity` may perform `action` right now.
    ///
    /// Only the store reads the action actually needs are issued: browsing
    /// requires neither, so it never touches the store.
    pub async fn authorize(
        &self,
        identity: &IdentityKey,
        action: Action,
    ) -> Result<Decision, SessionError> {
        if !action.requires_role() && !action.requires_verification() {
            return Ok(Decision::Allowed);
        }

        let role = self.roles.get_role(identity).await?;
        let verification = if action.requires_verification() {
            self.verifications.get_verification(identity).await?
        } else {
            VerificationRecord::unverified(identity.clone())
        };

        let decision = can_perform(action, role, &verification);
        tracing::debug!(
            identity = %identity.short(),
            action = %action,
            ?decision,
            "access check"
        );
        Ok(decision)
    }
}
