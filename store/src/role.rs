//! Role assignment storage trait.

use crate::StoreError;
use async_trait::async_trait;
use rentright_types::{IdentityKey, Role};

/// Durable storage of the role each identity has chosen.
///
/// Keyed by [`IdentityKey`]; one assignment per identity.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Look up the role for an identity.
    ///
    /// `Ok(None)` means "unassigned" and is not an error; an `Err` means the
    /// assignment is *unknown* and must not be treated as unassigned.
    async fn get_role(&self, key: &IdentityKey) -> Result<Option<Role>, StoreError>;

    /// Assign a role to an identity. Idempotent upsert; a re-selection
    /// overwrites the previous assignment (last write wins).
    async fn set_role(&self, key: &IdentityKey, role: Role) -> Result<(), StoreError>;

    /// Remove the assignment for an identity (the disconnect path).
    /// Removing an absent assignment is a no-op.
    async fn clear_role(&self, key: &IdentityKey) -> Result<(), StoreError>;
}
