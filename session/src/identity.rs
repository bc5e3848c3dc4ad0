//! Identity sessions as seen from the external provider.
//!
//! The provider SDK (wallet extension or hosted auth) is consumed, not
//! implemented: hosts probe for it through [`IdentitySource`] and push
//! connect/disconnect events into the [`RedirectController`].
//!
//! [`RedirectController`]: crate::RedirectController

use rentright_types::IdentityKey;

/// An established sign-in: a stable key plus optional display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentitySession {
    pub key: IdentityKey,
    pub display_name: Option<String>,
}

impl IdentitySession {
    pub fn new(key: impl Into<IdentityKey>) -> Self {
        Self {
            key: key.into(),
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// Whether an identity provider is injected into the host environment.
///
/// Callers branch on this instead of probing a dynamic global object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderAvailability {
    /// No provider present; only public browsing is possible.
    NotAvailable,
    /// A provider is present and sign-in can be initiated.
    Available,
}

/// The host's view of the external identity provider.
pub trait IdentitySource: Send + Sync {
    /// Probe for the provider.
    fn availability(&self) -> ProviderAvailability;

    /// The currently established session, if any.
    fn current_session(&self) -> Option<IdentitySession>;
}
