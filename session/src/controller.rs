//! Redirect controller — sequences connect → role selection → dashboard.

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::identity::IdentitySession;
use crate::navigator::Navigator;
use rentright_store::{RoleStore, RoleStoreClient};
use rentright_types::{IdentityKey, Role};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

/// Where the controller is in the connect-to-dashboard sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
    /// Nothing in flight (also the terminal state after a redirect lands).
    Idle,
    /// Connected identity has no role assignment; the host should present
    /// the role chooser.
    AwaitingRoleSelection,
    /// A dashboard navigation is scheduled behind the settle delay.
    Redirecting,
    /// No identity connected.
    Disconnected,
}

struct StateData {
    state: ControllerState,
    identity: Option<IdentityKey>,
    pending: Option<JoinHandle<()>>,
}

struct Inner {
    roles: RoleStoreClient,
    navigator: Arc<dyn Navigator>,
    config: SessionConfig,
    data: Mutex<StateData>,
}

/// The connect → role selection → redirect state machine.
///
/// The host pushes identity lifecycle events in; the controller reads and
/// writes the role store, schedules the settle-delayed dashboard
/// navigation, and guarantees that a disconnect cancels any pending
/// navigation — nothing navigates after sign-out.
///
/// Per-identity call sequences are expected to arrive serialized (UI event
/// flow); the controller itself is cheaply cloneable and `Send + Sync`.
#[derive(Clone)]
pub struct RedirectController {
    inner: Arc<Inner>,
}

impl RedirectController {
    pub fn new(
        roles: Arc<dyn RoleStore>,
        navigator: Arc<dyn Navigator>,
        config: SessionConfig,
    ) -> Self {
        let roles = RoleStoreClient::new(roles, config.store_timeout());
        Self {
            inner: Arc::new(Inner {
                roles,
                navigator,
                config,
                data: Mutex::new(StateData {
                    state: ControllerState::Disconnected,
                    identity: None,
                    pending: None,
                }),
            }),
        }
    }

    /// Current state of the machine.
    pub fn state(&self) -> ControllerState {
        self.inner.data.lock().unwrap().state
    }

    /// The identity the controller is tracking, if connected.
    pub fn identity(&self) -> Option<IdentityKey> {
        self.inner.data.lock().unwrap().identity.clone()
    }

    /// An identity session was established.
    ///
    /// Looks up the stored role: an assigned role redirects straight to its
    /// dashboard (if the user is at the entry point), an unassigned one
    /// moves to [`ControllerState::AwaitingRoleSelection`]. A store failure
    /// leaves the machine in [`ControllerState::Idle`] and propagates — the
    /// host shows a retry state and the gate stays closed.
    pub async fn handle_connected(
        &self,
        session: IdentitySession,
    ) -> Result<ControllerState, SessionError> {
        {
            let mut data = self.inner.data.lock().unwrap();
            if let Some(pending) = data.pending.take() {
                pending.abort();
            }
            data.state = ControllerState::Idle;
            data.identity = Some(session.key.clone());
        }
        tracing::info!(identity = %session.key.short(), "identity connected");

        let role = self.inner.roles.get_role(&session.key).await?;

        let next = match role {
            Some(role) => {
                if self.inner.navigator.current_path() == self.inner.config.entry_path {
                    self.schedule_redirect(role)
                } else {
                    // Already somewhere meaningful; don't yank the user away.
                    ControllerState::Idle
                }
            }
            None => {
                let mut data = self.inner.data.lock().unwrap();
                data.state = ControllerState::AwaitingRoleSelection;
                data.state
            }
        };
        Ok(next)
    }

    /// The user picked a role (first selection or an explicit switch).
    ///
    /// Persists the assignment, then schedules the settle-delayed redirect.
    /// If persisting fails, no redirect is scheduled and the selection must
    /// be retried.
    pub async fn choose_role(&self, role: Role) -> Result<ControllerState, SessionError> {
        let identity = self
            .inner
            .data
            .lock()
            .unwrap()
            .identity
            .clone()
            .ok_or(SessionError::NotConnected)?;

        self.inner.roles.set_role(&identity, role).await?;
        tracing::info!(identity = %identity.short(), %role, "role selected");

        Ok(self.schedule_redirect(role))
    }

    /// The identity disconnected / signed out.
    ///
    /// Cancels any pending redirect, clears the cached role assignment for
    /// the identity (the verification record is untouched), and navigates
    /// back to the entry point. A store failure while clearing is logged
    /// but does not block sign-out.
    pub async fn handle_disconnected(&self) -> ControllerState {
        let identity = {
            let mut data = self.inner.data.lock().unwrap();
            if let Some(pending) = data.pending.take() {
                pending.abort();
            }
            data.state = ControllerState::Disconnected;
            data.identity.take()
        };

        if let Some(identity) = identity {
            if let Err(err) = self.inner.roles.clear_role(&identity).await {
                tracing::warn!(identity = %identity.short(), %err, "failed to clear role cache on disconnect");
            }
            tracing::info!(identity = %identity.short(), "identity disconnected");
        }

        self.inner.navigator.navigate(&self.inner.config.entry_path);
        ControllerState::Disconnected
    }

    /// Arm the settle timer for `role`'s dashboard.
    ///
    /// The navigation fires only if the user is still at the entry point
    /// when the timer elapses; a disconnect in the meantime aborts it.
    fn schedule_redirect(&self, role: Role) -> ControllerState {
        {
            let mut data = self.inner.data.lock().unwrap();
            if let Some(previous) = data.pending.take() {
                previous.abort();
            }
            data.state = ControllerState::Redirecting;
        }

        let inner = self.inner.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(inner.config.settle_delay()).await;

            // The host's current_path() may be arbitrarily slow; read it
            // before taking the lock.
            let at_entry = inner.navigator.current_path() == inner.config.entry_path;

            // Decide and navigate under a single lock acquisition. Past the
            // sleep, abort() can no longer stop this task, so a disconnect
            // racing the timer is only visible through the state: anything
            // other than Redirecting here means the redirect was cancelled
            // and nothing may navigate.
            let mut data = inner.data.lock().unwrap();
            if data.state == ControllerState::Redirecting {
                if at_entry {
                    tracing::info!(%role, path = role.dashboard_path(), "redirecting to dashboard");
                    inner.navigator.navigate(role.dashboard_path());
                }
                data.state = ControllerState::Idle;
                data.pending = None;
            }
        });

        let mut data = self.inner.data.lock().unwrap();
        if data.state == ControllerState::Redirecting {
            data.pending = Some(handle);
        }
        ControllerState::Redirecting
    }
}
