//! Session flow for the RentRight client core.
//!
//! Ties the stores, the pure access gate, and navigation together:
//!
//! - [`RedirectController`] — the connect → role selection → dashboard
//!   state machine, with a cancellable settle timer.
//! - [`AccessGuard`] — reads role + verification state and applies the
//!   gate, failing closed when the stores are unreachable.
//! - [`SessionConfig`] — timings and paths, TOML-loadable.
//!
//! The host UI owns rendering and the route table; it injects a
//! [`Navigator`] and feeds identity lifecycle events into the controller.

pub mod config;
pub mod controller;
pub mod error;
pub mod guard;
pub mod identity;
pub mod navigator;

pub use config::SessionConfig;
pub use controller::{ControllerState, RedirectController};
pub use error::SessionError;
pub use guard::AccessGuard;
pub use identity::{IdentitySession, IdentitySource, ProviderAvailability};
pub use navigator::Navigator;
