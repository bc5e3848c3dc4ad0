//! Nullable infrastructure for deterministic testing.
//!
//! In-memory stand-ins for the remote document store plus a manual clock.
//! The null stores record call counts and support one-shot failure
//! injection so tests can assert "no store call was made" and "the gate
//! fails closed when the store is down".

pub mod clock;
pub mod store;

pub use clock::NullClock;
pub use store::{NullRoleStore, NullVerificationStore};
