//! Abstract storage traits for the RentRight gate core.
//!
//! The deployed system keeps role assignments and verification records in a
//! hosted document database; tests use the in-memory nullable backends. The
//! rest of the codebase depends only on these traits, plus the deadline
//! clients in [`client`] that bound every call with a timeout.

pub mod client;
pub mod error;
pub mod role;
pub mod verification;

pub use client::{RoleStoreClient, VerificationStoreClient, DEFAULT_STORE_TIMEOUT};
pub use error::StoreError;
pub use role::RoleStore;
pub use verification::VerificationStore;
