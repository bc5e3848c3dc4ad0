//! Fundamental types shared across the RentRight gate core.
//!
//! Everything here is plain data: identity keys, roles, gated actions,
//! verification records, timestamps. No I/O, no store access.

pub mod action;
pub mod identity;
pub mod role;
pub mod time;
pub mod verification;

pub use action::Action;
pub use identity::IdentityKey;
pub use role::{Role, RoleParseError};
pub use time::Timestamp;
pub use verification::{ProofCommitment, VerificationRecord};
