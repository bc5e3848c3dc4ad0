//! Identity verification.
//!
//! The procedure is deliberately small: validate the user-entered identity
//! number locally, derive its one-way commitment, and record it in the
//! verification store. Validation failures never reach the store; store
//! failures leave the identity unverified and are surfaced as typed errors
//! for the host UI to present (no alerts, no automatic retries).

pub mod error;
pub mod procedure;
pub mod proof;

pub use error::VerificationError;
pub use procedure::VerificationProcedure;
pub use proof::{ProofInput, ProofInputError, PROOF_INPUT_LEN};
