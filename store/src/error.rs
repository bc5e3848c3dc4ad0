use std::time::Duration;
use thiserror::Error;

/// Failures of the underlying keyed document store.
///
/// Every variant means "state unknown" — callers must never read a store
/// error as "no role assigned" or "unverified", and the access gate stays
/// closed until a successful read says otherwise.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached or rejected the request. Transient;
    /// safe to retry.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The call exceeded its deadline. Transient; safe to retry.
    #[error("store call timed out after {0:?}")]
    Timeout(Duration),

    /// The backend refused the operation (e.g. a security rule denied the
    /// write). Not transient; retrying the same request will fail again.
    #[error("store rejected the operation: {0}")]
    Rejected(String),
}
