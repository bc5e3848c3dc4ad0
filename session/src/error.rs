use rentright_store::StoreError;
use thiserror::Error;

/// Failures of the session layer.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An operation that needs a connected identity was called without one.
    #[error("no connected identity")]
    NotConnected,

    /// A store read or write failed. The underlying state is unknown;
    /// callers must deny access and offer a retry, never fail open.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Configuration could not be loaded or parsed.
    #[error("invalid session config: {0}")]
    Config(String),
}
