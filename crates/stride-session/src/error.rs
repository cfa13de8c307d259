use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The server rejected the request's authorization. Secure session data
    /// has already been purged by the time this surfaces.
    #[error("Authorization rejected by server")]
    Unauthorized,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Store error: {0}")]
    Store(#[from] stride_store::StoreError),
}
