use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The install secret could not be derived. Fatal: the store must not
    /// come up with a weaker or empty key.
    #[error("Secret derivation failed: {0}")]
    Derivation(stride_crypto::CryptoError),

    /// The value could not be sealed for storage. The write is rejected;
    /// nothing is persisted.
    #[error("Failed to seal item: {0}")]
    Encode(stride_crypto::CryptoError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
