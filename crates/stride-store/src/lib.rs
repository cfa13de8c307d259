//! Encrypted local session store for the Stride client.
//!
//! Items are wrapped in an expiring envelope, sealed with the install-bound
//! secret, and persisted into an untrusted key-value backend under a fixed
//! namespace prefix. Reads self-heal: anything expired or undecodable is
//! deleted on first touch and reported as absent.

pub mod envelope;
pub mod error;
pub mod storage;
pub mod store;

pub use envelope::Envelope;
pub use error::StoreError;
pub use storage::{MemoryBackend, StorageBackend, StorageError};
pub use store::{SecureStore, DEFAULT_TTL_HOURS, SECURE_KEY_PREFIX};
