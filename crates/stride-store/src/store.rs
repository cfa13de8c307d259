//! Encrypted, expiring item store over an untrusted byte-store backend.
//!
//! Every managed key lives under the `secure_` namespace prefix, and every
//! read path that comes up empty also deletes the backing entry: anything
//! expired, tampered with, or sealed under a different install key is
//! removed the moment it is touched, so dead ciphertext never accumulates.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use stride_crypto::{open, seal, DerivedSecret, DeviceFingerprint};

use crate::envelope::Envelope;
use crate::error::StoreError;
use crate::storage::StorageBackend;

/// Prefix scoping every key owned by the secure store. Bulk operations only
/// ever touch keys under this prefix.
pub const SECURE_KEY_PREFIX: &str = "secure_";

/// Default item lifetime in hours.
pub const DEFAULT_TTL_HOURS: f64 = 24.0;

/// Orchestrates sealing, expiry, and backend I/O for secure items.
///
/// Owns the install secret for the process lifetime: derived once at
/// construction, reused for every operation.
pub struct SecureStore<B: StorageBackend> {
    backend: B,
    secret: DerivedSecret,
}

impl<B: StorageBackend> SecureStore<B> {
    /// Build a store around `backend`, deriving the install secret from
    /// `fingerprint`. Derivation failure is fatal; the store never falls
    /// back to a weaker or empty key.
    pub fn new(backend: B, fingerprint: &DeviceFingerprint) -> Result<Self, StoreError> {
        let secret = fingerprint.derive_secret().map_err(StoreError::Derivation)?;
        Ok(Self::with_secret(backend, secret))
    }

    /// Build a store around a pre-derived secret.
    pub fn with_secret(backend: B, secret: DerivedSecret) -> Self {
        Self { backend, secret }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn namespaced(key: &str) -> String {
        format!("{}{}", SECURE_KEY_PREFIX, key)
    }

    fn namespaced_keys(&self) -> Result<Vec<String>, StoreError> {
        let keys = self
            .backend
            .keys()?
            .into_iter()
            .filter(|k| k.starts_with(SECURE_KEY_PREFIX))
            .collect();
        Ok(keys)
    }

    /// Seal `value` under `key` with a lifetime of `ttl_hours`.
    ///
    /// A value that cannot be serialized is rejected with no partial write.
    pub fn set_secure_item<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl_hours: f64,
    ) -> Result<(), StoreError> {
        self.set_secure_item_at(key, value, ttl_hours, Utc::now())
    }

    /// Seal `value` under `key` with the default 24h lifetime.
    pub fn set_secure_item_default<T: Serialize>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        self.set_secure_item(key, value, DEFAULT_TTL_HOURS)
    }

    /// `set_secure_item` with an explicit `now` for deterministic expiry.
    pub fn set_secure_item_at<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl_hours: f64,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let envelope = Envelope::wrap_at(value, ttl_hours, now);
        let record = match seal(&self.secret, &envelope) {
            Ok(record) => record,
            Err(error) => {
                warn!(key, %error, "refusing to store unsealable item");
                return Err(StoreError::Encode(error));
            }
        };
        self.backend.set(&Self::namespaced(key), &record)?;
        Ok(())
    }

    /// Read the item under `key`, or `None` if it is absent, expired, or no
    /// longer decodable.
    ///
    /// Cryptographic and expiry failures never surface: an undecodable or
    /// expired record is deleted and reads as absent, silently degrading to
    /// "not logged in" instead of crashing the caller. Only backend I/O
    /// errors propagate.
    pub fn get_secure_item<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        self.get_secure_item_at(key, Utc::now())
    }

    /// `get_secure_item` with an explicit `now` for deterministic expiry.
    pub fn get_secure_item_at<T: DeserializeOwned>(
        &self,
        key: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<T>, StoreError> {
        let namespaced = Self::namespaced(key);
        let Some(record) = self.backend.get(&namespaced)? else {
            return Ok(None);
        };

        let envelope: Envelope<T> = match open(&self.secret, &record) {
            Ok(envelope) => envelope,
            Err(error) => {
                warn!(key, %error, "removing undecodable secure item");
                self.backend.remove(&namespaced)?;
                return Ok(None);
            }
        };

        if envelope.is_expired(now) {
            debug!(key, "removing expired secure item");
            self.backend.remove(&namespaced)?;
            return Ok(None);
        }

        Ok(Some(envelope.into_payload()))
    }

    /// Delete the item under `key`. Idempotent: a missing key is not an error.
    pub fn remove_secure_item(&self, key: &str) -> Result<(), StoreError> {
        self.backend.remove(&Self::namespaced(key))?;
        Ok(())
    }

    /// Sweep every managed key through the read path, dropping expired and
    /// undecodable entries. O(n) over stored keys.
    pub fn clean_expired_items(&self) -> Result<(), StoreError> {
        self.clean_expired_items_at(Utc::now())
    }

    /// `clean_expired_items` with an explicit `now`.
    pub fn clean_expired_items_at(&self, now: DateTime<Utc>) -> Result<(), StoreError> {
        for namespaced in self.namespaced_keys()? {
            let key = &namespaced[SECURE_KEY_PREFIX.len()..];
            // Read for the delete side effect; the payload itself is discarded.
            self.get_secure_item_at::<serde_json::Value>(key, now)?;
        }
        Ok(())
    }

    /// Delete every managed key regardless of expiry state. Keys outside the
    /// namespace are never touched. O(n) over stored keys.
    pub fn clear_all_secure_data(&self) -> Result<(), StoreError> {
        let keys = self.namespaced_keys()?;
        for key in &keys {
            self.backend.remove(key)?;
        }
        debug!(removed = keys.len(), "cleared all secure data");
        Ok(())
    }
}
