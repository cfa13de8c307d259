//! Sealed-record codec for secure item persistence.
//!
//! Wire format v1: [1 byte: version=1][12 bytes: IV][N bytes: ciphertext + tag],
//! base64url-encoded (unpadded) so the record stores as an opaque string.
//! The payload is JSON-serialized before encryption; nothing about its
//! structure survives into the stored form.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64ct::{Base64UrlUnpadded, Encoding};
use serde::de::DeserializeOwned;
use serde::Serialize;
use zeroize::Zeroize;

use crate::error::CryptoError;
use crate::types::{
    DerivedSecret, AES_GCM_IV_LENGTH, AES_GCM_TAG_LENGTH, CURRENT_VERSION, SUPPORTED_VERSIONS,
};

/// Generate a random 12-byte IV for AES-GCM.
fn generate_iv() -> [u8; AES_GCM_IV_LENGTH] {
    let mut iv = [0u8; AES_GCM_IV_LENGTH];
    getrandom::getrandom(&mut iv).expect("getrandom failed");
    iv
}

/// Seal a serializable value into an opaque record string.
///
/// Pipeline: JSON serialize → AES-256-GCM encrypt → [version][IV][ct+tag] → base64url.
/// Serialization failure means the value cannot be stored; callers treat it
/// as "item not stored", not as a crash.
pub fn seal<T: Serialize>(secret: &DerivedSecret, value: &T) -> Result<String, CryptoError> {
    let mut plaintext =
        serde_json::to_vec(value).map_err(|e| CryptoError::Serialization(e.to_string()))?;

    let cipher = Aes256Gcm::new_from_slice(secret.as_bytes())
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;
    let iv = generate_iv();
    let nonce = Nonce::from_slice(&iv);

    let ciphertext = cipher.encrypt(nonce, plaintext.as_slice());
    plaintext.zeroize();
    let ciphertext = ciphertext.map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

    let mut blob = Vec::with_capacity(1 + iv.len() + ciphertext.len());
    blob.push(CURRENT_VERSION);
    blob.extend_from_slice(&iv);
    blob.extend_from_slice(&ciphertext);
    Ok(Base64UrlUnpadded::encode_string(&blob))
}

/// Open a sealed record back into its payload.
///
/// Fails on malformed base64, truncated blobs, unknown version bytes,
/// authentication failure (tampering or a different secret), or a payload
/// that no longer parses as `T`. A wrong secret and corrupt data are not
/// distinguishable: both surface as a decryption failure.
pub fn open<T: DeserializeOwned>(secret: &DerivedSecret, record: &str) -> Result<T, CryptoError> {
    let blob = Base64UrlUnpadded::decode_vec(record)
        .map_err(|e| CryptoError::Base64Decode(e.to_string()))?;

    let min_length = 1 + AES_GCM_IV_LENGTH + AES_GCM_TAG_LENGTH;
    if blob.len() < min_length {
        return Err(CryptoError::DataTooShort);
    }

    let version = blob[0];
    if !SUPPORTED_VERSIONS.contains(&version) {
        return Err(CryptoError::UnsupportedVersion(version));
    }

    let iv = &blob[1..1 + AES_GCM_IV_LENGTH];
    let ciphertext = &blob[1 + AES_GCM_IV_LENGTH..];

    let cipher = Aes256Gcm::new_from_slice(secret.as_bytes())
        .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))?;
    let nonce = Nonce::from_slice(iv);

    let mut plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))?;

    let value = serde_json::from_slice(&plaintext)
        .map_err(|e| CryptoError::Deserialization(e.to_string()));
    plaintext.zeroize();
    value
}
