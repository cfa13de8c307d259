//! Crypto primitives for the Stride client's encrypted session store.
//!
//! This crate provides:
//! - Install-bound secret derivation (HKDF-SHA256 over an environment fingerprint)
//! - Sealed-record encryption of JSON payloads (AES-256-GCM, versioned wire format)
//!
//! Expiration tracking, storage orchestration, and the HTTP boundary live in
//! `stride-store` and `stride-session`; this crate only derives keys and
//! transforms bytes.

pub mod error;
pub mod fingerprint;
pub mod sealed;
pub mod types;

pub use error::CryptoError;
pub use fingerprint::{DeviceFingerprint, CLIENT_SIGNATURE_MAX_LEN};
pub use sealed::{open, seal};
pub use types::{
    DerivedSecret, AES_GCM_IV_LENGTH, AES_GCM_TAG_LENGTH, AES_KEY_LENGTH, CURRENT_VERSION,
    SUPPORTED_VERSIONS,
};
