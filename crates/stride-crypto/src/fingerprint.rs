//! Install-bound secret derivation.
//!
//! installKey = HKDF-SHA256(origin + "\0" + clientSignature[..64], salt="stride:install-key:v1", info="stride:session-store:v1")

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::error::CryptoError;
use crate::types::{DerivedSecret, AES_KEY_LENGTH};

const APP_KEY_SALT: &[u8] = b"stride:install-key:v1";
const DERIVATION_INFO: &[u8] = b"stride:session-store:v1";

/// Maximum number of characters of the client signature that participate in
/// derivation. Trailing churn in long signature strings must not rotate the
/// key and invalidate everything sealed under it.
pub const CLIENT_SIGNATURE_MAX_LEN: usize = 64;

/// Environment fingerprint the install key is derived from.
///
/// `origin` is the host/origin identifier; `client_signature` is the client
/// signature string (user-agent equivalent). Both are required: an empty
/// input is a construction error, never a fallback to a weaker secret.
#[derive(Debug, Clone)]
pub struct DeviceFingerprint {
    origin: String,
    client_signature: String,
}

impl DeviceFingerprint {
    pub fn new(
        origin: impl Into<String>,
        client_signature: impl Into<String>,
    ) -> Result<Self, CryptoError> {
        let origin = origin.into();
        let client_signature = client_signature.into();
        if origin.trim().is_empty() {
            return Err(CryptoError::MissingFingerprintInput("origin"));
        }
        if client_signature.trim().is_empty() {
            return Err(CryptoError::MissingFingerprintInput("client_signature"));
        }
        Ok(Self {
            origin,
            client_signature,
        })
    }

    /// Derive the 256-bit install key from this fingerprint.
    ///
    /// Deterministic: the same fingerprint yields the same secret across
    /// calls and across process runs on the same device.
    pub fn derive_secret(&self) -> Result<DerivedSecret, CryptoError> {
        let bounded: String = self
            .client_signature
            .chars()
            .take(CLIENT_SIGNATURE_MAX_LEN)
            .collect();

        let mut ikm = Vec::with_capacity(self.origin.len() + 1 + bounded.len());
        ikm.extend_from_slice(self.origin.as_bytes());
        ikm.push(0);
        ikm.extend_from_slice(bounded.as_bytes());

        let hk = Hkdf::<Sha256>::new(Some(APP_KEY_SALT), &ikm);
        let mut okm = [0u8; AES_KEY_LENGTH];
        let expanded = hk.expand(DERIVATION_INFO, &mut okm);
        ikm.zeroize();
        expanded.map_err(|e| CryptoError::DerivationFailed(format!("HKDF expand failed: {}", e)))?;

        Ok(DerivedSecret::from_bytes(okm))
    }
}
