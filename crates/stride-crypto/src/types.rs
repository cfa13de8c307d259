use zeroize::Zeroize;

/// Wire format version for sealed records.
///
/// Version 1: AES-256-GCM over a JSON-serialized payload.
/// Format: [version=1:1B][IV:12B][ciphertext+tag], base64url-encoded.
pub const CURRENT_VERSION: u8 = 1;

/// Supported wire format versions (for opening).
pub const SUPPORTED_VERSIONS: &[u8] = &[1];

/// AES-GCM IV length in bytes (96 bits per NIST recommendation).
pub const AES_GCM_IV_LENGTH: usize = 12;

/// AES-GCM tag length in bytes (128 bits).
pub const AES_GCM_TAG_LENGTH: usize = 16;

/// AES key length in bytes (256 bits).
pub const AES_KEY_LENGTH: usize = 32;

/// Symmetric key derived from the install fingerprint.
///
/// Never persisted and never serialized; recomputed identically on the same
/// device across runs. The owner derives it once and holds it for the
/// process lifetime.
pub struct DerivedSecret([u8; AES_KEY_LENGTH]);

impl DerivedSecret {
    pub(crate) fn from_bytes(bytes: [u8; AES_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    pub(crate) fn as_bytes(&self) -> &[u8; AES_KEY_LENGTH] {
        &self.0
    }
}

impl std::fmt::Debug for DerivedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedSecret(..)")
    }
}

impl Drop for DerivedSecret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_redacted() {
        let secret = DerivedSecret::from_bytes([0x42u8; AES_KEY_LENGTH]);
        assert_eq!(format!("{:?}", secret), "DerivedSecret(..)");
    }
}
