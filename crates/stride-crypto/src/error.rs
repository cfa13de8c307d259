use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Missing fingerprint input: {0}")]
    MissingFingerprintInput(&'static str),

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Sealed record too short")]
    DataTooShort,

    #[error("Unsupported sealed record version: {0}")]
    UnsupportedVersion(u8),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("Base64 decode error: {0}")]
    Base64Decode(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Deserialization failed: {0}")]
    Deserialization(String),
}
