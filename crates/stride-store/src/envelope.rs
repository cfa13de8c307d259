//! Expiring envelope wrapping every stored payload.
//!
//! The envelope is sealed and persisted as a single unit; metadata is never
//! stored separately from the payload.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A payload with its creation and expiration timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub payload: T,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl<T> Envelope<T> {
    /// Wrap a payload with a lifetime of `ttl_hours` from now.
    pub fn wrap(payload: T, ttl_hours: f64) -> Self {
        Self::wrap_at(payload, ttl_hours, Utc::now())
    }

    /// Wrap a payload with an explicit `now` (for deterministic expiry in tests).
    ///
    /// A non-positive (or NaN) `ttl_hours` yields an envelope that is already
    /// expired for any strictly-later read, rather than a write-time error.
    /// A ttl beyond the representable range saturates at the maximum timestamp.
    pub fn wrap_at(payload: T, ttl_hours: f64, now: DateTime<Utc>) -> Self {
        let ttl_ms = ttl_hours * 3_600_000.0;
        let expires_at = if ttl_ms > 0.0 {
            Duration::try_milliseconds(ttl_ms as i64)
                .and_then(|ttl| now.checked_add_signed(ttl))
                .unwrap_or(DateTime::<Utc>::MAX_UTC)
        } else {
            now
        };
        Self {
            payload,
            created_at: now,
            expires_at,
        }
    }

    /// Pure comparison: expired once `now` is strictly past `expires_at`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Unwrap the payload unconditionally. Expiry checking is the caller's job.
    pub fn into_payload(self) -> T {
        self.payload
    }
}
