//! Request gateway binding the secure store to the HTTP boundary.
//!
//! Outbound: attach the persisted bearer token if one exists.
//! Inbound: a 401 purges all secure session data before the error surfaces,
//! so an invalidated session degrades to "not logged in" everywhere at once.

use async_trait::async_trait;
use tracing::{debug, warn};

use stride_store::{SecureStore, StorageBackend};

use crate::error::SessionError;
use crate::types::{
    AuthTokens, CachedProfile, HttpRequest, HttpResponse, AUTH_TOKENS_KEY, AUTH_TOKENS_TTL_HOURS,
    PROFILE_KEY, PROFILE_TTL_HOURS,
};

/// The opaque request/response channel. Implementations own retries,
/// timeouts, and the actual wire protocol.
#[async_trait]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, SessionError>;
}

/// Attaches credentials from the secure store to outgoing requests and
/// purges the store when the server reports the session invalid.
pub struct SessionGateway<T: Transport, B: StorageBackend> {
    transport: T,
    store: SecureStore<B>,
}

impl<T: Transport, B: StorageBackend> SessionGateway<T, B> {
    pub fn new(transport: T, store: SecureStore<B>) -> Self {
        Self { transport, store }
    }

    /// The secure store backing this gateway.
    pub fn store(&self) -> &SecureStore<B> {
        &self.store
    }

    /// Send a request with the bearer token attached if one is stored.
    ///
    /// A 401 response clears all secure data and surfaces as
    /// [`SessionError::Unauthorized`]; every other response passes through.
    pub async fn send(&self, mut request: HttpRequest) -> Result<HttpResponse, SessionError> {
        if let Some(tokens) = self.store.get_secure_item::<AuthTokens>(AUTH_TOKENS_KEY)? {
            request.headers.push((
                "Authorization".to_string(),
                format!("Bearer {}", tokens.access_token),
            ));
        }

        let response = self.transport.execute(request).await?;

        if response.status == 401 {
            warn!("authorization failure, purging secure session data");
            self.store.clear_all_secure_data()?;
            return Err(SessionError::Unauthorized);
        }

        Ok(response)
    }

    /// Persist a fresh login: the token pair, and the profile snapshot if
    /// one came with it.
    pub fn store_login(
        &self,
        tokens: &AuthTokens,
        profile: Option<&CachedProfile>,
    ) -> Result<(), SessionError> {
        self.store
            .set_secure_item(AUTH_TOKENS_KEY, tokens, AUTH_TOKENS_TTL_HOURS)?;
        if let Some(profile) = profile {
            self.store
                .set_secure_item(PROFILE_KEY, profile, PROFILE_TTL_HOURS)?;
        }
        Ok(())
    }

    /// Explicit logout: purge everything the store owns.
    pub fn logout(&self) -> Result<(), SessionError> {
        debug!("logout, clearing secure session data");
        self.store.clear_all_secure_data()?;
        Ok(())
    }
}
