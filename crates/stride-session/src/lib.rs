//! Session boundary for the Stride client.
//!
//! Wires the secure store to the HTTP layer: persisted tokens ride outgoing
//! requests as bearer credentials, and an authorization failure purges the
//! store before the error reaches the UI. Login/register orchestration and
//! the transport implementation itself live elsewhere.

pub mod error;
pub mod gateway;
pub mod types;

pub use error::SessionError;
pub use gateway::{SessionGateway, Transport};
pub use types::{
    AuthTokens, CachedProfile, HttpRequest, HttpResponse, AUTH_TOKENS_KEY, AUTH_TOKENS_TTL_HOURS,
    PROFILE_KEY, PROFILE_TTL_HOURS,
};
