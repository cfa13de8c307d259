//! Session payload kinds and the minimal HTTP boundary types.

use serde::{Deserialize, Serialize};

/// Logical key the auth token pair is stored under.
pub const AUTH_TOKENS_KEY: &str = "authToken";

/// Logical key the cached profile snapshot is stored under.
pub const PROFILE_KEY: &str = "userProfile";

/// Auth tokens live one day; re-authentication is cheap.
pub const AUTH_TOKENS_TTL_HOURS: f64 = 24.0;

/// The profile snapshot is display-only cache and may live longer.
pub const PROFILE_TTL_HOURS: f64 = 72.0;

/// Bearer token pair persisted across app restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl AuthTokens {
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
        }
    }
}

/// Cached profile snapshot shown while offline or before the first fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedProfile {
    pub user_id: String,
    pub display_name: String,
    pub weekly_distance_km: f64,
}

/// Outgoing request handed to the transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Response handed back by the transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpResponse {
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_serde_round_trip() {
        let tokens = AuthTokens {
            access_token: "abc".to_string(),
            refresh_token: Some("def".to_string()),
        };
        let encoded = serde_json::to_string(&tokens).unwrap();
        let decoded: AuthTokens = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, tokens);
    }

    #[test]
    fn absent_refresh_token_is_omitted() {
        let encoded = serde_json::to_string(&AuthTokens::bearer("abc")).unwrap();
        assert!(!encoded.contains("refresh_token"));
    }

    #[test]
    fn request_builder() {
        let request = HttpRequest::new("GET", "https://api.stride.run/v1/runs")
            .header("Accept", "application/json")
            .body("{}");
        assert_eq!(request.method, "GET");
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.body.as_deref(), Some("{}"));
    }
}
