//! Google OAuth code exchange.
//!
//! The authorization code from the client is exchanged for tokens at
//! Google's token endpoint, and the verified profile is read back from
//! the OpenID userinfo endpoint. Only that verified email/name is ever
//! trusted — client-supplied identity fields play no part.

use serde::Deserialize;

use crate::error::{ApiError, ApiResult};

const DEFAULT_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const DEFAULT_USERINFO_ENDPOINT: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Google OAuth client settings.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    /// Overridable for tests against a local stub.
    pub token_endpoint: String,
    pub userinfo_endpoint: String,
}

impl GoogleConfig {
    /// Read client settings from `GOOGLE_CLIENT_ID` / `GOOGLE_CLIENT_SECRET`
    /// / `GOOGLE_REDIRECT_URI`.
    pub fn from_env() -> Self {
        Self {
            client_id: std::env::var("GOOGLE_CLIENT_ID").unwrap_or_default(),
            client_secret: std::env::var("GOOGLE_CLIENT_SECRET").unwrap_or_default(),
            redirect_uri: std::env::var("GOOGLE_REDIRECT_URI")
                .unwrap_or_else(|_| "http://localhost:5173".into()),
            token_endpoint: DEFAULT_TOKEN_ENDPOINT.into(),
            userinfo_endpoint: DEFAULT_USERINFO_ENDPOINT.into(),
        }
    }
}

/// Verified identity recovered from Google.
#[derive(Debug, Clone)]
pub struct GoogleProfile {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct TokenExchangeResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    email: Option<String>,
    name: Option<String>,
}

/// Exchange an authorization code for a verified Google profile.
pub async fn exchange_code(config: &GoogleConfig, code: &str) -> ApiResult<GoogleProfile> {
    let client = reqwest::Client::new();

    let token_resp = client
        .post(&config.token_endpoint)
        .form(&[
            ("code", code),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await
        .map_err(|e| ApiError::UpstreamAuth(format!("token exchange: {e}")))?;

    if !token_resp.status().is_success() {
        return Err(ApiError::UpstreamAuth(format!(
            "token exchange returned {}",
            token_resp.status()
        )));
    }

    let tokens: TokenExchangeResponse = token_resp
        .json()
        .await
        .map_err(|e| ApiError::UpstreamAuth(format!("token exchange body: {e}")))?;

    let userinfo_resp = client
        .get(&config.userinfo_endpoint)
        .bearer_auth(&tokens.access_token)
        .send()
        .await
        .map_err(|e| ApiError::UpstreamAuth(format!("userinfo: {e}")))?;

    if !userinfo_resp.status().is_success() {
        return Err(ApiError::UpstreamAuth(format!(
            "userinfo returned {}",
            userinfo_resp.status()
        )));
    }

    let info: UserInfoResponse = userinfo_resp
        .json()
        .await
        .map_err(|e| ApiError::UpstreamAuth(format!("userinfo body: {e}")))?;

    let Some(email) = info.email.filter(|e| !e.is_empty()) else {
        return Err(ApiError::Validation("No email returned from Google".into()));
    };

    let name = display_name(&email, info.name.as_deref());
    Ok(GoogleProfile { email, name })
}

/// Display name fallback chain: profile name → email local part → generic.
fn display_name(email: &str, name: Option<&str>) -> String {
    if let Some(name) = name
        && !name.is_empty()
    {
        return name.to_string();
    }
    email
        .split('@')
        .next()
        .filter(|local| !local.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "Google User".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_profile_name() {
        assert_eq!(display_name("a@x.com", Some("Alice")), "Alice");
    }

    #[test]
    fn display_name_falls_back_to_email_local_part() {
        assert_eq!(display_name("alice@x.com", None), "alice");
        assert_eq!(display_name("alice@x.com", Some("")), "alice");
    }

    #[test]
    fn userinfo_deserializes_with_missing_fields() {
        let info: UserInfoResponse = serde_json::from_str("{}").unwrap();
        assert!(info.email.is_none());
        assert!(info.name.is_none());
    }
}
