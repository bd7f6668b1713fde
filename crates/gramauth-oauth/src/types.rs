use serde::Deserialize;
use url::Url;

use crate::error::{OAuthError, Result};
use crate::profile::{Profile, ProfileField};
use crate::{AUTHORIZATION_URL, PROFILE_URL, TOKEN_URL};

/// Configuration for [`InstagramStrategy`](crate::InstagramStrategy).
#[derive(Debug, Clone)]
pub struct StrategyConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Redirect URI registered with the application.
    pub callback_url: Url,
    pub authorization_url: Url,
    pub token_url: Url,
    pub profile_url: Url,
    /// When set, only the listed attributes are populated on mapped
    /// profiles.
    pub profile_fields: Option<Vec<ProfileField>>,
    /// Sign API requests with [`gramauth_sig`], for applications with the
    /// "enforce signed requests" security option switched on.
    pub enforce_signed_requests: bool,
    /// Carry the refresh token through to the verify input.
    pub pass_refresh_token: bool,
}

impl StrategyConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        callback_url: Url,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            callback_url,
            authorization_url: Url::parse(AUTHORIZATION_URL).expect("static endpoint URL"),
            token_url: Url::parse(TOKEN_URL).expect("static endpoint URL"),
            profile_url: Url::parse(PROFILE_URL).expect("static endpoint URL"),
            profile_fields: None,
            enforce_signed_requests: false,
            pass_refresh_token: false,
        }
    }

    pub fn with_profile_fields(mut self, fields: impl IntoIterator<Item = ProfileField>) -> Self {
        self.profile_fields = Some(fields.into_iter().collect());
        self
    }

    pub fn with_profile_url(mut self, url: Url) -> Self {
        self.profile_url = url;
        self
    }

    pub fn with_enforce_signed_requests(mut self, on: bool) -> Self {
        self.enforce_signed_requests = on;
        self
    }

    pub fn with_pass_refresh_token(mut self, on: bool) -> Self {
        self.pass_refresh_token = on;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.client_id.is_empty() {
            return Err(OAuthError::Config("`client_id` must not be empty"));
        }
        if self.client_secret.is_empty() {
            return Err(OAuthError::Config("`client_secret` must not be empty"));
        }
        Ok(())
    }
}

/// Options for [`InstagramStrategy::authorize_url`](crate::InstagramStrategy::authorize_url).
#[derive(Debug, Default)]
pub struct AuthorizeOptions {
    pub scopes: Vec<String>,
    pub state: Option<String>,
}

/// Token material produced by the external authorization-code exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// Remaining fields of the token response, untouched.
    #[serde(flatten)]
    pub raw: serde_json::Value,
}

impl TokenGrant {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            raw: serde_json::Value::Null,
        }
    }

    pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }
}

/// Fixed-shape argument for the application's verify step.
///
/// The shape never changes; `refresh_token` is populated only when the
/// strategy is configured with
/// [`pass_refresh_token`](StrategyConfig::pass_refresh_token).
#[derive(Debug, Clone)]
pub struct VerifyInput {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub profile: Profile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_credentials_fail_validation() {
        let callback = Url::parse("https://app.example/auth/instagram/callback").unwrap();
        assert!(
            StrategyConfig::new("", "s3cr3t", callback.clone())
                .validate()
                .is_err()
        );
        assert!(
            StrategyConfig::new("client-id", "", callback.clone())
                .validate()
                .is_err()
        );
        assert!(
            StrategyConfig::new("client-id", "s3cr3t", callback)
                .validate()
                .is_ok()
        );
    }
}
