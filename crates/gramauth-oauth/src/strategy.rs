use http::{Method, Request, StatusCode};
use url::Url;

use gramauth_sig::{Params, SIG_KEY, generate};

use crate::error::{OAuthError, Result};
use crate::http_client::HttpClient;
use crate::profile::{Profile, parse_profile};
use crate::types::{AuthorizeOptions, StrategyConfig, TokenGrant, VerifyInput};

/// Instagram OAuth2 strategy.
///
/// A thin configuration over an external authorization-code flow: this type
/// knows the provider's endpoints, fetches and maps the user profile, and
/// signs API requests when the application has "enforce signed requests"
/// switched on. Code exchange and token storage belong to the caller's
/// OAuth2 machinery.
pub struct InstagramStrategy {
    config: StrategyConfig,
}

impl InstagramStrategy {
    pub fn new(config: StrategyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// Build the URL the user's browser is redirected to for authorization.
    pub fn authorize_url(&self, options: &AuthorizeOptions) -> Url {
        let mut url = self.config.authorization_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("client_id", &self.config.client_id);
            query.append_pair("redirect_uri", self.config.callback_url.as_str());
            query.append_pair("response_type", "code");
            if !options.scopes.is_empty() {
                query.append_pair("scope", &options.scopes.join(" "));
            }
            if let Some(state) = &options.state {
                query.append_pair("state", state);
            }
        }
        url
    }

    /// Fetch and map the authenticated user's profile.
    ///
    /// Non-success responses and transport failures surface as
    /// [`OAuthError::ProfileFetch`] and [`OAuthError::Transport`] so the
    /// enclosing authentication flow can report them instead of crashing.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    pub async fn user_profile<C: HttpClient>(
        &self,
        client: &C,
        access_token: &str,
    ) -> Result<Profile> {
        let mut url = self.config.profile_url.clone();
        url.query_pairs_mut()
            .append_pair("access_token", access_token);
        if self.config.enforce_signed_requests {
            // the signer reduces the full endpoint URL to its `/v1`-less path
            let mut params = Params::new();
            params.insert("access_token", access_token);
            let sig = generate(
                self.config.profile_url.as_str(),
                &params,
                &self.config.client_secret,
            )?;
            url.query_pairs_mut().append_pair(SIG_KEY, &sig);
        }

        let request = Request::builder()
            .uri(url.as_str())
            .method(Method::GET)
            .header("Accept", "application/json")
            .body(Vec::new())?;
        let response = client
            .send_http(request)
            .await
            .map_err(|e| OAuthError::Transport(Box::new(e)))?;

        if response.status() != StatusCode::OK {
            return Err(OAuthError::ProfileFetch {
                status: response.status(),
                body: String::from_utf8_lossy(response.body()).into_owned(),
            });
        }
        parse_profile(response.body(), self.config.profile_fields.as_deref())
    }

    /// Run the post-exchange half of a login: fetch the profile for a token
    /// grant and assemble the fixed-shape verify input handed to the
    /// application.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    pub async fn authenticate<C: HttpClient>(
        &self,
        client: &C,
        grant: TokenGrant,
    ) -> Result<VerifyInput> {
        let profile = self.user_profile(client, &grant.access_token).await?;
        let refresh_token = if self.config.pass_refresh_token {
            grant.refresh_token
        } else {
            None
        };
        Ok(VerifyInput {
            access_token: grant.access_token,
            refresh_token,
            profile,
        })
    }
}
