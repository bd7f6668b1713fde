//! Instagram OAuth2 strategy layer.
//!
//! Endpoint configuration, authenticated profile fetching and mapping, and
//! signed-request support over the signature core in `gramauth-sig`. The
//! OAuth2 authorization-code exchange, token storage, and session handling
//! stay with the caller's OAuth2 machinery; this crate picks up once an
//! access token exists.

pub mod error;
pub mod http_client;
pub mod profile;
pub mod strategy;
pub mod types;

/// Provider name recorded on every mapped profile.
pub const PROVIDER: &str = "instagram";

/// Default authorization endpoint.
pub const AUTHORIZATION_URL: &str = "https://api.instagram.com/oauth/authorize/";
/// Default token endpoint, used by the external code exchange.
pub const TOKEN_URL: &str = "https://api.instagram.com/oauth/access_token";
/// Default profile endpoint.
pub const PROFILE_URL: &str = "https://api.instagram.com/v1/users/self";

/// Crate version, maintained by the build.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{OAuthError, Result};
pub use http_client::HttpClient;
pub use profile::{Name, Profile, ProfileField};
pub use strategy::InstagramStrategy;
pub use types::{AuthorizeOptions, StrategyConfig, TokenGrant, VerifyInput};
