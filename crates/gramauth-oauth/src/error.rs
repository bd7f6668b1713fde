use miette::Diagnostic;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors emitted by the strategy layer.
#[derive(Debug, Error, Diagnostic)]
pub enum OAuthError {
    /// Strategy misconfiguration
    #[error("invalid strategy configuration: {0}")]
    #[diagnostic(
        code(gramauth_oauth::config),
        help("client id and client secret are required and must not be blank")
    )]
    Config(&'static str),
    /// Profile endpoint returned a non-success status
    #[error("failed to fetch user profile: http status {status}")]
    #[diagnostic(
        code(gramauth_oauth::profile_fetch),
        help("the response body carries the API error payload")
    )]
    ProfileFetch {
        status: http::StatusCode,
        body: String,
    },
    /// Transport-level failure talking to the API
    #[error("transport error: {0}")]
    #[diagnostic(code(gramauth_oauth::transport))]
    Transport(#[source] BoxError),
    /// Profile document missing or malformed
    #[error("malformed profile document: {0}")]
    #[diagnostic(
        code(gramauth_oauth::profile),
        help("expected a JSON body shaped like `{{\"data\": {{...}}}}`")
    )]
    Profile(&'static str),
    /// Serialization error
    #[error(transparent)]
    #[diagnostic(code(gramauth_oauth::serde))]
    Serde(#[from] serde_json::Error),
    /// URL error
    #[error(transparent)]
    #[diagnostic(code(gramauth_oauth::url))]
    Url(#[from] url::ParseError),
    /// Request signing failed before dispatch
    #[error(transparent)]
    #[diagnostic(transparent)]
    Signature(#[from] gramauth_sig::SigningError),
    /// HTTP build error
    #[error(transparent)]
    #[diagnostic(code(gramauth_oauth::http_build))]
    Http(#[from] http::Error),
}

pub type Result<T> = core::result::Result<T, OAuthError>;
