use miette::Diagnostic;
use thiserror::Error;

/// Input-validation errors for signature generation.
#[derive(Debug, Error, Diagnostic)]
pub enum SigningError {
    /// Endpoint was empty
    #[error("endpoint must not be empty")]
    #[diagnostic(
        code(gramauth_sig::empty_endpoint),
        help("pass an API path like `/media/{{media-id}}` or a full endpoint URL")
    )]
    EmptyEndpoint,
    /// Secret was empty
    #[error("client secret must not be empty")]
    #[diagnostic(
        code(gramauth_sig::empty_secret),
        help("the HMAC key is the application's client secret and cannot be blank")
    )]
    EmptySecret,
    /// Absolute endpoint URL failed to parse
    #[error("endpoint is not a valid URL: {0}")]
    #[diagnostic(code(gramauth_sig::endpoint_parse))]
    EndpointParse(#[from] url::ParseError),
    /// Parameter value outside the closed string/number/boolean set
    #[error("unsupported parameter value: {kind}")]
    #[diagnostic(
        code(gramauth_sig::unsupported_value),
        help("parameter values must be flat scalars: strings, numbers, or booleans")
    )]
    UnsupportedValue { kind: &'static str },
}

pub type Result<T> = core::result::Result<T, SigningError>;
