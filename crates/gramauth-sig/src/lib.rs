//! Request-signature core for the Instagram API's "enforce signed requests"
//! security option. Pure and synchronous; the OAuth strategy layer lives in
//! `gramauth-oauth`.

pub mod error;
pub mod params;
pub mod signature;
pub mod value;

pub use error::{Result, SigningError};
pub use params::{Params, SIG_KEY};
pub use signature::{canonical_string, generate, normalize_endpoint, sign_in_place};
pub use value::ParamValue;
