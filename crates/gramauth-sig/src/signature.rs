//! Deterministic request signing.
//!
//! The canonical form is the endpoint path followed by one `key=value` pair
//! per parameter in bytewise key order, joined with `|`, then HMAC-SHA256
//! keyed by the application's client secret:
//!
//! ```text
//! /media/657988443280050001_25025320|access_token=ACCESS|limit=100
//! ```

use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::Url;

use crate::error::{Result, SigningError};
use crate::params::{Params, SIG_KEY};

type HmacSha256 = Hmac<Sha256>;

/// Reduce an endpoint to the path form the signature covers.
///
/// Absolute `http(s)` URLs keep only their path; scheme, host, query and
/// fragment are discarded. A leading `/v1` is then stripped once when it is
/// a whole path segment. Nothing else is normalized: trailing slashes and
/// percent-encoding pass through as given.
pub fn normalize_endpoint(endpoint: &str) -> Result<String> {
    if endpoint.is_empty() {
        return Err(SigningError::EmptyEndpoint);
    }
    let path = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Url::parse(endpoint)?.path().to_owned()
    } else {
        endpoint.to_owned()
    };
    Ok(strip_version(&path).to_owned())
}

// `/v1` only counts as a whole leading segment: `/v1` and `/v1/media` are
// stripped, `/v123` and `/v1x` are not.
fn strip_version(path: &str) -> &str {
    match path.strip_prefix("/v1") {
        Some("") => "",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}

/// Build the canonical signing string, the exact bytes that get MACed.
///
/// Known format limitation: a `|` or `=` embedded in a key or value is not
/// escaped, so such inputs produce an ambiguous canonical form. The remote
/// API's scheme has no provision for escaping and wire compatibility wins
/// over fixing it here.
pub fn canonical_string(endpoint: &str, params: &Params) -> Result<String> {
    let mut parts = vec![normalize_endpoint(endpoint)?];
    let mut pairs: Vec<(&str, String)> = params
        .iter()
        .map(|(key, value)| (key.as_str(), value.render()))
        .collect();
    // bytewise order; two maps with the same entries must sign identically
    pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
    for (key, value) in pairs {
        parts.push(format!("{key}={value}"));
    }
    Ok(parts.join("|"))
}

/// Compute the request signature for `endpoint` and `params`, keyed by the
/// application's client secret.
///
/// The digest comes back as 64 lowercase hex characters. The computation is
/// pure: no I/O, no shared state, and insertion order of `params` does not
/// affect the result.
pub fn generate(endpoint: &str, params: &Params, secret: &str) -> Result<String> {
    if secret.is_empty() {
        return Err(SigningError::EmptySecret);
    }
    let signing_string = canonical_string(endpoint, params)?;
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(signing_string.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Sign a parameter set in place, storing the digest under [`SIG_KEY`].
///
/// The signature covers the set exactly as given, so a stale `sig` left in
/// the map participates in the canonical form like any other key; remove it
/// before re-signing.
pub fn sign_in_place(endpoint: &str, params: &mut Params, secret: &str) -> Result<()> {
    let sig = generate(endpoint, params, secret)?;
    params.insert(SIG_KEY, sig);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ParamValue;

    const MEDIA_ENDPOINT: &str = "/media/657988443280050001_25025320";
    const MEDIA_SIG: &str = "1b7f12874a59d167a7767f58efc8658eca276238427aba0282bf4d3e6258761b";

    fn media_params() -> Params {
        let mut params = Params::new();
        params.insert("limit", 100);
        params.insert("access_token", "ACCESS");
        params
    }

    #[test]
    fn canonical_string_sorts_keys_after_the_path() {
        assert_eq!(
            canonical_string(MEDIA_ENDPOINT, &media_params()).unwrap(),
            "/media/657988443280050001_25025320|access_token=ACCESS|limit=100"
        );
    }

    #[test]
    fn pinned_media_signature() {
        assert_eq!(
            generate(MEDIA_ENDPOINT, &media_params(), "SECRET").unwrap(),
            MEDIA_SIG
        );
    }

    #[test]
    fn insertion_order_is_irrelevant() {
        let mut reversed = Params::new();
        reversed.insert("access_token", "ACCESS");
        reversed.insert("limit", 100);
        assert_eq!(
            generate(MEDIA_ENDPOINT, &media_params(), "SECRET").unwrap(),
            generate(MEDIA_ENDPOINT, &reversed, "SECRET").unwrap()
        );
    }

    #[test]
    fn full_url_endpoint_matches_bare_path() {
        let params = media_params();
        assert_eq!(
            generate("https://api.instagram.com/v1/media/XYZ", &params, "SECRET").unwrap(),
            generate("/media/XYZ", &params, "SECRET").unwrap()
        );
    }

    #[test]
    fn url_query_and_fragment_are_discarded() {
        let params = media_params();
        assert_eq!(
            generate(
                "https://api.instagram.com/v1/media/XYZ?count=5#top",
                &params,
                "SECRET"
            )
            .unwrap(),
            generate("/media/XYZ", &params, "SECRET").unwrap()
        );
    }

    #[test]
    fn version_prefix_strips_whole_segments_only() {
        assert_eq!(normalize_endpoint("/v1/media/x").unwrap(), "/media/x");
        assert_eq!(normalize_endpoint("/v1").unwrap(), "");
        assert_eq!(normalize_endpoint("/v123/media").unwrap(), "/v123/media");
        assert_eq!(normalize_endpoint("/v1x").unwrap(), "/v1x");
        // stripped at most once
        assert_eq!(normalize_endpoint("/v1/v1/media").unwrap(), "/v1/media");
    }

    #[test]
    fn trailing_slash_is_preserved() {
        assert_eq!(normalize_endpoint("/users/self/").unwrap(), "/users/self/");
    }

    #[test]
    fn digest_is_64_lowercase_hex_chars() {
        let sig = generate("/users/self", &media_params(), "SECRET").unwrap();
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn mixed_value_types_canonicalize() {
        let mut params = Params::new();
        params.insert("limit", 100);
        params.insert("access_token", "ACCESS");
        params.insert("count", true);
        params.insert("max_like_id", 9999u64);
        assert_eq!(
            canonical_string(MEDIA_ENDPOINT, &params).unwrap(),
            "/media/657988443280050001_25025320|access_token=ACCESS|count=true|limit=100|max_like_id=9999"
        );
        assert_eq!(
            generate(MEDIA_ENDPOINT, &params, "SECRET").unwrap(),
            "412f6868461c0f3f5cdfceeffbdd5ccd49cd073a28c07ad23861608791ab13d0"
        );
    }

    #[test]
    fn sign_in_place_mutates_the_given_map() {
        let mut params = media_params();
        let expected = generate(MEDIA_ENDPOINT, &params, "SECRET").unwrap();
        sign_in_place(MEDIA_ENDPOINT, &mut params, "SECRET").unwrap();
        assert_eq!(params.len(), 3);
        assert_eq!(params.get(SIG_KEY), Some(&ParamValue::Str(expected)));
    }

    #[test]
    fn stale_sig_participates_in_the_canonical_form() {
        let mut params = media_params();
        params.insert(SIG_KEY, "stale");
        let fresh = generate(MEDIA_ENDPOINT, &media_params(), "SECRET").unwrap();
        assert_ne!(
            generate(MEDIA_ENDPOINT, &params, "SECRET").unwrap(),
            fresh,
            "a pre-existing sig key must be canonicalized like any other"
        );
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let params = media_params();
        assert!(matches!(
            generate("", &params, "SECRET"),
            Err(SigningError::EmptyEndpoint)
        ));
        assert!(matches!(
            generate(MEDIA_ENDPOINT, &params, ""),
            Err(SigningError::EmptySecret)
        ));
    }

    #[test]
    fn malformed_absolute_endpoint_is_an_error() {
        assert!(matches!(
            normalize_endpoint("http://"),
            Err(SigningError::EndpointParse(_))
        ));
    }

    #[test]
    fn empty_params_sign_the_bare_path() {
        assert_eq!(
            canonical_string("/users/self", &Params::new()).unwrap(),
            "/users/self"
        );
    }
}
