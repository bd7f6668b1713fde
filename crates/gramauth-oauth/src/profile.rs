//! Profile-document parsing and identity mapping.

use serde::{Deserialize, Serialize};

use crate::PROVIDER;
use crate::error::{OAuthError, Result};

/// Profile attributes the strategy can be asked to populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Id,
    Username,
    FullName,
}

impl ProfileField {
    /// Parse one field name. Unrecognized names map to `None` and are
    /// silently ignored by [`parse_multiple`](Self::parse_multiple).
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "username" => Some(Self::Username),
            "full_name" => Some(Self::FullName),
            _ => None,
        }
    }

    pub fn parse_multiple<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<Self> {
        names.into_iter().filter_map(Self::parse).collect()
    }
}

/// Given/family name split from the profile document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Name {
    pub given: Option<String>,
    pub family: Option<String>,
}

/// Normalized identity produced from the profile endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    /// Always [`PROVIDER`].
    pub provider: &'static str,
    pub id: Option<String>,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub name: Name,
    /// Profile picture URL.
    pub photo: Option<String>,
    /// The profile document exactly as the API returned it.
    pub raw: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ProfileEnvelope {
    data: Option<RawProfile>,
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    id: Option<String>,
    username: Option<String>,
    full_name: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    profile_picture: Option<String>,
}

/// Map the profile endpoint's `{"data": {...}}` body into a [`Profile`].
///
/// When `fields` is given, only the selected attributes among id, username
/// and full name are populated; the name split and photo ride along only on
/// an unrestricted fetch.
pub fn parse_profile(body: &[u8], fields: Option<&[ProfileField]>) -> Result<Profile> {
    let raw: serde_json::Value = serde_json::from_slice(body)?;
    let envelope: ProfileEnvelope = serde_json::from_value(raw.clone())?;
    let data = envelope
        .data
        .ok_or(OAuthError::Profile("missing `data` object"))?;

    let selected = |field: ProfileField| fields.is_none_or(|list| list.contains(&field));

    let mut profile = Profile {
        provider: PROVIDER,
        id: None,
        username: None,
        display_name: None,
        name: Name::default(),
        photo: None,
        raw,
    };
    if selected(ProfileField::Id) {
        profile.id = data.id;
    }
    if selected(ProfileField::Username) {
        profile.username = data.username;
    }
    if selected(ProfileField::FullName) {
        profile.display_name = data.full_name;
    }
    if fields.is_none() {
        profile.name = Name {
            given: data.first_name,
            family: data.last_name,
        };
        profile.photo = data.profile_picture;
    }
    Ok(profile)
}
