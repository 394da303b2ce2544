// ABOUTME: Identity profile returned by the PayPal OpenID Connect userinfo endpoint
// ABOUTME: UserProfile and Address records with lenient boolean decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 paypal-rest-client contributors

use serde::{Deserialize, Deserializer, Serialize};

/// Identity fields for the user who authorized the app
///
/// Only `user_id` is required; the provider returns the other attributes
/// only when the user consented to share them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Provider user identifier
    pub user_id: String,
    /// Whether the account is verified
    #[serde(default, deserialize_with = "lenient_bool")]
    pub verified: Option<bool>,
    /// Full display name
    pub name: Option<String>,
    /// Given (first) name
    pub given_name: Option<String>,
    /// Family (last) name
    pub family_name: Option<String>,
    /// Preferred language
    pub language: Option<String>,
    /// Locale, e.g. `en_US`
    pub locale: Option<String>,
    /// Time zone name
    pub zoneinfo: Option<String>,
    /// Birthday as reported (`YYYY-MM-DD`)
    pub birthday: Option<String>,
    /// Primary email
    pub email: Option<String>,
    /// Whether the primary email is verified
    #[serde(default, deserialize_with = "lenient_bool")]
    pub email_verified: Option<bool>,
    /// Postal address
    pub address: Option<Address>,
}

/// Postal address in OpenID Connect form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    /// Street lines
    pub street_address: Option<String>,
    /// City
    pub locality: Option<String>,
    /// State or province
    pub region: Option<String>,
    /// Postal code
    pub postal_code: Option<String>,
    /// Country code
    pub country: Option<String>,
}

// The identity API has returned both `true` and `"true"` for these flags.
fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Bool(flag)) => Some(flag),
        Some(Raw::Text(text)) => match text.to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        None => None,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_profile() {
        let json = r#"{
            "user_id": "https://www.paypal.com/webapps/auth/identity/user/abc",
            "verified": "true",
            "name": "Ada Lovelace",
            "given_name": "Ada",
            "family_name": "Lovelace",
            "language": "en_GB",
            "locale": "en_GB",
            "zoneinfo": "Europe/London",
            "birthday": "1815-12-10",
            "email": "ada@example.com",
            "email_verified": true,
            "address": {
                "street_address": "12 St James's Square",
                "locality": "London",
                "region": "London",
                "postal_code": "SW1Y 4JH",
                "country": "GB"
            }
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.given_name.as_deref(), Some("Ada"));
        assert_eq!(profile.verified, Some(true));
        assert_eq!(profile.email_verified, Some(true));
        let address = profile.address.unwrap();
        assert_eq!(address.locality.as_deref(), Some("London"));
        assert_eq!(address.country.as_deref(), Some("GB"));
    }

    #[test]
    fn test_decode_sparse_profile() {
        let profile: UserProfile = serde_json::from_str(r#"{"user_id":"u-1"}"#).unwrap();
        assert_eq!(profile.user_id, "u-1");
        assert!(profile.verified.is_none());
        assert!(profile.address.is_none());
    }

    #[test]
    fn test_unrecognized_flag_text_is_none() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"user_id":"u-1","verified":"maybe"}"#).unwrap();
        assert!(profile.verified.is_none());
    }

    #[test]
    fn test_error_object_is_not_a_profile() {
        let result = serde_json::from_str::<UserProfile>(r#"{"error":"invalid_token"}"#);
        assert!(result.is_err());
    }
}
