// ABOUTME: Access credential models for app-level and user-level PayPal tokens
// ABOUTME: Credential base with expiry arithmetic plus the two grant-specific shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 paypal-rest-client contributors

use crate::constants::{endpoints, tokens::EXPIRY_SAFETY_MARGIN_SECS};
use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two independently cached credentials an operation needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// App token from the client-credentials grant (payments API)
    App,
    /// User token from the authorization-code grant (identity API)
    User,
}

impl TokenKind {
    /// Token endpoint path for this kind's grant
    #[must_use]
    pub const fn token_path(self) -> &'static str {
        match self {
            Self::App => endpoints::OAUTH2_TOKEN,
            Self::User => endpoints::IDENTITY_TOKEN_SERVICE,
        }
    }

    /// Short name used in logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::App => "app",
            Self::User => "user",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access token plus its type and expiry metadata
///
/// `issued_at` is captured locally when the credential is constructed (for
/// decoded credentials, at decode time), not taken from the provider.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    access_token: String,
    token_type: String,
    #[serde(rename = "expires_in", with = "expires_in")]
    lifetime_secs: i64,
    #[serde(skip, default = "Utc::now")]
    issued_at: DateTime<Utc>,
}

impl Credential {
    /// Create a credential issued now
    #[must_use]
    pub fn new(
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        lifetime_secs: i64,
    ) -> Self {
        Self::issued(access_token, token_type, lifetime_secs, Utc::now())
    }

    /// Create a credential with an explicit issue time
    #[must_use]
    pub fn issued(
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        lifetime_secs: i64,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: token_type.into(),
            lifetime_secs,
            issued_at,
        }
    }

    /// Bearer token string
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Token type reported by the provider (usually "Bearer")
    #[must_use]
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Lifetime in seconds as reported by `expires_in`
    #[must_use]
    pub const fn lifetime_secs(&self) -> i64 {
        self.lifetime_secs
    }

    /// Local construction time
    #[must_use]
    pub const fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// `issued_at + lifetime`
    ///
    /// A lifetime past the representable range saturates, so such a
    /// credential never expires and one with a hugely negative lifetime is
    /// always expired.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        let saturated = if self.lifetime_secs < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        };
        Duration::try_seconds(self.lifetime_secs)
            .and_then(|lifetime| self.issued_at.checked_add_signed(lifetime))
            .unwrap_or(saturated)
    }

    /// Whether the credential must be replaced before use
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Expiry check against an explicit clock reading
    ///
    /// Expired from `expires_at - 60s` onwards.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        let margin = Duration::try_seconds(EXPIRY_SAFETY_MARGIN_SECS).unwrap_or_default();
        match now.checked_add_signed(margin) {
            Some(deadline) => deadline >= self.expires_at(),
            None => true,
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("lifetime_secs", &self.lifetime_secs)
            .field("issued_at", &self.issued_at)
            .finish()
    }
}

/// Token for the payments API, obtained with the client id and secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCredential {
    #[serde(flatten)]
    credential: Credential,
    /// Space-separated scopes granted to the app
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Provider nonce for this issuance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    /// Provider application id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

impl AppCredential {
    /// Wrap a base credential with no extra metadata
    #[must_use]
    pub const fn new(credential: Credential) -> Self {
        Self {
            credential,
            scope: None,
            nonce: None,
            app_id: None,
        }
    }

    /// Shared credential fields
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        &self.credential
    }
}

/// Token for the identity API, obtained by exchanging a user authorization code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredential {
    #[serde(flatten)]
    credential: Credential,
    /// Refresh token issued with the user token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// OpenID Connect id token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
}

impl UserCredential {
    /// Wrap a base credential with no extra metadata
    #[must_use]
    pub const fn new(credential: Credential) -> Self {
        Self {
            credential,
            refresh_token: None,
            id_token: None,
        }
    }

    /// Shared credential fields
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        &self.credential
    }
}

/// A credential shape that can be cached in one token slot
pub trait TokenCredential: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Slot this credential lives in
    const KIND: TokenKind;

    /// Shared credential fields
    fn credential(&self) -> &Credential;
}

impl TokenCredential for AppCredential {
    const KIND: TokenKind = TokenKind::App;

    fn credential(&self) -> &Credential {
        &self.credential
    }
}

impl TokenCredential for UserCredential {
    const KIND: TokenKind = TokenKind::User;

    fn credential(&self) -> &Credential {
        &self.credential
    }
}

/// Either credential, as returned by kind-dispatched lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyCredential {
    /// App-level credential
    App(AppCredential),
    /// User-level credential
    User(UserCredential),
}

impl AnyCredential {
    /// Slot this credential came from
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::App(_) => TokenKind::App,
            Self::User(_) => TokenKind::User,
        }
    }

    /// Shared credential fields
    #[must_use]
    pub fn credential(&self) -> &Credential {
        match self {
            Self::App(app) => app.credential(),
            Self::User(user) => user.credential(),
        }
    }
}

/// `expires_in` is documented as string-encoded seconds; bare numbers are accepted too
mod expires_in {
    use crate::constants::tokens::MAX_LIFETIME_SECS;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(secs: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&secs.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let secs = match Raw::deserialize(deserializer)? {
            Raw::Number(secs) => secs,
            Raw::Text(text) => text
                .trim()
                .parse()
                .map_err(|e| D::Error::custom(format!("invalid expires_in {text:?}: {e}")))?,
        };

        if (0..=MAX_LIFETIME_SECS).contains(&secs) {
            Ok(secs)
        } else {
            Err(D::Error::custom(format!(
                "expires_in {secs} is outside 0..={MAX_LIFETIME_SECS}"
            )))
        }
    }
}
