// ABOUTME: OAuth token acquisition and per-kind credential caching for PayPal
// ABOUTME: Client-credentials and authorization-code grants with single-flight refresh
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 paypal-rest-client contributors

//! # Tokens
//!
//! Two credentials are cached per client: the app credential used by the
//! payments API and the user credential used by the identity API. Each lives
//! in its own slot guarded by an async mutex that stays locked for the whole
//! acquisition, so concurrent callers of one kind share a single token
//! request while the other kind proceeds independently.
//!
//! ```text
//! Absent -> Valid -> Expired -> (re-acquire) -> Valid -> ...
//! ```

use crate::config::ClientConfig;
use crate::transport::{endpoint_url, Authorization, HttpRequest, HttpTransport};
use paypal_core::constants::grants;
use paypal_core::models::{
    AnyCredential, AppCredential, TokenCredential, TokenKind, UserCredential,
};
use paypal_core::{AppResult, PayPalError};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// OAuth grant used to obtain a credential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant<'a> {
    /// App credential from the client id and secret alone
    ClientCredentials,
    /// User credential from a one-time authorization code
    AuthorizationCode(&'a str),
}

impl<'a> Grant<'a> {
    /// Grant for `kind`, validating the authorization code for user tokens
    ///
    /// The code is ignored for app tokens.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `kind` is `User` and the code is missing or empty
    pub fn for_kind(kind: TokenKind, user_code: Option<&'a str>) -> AppResult<Self> {
        match kind {
            TokenKind::App => Ok(Self::ClientCredentials),
            TokenKind::User => match user_code {
                Some(code) if !code.trim().is_empty() => Ok(Self::AuthorizationCode(code)),
                _ => Err(PayPalError::invalid_argument(
                    "an authorization code is required for a user token",
                )),
            },
        }
    }

    /// Credential slot this grant fills
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::ClientCredentials => TokenKind::App,
            Self::AuthorizationCode(_) => TokenKind::User,
        }
    }

    /// Form fields posted to the token endpoint
    #[must_use]
    pub fn form_fields(&self) -> Vec<(String, String)> {
        match self {
            Self::ClientCredentials => vec![(
                grants::GRANT_TYPE.to_owned(),
                grants::CLIENT_CREDENTIALS.to_owned(),
            )],
            Self::AuthorizationCode(code) => vec![
                (
                    grants::GRANT_TYPE.to_owned(),
                    grants::AUTHORIZATION_CODE.to_owned(),
                ),
                (grants::CODE.to_owned(), (*code).to_owned()),
            ],
        }
    }
}

/// Performs the OAuth exchange against the provider's token endpoints
pub struct TokenAcquirer {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    client_auth: Authorization,
}

impl TokenAcquirer {
    /// Create an acquirer authenticating with the configured client id and secret
    #[must_use]
    pub fn new(config: &ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            base_url: config.base_url().to_owned(),
            client_auth: Authorization::basic(config.client_id(), config.client_secret()),
        }
    }

    /// Exchange `grant` for a freshly issued credential of type `T`
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `grant` does not produce a `T`
    /// - `ApiCallFailed` on transport failure or non-success status
    /// - `DecodeError` if the body is not a valid token response
    #[instrument(skip(self, grant), fields(kind = %T::KIND))]
    pub async fn acquire<T: TokenCredential>(&self, grant: &Grant<'_>) -> AppResult<T> {
        if grant.kind() != T::KIND {
            return Err(PayPalError::invalid_argument(format!(
                "a {} grant cannot produce a {} credential",
                grant.kind(),
                T::KIND
            )));
        }

        let url = endpoint_url(&self.base_url, T::KIND.token_path());
        let request = HttpRequest::post_form(url, self.client_auth.clone(), grant.form_fields());
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            warn!(status = response.status, "token request rejected");
            return Err(PayPalError::api_status(response.status, response.body));
        }

        let issued: T = serde_json::from_str(&response.body)?;
        info!(
            lifetime_secs = issued.credential().lifetime_secs(),
            token_type = issued.credential().token_type(),
            "acquired PayPal access token"
        );
        Ok(issued)
    }
}

/// Per-kind credential cache that reuses live tokens and refreshes expired ones
pub struct TokenStore {
    acquirer: TokenAcquirer,
    app: Mutex<Option<AppCredential>>,
    user: Mutex<Option<UserCredential>>,
}

impl TokenStore {
    /// Create an empty store
    #[must_use]
    pub fn new(acquirer: TokenAcquirer) -> Self {
        Self {
            acquirer,
            app: Mutex::new(None),
            user: Mutex::new(None),
        }
    }

    /// Live app credential, acquiring one if absent or expired
    ///
    /// # Errors
    ///
    /// Propagates acquisition failures; the cache is left untouched on error
    pub async fn app_credential(&self) -> AppResult<AppCredential> {
        Self::get_or_acquire(&self.acquirer, &self.app, Grant::ClientCredentials).await
    }

    /// Live user credential, exchanging `authorization_code` if absent or expired
    ///
    /// A cached, unexpired user credential is returned even when a different
    /// code is supplied.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for an empty code, before any cache lookup
    /// - acquisition failures otherwise
    pub async fn user_credential(&self, authorization_code: &str) -> AppResult<UserCredential> {
        let grant = Grant::for_kind(TokenKind::User, Some(authorization_code))?;
        Self::get_or_acquire(&self.acquirer, &self.user, grant).await
    }

    /// Kind-dispatched lookup
    ///
    /// # Errors
    ///
    /// Same as [`Self::app_credential`] and [`Self::user_credential`]
    pub async fn get_token(
        &self,
        kind: TokenKind,
        user_code: Option<&str>,
    ) -> AppResult<AnyCredential> {
        match Grant::for_kind(kind, user_code)? {
            Grant::ClientCredentials => self.app_credential().await.map(AnyCredential::App),
            grant @ Grant::AuthorizationCode(_) => {
                Self::get_or_acquire(&self.acquirer, &self.user, grant)
                    .await
                    .map(AnyCredential::User)
            }
        }
    }

    /// Cached credential of `kind`, expired or not, without touching the network
    pub async fn cached(&self, kind: TokenKind) -> Option<AnyCredential> {
        match kind {
            TokenKind::App => self.app.lock().await.clone().map(AnyCredential::App),
            TokenKind::User => self.user.lock().await.clone().map(AnyCredential::User),
        }
    }

    /// Drop the cached credential of `kind` so the next lookup re-acquires
    pub async fn invalidate(&self, kind: TokenKind) {
        match kind {
            TokenKind::App => *self.app.lock().await = None,
            TokenKind::User => *self.user.lock().await = None,
        }
        debug!(%kind, "invalidated cached credential");
    }

    /// Drop both cached credentials
    pub async fn clear(&self) {
        self.invalidate(TokenKind::App).await;
        self.invalidate(TokenKind::User).await;
    }

    async fn get_or_acquire<T: TokenCredential>(
        acquirer: &TokenAcquirer,
        slot: &Mutex<Option<T>>,
        grant: Grant<'_>,
    ) -> AppResult<T> {
        // Held across the acquisition: one in-flight request per kind.
        let mut cached = slot.lock().await;

        if let Some(live) = cached
            .as_ref()
            .filter(|credential| !credential.credential().is_expired())
        {
            debug!(kind = %T::KIND, "reusing cached credential");
            return Ok(live.clone());
        }

        debug!(
            kind = %T::KIND,
            had_expired = cached.is_some(),
            "cached credential missing or expired"
        );
        let fresh: T = acquirer.acquire(&grant).await?;
        *cached = Some(fresh.clone());
        Ok(fresh)
    }
}
