// ABOUTME: Client configuration for PayPal API credentials, base URL, and timeouts
// ABOUTME: Builder-style construction for library callers plus environment loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 paypal-rest-client contributors

//! Client configuration
//!
//! Library callers build a [`ClientConfig`] directly from credentials they
//! already hold. [`ClientConfig::from_env`] is provided for binaries.

use paypal_core::constants::{http, urls};
use paypal_core::{AppResult, PayPalError};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;
use zeroize::Zeroizing;

/// Environment variable names read by [`ClientConfig::from_env`]
pub mod env_keys {
    /// Client id (required)
    pub const CLIENT_ID: &str = "PAYPAL_CLIENT_ID";
    /// Client secret (required)
    pub const CLIENT_SECRET: &str = "PAYPAL_CLIENT_SECRET";
    /// `sandbox` (default) or `live`
    pub const MODE: &str = "PAYPAL_MODE";
    /// Explicit base URL, overrides `PAYPAL_MODE`
    pub const BASE_URL: &str = "PAYPAL_BASE_URL";
    /// Request timeout in seconds
    pub const TIMEOUT_SECS: &str = "PAYPAL_TIMEOUT_SECS";
    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: &str = "PAYPAL_CONNECT_TIMEOUT_SECS";
    /// `Accept-Language` header value
    pub const ACCEPT_LANGUAGE: &str = "PAYPAL_ACCEPT_LANGUAGE";
}

/// Credentials and transport settings for one client instance
#[derive(Clone)]
pub struct ClientConfig {
    client_id: String,
    client_secret: Zeroizing<String>,
    base_url: String,
    /// Per-request timeout applied by the transport
    pub request_timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
    /// `Accept-Language` sent with every request
    pub accept_language: String,
}

impl ClientConfig {
    /// Create a sandbox configuration with default timeouts
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: Zeroizing::new(client_secret.into()),
            base_url: urls::SANDBOX_BASE_URL.to_owned(),
            request_timeout: Duration::from_secs(http::DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(http::DEFAULT_CONNECT_TIMEOUT_SECS),
            accept_language: http::DEFAULT_ACCEPT_LANGUAGE.to_owned(),
        }
    }

    /// Point the client at a different API root
    ///
    /// # Errors
    ///
    /// Returns `Config` if `base_url` is not an absolute http(s) URL
    pub fn with_base_url(mut self, base_url: &str) -> AppResult<Self> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }

    /// Override the request and connect timeouts
    #[must_use]
    pub fn with_timeouts(mut self, request: Duration, connect: Duration) -> Self {
        self.request_timeout = request;
        self.connect_timeout = connect;
        self
    }

    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns `Config` if a required variable is missing or a value is malformed
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns `Config` if a required key is missing or a value is malformed
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| PayPalError::config(format!("{key} is not set")))
        };

        let mut config = Self::new(
            required(env_keys::CLIENT_ID)?,
            required(env_keys::CLIENT_SECRET)?,
        );

        let base_url = match (lookup(env_keys::BASE_URL), lookup(env_keys::MODE)) {
            (Some(url), _) => url,
            (None, Some(mode)) => match mode.to_ascii_lowercase().as_str() {
                "live" => urls::LIVE_BASE_URL.to_owned(),
                "sandbox" => urls::SANDBOX_BASE_URL.to_owned(),
                other => {
                    return Err(PayPalError::config(format!(
                        "{} must be 'sandbox' or 'live', got {other:?}",
                        env_keys::MODE
                    )))
                }
            },
            (None, None) => urls::SANDBOX_BASE_URL.to_owned(),
        };
        config = config.with_base_url(&base_url)?;

        if let Some(secs) = parse_optional::<u64>(&lookup, env_keys::TIMEOUT_SECS)? {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_optional::<u64>(&lookup, env_keys::CONNECT_TIMEOUT_SECS)? {
            config.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(language) = lookup(env_keys::ACCEPT_LANGUAGE) {
            config.accept_language = language;
        }

        Ok(config)
    }

    /// OAuth client id
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// OAuth client secret
    #[must_use]
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// API root, always ending in `/`
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("accept_language", &self.accept_language)
            .finish()
    }
}

fn normalize_base_url(raw: &str) -> AppResult<String> {
    let parsed = Url::parse(raw.trim())
        .map_err(|e| PayPalError::config(format!("invalid base URL {raw:?}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(PayPalError::config(format!(
            "base URL must use http or https, got {}",
            parsed.scheme()
        )));
    }

    let mut normalized = parsed.to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}

fn parse_optional<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| PayPalError::config(format!("{key}={raw:?} is invalid: {e}")))
        })
        .transpose()
}
