// ABOUTME: HTTP transport abstraction used by the token acquirer and call dispatcher
// ABOUTME: Request/response value types plus the reqwest-backed production transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 paypal-rest-client contributors

//! # Transport
//!
//! Everything above this module speaks in [`HttpRequest`] and
//! [`HttpResponse`] values. [`ReqwestTransport`] turns them into real network
//! calls; tests substitute a scripted implementation of [`HttpTransport`].

use crate::config::ClientConfig;
use crate::http_client::paypal_client;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use paypal_core::constants::http::APPLICATION_JSON;
use paypal_core::{AppResult, PayPalError};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use std::fmt;
use tracing::debug;

/// The two methods the PayPal calls need
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`, never carries a body
    Get,
    /// `POST`
    Post,
}

impl HttpMethod {
    /// Method name as sent on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of the `Authorization` header
#[derive(Clone, PartialEq, Eq)]
pub struct Authorization(String);

impl Authorization {
    /// HTTP Basic with base64 `client_id:client_secret`
    #[must_use]
    pub fn basic(client_id: &str, client_secret: &str) -> Self {
        let encoded = STANDARD.encode(format!("{client_id}:{client_secret}"));
        Self(format!("Basic {encoded}"))
    }

    /// Bearer access token
    #[must_use]
    pub fn bearer(token: &str) -> Self {
        Self(format!("Bearer {token}"))
    }

    /// Full header value
    #[must_use]
    pub fn header_value(&self) -> &str {
        &self.0
    }

    /// Scheme name (`Basic` or `Bearer`)
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.0.split(' ').next().unwrap_or_default()
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Authorization({} [REDACTED])", self.scheme())
    }
}

/// Request payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// UTF-8 JSON sent as `application/json`
    Json(String),
    /// URL-encoded form fields
    Form(Vec<(String, String)>),
}

/// One outbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Method
    pub method: HttpMethod,
    /// Absolute URL
    pub url: String,
    /// `Authorization` header
    pub authorization: Authorization,
    /// Body, only ever set for `POST`
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    /// Bodiless `GET`
    #[must_use]
    pub const fn get(url: String, authorization: Authorization) -> Self {
        Self {
            method: HttpMethod::Get,
            url,
            authorization,
            body: None,
        }
    }

    /// `POST` with a JSON body
    #[must_use]
    pub const fn post_json(url: String, authorization: Authorization, json: String) -> Self {
        Self {
            method: HttpMethod::Post,
            url,
            authorization,
            body: Some(RequestBody::Json(json)),
        }
    }

    /// `POST` with a URL-encoded form body
    #[must_use]
    pub const fn post_form(
        url: String,
        authorization: Authorization,
        fields: Vec<(String, String)>,
    ) -> Self {
        Self {
            method: HttpMethod::Post,
            url,
            authorization,
            body: Some(RequestBody::Form(fields)),
        }
    }
}

/// Status and body text of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Body decoded as UTF-8 text
    pub body: String,
}

impl HttpResponse {
    /// Create a response
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Executes requests against the provider
///
/// Implementations report any received response as `Ok`, whatever its
/// status; only transport failures are errors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send `request` and wait for the full response body
    async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse>;
}

/// Join a relative endpoint path onto a base URL ending in `/`
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Production transport on top of `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    accept_language: String,
}

impl ReqwestTransport {
    /// Wrap an existing client
    #[must_use]
    pub fn new(client: Client, accept_language: impl Into<String>) -> Self {
        Self {
            client,
            accept_language: accept_language.into(),
        }
    }

    /// Build a client with the configured timeouts
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(paypal_client(config), config.accept_language.clone())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        }
        .header(ACCEPT, APPLICATION_JSON)
        .header(ACCEPT_LANGUAGE, &self.accept_language)
        .header(AUTHORIZATION, request.authorization.header_value());

        let builder = match request.body {
            Some(RequestBody::Json(json)) => builder.header(CONTENT_TYPE, APPLICATION_JSON).body(json),
            Some(RequestBody::Form(fields)) => builder.form(&fields),
            None => builder,
        };

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_reqwest_error)?;

        debug!(method = %request.method, url = %request.url, status, "PayPal HTTP exchange completed");
        Ok(HttpResponse { status, body })
    }
}

fn map_reqwest_error(error: reqwest::Error) -> PayPalError {
    if error.is_timeout() {
        PayPalError::Timeout(error.to_string())
    } else {
        PayPalError::transport(error.to_string())
    }
}
