// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides a scripted recording transport, config helpers, and token response bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 paypal-rest-client contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `paypal_rest_client`
//!
//! [`MockTransport`] replays scripted responses in order and records every
//! request it receives, so tests can assert both on results and on exactly
//! which calls went over the "network".

use async_trait::async_trait;
use paypal_rest_client::transport::{HttpRequest, HttpResponse, HttpTransport};
use paypal_rest_client::{AppResult, ClientConfig, PayPalError, PayPalRestClient};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Base URL used by every mock-backed client
pub const TEST_BASE_URL: &str = "https://api.sandbox.paypal.com/v1/";

/// Configuration with fixed test credentials
pub fn test_config() -> ClientConfig {
    ClientConfig::new("client", "secret")
}

/// Body of a successful app token response
pub fn app_token_body(token: &str, expires_in: &str) -> String {
    json!({
        "scope": "https://uri.paypal.com/services/payments",
        "nonce": "2024-01-01T00:00:00Z-nonce",
        "access_token": token,
        "token_type": "Bearer",
        "app_id": "APP-80W284485P519543T",
        "expires_in": expires_in,
    })
    .to_string()
}

/// Body of a successful user token response
pub fn user_token_body(token: &str, expires_in: &str) -> String {
    json!({
        "token_type": "Bearer",
        "expires_in": expires_in,
        "refresh_token": "refresh-1",
        "id_token": "id-token-1",
        "access_token": token,
    })
    .to_string()
}

/// Transport that answers from a script and records requests
#[derive(Default)]
pub struct MockTransport {
    script: Mutex<VecDeque<AppResult<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
    delay: Option<Duration>,
}

impl MockTransport {
    /// Empty script; any request fails
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait `delay` before answering each request
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Queue a response
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    /// Queue a transport failure
    pub fn fail(&self, error: PayPalError) -> &Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    /// Number of requests received so far
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Snapshot of all requests received so far
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The `n`th request received
    pub fn request(&self, n: usize) -> HttpRequest {
        self.requests.lock().unwrap()[n].clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(PayPalError::transport("mock transport script exhausted")))
    }
}

/// Client wired to a fresh mock transport
pub fn mock_client() -> (PayPalRestClient, Arc<MockTransport>) {
    mock_client_with(MockTransport::new())
}

/// Client wired to the given mock transport
pub fn mock_client_with(transport: MockTransport) -> (PayPalRestClient, Arc<MockTransport>) {
    init_test_logging();
    let transport = Arc::new(transport);
    let client = PayPalRestClient::with_transport(&test_config(), transport.clone());
    (client, transport)
}
