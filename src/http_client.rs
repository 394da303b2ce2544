// ABOUTME: reqwest client construction with request and connect timeouts
// ABOUTME: One pooled client per PayPal client instance, built from ClientConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 paypal-rest-client contributors

use crate::config::ClientConfig;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::warn;

/// Create a new HTTP client with custom timeout settings
///
/// Falls back to a default client if the builder fails, so callers always get
/// a usable client.
#[must_use]
pub fn create_client_with_timeout(timeout: Duration, connect_timeout: Duration) -> Client {
    create_custom_client(|builder| builder.timeout(timeout).connect_timeout(connect_timeout))
}

/// Create a new HTTP client with custom configuration
#[must_use]
pub fn create_custom_client<F>(config_fn: F) -> Client
where
    F: FnOnce(ClientBuilder) -> ClientBuilder,
{
    config_fn(ClientBuilder::new().use_rustls_tls())
        .build()
        .unwrap_or_else(|e| {
            warn!(error = %e, "HTTP client builder failed, using default client");
            Client::new()
        })
}

/// Create the HTTP client for a PayPal client instance
#[must_use]
pub fn paypal_client(config: &ClientConfig) -> Client {
    create_client_with_timeout(config.request_timeout, config.connect_timeout)
}
