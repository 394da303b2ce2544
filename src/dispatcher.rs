// ABOUTME: Bearer-authenticated call dispatcher for PayPal REST endpoints
// ABOUTME: Validates method/body combinations, executes the call, and surfaces failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 paypal-rest-client contributors

use crate::config::ClientConfig;
use crate::transport::{endpoint_url, Authorization, HttpMethod, HttpRequest, HttpTransport};
use paypal_core::{AppResult, PayPalError};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Attaches a bearer token to an API call and returns the raw response body
pub struct CallDispatcher {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl CallDispatcher {
    /// Create a dispatcher rooted at the configured base URL
    #[must_use]
    pub fn new(config: &ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            base_url: config.base_url().to_owned(),
        }
    }

    /// Call `path` with `bearer_token`
    ///
    /// `POST` always sends `body` as JSON, even when it is empty. `GET` never
    /// sends a body.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for a `GET` with a non-empty body, before any network call
    /// - `ApiCallFailed` with the raw body on a non-success status
    /// - transport errors as reported by the transport
    #[instrument(skip(self, body, bearer_token), fields(body_len = body.len()))]
    pub async fn call(
        &self,
        path: &str,
        body: &str,
        bearer_token: &str,
        method: HttpMethod,
    ) -> AppResult<String> {
        let url = endpoint_url(&self.base_url, path);
        let authorization = Authorization::bearer(bearer_token);

        let request = match method {
            HttpMethod::Get if !body.is_empty() => {
                return Err(PayPalError::invalid_argument(
                    "a GET request cannot carry a body",
                ));
            }
            HttpMethod::Get => HttpRequest::get(url, authorization),
            HttpMethod::Post => HttpRequest::post_json(url, authorization, body.to_owned()),
        };

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            warn!(status = response.status, "PayPal API call failed");
            return Err(PayPalError::api_status(response.status, response.body));
        }

        debug!(status = response.status, "PayPal API call succeeded");
        Ok(response.body)
    }
}
