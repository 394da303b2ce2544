// ABOUTME: Public PayPal REST client exposing identity and payment operations
// ABOUTME: Each operation obtains a cached or fresh token, then dispatches the API call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 paypal-rest-client contributors

//! # PayPal REST Client
//!
//! Every operation first asks the [`TokenStore`] for a live credential of the
//! kind it needs, then issues exactly one API call through the
//! [`CallDispatcher`]. Nothing is retried; the first failure aborts the
//! operation and is returned to the caller.

use crate::config::ClientConfig;
use crate::dispatcher::CallDispatcher;
use crate::tokens::{TokenAcquirer, TokenStore};
use crate::transport::{HttpMethod, HttpTransport, ReqwestTransport};
use paypal_core::constants::endpoints;
use paypal_core::models::{
    ExecutePaymentRequest, PaymentRequest, PaymentResource, ShoppingCart, UserProfile,
};
use paypal_core::{AppResult, PayPalError};
use std::sync::Arc;
use tracing::{info, instrument};

/// Token-mediated client for the PayPal identity and payments APIs
pub struct PayPalRestClient {
    tokens: TokenStore,
    dispatcher: CallDispatcher,
}

impl PayPalRestClient {
    /// Create a client that talks to PayPal over `reqwest`
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::from_config(config)))
    }

    /// Create a client on top of a caller-supplied transport
    #[must_use]
    pub fn with_transport(config: &ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            tokens: TokenStore::new(TokenAcquirer::new(config, Arc::clone(&transport))),
            dispatcher: CallDispatcher::new(config, transport),
        }
    }

    /// Credential cache backing this client
    #[must_use]
    pub const fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Low-level dispatcher for endpoints not wrapped here
    #[must_use]
    pub const fn dispatcher(&self) -> &CallDispatcher {
        &self.dispatcher
    }

    /// Fetch the identity of the user who produced `authorization_code`
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for an empty code
    /// - `ApiCallFailed` / `Timeout` from the token or userinfo call
    /// - `DecodeError` if the profile cannot be decoded
    #[instrument(skip_all)]
    pub async fn get_user_info(&self, authorization_code: &str) -> AppResult<UserProfile> {
        let credential = self.tokens.user_credential(authorization_code).await?;
        let body = self
            .dispatcher
            .call(
                endpoints::IDENTITY_USER_INFO,
                "",
                credential.credential().access_token(),
                HttpMethod::Get,
            )
            .await?;

        Ok(serde_json::from_str(&body)?)
    }

    /// Create a payment for `cart` and return the provider's raw JSON response
    ///
    /// The response carries the new payment id (see [`created_payment_id`])
    /// and the approval links.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the cart cannot be turned into a payment
    /// - `ApiCallFailed` / `Timeout` from the token or payment call
    #[instrument(skip_all, fields(items = cart.items.len()))]
    pub async fn post_order(&self, cart: &ShoppingCart) -> AppResult<String> {
        let payload = serde_json::to_string(&PaymentRequest::from_cart(cart)?)?;
        let credential = self.tokens.app_credential().await?;

        self.dispatcher
            .call(
                endpoints::PAYMENTS,
                &payload,
                credential.credential().access_token(),
                HttpMethod::Post,
            )
            .await
    }

    /// Execute a payment the payer approved
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for an empty payer id, or a payment id that is empty
    ///   or contains anything but ASCII letters, digits, `-` and `_`
    /// - `ApiCallFailed` / `Timeout` from the token or execute call
    /// - `DecodeError` if the response has no payment id
    #[instrument(skip(self, payer_id))]
    pub async fn execute_payment(&self, payment_id: &str, payer_id: &str) -> AppResult<()> {
        validate_payment_id(payment_id)?;
        if payer_id.trim().is_empty() {
            return Err(PayPalError::invalid_argument("payer id is required"));
        }

        let credential = self.tokens.app_credential().await?;
        let body = serde_json::to_string(&ExecutePaymentRequest {
            payer_id: payer_id.to_owned(),
        })?;
        let result = self
            .dispatcher
            .call(
                &endpoints::payment_execute(payment_id),
                &body,
                credential.credential().access_token(),
                HttpMethod::Post,
            )
            .await?;

        let executed: PaymentResource = serde_json::from_str(&result)?;
        info!(
            executed_id = %executed.id,
            state = executed.state.as_deref().unwrap_or("unknown"),
            "payment executed"
        );
        Ok(())
    }
}

// The id becomes a path segment of an app-authenticated POST.
fn validate_payment_id(payment_id: &str) -> AppResult<()> {
    let well_formed = !payment_id.is_empty()
        && payment_id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if well_formed {
        Ok(())
    } else {
        Err(PayPalError::invalid_argument(format!(
            "payment id {payment_id:?} must be non-empty ASCII letters, digits, '-' or '_'"
        )))
    }
}

/// Payment id from the raw result of [`PayPalRestClient::post_order`]
///
/// # Errors
///
/// Returns `DecodeError` if `raw` is not a payment resource
pub fn created_payment_id(raw: &str) -> AppResult<String> {
    let resource: PaymentResource = serde_json::from_str(raw)?;
    Ok(resource.id)
}
