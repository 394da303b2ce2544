// ABOUTME: Main library entry point for the PayPal REST client
// ABOUTME: Token-cached access to the PayPal identity and payments APIs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 paypal-rest-client contributors

#![deny(unsafe_code)]

//! # PayPal REST Client
//!
//! A small asynchronous client for the PayPal REST API (v1). It obtains OAuth
//! access tokens, caches them per kind until shortly before they expire, and
//! uses them for three operations:
//!
//! - **Identity**: [`PayPalRestClient::get_user_info`] exchanges a user's
//!   authorization code and returns their profile
//! - **Create payment**: [`PayPalRestClient::post_order`] turns a
//!   [`ShoppingCart`] into a payment and returns the raw provider response
//! - **Execute payment**: [`PayPalRestClient::execute_payment`] completes a
//!   payment the payer approved
//!
//! ## Architecture
//!
//! - **Transport**: [`transport::HttpTransport`] executes requests; the
//!   production implementation is backed by `reqwest`
//! - **Tokens**: [`tokens::TokenStore`] holds one app and one user
//!   credential, each refreshed under its own lock
//! - **Dispatcher**: [`dispatcher::CallDispatcher`] attaches the bearer token
//!   and maps non-success statuses to errors
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use paypal_rest_client::{AppResult, ClientConfig, PayPalRestClient};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ClientConfig::new("client-id", "client-secret");
//!     let client = PayPalRestClient::new(&config);
//!
//!     let profile = client.get_user_info("authorization-code").await?;
//!     println!("signed in as {:?}", profile.email);
//!     Ok(())
//! }
//! ```

/// Public client operations
pub mod client;

/// Client configuration and environment loading
pub mod config;

/// Bearer-authenticated API calls
pub mod dispatcher;

/// `reqwest` client construction
pub mod http_client;

/// Structured logging setup
pub mod logging;

/// Token acquisition and caching
pub mod tokens;

/// HTTP transport abstraction
pub mod transport;

pub use client::{created_payment_id, PayPalRestClient};
pub use config::ClientConfig;
pub use paypal_core::models::{
    Address, AnyCredential, AppCredential, CartItem, Credential, ShoppingCart, TokenKind,
    UserCredential, UserProfile,
};
pub use paypal_core::{constants, models, AppResult, ErrorCode, PayPalError};
