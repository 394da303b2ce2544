// ABOUTME: Wire models for the PayPal REST API
// ABOUTME: Re-exports credential, identity profile, and payment payload types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 paypal-rest-client contributors

//! # Data Models
//!
//! Field names follow the provider's snake_case JSON exactly, so every model
//! here can be decoded straight from a response body.

mod credential;
mod payment;
mod user;

// Credentials
pub use credential::{
    AnyCredential, AppCredential, Credential, TokenCredential, TokenKind, UserCredential,
};

// Identity
pub use user::{Address, UserProfile};

// Payments
pub use payment::{
    format_amount, Amount, AmountDetails, CartItem, ExecutePaymentRequest, Item, ItemList, Payer,
    PaymentRequest, PaymentResource, RedirectUrls, ShoppingCart, Transaction,
};
