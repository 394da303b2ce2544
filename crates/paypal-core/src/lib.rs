// ABOUTME: Core types and constants for the PayPal REST client
// ABOUTME: Foundation crate with error handling, wire models, and endpoint constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 paypal-rest-client contributors

#![deny(unsafe_code)]

//! # PayPal Core
//!
//! Foundation crate providing the shared types for the PayPal REST client.
//! It has no I/O of its own, so it changes rarely and keeps the behavioral
//! crate's rebuilds small.
//!
//! ## Modules
//!
//! - **errors**: `PayPalError`, `ErrorCode`, and the `AppResult` alias
//! - **constants**: base URL, endpoint paths, expiry margin, and timeouts
//! - **models**: credentials, user identity profile, and payment payloads

/// Error taxonomy shared by every layer of the client
pub mod errors;

/// Endpoint paths and client defaults
pub mod constants;

/// Wire models mapped to the provider's JSON shapes
pub mod models;

pub use errors::{AppResult, ErrorCode, PayPalError};
