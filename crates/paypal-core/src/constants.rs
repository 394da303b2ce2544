// ABOUTME: Constants for the PayPal REST client organized by domain
// ABOUTME: Base URL, endpoint paths, token expiry margin, and HTTP defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 paypal-rest-client contributors

//! Constants module
//!
//! Grouped by domain rather than kept in one flat list.

/// Provider base URLs
pub mod urls {
    /// Sandbox REST API base (v1)
    pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.paypal.com/v1/";
    /// Live REST API base (v1)
    pub const LIVE_BASE_URL: &str = "https://api.paypal.com/v1/";
}

/// Endpoint paths, relative to the base URL
pub mod endpoints {
    /// Client-credentials token endpoint
    pub const OAUTH2_TOKEN: &str = "oauth2/token";
    /// Authorization-code token endpoint for the identity API
    pub const IDENTITY_TOKEN_SERVICE: &str = "identity/openidconnect/tokenservice";
    /// Identity user info endpoint
    pub const IDENTITY_USER_INFO: &str = "identity/openidconnect/userinfo?schema=openid";
    /// Payment creation endpoint
    pub const PAYMENTS: &str = "payments/payment";

    /// Payment execution endpoint for `payment_id`
    #[must_use]
    pub fn payment_execute(payment_id: &str) -> String {
        format!("{PAYMENTS}/{payment_id}/execute")
    }
}

/// OAuth grant form values
pub mod grants {
    /// Form key carrying the grant type
    pub const GRANT_TYPE: &str = "grant_type";
    /// Form key carrying the authorization code
    pub const CODE: &str = "code";
    /// App token grant
    pub const CLIENT_CREDENTIALS: &str = "client_credentials";
    /// User token grant
    pub const AUTHORIZATION_CODE: &str = "authorization_code";
}

/// Token lifetime handling
pub mod tokens {
    /// A credential is treated as expired this many seconds before it really expires
    pub const EXPIRY_SAFETY_MARGIN_SECS: i64 = 60;
    /// Largest `expires_in` accepted from the provider (ten years)
    pub const MAX_LIFETIME_SECS: i64 = 10 * 365 * 24 * 60 * 60;
}

/// HTTP defaults
pub mod http {
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Default `Accept-Language` header value
    pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en_US";
    /// JSON media type
    pub const APPLICATION_JSON: &str = "application/json";
}
