// ABOUTME: Integration tests for the bearer-authenticated call dispatcher
// ABOUTME: Verifies GET/POST request construction and non-success status handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 paypal-rest-client contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, test_config, MockTransport};
use paypal_rest_client::dispatcher::CallDispatcher;
use paypal_rest_client::transport::{HttpMethod, RequestBody};
use paypal_rest_client::{ErrorCode, PayPalError};
use std::sync::Arc;

fn dispatcher() -> (CallDispatcher, Arc<MockTransport>) {
    init_test_logging();
    let transport = Arc::new(MockTransport::new());
    let dispatcher = CallDispatcher::new(&test_config(), transport.clone());
    (dispatcher, transport)
}

#[tokio::test]
async fn test_get_sends_bearer_and_no_body() {
    let (dispatcher, transport) = dispatcher();
    transport.respond(200, r#"{"user_id":"u1"}"#);

    let body = dispatcher
        .call(
            "identity/openidconnect/userinfo?schema=openid",
            "",
            "U1",
            HttpMethod::Get,
        )
        .await
        .unwrap();

    assert_eq!(body, r#"{"user_id":"u1"}"#);
    let request = transport.request(0);
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(
        request.url,
        "https://api.sandbox.paypal.com/v1/identity/openidconnect/userinfo?schema=openid"
    );
    assert_eq!(request.authorization.header_value(), "Bearer U1");
    assert_eq!(request.body, None);
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let (dispatcher, transport) = dispatcher();
    transport.respond(201, r#"{"id":"PAY-1"}"#);

    let body = dispatcher
        .call("payments/payment", r#"{"intent":"sale"}"#, "A1", HttpMethod::Post)
        .await
        .unwrap();

    assert_eq!(body, r#"{"id":"PAY-1"}"#);
    let request = transport.request(0);
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(
        request.body,
        Some(RequestBody::Json(r#"{"intent":"sale"}"#.to_owned()))
    );
}

#[tokio::test]
async fn test_post_with_empty_body_still_sends_body() {
    let (dispatcher, transport) = dispatcher();
    transport.respond(200, "{}");

    dispatcher
        .call("payments/payment", "", "A1", HttpMethod::Post)
        .await
        .unwrap();

    assert_eq!(
        transport.request(0).body,
        Some(RequestBody::Json(String::new()))
    );
}

#[tokio::test]
async fn test_get_with_body_is_rejected_before_network() {
    let (dispatcher, transport) = dispatcher();

    let error = dispatcher
        .call("payments/payment", "{}", "A1", HttpMethod::Get)
        .await
        .unwrap_err();

    assert_eq!(error.code(), ErrorCode::InvalidArgument);
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_non_success_status_carries_raw_body() {
    let (dispatcher, transport) = dispatcher();
    transport.respond(401, "unauthorized");

    let error = dispatcher
        .call("payments/payment", "{}", "stale", HttpMethod::Post)
        .await
        .unwrap_err();

    match &error {
        PayPalError::ApiCallFailed { status, body } => {
            assert_eq!(*status, Some(401));
            assert_eq!(body, "unauthorized");
        }
        other => panic!("expected ApiCallFailed, got {other:?}"),
    }
    assert!(error.to_string().contains("unauthorized"));
    assert!(!error.is_retryable());
}

#[tokio::test]
async fn test_server_error_is_retryable() {
    let (dispatcher, transport) = dispatcher();
    transport.respond(503, "service unavailable");

    let error = dispatcher
        .call("payments/payment", "{}", "A1", HttpMethod::Post)
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(503));
    assert!(error.is_retryable());
}

#[tokio::test]
async fn test_timeout_is_propagated() {
    let (dispatcher, transport) = dispatcher();
    transport.fail(PayPalError::Timeout("deadline elapsed".to_owned()));

    let error = dispatcher
        .call("payments/payment", "{}", "A1", HttpMethod::Post)
        .await
        .unwrap_err();

    assert_eq!(error.code(), ErrorCode::Timeout);
}
