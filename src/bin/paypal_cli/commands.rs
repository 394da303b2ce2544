// ABOUTME: Subcommand handlers for paypal-cli
// ABOUTME: Each handler runs one client operation and prints the result as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 paypal-rest-client contributors

use anyhow::{Context, Result};
use paypal_rest_client::{created_payment_id, PayPalRestClient, ShoppingCart, TokenKind};
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing::info;

/// Obtain an app token, or a user token when a code is given
pub async fn token(client: &PayPalRestClient, user_code: Option<&str>) -> Result<()> {
    let kind = if user_code.is_some() {
        TokenKind::User
    } else {
        TokenKind::App
    };
    let issued = client.tokens().get_token(kind, user_code).await?;
    let credential = issued.credential();

    print_json(&json!({
        "kind": issued.kind().as_str(),
        "token_type": credential.token_type(),
        "expires_in": credential.lifetime_secs(),
        "expires_at": credential.expires_at().to_rfc3339(),
    }))
}

/// Print the identity profile for an authorization code
pub async fn user_info(client: &PayPalRestClient, code: &str) -> Result<()> {
    let profile = client.get_user_info(code).await?;
    print_json(&serde_json::to_value(&profile)?)
}

/// Create a payment from the cart stored at `path`
pub async fn create_order(client: &PayPalRestClient, path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read cart file {}", path.display()))?;
    let cart: ShoppingCart = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid cart", path.display()))?;

    let response = client.post_order(&cart).await?;
    if let Ok(id) = created_payment_id(&response) {
        info!(payment_id = %id, "payment created");
    }
    println!("{response}");
    Ok(())
}

/// Execute an approved payment
pub async fn execute(client: &PayPalRestClient, payment_id: &str, payer_id: &str) -> Result<()> {
    client.execute_payment(payment_id, payer_id).await?;
    print_json(&json!({ "payment_id": payment_id, "executed": true }))
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
