// ABOUTME: PayPal CLI - command-line front end for the PayPal REST client
// ABOUTME: Fetches tokens, user profiles, and creates or executes payments from the shell
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 paypal-rest-client contributors
//!
//! Usage:
//! ```bash
//! # Obtain an app token (prints kind and expiry, never the token itself)
//! paypal-cli token
//!
//! # Exchange a user's authorization code and print their profile
//! paypal-cli user-info --code AUTH_CODE
//!
//! # Create a payment from a cart description
//! paypal-cli create-order --cart cart.json
//!
//! # Execute an approved payment
//! paypal-cli execute --payment-id PAY-123 --payer-id PAYER-1
//! ```
//!
//! Credentials come from `PAYPAL_CLIENT_ID` and `PAYPAL_CLIENT_SECRET`.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use paypal_rest_client::logging::LoggingConfig;
use paypal_rest_client::{ClientConfig, PayPalRestClient};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "paypal-cli",
    about = "PayPal REST API command-line client",
    long_about = "Calls the PayPal identity and payments APIs using credentials from the environment."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Base URL override (defaults to the sandbox API)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Obtain an access token and print its metadata
    Token {
        /// Authorization code; obtains a user token instead of an app token
        #[arg(long)]
        user_code: Option<String>,
    },

    /// Print the profile of the user behind an authorization code
    UserInfo {
        /// Authorization code from the login redirect
        #[arg(long)]
        code: String,
    },

    /// Create a payment from a JSON cart file and print the raw response
    CreateOrder {
        /// Path to the cart JSON
        #[arg(long)]
        cart: PathBuf,
    },

    /// Execute a payment the payer approved
    Execute {
        /// Payment id returned by create-order
        #[arg(long)]
        payment_id: String,

        /// Payer id from the approval redirect
        #[arg(long)]
        payer_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let mut config = ClientConfig::from_env()
        .context("PAYPAL_CLIENT_ID and PAYPAL_CLIENT_SECRET must be set")?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }
    debug!(?config, "loaded client configuration");

    let client = PayPalRestClient::new(&config);

    match cli.command {
        Command::Token { user_code } => {
            commands::token(&client, user_code.as_deref()).await?;
        }
        Command::UserInfo { code } => commands::user_info(&client, &code).await?,
        Command::CreateOrder { cart } => commands::create_order(&client, &cart).await?,
        Command::Execute {
            payment_id,
            payer_id,
        } => commands::execute(&client, &payment_id, &payer_id).await?,
    }

    Ok(())
}
