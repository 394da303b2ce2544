// ABOUTME: Shopping cart input and PayPal v1 payment request/response shapes
// ABOUTME: Converts a cart into the provider's payment payload with checked arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 paypal-rest-client contributors

use crate::errors::{AppResult, PayPalError};
use serde::{Deserialize, Serialize};

/// One line of a shopping cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Display name
    pub name: String,
    /// Stock keeping unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Unit price in minor currency units (cents)
    pub unit_price_cents: u64,
    /// Number of units
    pub quantity: u32,
}

/// Cart contents handed to `post_order`
///
/// Amounts are minor units of a two-decimal currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingCart {
    /// Line items, at least one
    pub items: Vec<CartItem>,
    /// ISO 4217 currency code
    pub currency: String,
    /// Shipping charge in minor units
    #[serde(default)]
    pub shipping_cents: u64,
    /// Tax in minor units
    #[serde(default)]
    pub tax_cents: u64,
    /// Transaction description shown to the payer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Where the provider sends the payer after approval
    pub return_url: String,
    /// Where the provider sends the payer after cancelling
    pub cancel_url: String,
}

impl ShoppingCart {
    /// Sum of `unit_price * quantity` over all items
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the total overflows
    pub fn subtotal_cents(&self) -> AppResult<u64> {
        self.items.iter().try_fold(0_u64, |acc, item| {
            item.unit_price_cents
                .checked_mul(u64::from(item.quantity))
                .and_then(|line| acc.checked_add(line))
                .ok_or_else(|| PayPalError::invalid_argument("cart subtotal overflows"))
        })
    }

    /// Subtotal plus shipping and tax
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the total overflows
    pub fn total_cents(&self) -> AppResult<u64> {
        self.subtotal_cents()?
            .checked_add(self.shipping_cents)
            .and_then(|sum| sum.checked_add(self.tax_cents))
            .ok_or_else(|| PayPalError::invalid_argument("cart total overflows"))
    }
}

/// Render minor units as the decimal string the provider expects
#[must_use]
pub fn format_amount(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Body of `POST payments/payment`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Payment intent, always `sale`
    pub intent: String,
    /// Funding source
    pub payer: Payer,
    /// Single transaction for the cart
    pub transactions: Vec<Transaction>,
    /// Approval redirect targets
    pub redirect_urls: RedirectUrls,
}

/// Funding source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payer {
    /// Always `paypal`
    pub payment_method: String,
}

/// One transaction of a payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Totals
    pub amount: Amount,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Line items
    pub item_list: ItemList,
}

/// Transaction totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Grand total
    pub total: String,
    /// Currency code
    pub currency: String,
    /// Breakdown of the total
    pub details: AmountDetails,
}

/// Breakdown of a transaction total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountDetails {
    /// Sum of item lines
    pub subtotal: String,
    /// Shipping charge
    pub shipping: String,
    /// Tax
    pub tax: String,
}

/// Line items of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemList {
    /// Items
    pub items: Vec<Item>,
}

/// Line item in provider form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name
    pub name: String,
    /// Stock keeping unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Unit price
    pub price: String,
    /// Currency code
    pub currency: String,
    /// Quantity, string-encoded
    pub quantity: String,
}

/// Approval redirect targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectUrls {
    /// After approval
    pub return_url: String,
    /// After cancel
    pub cancel_url: String,
}

impl PaymentRequest {
    /// Build the payment payload for `cart`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty cart, a zero quantity, a blank
    /// currency, or totals that overflow
    pub fn from_cart(cart: &ShoppingCart) -> AppResult<Self> {
        if cart.items.is_empty() {
            return Err(PayPalError::invalid_argument("cart has no items"));
        }
        if cart.currency.trim().is_empty() {
            return Err(PayPalError::invalid_argument("cart currency is empty"));
        }
        if let Some(item) = cart.items.iter().find(|item| item.quantity == 0) {
            return Err(PayPalError::invalid_argument(format!(
                "cart item {:?} has zero quantity",
                item.name
            )));
        }

        let currency = cart.currency.to_uppercase();
        let items = cart
            .items
            .iter()
            .map(|item| Item {
                name: item.name.clone(),
                sku: item.sku.clone(),
                price: format_amount(item.unit_price_cents),
                currency: currency.clone(),
                quantity: item.quantity.to_string(),
            })
            .collect();

        Ok(Self {
            intent: "sale".to_owned(),
            payer: Payer {
                payment_method: "paypal".to_owned(),
            },
            transactions: vec![Transaction {
                amount: Amount {
                    total: format_amount(cart.total_cents()?),
                    currency,
                    details: AmountDetails {
                        subtotal: format_amount(cart.subtotal_cents()?),
                        shipping: format_amount(cart.shipping_cents),
                        tax: format_amount(cart.tax_cents),
                    },
                },
                description: cart.description.clone(),
                item_list: ItemList { items },
            }],
            redirect_urls: RedirectUrls {
                return_url: cart.return_url.clone(),
                cancel_url: cart.cancel_url.clone(),
            },
        })
    }
}

/// Body of `POST payments/payment/{id}/execute`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutePaymentRequest {
    /// Payer id returned by the approval redirect
    pub payer_id: String,
}

/// Minimal view of a payment resource returned by create and execute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResource {
    /// Payment id, e.g. `PAY-...`
    pub id: String,
    /// Payment state, e.g. `created` or `approved`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}
