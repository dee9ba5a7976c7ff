//! # Checkout Commands
//!
//! Checkout hands the computed cart total to an external payment
//! collaborator and, on the completion signal, emits a summary and
//! clears the cart.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Flow                                 │
//! │                                                                     │
//! │  checkout(cart, config, provider)                                   │
//! │       │                                                             │
//! │       ├── empty cart? ──► validation error, nothing else happens    │
//! │       │                                                             │
//! │       ├── snapshot lines + total (recomputed, never cached)         │
//! │       │                                                             │
//! │       ├── provider.collect(total) ──► completion signal             │
//! │       │       (the stub always approves; a declined payment         │
//! │       │        leaves the cart intact)                              │
//! │       │                                                             │
//! │       ├── build CheckoutSummary from the snapshot                   │
//! │       └── clear the cart                                            │
//! │                                                                     │
//! │  No retry, no receipt reconciliation, no interpretation of the      │
//! │  provider response beyond completion. That is the whole contract    │
//! │  with the payment collaborator.                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::commands::cart::CartLineDto;
use crate::error::StoreError;
use crate::state::{CartState, StoreConfig};
use bookmart_core::Money;

// =============================================================================
// Payment Provider Boundary
// =============================================================================

/// Completion signal from the payment collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    /// Opaque provider reference (auth code, transaction id, ...).
    pub reference: String,
}

/// The external payment collaborator.
///
/// The storefront's only contract with it: pass the computed total,
/// await a completion signal. Nothing about the confirmation is
/// interpreted beyond its arrival.
pub trait PaymentProvider {
    /// Collects payment for the given total.
    fn collect(&self, total: Money) -> Result<PaymentConfirmation, StoreError>;
}

/// Stub provider used until a real integration exists.
///
/// Always approves and fabricates a reference from the wall clock.
#[derive(Debug, Default)]
pub struct StubPaymentProvider;

impl PaymentProvider for StubPaymentProvider {
    fn collect(&self, total: Money) -> Result<PaymentConfirmation, StoreError> {
        debug!(total_cents = total.cents(), "stub payment provider collect");
        Ok(PaymentConfirmation {
            reference: generate_reference(),
        })
    }
}

fn generate_reference() -> String {
    let now = Utc::now();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    format!("PAY-{}-{:04}", now.format("%y%m%d%H%M%S"), nanos % 10000)
}

// =============================================================================
// Checkout
// =============================================================================

/// Checkout summary returned to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub reference: String,
    pub store_name: String,
    pub timestamp: String,
    pub lines: Vec<CartLineDto>,
    pub total_cents: i64,
}

/// Runs checkout for the current cart.
///
/// ## Behavior
/// - Empty cart: validation error, provider never called
/// - Payment declined: error propagates, cart left intact
/// - Payment confirmed: summary built from the pre-clear snapshot,
///   then the cart is cleared for the next session
pub fn checkout(
    cart: &CartState,
    config: &StoreConfig,
    provider: &dyn PaymentProvider,
) -> Result<CheckoutSummary, StoreError> {
    debug!("checkout command");

    let (lines, total) = cart.with_cart(|c| {
        let lines: Vec<CartLineDto> = c.lines().iter().map(CartLineDto::from).collect();
        (lines, c.total())
    });

    if lines.is_empty() {
        return Err(StoreError::validation("Cart is empty"));
    }

    let confirmation = provider.collect(total)?;

    cart.with_cart_mut(|c| c.clear());

    info!(
        reference = %confirmation.reference,
        total_cents = total.cents(),
        lines = lines.len(),
        "Checkout complete"
    );

    Ok(CheckoutSummary {
        reference: confirmation.reference,
        store_name: config.store_name.clone(),
        timestamp: Utc::now().to_rfc3339(),
        lines,
        total_cents: total.cents(),
    })
}
