//! # Checkout Service
//!
//! Turns the cart into an order snapshot and hands it to the order store.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Flow                                     │
//! │                                                                         │
//! │  "Pay" button                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cart empty? ──── yes ──► EmptyCart (no order, nothing touched)        │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  signed in? ───── no ───► ShopError (SESSION_REQUIRED)                 │
//! │       │ yes                                                             │
//! │       ▼                                                                 │
//! │  build Order snapshot (total = subtotal, price × qty)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  gateway.submit(order) ── ok ───► clear cart ──► Placed                │
//! │       │                                                                 │
//! │       └── err ──────────────────► clear cart ──► SubmissionFailed      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Clear-On-Attempt
//! The cart clears whether or not the backend accepted the order. This is
//! the reference storefront's behavior: optimistic UX with an at-least-once,
//! lossy interaction with the order store. We keep the policy but do not
//! swallow the failure: `SubmissionFailed` carries the unsent order so the
//! caller can retry the submission without rebuilding the cart.
//! `test_failed_submission_still_clears_cart` pins this down.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ShopError;
use crate::state::{CartState, SessionState};
use moda_client::{ClientError, OrderApi};
use moda_core::Order;

/// Seam over the external order store.
///
/// The aggregator only ever calls `submit`; reads stay on the history
/// service. Tests substitute an in-memory recorder.
#[async_trait]
pub trait OrderGateway {
    async fn submit(&self, order: &Order) -> Result<Order, ClientError>;
}

#[async_trait]
impl OrderGateway for OrderApi {
    async fn submit(&self, order: &Order) -> Result<Order, ClientError> {
        OrderApi::submit(self, order).await
    }
}

/// Outcome of a checkout attempt.
#[derive(Debug)]
pub enum CheckoutOutcome {
    /// The backend accepted the order.
    Placed { order: Order },

    /// The order was built and the cart cleared, but the backend did not
    /// accept it. The snapshot is returned so the caller can resubmit.
    SubmissionFailed { order: Order, reason: String },

    /// The cart was empty. No order was created and nothing changed.
    EmptyCart,
}

/// Checks out the current cart.
///
/// ## Behavior
/// - Empty cart: no-op, the order store and the cart are left untouched
/// - No signed-in user: rejected before an order is built
/// - Otherwise: an `Order` snapshot is submitted with
///   `total = subtotal` (current price × quantity), and the cart is
///   cleared regardless of the submission result (see module docs)
pub async fn checkout<G: OrderGateway>(
    cart: &CartState,
    session: &SessionState,
    gateway: &G,
) -> Result<CheckoutOutcome, ShopError> {
    debug!("checkout requested");

    let Some(user_id) = session.user_id() else {
        return Err(ShopError::session_required("check out"));
    };

    let order = {
        let snapshot = cart.with_cart(|c| (c.lines.clone(), c.subtotal_cents()));
        let (items, subtotal_cents) = snapshot;

        if items.is_empty() {
            debug!("checkout on empty cart is a no-op");
            return Ok(CheckoutOutcome::EmptyCart);
        }

        Order {
            id: Uuid::new_v4().to_string(),
            user_id,
            items,
            total_cents: subtotal_cents,
            placed_at: Utc::now(),
        }
    };

    let result = gateway.submit(&order).await;

    // Clear-on-attempt: the reference storefront empties the cart without
    // waiting for the order store to confirm. See module docs.
    cart.with_cart_mut(|c| c.clear());

    match result {
        Ok(placed) => {
            info!(order_id = %placed.id, total_cents = placed.total_cents, "order placed");
            Ok(CheckoutOutcome::Placed { order: placed })
        }
        Err(e) => {
            warn!(order_id = %order.id, error = %e, "order submission failed; cart already cleared");
            Ok(CheckoutOutcome::SubmissionFailed {
                reason: e.to_string(),
                order,
            })
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
