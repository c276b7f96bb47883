//! # Cart State
//!
//! Owns the session-scoped shopping cart.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. The cart has a single logical writer (user-interaction callbacks)
//! 2. If a concurrent writer ever appears (background sync), all mutations
//!    still serialize through the one mutex, preserving the
//!    at-most-one-line-per-key invariant
//! 3. Services and the UI shell may hold handles from different tasks
//!
//! All cart mutations are synchronous, in-memory operations; nothing here
//! blocks or suspends. Observers see changes as soon as the lock drops.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use moda_core::{Cart, CartLine, CartTotals, GroupedLine};

/// Snapshot of the cart for the UI layer: lines plus derived views.
///
/// Totals and the grouped view are recomputed from the lines at snapshot
/// time, never cached, so they cannot go stale relative to the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub grouped: Vec<GroupedLine>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            lines: cart.lines.clone(),
            grouped: cart.group_by_product(),
            totals: cart.totals(),
        }
    }
}

/// Shared handle to the cart.
///
/// ## Why Not RwLock?
/// Cart operations are quick and most of them write.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| cart.totals());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_line(&product, Some("M"), None, 1));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }

    /// Takes a display snapshot of the current cart.
    pub fn snapshot(&self) -> CartSnapshot {
        self.with_cart(|cart| CartSnapshot::from(cart))
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moda_core::catalog::demo_products;

    #[test]
    fn test_snapshot_reflects_mutations() {
        let state = CartState::new();
        let products = demo_products();

        state.with_cart_mut(|c| c.add_line(&products[0], Some("M"), Some("#000"), 2));
        state.with_cart_mut(|c| c.add_line(&products[0], Some("L"), Some("#000"), 1));

        let snapshot = state.snapshot();
        assert_eq!(snapshot.lines.len(), 2);
        assert_eq!(snapshot.grouped.len(), 1);
        assert_eq!(snapshot.totals.total_quantity, 3);
        assert_eq!(snapshot.totals.subtotal_cents, 63897);
    }

    #[test]
    fn test_clones_share_one_cart() {
        let state = CartState::new();
        let handle = state.clone();
        let products = demo_products();

        handle.with_cart_mut(|c| c.add_line(&products[1], None, None, 1));

        assert_eq!(state.with_cart(|c| c.line_count()), 1);
    }
}
