//! # Cart Service
//!
//! Cart manipulation entry points for the UI shell.
//!
//! These wrap the pure aggregator in `moda-core` with catalog lookup,
//! input validation, and logging. Every function returns a fresh
//! [`CartSnapshot`] so the shell can re-render without a second read.

use tracing::debug;

use crate::error::ShopError;
use crate::state::{CartSnapshot, CartState};
use moda_core::validation::{validate_product_id, validate_quantity};
use moda_core::{Catalog, CoreError};

/// Gets the current cart contents with derived views.
pub fn get_cart(cart: &CartState) -> CartSnapshot {
    debug!("get_cart");
    cart.snapshot()
}

/// Adds a product variant to the cart.
///
/// ## Behavior
/// - Same `(product, size, color)` already in cart: quantity increases
/// - Otherwise: a new line is added with display fields frozen at this
///   moment
///
/// ## Errors
/// - Empty or unknown product id
/// - Non-positive quantity (user input; the aggregator itself never errors)
pub fn add_to_cart(
    catalog: &Catalog,
    cart: &CartState,
    product_id: &str,
    size: Option<&str>,
    color: Option<&str>,
    quantity: Option<i64>,
) -> Result<CartSnapshot, ShopError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id, ?size, ?color, quantity, "add_to_cart");

    validate_product_id(product_id)?;
    validate_quantity(quantity)?;

    let product = catalog
        .get(product_id)
        .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

    Ok(cart.with_cart_mut(|c| {
        c.add_line(product, size, color, quantity);
        CartSnapshot::from(&*c)
    }))
}

/// Applies a quantity delta to a cart line.
///
/// A delta driving the quantity to 0 or below removes the line; an
/// unknown key is a silent no-op. Never fails.
pub fn update_cart_line(
    cart: &CartState,
    product_id: &str,
    size: Option<&str>,
    color: Option<&str>,
    delta: i64,
) -> CartSnapshot {
    debug!(product_id, ?size, ?color, delta, "update_cart_line");

    cart.with_cart_mut(|c| {
        c.update_quantity(product_id, size, color, delta);
        CartSnapshot::from(&*c)
    })
}

/// Removes a cart line by its variant key. Missing keys are a no-op.
pub fn remove_from_cart(
    cart: &CartState,
    product_id: &str,
    size: Option<&str>,
    color: Option<&str>,
) -> CartSnapshot {
    debug!(product_id, ?size, ?color, "remove_from_cart");

    cart.with_cart_mut(|c| {
        c.remove_line(product_id, size, color);
        CartSnapshot::from(&*c)
    })
}

/// Clears all lines from the cart.
pub fn clear_cart(cart: &CartState) -> CartSnapshot {
    debug!("clear_cart");

    cart.with_cart_mut(|c| {
        c.clear();
        CartSnapshot::from(&*c)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use moda_core::catalog::demo_products;

    fn fixtures() -> (Catalog, CartState) {
        (Catalog::new(demo_products()), CartState::new())
    }

    #[test]
    fn test_add_to_cart_defaults_quantity_to_one() {
        let (catalog, cart) = fixtures();

        let snapshot = add_to_cart(&catalog, &cart, "2", Some("S"), Some("#fff"), None).unwrap();
        assert_eq!(snapshot.totals.total_quantity, 1);

        let snapshot = add_to_cart(&catalog, &cart, "2", Some("S"), Some("#fff"), Some(3)).unwrap();
        assert_eq!(snapshot.lines.len(), 1);
        assert_eq!(snapshot.lines[0].quantity, 4);
    }

    #[test]
    fn test_add_to_cart_unknown_product() {
        let (catalog, cart) = fixtures();

        let err = add_to_cart(&catalog, &cart, "99", None, None, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(cart.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_add_to_cart_rejects_bad_quantity() {
        let (catalog, cart) = fixtures();

        let err = add_to_cart(&catalog, &cart, "1", None, None, Some(0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_add_to_cart_rejects_blank_product_id() {
        let (catalog, cart) = fixtures();

        // Caught before the catalog lookup, so the code is a validation
        // failure rather than a not-found.
        let err = add_to_cart(&catalog, &cart, "  ", None, None, Some(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(cart.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_update_and_remove_round_trip() {
        let (catalog, cart) = fixtures();
        add_to_cart(&catalog, &cart, "1", Some("M"), None, Some(2)).unwrap();

        let snapshot = update_cart_line(&cart, "1", Some("M"), None, -1);
        assert_eq!(snapshot.lines[0].quantity, 1);

        let snapshot = remove_from_cart(&cart, "1", Some("M"), None);
        assert!(snapshot.lines.is_empty());

        // Removing again is a silent no-op.
        let snapshot = remove_from_cart(&cart, "1", Some("M"), None);
        assert!(snapshot.lines.is_empty());
    }
}
