//! # Domain Types
//!
//! Core domain types used throughout the Moda storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      User       │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id (UUID)      │       │
//! │  │  title          │   │  name           │   │  user_id        │       │
//! │  │  price_cents    │   │  email          │   │  items[]        │       │
//! │  │  old_price_cents│   │  photo_url      │   │  total_cents    │       │
//! │  │  sizes, colors  │   └─────────────────┘   │  placed_at      │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Closed Records
//! The reference implementation carried loosely-typed catalog entries with
//! arbitrary extra fields. Here every record is a closed struct with
//! explicit optional fields; unknown JSON keys are simply dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// The catalog is immutable within this system's scope: cart lines copy the
/// display fields at add time and are never re-synced against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier (opaque string, assigned by the backend).
    pub id: String,

    /// Display title shown in listings and on the cart screen.
    pub title: String,

    /// Category label ("T-Shirt", "Dress modern", ...).
    pub category: String,

    /// Current (possibly discounted) price in cents.
    pub price_cents: i64,

    /// Pre-discount reference price in cents, when the product is on sale.
    pub old_price_cents: Option<i64>,

    /// Average review rating (0.0 - 5.0), display only.
    pub rating: f64,

    /// Reference to the product image (URL or asset key); never loaded here.
    pub image_url: String,

    /// Optional longer description for the details screen.
    pub description: Option<String>,

    /// Available sizes ("S", "M", "L", "XL").
    pub sizes: Vec<String>,

    /// Available colors as hex strings ("#000", "#E5C9A8").
    pub colors: Vec<String>,

    /// Review count, when the backend supplies one.
    pub reviews: Option<u32>,
}

impl Product {
    /// Returns the current price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the pre-discount reference price in cents.
    ///
    /// Falls back to the current price when the product is not on sale,
    /// so `reference - price` is zero for undiscounted products.
    #[inline]
    pub fn reference_price_cents(&self) -> i64 {
        self.old_price_cents.unwrap_or(self.price_cents)
    }

    /// Checks whether the product carries a visible discount.
    pub fn is_discounted(&self) -> bool {
        matches!(self.old_price_cents, Some(old) if old > self.price_cents)
    }
}

// =============================================================================
// User
// =============================================================================

/// An authenticated storefront user.
///
/// The cart treats `id` as an opaque string; it only flows into
/// `Order.user_id` at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
}

// =============================================================================
// Order
// =============================================================================

/// A checkout snapshot.
///
/// Orders are append-only: created once at checkout, never mutated.
/// `items` freezes the cart lines as they were when the user paid, and
/// `total_cents` is the subtotal (current price × quantity), not the
/// pre-discount reference total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier (UUID v4), generated client-side.
    pub id: String,

    /// The user the order belongs to (opaque backend id).
    pub user_id: String,

    /// Cart lines frozen at checkout time.
    pub items: Vec<CartLine>,

    /// Amount charged, in cents.
    pub total_cents: i64,

    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product_on_sale() -> Product {
        Product {
            id: "1".to_string(),
            title: "Modern Light Clothes".to_string(),
            category: "T-Shirt".to_string(),
            price_cents: 21299,
            old_price_cents: Some(25000),
            rating: 5.0,
            image_url: "assets/images/2.png".to_string(),
            description: None,
            sizes: vec!["S".to_string(), "M".to_string()],
            colors: vec!["#000".to_string()],
            reviews: None,
        }
    }

    #[test]
    fn test_reference_price_falls_back_to_price() {
        let mut product = product_on_sale();
        assert_eq!(product.reference_price_cents(), 25000);

        product.old_price_cents = None;
        assert_eq!(product.reference_price_cents(), 21299);
    }

    #[test]
    fn test_is_discounted() {
        let mut product = product_on_sale();
        assert!(product.is_discounted());

        product.old_price_cents = Some(21299);
        assert!(!product.is_discounted());

        product.old_price_cents = None;
        assert!(!product.is_discounted());
    }

    #[test]
    fn test_product_json_is_camel_case() {
        let json = serde_json::to_value(product_on_sale()).unwrap();
        assert!(json.get("priceCents").is_some());
        assert!(json.get("oldPriceCents").is_some());
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("price_cents").is_none());
    }
}
