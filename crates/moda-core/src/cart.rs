//! # Cart Aggregator
//!
//! The shopping cart: an ordered collection of variant lines with
//! merge-on-insert semantics and derived pricing totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action                 Operation                Cart Change         │
//! │  ─────────                 ─────────                ───────────         │
//! │                                                                         │
//! │  "Add to Cart" ──────────► add_line() ────────────► merge or push      │
//! │                                                                         │
//! │  +/- quantity buttons ───► update_quantity() ─────► qty = qty + delta  │
//! │                                                     (≤ 0 removes line) │
//! │                                                                         │
//! │  Remove item ────────────► remove_line() ─────────► drop by key        │
//! │                                                                         │
//! │  Checkout done ──────────► clear() ───────────────► lines.clear()      │
//! │                                                                         │
//! │  Cart screen ────────────► group_by_product() ────► (pure projection)  │
//! │  Summary box ────────────► totals() ──────────────► (derived, uncached)│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Line Identity
//! A line is keyed by the `(product_id, size, color)` triple. `None` size or
//! color is a distinct valid key component, never a wildcard: a sized "M"
//! shirt and the same shirt added without a size are two separate lines.
//!
//! ## Invariants
//! - At most one line exists per identity key (merge-on-insert)
//! - `quantity` is always ≥ 1; any operation driving it to 0 or below
//!   removes the line entirely
//! - Denormalized display fields are frozen at add time and never re-synced
//!   against the catalog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Line
// =============================================================================

/// One purchasable unit selection: a product variant plus a quantity.
///
/// ## Snapshot Pattern
/// Display fields (`title`, `price_cents`, ...) are copied from the product
/// when the line is created. The cart never calls back into the catalog, so
/// the cart screen stays consistent even if the catalog were to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product the line references (not owned).
    pub product_id: String,

    /// Selected size, if the user picked one.
    pub size: Option<String>,

    /// Selected color, if the user picked one.
    pub color: Option<String>,

    /// Quantity in cart, always ≥ 1.
    pub quantity: i64,

    /// Title at time of adding (frozen).
    pub title: String,

    /// Category at time of adding (frozen).
    pub category: String,

    /// Price in cents at time of adding (frozen).
    pub price_cents: i64,

    /// Pre-discount reference price at time of adding (frozen).
    pub old_price_cents: Option<i64>,

    /// Rating at time of adding (frozen, display only).
    pub rating: f64,

    /// Image reference at time of adding (frozen).
    pub image_url: String,

    /// Description at time of adding (frozen).
    pub description: Option<String>,

    /// All sizes the product offered at time of adding.
    pub sizes: Vec<String>,

    /// All colors the product offered at time of adding.
    pub colors: Vec<String>,

    /// When this line was first added to the cart.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from a product and a variant selection.
    pub fn from_product(
        product: &Product,
        size: Option<&str>,
        color: Option<&str>,
        quantity: i64,
    ) -> Self {
        CartLine {
            product_id: product.id.clone(),
            size: size.map(str::to_string),
            color: color.map(str::to_string),
            quantity,
            title: product.title.clone(),
            category: product.category.clone(),
            price_cents: product.price_cents,
            old_price_cents: product.old_price_cents,
            rating: product.rating,
            image_url: product.image_url.clone(),
            description: product.description.clone(),
            sizes: product.sizes.clone(),
            colors: product.colors.clone(),
            added_at: Utc::now(),
        }
    }

    /// Checks whether this line matches the `(product_id, size, color)` key.
    ///
    /// `None` components must match exactly; they are not wildcards.
    pub fn matches(&self, product_id: &str, size: Option<&str>, color: Option<&str>) -> bool {
        self.product_id == product_id
            && self.size.as_deref() == size
            && self.color.as_deref() == color
    }

    /// Line total at the current (possibly discounted) price.
    pub fn line_total_cents(&self) -> i64 {
        self.price_cents * self.quantity
    }

    /// Line total at the pre-discount reference price.
    ///
    /// Uses the frozen `old_price_cents` when present, otherwise the
    /// current price, so undiscounted lines contribute no discount.
    pub fn reference_total_cents(&self) -> i64 {
        self.old_price_cents.unwrap_or(self.price_cents) * self.quantity
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Derived Views
// =============================================================================

/// Quantity of one variant within a grouped product entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantQuantity {
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity: i64,
}

/// A per-product aggregation of all variant lines, for display.
///
/// Produced by [`Cart::group_by_product`]. Display fields come from the
/// first encountered line of the product; `breakdown` keeps one entry per
/// distinct variant line in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedLine {
    pub product_id: String,
    pub title: String,
    pub category: String,
    pub price_cents: i64,
    pub old_price_cents: Option<i64>,
    pub image_url: String,
    /// Summed quantity across all variants of the product.
    pub quantity: i64,
    /// One entry per distinct variant line.
    pub breakdown: Vec<VariantQuantity>,
}

/// Monetary totals derived from the cart lines.
///
/// All four values are recomputed from the authoritative line collection on
/// every read; nothing here is cached, so they can never go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Σ quantity over all lines.
    pub total_quantity: i64,
    /// Σ price × quantity, at current (discounted) prices.
    pub subtotal_cents: i64,
    /// Σ reference price × quantity (pre-discount total).
    pub gross_total_cents: i64,
    /// gross_total − subtotal. Non-negative whenever old_price ≥ price.
    pub discount_cents: i64,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Insertion order of lines is irrelevant to correctness but preserved for
/// stable display. The cart lives for the authenticated session and is not
/// persisted; orders are the durable record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the cart, insertion-ordered.
    pub lines: Vec<CartLine>,

    /// When the cart was created/last cleared.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product variant to the cart, merging on the identity key.
    ///
    /// ## Behavior
    /// - Existing `(product_id, size, color)` line: quantity increases by
    ///   `quantity` (no upper bound)
    /// - No existing line: a new line is pushed with the product's
    ///   denormalized display fields
    /// - A merge that lands at 0 or below removes the line; a fresh insert
    ///   with a non-positive quantity is dropped outright
    ///
    /// Never fails.
    pub fn add_line(
        &mut self,
        product: &Product,
        size: Option<&str>,
        color: Option<&str>,
        quantity: i64,
    ) {
        if let Some(idx) = self
            .lines
            .iter()
            .position(|l| l.matches(&product.id, size, color))
        {
            let merged = self.lines[idx].quantity + quantity;
            if merged <= 0 {
                self.lines.remove(idx);
            } else {
                self.lines[idx].quantity = merged;
            }
            return;
        }

        if quantity > 0 {
            self.lines
                .push(CartLine::from_product(product, size, color, quantity));
        }
    }

    /// Removes the line matching the key, if present.
    ///
    /// Removing a non-existent key is a no-op, not an error.
    pub fn remove_line(&mut self, product_id: &str, size: Option<&str>, color: Option<&str>) {
        self.lines.retain(|l| !l.matches(product_id, size, color));
    }

    /// Applies a quantity delta to the line matching the key.
    ///
    /// The new quantity is assigned directly (`current + delta`), avoiding
    /// the double-merge path of the reference implementation. A result of
    /// 0 or below removes the line; an unknown key is a no-op.
    pub fn update_quantity(
        &mut self,
        product_id: &str,
        size: Option<&str>,
        color: Option<&str>,
        delta: i64,
    ) {
        if let Some(idx) = self
            .lines
            .iter()
            .position(|l| l.matches(product_id, size, color))
        {
            let new_qty = self.lines[idx].quantity + delta;
            if new_qty <= 0 {
                self.lines.remove(idx);
            } else {
                self.lines[idx].quantity = new_qty;
            }
        }
    }

    /// Clears all lines from the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of distinct variant lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the subtotal at current prices.
    pub fn subtotal_cents(&self) -> i64 {
        self.lines.iter().map(|l| l.line_total_cents()).sum()
    }

    /// Calculates the pre-discount reference total.
    pub fn gross_total_cents(&self) -> i64 {
        self.lines.iter().map(|l| l.reference_total_cents()).sum()
    }

    /// Derives all monetary totals from the current lines.
    ///
    /// Recomputed on every call; the totals are never cached.
    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal_cents();
        let gross = self.gross_total_cents();
        CartTotals {
            total_quantity: self.total_quantity(),
            subtotal_cents: subtotal,
            gross_total_cents: gross,
            discount_cents: gross - subtotal,
        }
    }

    /// Produces the grouped-by-product view for display.
    ///
    /// Lines sharing a `product_id` merge into one entry carrying the
    /// summed quantity, the display fields of the first encountered line,
    /// and a breakdown with one `(size, color, quantity)` entry per
    /// distinct variant line. Pure projection: the cart is not mutated.
    pub fn group_by_product(&self) -> Vec<GroupedLine> {
        let mut grouped: Vec<GroupedLine> = Vec::new();
        let mut index_by_product: HashMap<&str, usize> = HashMap::new();

        for line in &self.lines {
            let variant = VariantQuantity {
                size: line.size.clone(),
                color: line.color.clone(),
                quantity: line.quantity,
            };

            match index_by_product.get(line.product_id.as_str()) {
                Some(&idx) => {
                    grouped[idx].quantity += line.quantity;
                    grouped[idx].breakdown.push(variant);
                }
                None => {
                    index_by_product.insert(line.product_id.as_str(), grouped.len());
                    grouped.push(GroupedLine {
                        product_id: line.product_id.clone(),
                        title: line.title.clone(),
                        category: line.category.clone(),
                        price_cents: line.price_cents,
                        old_price_cents: line.old_price_cents,
                        image_url: line.image_url.clone(),
                        quantity: line.quantity,
                        breakdown: vec![variant],
                    });
                }
            }
        }

        grouped
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        cart.totals()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_cents: i64, old_price_cents: Option<i64>) -> Product {
        Product {
            id: id.to_string(),
            title: format!("Product {}", id),
            category: "T-Shirt".to_string(),
            price_cents,
            old_price_cents,
            rating: 5.0,
            image_url: format!("assets/{}.png", id),
            description: None,
            sizes: vec!["S".to_string(), "M".to_string(), "L".to_string()],
            colors: vec!["#000".to_string(), "#fff".to_string()],
            reviews: None,
        }
    }

    #[test]
    fn test_add_line_merges_on_same_key() {
        let mut cart = Cart::new();
        let product = test_product("2", 16299, None);

        cart.add_line(&product, Some("S"), Some("#fff"), 1);
        cart.add_line(&product, Some("S"), Some("#fff"), 3);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].quantity, 4);
    }

    #[test]
    fn test_add_line_quantity_sums_over_repeated_adds() {
        let mut cart = Cart::new();
        let product = test_product("1", 21299, None);

        for qty in [1, 2, 5] {
            cart.add_line(&product, Some("M"), None, qty);
        }

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].quantity, 8);
    }

    #[test]
    fn test_none_size_is_a_distinct_key() {
        let mut cart = Cart::new();
        let product = test_product("1", 21299, None);

        cart.add_line(&product, Some("M"), Some("#000"), 1);
        cart.add_line(&product, None, Some("#000"), 1);

        // Same product, but an unspecified size is its own variant line.
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_add_line_freezes_display_fields() {
        let mut cart = Cart::new();
        let mut product = test_product("1", 21299, Some(25000));

        cart.add_line(&product, Some("M"), None, 1);
        product.price_cents = 1;
        product.title = "Renamed".to_string();

        assert_eq!(cart.lines[0].price_cents, 21299);
        assert_eq!(cart.lines[0].old_price_cents, Some(25000));
        assert_eq!(cart.lines[0].title, "Product 1");
    }

    #[test]
    fn test_remove_line_by_key() {
        let mut cart = Cart::new();
        let product = test_product("1", 21299, None);

        cart.add_line(&product, Some("M"), Some("#000"), 2);
        cart.add_line(&product, Some("L"), Some("#000"), 1);

        cart.remove_line("1", Some("M"), Some("#000"));

        assert_eq!(cart.line_count(), 1);
        assert!(!cart
            .lines
            .iter()
            .any(|l| l.matches("1", Some("M"), Some("#000"))));
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let mut cart = Cart::new();
        let product = test_product("1", 21299, None);
        cart.add_line(&product, Some("M"), None, 1);

        cart.remove_line("1", Some("XL"), None);
        cart.remove_line("99", Some("M"), None);

        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_update_quantity_assigns_directly() {
        let mut cart = Cart::new();
        let product = test_product("1", 21299, None);
        cart.add_line(&product, Some("M"), None, 2);

        cart.update_quantity("1", Some("M"), None, 3);
        assert_eq!(cart.lines[0].quantity, 5);

        cart.update_quantity("1", Some("M"), None, -1);
        assert_eq!(cart.lines[0].quantity, 4);
    }

    #[test]
    fn test_update_quantity_to_zero_removes_line() {
        let mut cart = Cart::new();
        let product = test_product("1", 21299, None);
        cart.add_line(&product, Some("M"), None, 2);

        cart.update_quantity("1", Some("M"), None, -2);
        assert!(cart.is_empty());

        cart.add_line(&product, Some("M"), None, 1);
        cart.update_quantity("1", Some("M"), None, -5);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_unknown_key_is_noop() {
        let mut cart = Cart::new();
        let product = test_product("1", 21299, None);
        cart.add_line(&product, Some("M"), None, 2);

        cart.update_quantity("1", Some("L"), None, 1);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        let product = test_product("1", 21299, None);
        cart.add_line(&product, None, None, 3);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_totals_on_empty_cart() {
        let cart = Cart::new();
        let totals = cart.totals();

        assert_eq!(totals.total_quantity, 0);
        assert_eq!(totals.subtotal_cents, 0);
        assert_eq!(totals.gross_total_cents, 0);
        assert_eq!(totals.discount_cents, 0);
    }

    /// Worked example from the cart screen: two variant lines of product
    /// "1" at $212.99 (was $250.00), M×2 and L×1.
    #[test]
    fn test_totals_worked_example() {
        let mut cart = Cart::new();
        let product = test_product("1", 21299, Some(25000));

        cart.add_line(&product, Some("M"), Some("#000"), 2);
        cart.add_line(&product, Some("L"), Some("#000"), 1);

        let totals = cart.totals();
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.subtotal_cents, 63897); // $638.97
        assert_eq!(totals.gross_total_cents, 75000); // $750.00
        assert_eq!(totals.discount_cents, 11103); // $111.03
    }

    #[test]
    fn test_discount_never_negative_when_old_price_dominates() {
        let mut cart = Cart::new();
        cart.add_line(&test_product("1", 21299, Some(25000)), Some("M"), None, 2);
        cart.add_line(&test_product("2", 16299, Some(19099)), None, None, 1);
        cart.add_line(&test_product("3", 9999, None), Some("S"), None, 4);

        assert!(cart.totals().discount_cents >= 0);
    }

    #[test]
    fn test_group_by_product_worked_example() {
        let mut cart = Cart::new();
        let product = test_product("1", 21299, Some(25000));

        cart.add_line(&product, Some("M"), Some("#000"), 2);
        cart.add_line(&product, Some("L"), Some("#000"), 1);

        let grouped = cart.group_by_product();
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].product_id, "1");
        assert_eq!(grouped[0].quantity, 3);
        assert_eq!(grouped[0].breakdown.len(), 2);
        assert_eq!(
            grouped[0].breakdown[0],
            VariantQuantity {
                size: Some("M".to_string()),
                color: Some("#000".to_string()),
                quantity: 2,
            }
        );
    }

    #[test]
    fn test_group_by_product_preserves_first_encounter_order() {
        let mut cart = Cart::new();
        cart.add_line(&test_product("2", 16299, None), Some("S"), None, 1);
        cart.add_line(&test_product("1", 21299, None), Some("M"), None, 1);
        cart.add_line(&test_product("2", 16299, None), Some("L"), None, 1);

        let grouped = cart.group_by_product();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].product_id, "2");
        assert_eq!(grouped[1].product_id, "1");
        assert_eq!(grouped[0].quantity, 2);
    }

    #[test]
    fn test_group_by_product_does_not_mutate_cart() {
        let mut cart = Cart::new();
        let product = test_product("1", 21299, Some(25000));
        cart.add_line(&product, Some("M"), None, 2);
        cart.add_line(&product, Some("L"), None, 1);

        let before = serde_json::to_value(&cart).unwrap();
        let _ = cart.group_by_product();
        let after = serde_json::to_value(&cart).unwrap();

        assert_eq!(before, after);
    }
}
