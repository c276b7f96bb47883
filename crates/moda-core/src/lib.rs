//! # moda-core: Pure Business Logic for the Moda Storefront
//!
//! This crate is the **heart** of the storefront. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Moda Architecture                                  │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Mobile Shell (out of scope)                   │   │
//! │  │    Home ──► Product Details ──► Cart ──► Profile/Orders        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              apps/storefront (composition root)                 │   │
//! │  │    CartState, SessionState, FavouritesState + services         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ moda-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  Catalog  │  │   │
//! │  │   │   Order   │  │  (cents)  │  │ CartLine  │  │  search   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  moda-client (HTTP layer)                       │   │
//! │  │            users/orders endpoints of the REST backend           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, User, Order)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart aggregator and pricing calculator
//! - [`catalog`] - Read-only product catalog view
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation at the service edge
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use moda_core::cart::Cart;
//! use moda_core::catalog::{demo_products, Catalog};
//!
//! let catalog = Catalog::new(demo_products());
//! let shirt = catalog.get("1").unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_line(shirt, Some("M"), Some("#000"), 2);
//! cart.add_line(shirt, Some("L"), Some("#000"), 1);
//!
//! let totals = cart.totals();
//! assert_eq!(totals.subtotal_cents, 63897);  // $638.97
//! assert_eq!(totals.discount_cents, 11103);  // $111.03 off reference
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use moda_core::Money` instead of
// `use moda_core::money::Money`

pub use cart::{Cart, CartLine, CartTotals, GroupedLine, VariantQuantity};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{Order, Product, User};
