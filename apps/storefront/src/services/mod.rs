//! # Services Module
//!
//! The operations the UI shell drives.
//!
//! ## Service Organization
//! ```text
//! services/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── cart.rs     ◄─── Cart manipulation (add, update, remove, clear)
//! ├── checkout.rs ◄─── Order snapshot + submission to the order store
//! ├── auth.rs     ◄─── Sign-in/sign-out
//! └── orders.rs   ◄─── Order history reads
//! ```
//!
//! ## State Injection
//! Each service takes exactly the state handles and collaborators it
//! needs, nothing ambient:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState) -> CartSnapshot
//!
//! // Needs catalog and cart
//! fn add_to_cart(catalog: &Catalog, cart: &CartState, ...)
//!
//! // Needs cart, session, and the order store seam
//! async fn checkout(cart: &CartState, session: &SessionState, gateway: &G)
//! ```

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod orders;

pub use checkout::{checkout, CheckoutOutcome, OrderGateway};
