//! # State Module
//!
//! Explicit state objects owned by the composition root.
//!
//! ## Why Multiple State Types?
//! The reference storefront held the cart, session, and favourites in
//! ambient context providers resolved by lookup. Here each piece of state
//! is a separate object created once in `lib.rs` and passed by handle:
//!
//! 1. **No ambient lookup**: dependencies are visible in every signature
//! 2. **Better Separation of Concerns**: each state type has a single responsibility
//! 3. **Easier Testing**: services take whichever handles they need
//! 4. **Reduced Contention**: independent states don't share a lock
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Composition Root (lib.rs)                      │   │
//! │  │  let cart = CartState::new();                                   │   │
//! │  │  let session = SessionState::new();                             │   │
//! │  │  let favourites = FavouritesState::new();                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  CartState   │  │ SessionState │  │ FavouritesState  │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │  Arc<Mutex<      │              │
//! │  │    Cart>>    │  │ Option<User> │  │  Vec<String>>>   │              │
//! │  │              │  │  >>          │  │                  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Each state is protected by its own Arc<Mutex<T>>                    │
//! │  • ConfigState: read-only after initialization, no lock                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod favourites;
mod session;

pub use cart::{CartSnapshot, CartState};
pub use config::ConfigState;
pub use favourites::FavouritesState;
pub use session::SessionState;
