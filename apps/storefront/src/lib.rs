//! # Moda Storefront Library
//!
//! Composition root for the Moda storefront. The mobile shell (out of
//! scope here) renders screens; this crate owns the state objects and the
//! services those screens drive.
//!
//! ## Module Organization
//! ```text
//! storefront/
//! ├── lib.rs          ◄─── You are here (composition root & demo run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart state handle + snapshots
//! │   ├── session.rs  ◄─── Signed-in user
//! │   ├── favourites.rs ◄─ Favourite product ids
//! │   └── config.rs   ◄─── Configuration state
//! ├── services/
//! │   ├── mod.rs      ◄─── Service exports
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── checkout.rs ◄─── Checkout + order gateway seam
//! │   ├── auth.rs     ◄─── Sign-in/sign-out
//! │   └── orders.rs   ◄─── Order history
//! └── error.rs        ◄─── ShopError for the UI layer
//! ```
//!
//! ## Composition Root
//! Every piece of state is created here exactly once and passed down by
//! handle. Nothing resolves state by ambient lookup.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod services;
pub mod state;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ErrorCode, ShopError};
pub use state::{CartSnapshot, CartState, ConfigState, FavouritesState, SessionState};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use moda_client::Client;
use moda_core::catalog::demo_products;
use moda_core::Catalog;
use services::CheckoutOutcome;

/// Everything the shell needs, created once at startup.
pub struct App {
    pub config: ConfigState,
    pub catalog: Catalog,
    pub cart: CartState,
    pub session: SessionState,
    pub favourites: FavouritesState,
    pub client: Client,
}

impl App {
    /// Builds the composition root from configuration.
    pub fn new(config: ConfigState) -> Self {
        let client = Client::new(config.api_base_url.clone());
        App {
            config,
            catalog: Catalog::new(demo_products()),
            cart: CartState::new(),
            session: SessionState::new(),
            favourites: FavouritesState::new(),
            client,
        }
    }
}

/// Runs the demo flow: browse, favourite, fill the cart, check out.
///
/// The checkout step needs the REST backend from `MODA_API_URL`; when it
/// is unreachable the flow logs the failure and finishes cleanly, since
/// everything before it is pure in-memory state.
pub async fn run() {
    init_tracing();

    let app = App::new(ConfigState::from_env());
    info!(store = %app.config.store_name, backend = %app.client.base_url(), "storefront starting");

    // Browse: category listing and a title search.
    info!(categories = ?app.catalog.categories(), "catalog loaded");
    for product in app.catalog.search("dress") {
        info!(id = %product.id, title = %product.title, price = %product.price(), "search hit");
    }

    // Favourite a product, as the heart button would.
    app.favourites.toggle("3");
    info!(favourites = ?app.favourites.all(), "favourites updated");

    // Fill the cart with two variants of the same shirt.
    if let Err(e) =
        services::cart::add_to_cart(&app.catalog, &app.cart, "1", Some("M"), Some("#000"), Some(2))
    {
        warn!(error = %e, "add to cart failed");
    }
    if let Err(e) =
        services::cart::add_to_cart(&app.catalog, &app.cart, "1", Some("L"), Some("#000"), None)
    {
        warn!(error = %e, "add to cart failed");
    }

    let snapshot = app.cart.snapshot();
    for group in &snapshot.grouped {
        info!(
            product = %group.title,
            quantity = group.quantity,
            variants = group.breakdown.len(),
            "cart group"
        );
    }
    let totals = snapshot.totals;
    info!(
        subtotal = %moda_core::Money::from_cents(totals.subtotal_cents),
        discount = %moda_core::Money::from_cents(totals.discount_cents),
        "cart totals"
    );

    // Sign in and check out, if the backend is reachable.
    match services::auth::sign_in(
        &app.client.users(),
        &app.session,
        "albert@example.com",
        "secret",
    )
    .await
    {
        Ok(user) => {
            info!(user = %user.name, "signed in");
            match services::checkout(&app.cart, &app.session, &app.client.orders()).await {
                Ok(CheckoutOutcome::Placed { order }) => {
                    info!(order_id = %order.id, total = %order.total(), "order placed")
                }
                Ok(CheckoutOutcome::SubmissionFailed { order, reason }) => {
                    warn!(order_id = %order.id, %reason, "order not accepted; cart already cleared")
                }
                Ok(CheckoutOutcome::EmptyCart) => info!("cart was empty"),
                Err(e) => warn!(error = %e, "checkout rejected"),
            }
        }
        Err(e) => warn!(error = %e, "backend unreachable; skipping checkout"),
    }

    info!("storefront demo finished");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=moda=trace` - Show trace for moda crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,moda=debug,storefront=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
