//! # Moda Storefront Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from environment
//! 3. Create state objects (CartState, SessionState, FavouritesState)
//! 4. Build the REST client
//! 5. Walk the demo flow

#[tokio::main]
async fn main() {
    // The actual setup is in lib.rs for better testability
    storefront::run().await;
}
