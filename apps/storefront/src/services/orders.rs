//! # Order History Service
//!
//! Reads the signed-in user's past orders from the backend.
//!
//! Order history is append-only and derived entirely server-side; nothing
//! read here flows back into cart state.

use tracing::debug;

use crate::error::ShopError;
use crate::state::SessionState;
use moda_client::OrderApi;
use moda_core::Order;

/// Returns the current user's order history.
///
/// ## Errors
/// - `SESSION_REQUIRED` when no user is signed in
/// - `ORDER_ERROR` when the backend lookup fails, carrying the cause
pub async fn order_history(
    orders: &OrderApi,
    session: &SessionState,
) -> Result<Vec<Order>, ShopError> {
    debug!("order_history");

    let Some(user_id) = session.user_id() else {
        return Err(ShopError::session_required("view your orders"));
    };

    let history = orders
        .list_for_user(&user_id)
        .await
        .map_err(|e| ShopError::order("load order history", &e.into()))?;
    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use moda_client::Client;

    #[tokio::test]
    async fn test_order_history_requires_session() {
        let client = Client::new("http://127.0.0.1:1");
        let session = SessionState::new();

        let err = order_history(&client.orders(), &session).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionRequired);
    }

    #[tokio::test]
    async fn test_backend_failure_surfaces_as_order_error() {
        // Unreachable backend: the lookup itself must fail.
        let client = Client::new("http://127.0.0.1:1");
        let session = SessionState::new();
        session.sign_in(test_user());

        let err = order_history(&client.orders(), &session).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderError);
        assert!(err.message.starts_with("Could not load order history"));
    }

    fn test_user() -> moda_core::User {
        moda_core::User {
            id: "u-1".to_string(),
            name: "Albert Stevano".to_string(),
            email: "albert@example.com".to_string(),
            photo_url: None,
        }
    }
}
