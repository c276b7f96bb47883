//! # Order Endpoints
//!
//! Submitting checkout snapshots and reading a user's order history.
//!
//! The cart aggregator only ever calls `submit` and never reads results
//! back into cart state; `list_for_user` feeds the profile screen's
//! order-history view.

use tracing::{debug, info};

use crate::error::ClientResult;
use crate::expect_success;
use moda_core::Order;

/// Typed view over the `/orders` endpoints.
#[derive(Debug, Clone)]
pub struct OrderApi {
    http: reqwest::Client,
    base_url: String,
}

impl OrderApi {
    pub(crate) fn new(http: reqwest::Client, base_url: String) -> Self {
        OrderApi { http, base_url }
    }

    /// Submits an order snapshot to the backend.
    ///
    /// Returns the backend's record of the order. The order is append-only:
    /// once accepted it is never mutated.
    pub async fn submit(&self, order: &Order) -> ClientResult<Order> {
        debug!(order_id = %order.id, total_cents = order.total_cents, "submitting order");

        let response = self
            .http
            .post(format!("{}/orders", self.base_url))
            .json(order)
            .send()
            .await?;

        let created: Order = expect_success(response).await?.json().await?;
        info!(order_id = %created.id, "order accepted by backend");
        Ok(created)
    }

    /// Lists all orders for a user, oldest first (backend order).
    pub async fn list_for_user(&self, user_id: &str) -> ClientResult<Vec<Order>> {
        debug!(user_id = %user_id, "fetching order history");

        let response = self
            .http
            .get(format!("{}/orders", self.base_url))
            .query(&[("userId", user_id)])
            .send()
            .await?;

        let orders: Vec<Order> = expect_success(response).await?.json().await?;
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use moda_core::Order;

    #[test]
    fn test_order_wire_shape_matches_backend() {
        let order = Order {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: "u-1".to_string(),
            items: Vec::new(),
            total_cents: 63897,
            placed_at: Utc::now(),
        };

        let json = serde_json::to_value(&order).unwrap();
        // json-server filters on the exact field name, so the camelCase
        // rename is load-bearing for list_for_user.
        assert_eq!(json.get("userId").unwrap(), "u-1");
        assert!(json.get("totalCents").is_some());
        assert!(json.get("placedAt").is_some());
    }
}
