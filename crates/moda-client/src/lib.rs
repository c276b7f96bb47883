//! # moda-client: REST Client for the Moda Backend
//!
//! This crate provides access to the external user/order backend, a trivial
//! json-server style REST API that owns all durable storage.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Moda Data Flow                                   │
//! │                                                                         │
//! │  Storefront service (checkout, sign_in, order_history)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    moda-client (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Client     │    │   Endpoints   │    │    Errors    │  │   │
//! │  │   │   (lib.rs)    │    │ users/orders  │    │  (error.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ reqwest pool  │◄───│ UserApi       │    │ ClientError  │  │   │
//! │  │   │ base URL      │    │ OrderApi      │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  External REST backend (e.g. http://192.168.0.133:3001)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use moda_client::Client;
//!
//! # async fn example() -> Result<(), moda_client::ClientError> {
//! let client = Client::new("http://localhost:3001");
//!
//! let user = client.users().login("albert@example.com", "secret").await?;
//! let history = client.orders().list_for_user(&user.id).await?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod orders;
pub mod users;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ClientError, ClientResult};
pub use orders::OrderApi;
pub use users::{NewUser, UserApi};

/// Client for the Moda backend.
///
/// Holds the shared `reqwest::Client` (which pools connections internally)
/// and the base URL. Endpoint views are handed out per call, mirroring a
/// repository accessor pattern: `client.users()`, `client.orders()`.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a client for the given base URL.
    ///
    /// A trailing slash on the URL is tolerated and stripped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Client {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Returns the user endpoints view.
    pub fn users(&self) -> UserApi {
        UserApi::new(self.http.clone(), self.base_url.clone())
    }

    /// Returns the order endpoints view.
    pub fn orders(&self) -> OrderApi {
        OrderApi::new(self.http.clone(), self.base_url.clone())
    }

    /// The configured base URL (for logs).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Maps a non-success response to `ClientError::UnexpectedStatus`,
/// preserving the body for diagnostics.
pub(crate) async fn expect_success(
    response: reqwest::Response,
) -> ClientResult<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::UnexpectedStatus { status, body })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = Client::new("http://localhost:3001/");
        assert_eq!(client.base_url(), "http://localhost:3001");

        let client = Client::new("http://localhost:3001");
        assert_eq!(client.base_url(), "http://localhost:3001");
    }
}
