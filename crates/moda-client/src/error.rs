//! # Client Error Types
//!
//! Error types for backend requests.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Transport error (reqwest::Error)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ClientError (this module) ← Adds context and categorization           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ShopError (in storefront app) ← Mapped for the UI layer               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Timeouts and retries are deliberately not modeled here: the cart core
//! has no opinion on them, and callers that want a retry loop wrap the
//! gateway seam in the app layer.

use thiserror::Error;

/// Backend request errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, DNS, timeout, decode).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Backend returned {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Login matched no user.
    ///
    /// The backend models login as a filtered collection read, so a wrong
    /// password and an unknown email are indistinguishable: both come back
    /// as an empty array.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Entity not found on the backend.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },
}

/// Convenience type alias for Results with ClientError.
pub type ClientResult<T> = Result<T, ClientError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ClientError::UnexpectedStatus {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Backend returned 500: boom");

        let err = ClientError::NotFound {
            entity: "Order".to_string(),
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Order not found: 42");

        assert_eq!(
            ClientError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }
}
