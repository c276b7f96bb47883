//! # Shop Error Type
//!
//! Unified error type for the storefront services.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Moda                                   │
//! │                                                                         │
//! │  UI Layer                       Rust Services                           │
//! │  ────────                       ─────────────                           │
//! │                                                                         │
//! │  sign_in(email, password)                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Service Function                                                │  │
//! │  │  Result<T, ShopError>                                            │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Backend Error? ──── ClientError::UnexpectedStatus ───┐          │  │
//! │  │         │                                             │          │  │
//! │  │         ▼                                             ▼          │  │
//! │  │  Validation Error? ── ValidationError ──────────── ShopError ───►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "SESSION_REQUIRED", "message": "Sign in to check out" }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ShopError` is serializable so a UI shell can pattern-match on `code`
//! without parsing message strings.

use serde::Serialize;

use moda_client::ClientError;
use moda_core::{CoreError, ValidationError};

/// Error returned from storefront services.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for service responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Operation requires a signed-in user
    SessionRequired,

    /// Login credentials matched no user
    InvalidCredentials,

    /// Cart operation failed
    CartError,

    /// Order submission or history lookup failed
    OrderError,

    /// Backend unreachable or answered with an error
    NetworkError,

    /// Internal error
    Internal,
}

impl ShopError {
    /// Creates a new shop error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ShopError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ShopError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ShopError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a session-required error.
    pub fn session_required(operation: &str) -> Self {
        ShopError::new(
            ErrorCode::SessionRequired,
            format!("Sign in to {}", operation),
        )
    }

    /// Creates an order-path error, preserving the underlying cause.
    pub fn order(operation: &str, cause: &ShopError) -> Self {
        ShopError::new(
            ErrorCode::OrderError,
            format!("Could not {}: {}", operation, cause.message),
        )
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ShopError::new(ErrorCode::Internal, message)
    }
}

/// Converts backend client errors to shop errors.
impl From<ClientError> for ShopError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidCredentials => {
                ShopError::new(ErrorCode::InvalidCredentials, err.to_string())
            }
            ClientError::NotFound { entity, id } => ShopError::not_found(&entity, &id),
            ClientError::UnexpectedStatus { status, body } => {
                tracing::error!(status, %body, "backend returned error status");
                ShopError::new(
                    ErrorCode::NetworkError,
                    format!("Backend returned status {}", status),
                )
            }
            ClientError::Http(e) => {
                tracing::error!(error = %e, "backend request failed");
                ShopError::new(ErrorCode::NetworkError, "Backend request failed")
            }
        }
    }
}

/// Converts core errors to shop errors.
impl From<CoreError> for ShopError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ShopError::not_found("Product", &id),
            CoreError::EmptyCart => ShopError::new(ErrorCode::CartError, "Cart is empty"),
            CoreError::Validation(e) => ShopError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors directly (services validate before acting).
impl From<ValidationError> for ShopError {
    fn from(err: ValidationError) -> Self {
        ShopError::validation(err.to_string())
    }
}

impl std::fmt::Display for ShopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ShopError {}

// =============================================================================
// Unit Tests
// =============================================================================
