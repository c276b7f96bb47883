//! # Auth Service
//!
//! Sign-in and sign-out against the backend's user collection.
//!
//! Authentication here is deliberately simple: the backend models login as
//! a filtered read over `/users`, and the resulting user record is held in
//! [`SessionState`] for the life of the process. Tokens, refresh, and
//! password storage are the backend's concern.

use tracing::{debug, info};

use crate::error::ShopError;
use crate::state::SessionState;
use moda_client::{NewUser, UserApi};
use moda_core::validation::{validate_email, validate_password};
use moda_core::{User, ValidationError};

/// Signs a user in and stores them in the session.
///
/// ## Errors
/// - Malformed email or too-short password (caught before the round trip)
/// - `INVALID_CREDENTIALS` when the backend matches no user
/// - Network errors from the backend
pub async fn sign_in(
    users: &UserApi,
    session: &SessionState,
    email: &str,
    password: &str,
) -> Result<User, ShopError> {
    debug!(email, "sign_in");

    validate_email(email)?;
    validate_password(password)?;

    let user = users.login(email.trim(), password).await?;

    info!(user_id = %user.id, "signed in");
    session.sign_in(user.clone());
    Ok(user)
}

/// Registers a new user and signs them straight in.
///
/// Mirrors the sign-up screen flow: a successful registration lands the
/// user in the app without a second credential round trip.
///
/// ## Errors
/// - Empty name, malformed email, or too-short password (caught before
///   the round trip)
/// - Network errors from the backend
pub async fn register(
    users: &UserApi,
    session: &SessionState,
    new_user: NewUser,
) -> Result<User, ShopError> {
    debug!(email = %new_user.email, "register");

    if new_user.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        }
        .into());
    }
    validate_email(&new_user.email)?;
    validate_password(&new_user.password)?;

    let user = users.register(&new_user).await?;

    info!(user_id = %user.id, "registered");
    session.sign_in(user.clone());
    Ok(user)
}

/// Signs the current user out.
///
/// The cart is left alone: the reference storefront keeps cart contents
/// across sign-out since they are session-process scoped, not user scoped.
pub fn sign_out(session: &SessionState) {
    debug!("sign_out");
    session.sign_out();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use moda_client::Client;

    #[tokio::test]
    async fn test_sign_in_validates_before_round_trip() {
        // Deliberately unreachable backend: validation must fail first.
        let client = Client::new("http://127.0.0.1:1");
        let session = SessionState::new();

        let err = sign_in(&client.users(), &session, "not-an-email", "secret")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = sign_in(&client.users(), &session, "a@b.com", "123")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert!(!session.is_signed_in());
    }

    #[tokio::test]
    async fn test_register_validates_before_round_trip() {
        // Deliberately unreachable backend: validation must fail first.
        let client = Client::new("http://127.0.0.1:1");
        let session = SessionState::new();

        let blank_name = NewUser {
            name: "  ".to_string(),
            email: "albert@example.com".to_string(),
            password: "secret".to_string(),
            photo_url: None,
        };
        let err = register(&client.users(), &session, blank_name)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let short_password = NewUser {
            name: "Albert Stevano".to_string(),
            email: "albert@example.com".to_string(),
            password: "123".to_string(),
            photo_url: None,
        };
        let err = register(&client.users(), &session, short_password)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert!(!session.is_signed_in());
    }
}
