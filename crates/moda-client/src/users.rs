//! # User Endpoints
//!
//! Login and registration against the backend's `/users` collection.
//!
//! ## How Login Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The backend is a json-server style API: login is a filtered read.     │
//! │                                                                         │
//! │  GET /users?email=a@b.com&password=secret                              │
//! │       │                                                                 │
//! │       ├── [ { id, name, email, ... } ]  → signed in                    │
//! │       │                                                                 │
//! │       └── []                            → InvalidCredentials           │
//! │                                                                         │
//! │  (Yes, the password travels as a query parameter. That is the          │
//! │   backend's contract; hardening it is the backend's problem.)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClientError, ClientResult};
use crate::expect_success;
use moda_core::User;

/// Payload for registering a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub photo_url: Option<String>,
}

/// Typed view over the `/users` endpoints.
#[derive(Debug, Clone)]
pub struct UserApi {
    http: reqwest::Client,
    base_url: String,
}

impl UserApi {
    pub(crate) fn new(http: reqwest::Client, base_url: String) -> Self {
        UserApi { http, base_url }
    }

    /// Attempts to sign a user in.
    ///
    /// An empty result set means the credentials matched no user; the
    /// caller cannot tell a wrong password from an unknown email.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<User> {
        debug!(email = %email, "login request");

        let response = self
            .http
            .get(format!("{}/users", self.base_url))
            .query(&[("email", email), ("password", password)])
            .send()
            .await?;

        let users: Vec<User> = expect_success(response).await?.json().await?;

        users
            .into_iter()
            .next()
            .ok_or(ClientError::InvalidCredentials)
    }

    /// Registers a new user and returns the backend's record of it.
    pub async fn register(&self, new_user: &NewUser) -> ClientResult<User> {
        debug!(email = %new_user.email, "register request");

        let response = self
            .http
            .post(format!("{}/users", self.base_url))
            .json(new_user)
            .send()
            .await?;

        let user: User = expect_success(response).await?.json().await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_json_is_camel_case() {
        let new_user = NewUser {
            name: "Albert Stevano".to_string(),
            email: "albert@example.com".to_string(),
            password: "secret".to_string(),
            photo_url: None,
        };

        let json = serde_json::to_value(&new_user).unwrap();
        assert!(json.get("photoUrl").is_some());
        assert!(json.get("photo_url").is_none());
    }
}
