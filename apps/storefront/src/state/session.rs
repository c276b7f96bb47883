//! # Session State
//!
//! Holds the currently signed-in user, if any.
//!
//! The reference kept this in ambient context plus device storage; here it
//! is an explicit state object owned by the composition root and passed by
//! handle. The user id it hands out is an opaque backend string, used only
//! to scope order submission and history reads.

use std::sync::{Arc, Mutex};

use moda_core::User;

/// Shared handle to the authenticated session.
#[derive(Debug, Clone)]
pub struct SessionState {
    user: Arc<Mutex<Option<User>>>,
}

impl SessionState {
    /// Creates a signed-out session.
    pub fn new() -> Self {
        SessionState {
            user: Arc::new(Mutex::new(None)),
        }
    }

    /// Stores the signed-in user, replacing any previous one.
    pub fn sign_in(&self, user: User) {
        let mut guard = self.user.lock().expect("Session mutex poisoned");
        *guard = Some(user);
    }

    /// Clears the session.
    pub fn sign_out(&self) {
        let mut guard = self.user.lock().expect("Session mutex poisoned");
        *guard = None;
    }

    /// Returns a copy of the current user, if signed in.
    pub fn current_user(&self) -> Option<User> {
        self.user.lock().expect("Session mutex poisoned").clone()
    }

    /// Returns the current user's id, if signed in.
    pub fn user_id(&self) -> Option<String> {
        self.user
            .lock()
            .expect("Session mutex poisoned")
            .as_ref()
            .map(|u| u.id.clone())
    }

    /// Checks whether a user is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.user.lock().expect("Session mutex poisoned").is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            id: "u-1".to_string(),
            name: "Albert Stevano".to_string(),
            email: "albert@example.com".to_string(),
            photo_url: None,
        }
    }

    #[test]
    fn test_sign_in_and_out() {
        let session = SessionState::new();
        assert!(!session.is_signed_in());
        assert!(session.user_id().is_none());

        session.sign_in(test_user());
        assert!(session.is_signed_in());
        assert_eq!(session.user_id().as_deref(), Some("u-1"));

        session.sign_out();
        assert!(!session.is_signed_in());
    }

    #[test]
    fn test_sign_in_replaces_previous_user() {
        let session = SessionState::new();
        session.sign_in(test_user());

        let mut other = test_user();
        other.id = "u-2".to_string();
        session.sign_in(other);

        assert_eq!(session.user_id().as_deref(), Some("u-2"));
    }
}
