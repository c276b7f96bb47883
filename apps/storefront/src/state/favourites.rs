//! # Favourites State
//!
//! The user's favourite product ids, insertion-ordered and deduplicated.
//!
//! Scoped to the session like the cart; the durable record (if any) is the
//! backend's concern, not this state's.

use std::sync::{Arc, Mutex};

/// Shared handle to the favourites list.
#[derive(Debug, Clone)]
pub struct FavouritesState {
    ids: Arc<Mutex<Vec<String>>>,
}

impl FavouritesState {
    /// Creates an empty favourites list.
    pub fn new() -> Self {
        FavouritesState {
            ids: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Checks whether a product is favourited.
    pub fn is_favourite(&self, product_id: &str) -> bool {
        self.ids
            .lock()
            .expect("Favourites mutex poisoned")
            .iter()
            .any(|id| id == product_id)
    }

    /// Adds a product to favourites; duplicates are ignored.
    pub fn add(&self, product_id: &str) {
        let mut ids = self.ids.lock().expect("Favourites mutex poisoned");
        if !ids.iter().any(|id| id == product_id) {
            ids.push(product_id.to_string());
        }
    }

    /// Removes a product from favourites; missing ids are a no-op.
    pub fn remove(&self, product_id: &str) {
        let mut ids = self.ids.lock().expect("Favourites mutex poisoned");
        ids.retain(|id| id != product_id);
    }

    /// Toggles a product's favourite status and returns the new state.
    pub fn toggle(&self, product_id: &str) -> bool {
        let mut ids = self.ids.lock().expect("Favourites mutex poisoned");
        if let Some(pos) = ids.iter().position(|id| id == product_id) {
            ids.remove(pos);
            false
        } else {
            ids.push(product_id.to_string());
            true
        }
    }

    /// Returns all favourite ids in insertion order.
    pub fn all(&self) -> Vec<String> {
        self.ids.lock().expect("Favourites mutex poisoned").clone()
    }
}

impl Default for FavouritesState {
    fn default() -> Self {
        Self::new()
    }
}
