//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`MODA_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//! If hot-reloading is added later, we'd wrap in `RwLock`.

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Base URL of the user/order REST backend.
    pub api_base_url: String,

    /// Store name (displayed in the shell header).
    pub store_name: String,

    /// Currency code (ISO 4217).
    pub currency_code: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,
}

impl ConfigState {
    /// Loads configuration from the environment, falling back to defaults.
    ///
    /// ## Recognized Variables
    /// - `MODA_API_URL` - backend base URL
    /// - `MODA_STORE_NAME` - display name
    pub fn from_env() -> Self {
        let defaults = ConfigState::default();
        ConfigState {
            api_base_url: std::env::var("MODA_API_URL").unwrap_or(defaults.api_base_url),
            store_name: std::env::var("MODA_STORE_NAME").unwrap_or(defaults.store_name),
            ..defaults
        }
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            // The json-server instance the reference app pointed at
            api_base_url: "http://localhost:3001".to_string(),
            store_name: "Moda".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.api_base_url, "http://localhost:3001");
        assert_eq!(config.currency_code, "USD");
    }
}
