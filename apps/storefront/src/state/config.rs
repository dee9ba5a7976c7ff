//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BOOKMART_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// Most fields have sensible defaults for development; a deployed
/// storefront would configure these properly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Store name (displayed on checkout summaries)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: "Bookmart Dev Store".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BOOKMART_STORE_NAME`: Override store name
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(store_name) = std::env::var("BOOKMART_STORE_NAME") {
            config.store_name = store_name;
        }

        config
    }

    /// Formats a cent amount as a currency string.
    pub fn format_currency(&self, cents: i64) -> String {
        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            (cents / 100).abs(),
            (cents % 100).abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        let config = StoreConfig::default();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(100), "$1.00");
        assert_eq!(config.format_currency(0), "$0.00");
        assert_eq!(config.format_currency(-1234), "-$12.34");
    }
}
