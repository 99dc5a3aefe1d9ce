//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PADARIA_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::time::Duration;

use padaria_core::Money;
use padaria_store::StoreConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default recipient of the "talk to us" deep link.
pub const DEFAULT_CONTACT_PHONE: &str = "5547999767627";

/// Default prefilled message of the deep link.
pub const DEFAULT_CONTACT_MESSAGE: &str = "Gostaria de mais informações sobre os produtos...";

/// Invalid configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got '{value}'")]
    InvalidNumber { var: String, value: String },

    #[error("{var} must not be empty")]
    Empty { var: String },

    #[error("{var} must contain only digits, got '{value}'")]
    InvalidPhone { var: String, value: String },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name shown in the Home header
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Simulated delay of the full catalog fetch
    pub list_latency_ms: u64,

    /// Simulated delay of single-product and category lookups
    pub lookup_latency_ms: u64,

    /// Messaging recipient, international format without '+'
    pub contact_phone: String,

    /// Prefilled message text (not encoded)
    pub contact_message: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Joelma Padaria"
    /// - Currency: R$
    /// - Latency: 1000 ms list, 500 ms lookups
    fn default() -> Self {
        ConfigState {
            store_name: "Joelma Padaria".to_string(),
            currency_symbol: padaria_core::money::DEFAULT_CURRENCY_SYMBOL.to_string(),
            list_latency_ms: 1000,
            lookup_latency_ms: 500,
            contact_phone: DEFAULT_CONTACT_PHONE.to_string(),
            contact_message: DEFAULT_CONTACT_MESSAGE.to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PADARIA_STORE_NAME`: Override store name
    /// - `PADARIA_CURRENCY_SYMBOL`: Override currency symbol
    /// - `PADARIA_LIST_LATENCY_MS`: Catalog fetch delay
    /// - `PADARIA_LOOKUP_LATENCY_MS`: Lookup delay
    /// - `PADARIA_CONTACT_PHONE`: Messaging recipient
    /// - `PADARIA_CONTACT_MESSAGE`: Messaging text
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(name) = lookup("PADARIA_STORE_NAME") {
            config.store_name = non_empty("PADARIA_STORE_NAME", name)?;
        }

        if let Some(symbol) = lookup("PADARIA_CURRENCY_SYMBOL") {
            config.currency_symbol = non_empty("PADARIA_CURRENCY_SYMBOL", symbol)?;
        }

        if let Some(value) = lookup("PADARIA_LIST_LATENCY_MS") {
            config.list_latency_ms = parse_millis("PADARIA_LIST_LATENCY_MS", &value)?;
        }

        if let Some(value) = lookup("PADARIA_LOOKUP_LATENCY_MS") {
            config.lookup_latency_ms = parse_millis("PADARIA_LOOKUP_LATENCY_MS", &value)?;
        }

        if let Some(phone) = lookup("PADARIA_CONTACT_PHONE") {
            let phone = non_empty("PADARIA_CONTACT_PHONE", phone)?;
            if !phone.chars().all(|c| c.is_ascii_digit()) {
                return Err(ConfigError::InvalidPhone {
                    var: "PADARIA_CONTACT_PHONE".to_string(),
                    value: phone,
                });
            }
            config.contact_phone = phone;
        }

        if let Some(message) = lookup("PADARIA_CONTACT_MESSAGE") {
            config.contact_message = non_empty("PADARIA_CONTACT_MESSAGE", message)?;
        }

        Ok(config)
    }

    /// Store configuration matching these latencies.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new()
            .list_latency(Duration::from_millis(self.list_latency_ms))
            .lookup_latency(Duration::from_millis(self.lookup_latency_ms))
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "R$ 12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        Money::from_cents(cents).format_with_symbol(&self.currency_symbol)
    }
}

fn non_empty(var: &str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty {
            var: var.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn parse_millis(var: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidNumber {
            var: var.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ConfigState::from_lookup(|_| None).unwrap();
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.store_name, "Joelma Padaria");
        assert_eq!(config.contact_phone, "5547999767627");
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("PADARIA_STORE_NAME", "Padaria Central"),
            ("PADARIA_LIST_LATENCY_MS", "0"),
            ("PADARIA_LOOKUP_LATENCY_MS", " 25 "),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Padaria Central");
        assert_eq!(config.list_latency_ms, 0);
        assert_eq!(config.lookup_latency_ms, 25);

        let store = config.store_config();
        assert!(store.list_latency.is_zero());
        assert_eq!(store.lookup_latency, Duration::from_millis(25));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            ConfigState::from_lookup(lookup(&[("PADARIA_LIST_LATENCY_MS", "soon")])),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            ConfigState::from_lookup(lookup(&[("PADARIA_STORE_NAME", "   ")])),
            Err(ConfigError::Empty { .. })
        ));
        assert!(matches!(
            ConfigState::from_lookup(lookup(&[("PADARIA_CONTACT_PHONE", "+55 47")])),
            Err(ConfigError::InvalidPhone { .. })
        ));
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(1234), "R$ 12.34");
        assert_eq!(config.format_currency(0), "R$ 0.00");
        assert_eq!(config.format_currency(-550), "-R$ 5.50");

        let config = ConfigState {
            currency_symbol: "$".to_string(),
            ..ConfigState::default()
        };
        assert_eq!(config.format_currency(100), "$ 1.00");
    }
}
