//! Configuration payload for building an [`OrderRecord`](crate::model::OrderRecord).

use serde::{Deserialize, Serialize};

/// The economic attributes of an order, without its number.
///
/// This is the creation payload for [`OrderLedger::place`](crate::ledger::OrderLedger::place).
/// Every field defaults to an empty string or zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderConfig {
    /// What the asset is called, e.g. Bitcoin
    pub asset_name: String,
    /// Asset type, e.g. Crypto
    pub asset_type: String,
    /// e.g. BTC/USD
    pub asset_pair: String,
    /// How many units are ordered
    pub quantity: f64,
    /// Price in base currency
    pub order_price: f64,
    pub base_currency: String,
}

impl OrderConfig {
    pub fn builder() -> OrderConfigBuilder {
        OrderConfigBuilder::default()
    }
}

/// Fluent builder for [`OrderConfig`].
///
/// # Example
/// ```
/// use order_tracker::model::OrderConfig;
///
/// let config = OrderConfig::builder()
///     .asset_name("Bitcoin")
///     .asset_pair("BTC/USD")
///     .quantity(2.5)
///     .build();
/// assert_eq!(config.asset_type, "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderConfigBuilder {
    config: OrderConfig,
}

impl OrderConfigBuilder {
    pub fn asset_name(mut self, asset_name: impl Into<String>) -> Self {
        self.config.asset_name = asset_name.into();
        self
    }

    pub fn asset_type(mut self, asset_type: impl Into<String>) -> Self {
        self.config.asset_type = asset_type.into();
        self
    }

    pub fn asset_pair(mut self, asset_pair: impl Into<String>) -> Self {
        self.config.asset_pair = asset_pair.into();
        self
    }

    pub fn quantity(mut self, quantity: f64) -> Self {
        self.config.quantity = quantity;
        self
    }

    pub fn order_price(mut self, order_price: f64) -> Self {
        self.config.order_price = order_price;
        self
    }

    pub fn base_currency(mut self, base_currency: impl Into<String>) -> Self {
        self.config.base_currency = base_currency.into();
        self
    }

    pub fn build(self) -> OrderConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = OrderConfig::builder().build();
        assert_eq!(config, OrderConfig::default());
        assert_eq!(config.quantity, 0.0);
        assert!(config.base_currency.is_empty());
    }

    #[test]
    fn test_builder_sets_every_field() {
        let config = OrderConfig::builder()
            .asset_name("Bitcoin")
            .asset_type("Crypto")
            .asset_pair("BTC/USD")
            .quantity(2.5)
            .order_price(41000.0)
            .base_currency("USD")
            .build();

        assert_eq!(config.asset_name, "Bitcoin");
        assert_eq!(config.asset_type, "Crypto");
        assert_eq!(config.asset_pair, "BTC/USD");
        assert_eq!(config.quantity, 2.5);
        assert_eq!(config.order_price, 41000.0);
        assert_eq!(config.base_currency, "USD");
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: OrderConfig =
            serde_json::from_str(r#"{"asset_name":"Bitcoin","quantity":1.5}"#).unwrap();

        assert_eq!(config.asset_name, "Bitcoin");
        assert_eq!(config.quantity, 1.5);
        assert_eq!(config.asset_pair, "");
        assert_eq!(config.order_price, 0.0);
    }
}
