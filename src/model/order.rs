use crate::model::OrderConfig;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for issued orders.
///
/// Numbers are issued by [`OrderRegistry`](crate::registry::OrderRegistry) starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderNumber(pub u64);

impl OrderNumber {
    /// The first number a fresh registry issues.
    pub const FIRST: OrderNumber = OrderNumber(1);

    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for OrderNumber {
    fn from(number: u64) -> Self {
        Self(number)
    }
}

impl Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single order and its economic attributes.
///
/// Fields are private and there are no setters: once built, a record never changes.
/// Nothing is validated, so empty labels or negative and non-finite numbers are kept
/// exactly as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    order_number: OrderNumber,
    asset_name: String,
    asset_type: String,
    asset_pair: String,
    quantity: f64,
    order_price: f64,
    base_currency: String,
}

impl OrderRecord {
    /// Creates a new OrderRecord.
    ///
    /// # Arguments
    /// * `order_number` - Identifier, usually issued by an [`OrderRegistry`](crate::registry::OrderRegistry)
    /// * `asset_name` - What the asset is called, e.g. `Bitcoin`
    /// * `asset_type` - Category label, e.g. `Crypto`
    /// * `asset_pair` - Quote/base pairing, e.g. `BTC/USD`
    /// * `quantity` - Units ordered
    /// * `order_price` - Price in `base_currency` units
    /// * `base_currency` - Currency the price is expressed in
    pub fn new(
        order_number: impl Into<OrderNumber>,
        asset_name: impl Into<String>,
        asset_type: impl Into<String>,
        asset_pair: impl Into<String>,
        quantity: f64,
        order_price: f64,
        base_currency: impl Into<String>,
    ) -> Self {
        Self {
            order_number: order_number.into(),
            asset_name: asset_name.into(),
            asset_type: asset_type.into(),
            asset_pair: asset_pair.into(),
            quantity,
            order_price,
            base_currency: base_currency.into(),
        }
    }

    /// Builds a record from an issued number and a config payload.
    pub fn from_config(order_number: impl Into<OrderNumber>, config: OrderConfig) -> Self {
        Self {
            order_number: order_number.into(),
            asset_name: config.asset_name,
            asset_type: config.asset_type,
            asset_pair: config.asset_pair,
            quantity: config.quantity,
            order_price: config.order_price,
            base_currency: config.base_currency,
        }
    }

    pub fn order_number(&self) -> OrderNumber {
        self.order_number
    }

    pub fn asset_name(&self) -> &str {
        &self.asset_name
    }

    pub fn asset_type(&self) -> &str {
        &self.asset_type
    }

    pub fn asset_pair(&self) -> &str {
        &self.asset_pair
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn order_price(&self) -> f64 {
        self.order_price
    }

    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }
}
