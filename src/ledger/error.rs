//! Error types for the order ledger.

use crate::model::OrderNumber;
use crate::registry::RegistryError;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LedgerError {
    /// No order with this number was placed through the ledger.
    #[error("Order not found: {0}")]
    NotFound(OrderNumber),

    /// The underlying registry could not issue a number.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
