//! Error types for the order registry.

use crate::model::OrderNumber;
use thiserror::Error;

/// Errors that can occur while issuing order numbers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    /// The counter cannot advance past the last issued number.
    #[error("Order numbers exhausted: last issued {last}")]
    Exhausted { last: OrderNumber },
}
