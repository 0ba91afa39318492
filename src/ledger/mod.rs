//! Associating issued numbers with order records.
//!
//! [`OrderRegistry`] deliberately knows nothing about [`OrderRecord`]. The ledger is the
//! explicit step that joins them: [`place`](OrderLedger::place) issues a number and
//! stores the record built from an [`OrderConfig`] under it.

pub mod error;

pub use error::*;

use crate::diagnostics::{RegistrySink, TracingSink};
use crate::model::{OrderConfig, OrderNumber, OrderRecord};
use crate::registry::OrderRegistry;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// A registry plus the records placed through it.
///
/// Every number issued by the inner registry has exactly one stored record. Records
/// are never updated or removed.
pub struct OrderLedger<S: RegistrySink = TracingSink> {
    registry: OrderRegistry<S>,
    store: HashMap<OrderNumber, OrderRecord>,
}

impl OrderLedger<TracingSink> {
    pub fn new() -> Self {
        Self::with_sink(TracingSink)
    }
}

impl Default for OrderLedger<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RegistrySink> OrderLedger<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            registry: OrderRegistry::with_sink(sink),
            store: HashMap::new(),
        }
    }

    /// Issues the next number and stores a record built from `config` under it.
    ///
    /// # Errors
    /// [`LedgerError::Registry`] if the registry cannot issue another number.
    /// Nothing is stored in that case.
    pub fn place(&mut self, config: OrderConfig) -> Result<OrderNumber, LedgerError> {
        debug!(?config, "Place");
        let number = self.registry.add_order().inspect_err(|e| {
            warn!(error = %e, "Place failed");
        })?;

        self.store.insert(number, OrderRecord::from_config(number, config));
        info!(order_number = %number, size = self.store.len(), "Placed");
        Ok(number)
    }

    pub fn get(&self, number: OrderNumber) -> Option<&OrderRecord> {
        let record = self.store.get(&number);
        debug!(order_number = %number, found = record.is_some(), "Get");
        record
    }

    /// Like [`get`](Self::get), but an unknown number is an error.
    pub fn order(&self, number: OrderNumber) -> Result<&OrderRecord, LedgerError> {
        self.get(number).ok_or(LedgerError::NotFound(number))
    }

    /// Every placed record, in issuance order.
    pub fn orders(&self) -> impl Iterator<Item = &OrderRecord> + '_ {
        self.registry
            .issued()
            .iter()
            .filter_map(|number| self.store.get(number))
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn registry(&self) -> &OrderRegistry<S> {
        &self.registry
    }
}
