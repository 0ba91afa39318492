//! Diagnostic output for the order registry.
//!
//! The registry never prints. It hands every lifecycle event to an injected
//! [`RegistrySink`], so the counter logic can be tested without capturing output.
//!
//! # Main Components
//!
//! - [`RegistryEvent`] - The three observable events
//! - [`RegistrySink`] - Capability the registry reports to
//! - [`TracingSink`] - Default sink, forwards events to `tracing`
//!
//! # Testing
//!
//! See [`mock`] for a sink that records events and checks expectations.

pub mod mock;

use crate::model::OrderNumber;
use tracing::info;

/// Something observable that happened to a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryEvent {
    /// A registry was constructed.
    Created,
    /// A number was issued and appended to the registry's history.
    OrderAdded(OrderNumber),
    /// A registry was dropped.
    Destroyed,
}

/// Output collaborator injected into an [`OrderRegistry`](crate::registry::OrderRegistry).
pub trait RegistrySink {
    fn record(&self, event: RegistryEvent);
}

/// Sink that emits every event as an `info` level `tracing` event.
///
/// Install a subscriber with [`setup_tracing`](crate::lifecycle::setup_tracing) to see them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl RegistrySink for TracingSink {
    fn record(&self, event: RegistryEvent) {
        match event {
            RegistryEvent::Created => info!("Order registry created"),
            RegistryEvent::OrderAdded(number) => {
                info!(order_number = number.value(), "Order {} added", number)
            }
            RegistryEvent::Destroyed => info!("Order registry destroyed"),
        }
    }
}

impl<S: RegistrySink + ?Sized> RegistrySink for &S {
    fn record(&self, event: RegistryEvent) {
        (**self).record(event)
    }
}
