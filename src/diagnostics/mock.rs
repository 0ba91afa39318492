//! # Mock Sink
//!
//! Utilities for testing the registry in isolation.
//!
//! [`MockSink`] records every [`RegistryEvent`] it receives. Clones share the same
//! recording, so a test can hand one clone to a registry, drop the registry, and still
//! inspect what was reported through the other.

use crate::diagnostics::{RegistryEvent, RegistrySink};
use crate::model::OrderNumber;
use std::sync::{Arc, Mutex, PoisonError};

/// A recording sink with expectation tracking for fluent testing.
///
/// # Example
/// ```
/// use order_tracker::diagnostics::mock::MockSink;
/// use order_tracker::registry::OrderRegistry;
///
/// let mut mock = MockSink::new();
/// mock.expect_created().expect_order_added(1).expect_destroyed();
///
/// let mut registry = OrderRegistry::with_sink(mock.clone());
/// registry.add_order().unwrap();
/// drop(registry);
///
/// mock.verify(); // Ensures the recorded events match the expectations
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockSink {
    events: Arc<Mutex<Vec<RegistryEvent>>>,
    expectations: Arc<Mutex<Vec<RegistryEvent>>>,
}

impl MockSink {
    /// Creates a new mock sink with no events and no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `Created` event.
    pub fn expect_created(&mut self) -> &mut Self {
        self.expect(RegistryEvent::Created)
    }

    /// Expects an `OrderAdded` event for the given number.
    pub fn expect_order_added(&mut self, number: impl Into<OrderNumber>) -> &mut Self {
        self.expect(RegistryEvent::OrderAdded(number.into()))
    }

    /// Expects a `Destroyed` event.
    pub fn expect_destroyed(&mut self) -> &mut Self {
        self.expect(RegistryEvent::Destroyed)
    }

    fn expect(&mut self, event: RegistryEvent) -> &mut Self {
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
        self
    }

    /// Returns every event recorded so far, in order.
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Returns the numbers reported by `OrderAdded` events, in order.
    pub fn order_numbers(&self) -> Vec<OrderNumber> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                RegistryEvent::OrderAdded(number) => Some(number),
                _ => None,
            })
            .collect()
    }

    /// Verifies that the recorded events are exactly the expected ones, in order.
    pub fn verify(&self) {
        // No guard is held across the panic: a live registry records Destroyed while unwinding.
        let expected = self.expectations.lock().unwrap_or_else(PoisonError::into_inner).clone();
        let recorded = self.events();
        if expected != recorded {
            panic!(
                "Recorded events do not match expectations.\n expected: {:?}\n recorded: {:?}",
                expected, recorded
            );
        }
    }
}

impl RegistrySink for MockSink {
    fn record(&self, event: RegistryEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_sink_records_in_order() {
        let mock = MockSink::new();
        mock.record(RegistryEvent::Created);
        mock.record(RegistryEvent::OrderAdded(OrderNumber(1)));

        assert_eq!(
            mock.events(),
            vec![RegistryEvent::Created, RegistryEvent::OrderAdded(OrderNumber(1))]
        );
    }

    #[test]
    fn test_clones_share_recording() {
        let mock = MockSink::new();
        let clone = mock.clone();
        clone.record(RegistryEvent::Destroyed);

        assert_eq!(mock.events(), vec![RegistryEvent::Destroyed]);
    }

    #[test]
    fn test_mock_sink_with_expectations() {
        let mut mock = MockSink::new();
        mock.expect_created().expect_order_added(1);

        mock.record(RegistryEvent::Created);
        mock.record(RegistryEvent::OrderAdded(OrderNumber(1)));

        mock.verify();
    }

    #[test]
    #[should_panic(expected = "do not match expectations")]
    fn test_verify_panics_on_unmet_expectation() {
        let mut mock = MockSink::new();
        mock.expect_created().expect_destroyed();

        mock.record(RegistryEvent::Created);

        mock.verify();
    }

    #[test]
    #[should_panic(expected = "do not match expectations")]
    fn test_verify_fails_cleanly_while_registry_alive() {
        use crate::registry::OrderRegistry;

        let mut mock = MockSink::new();
        mock.expect_created().expect_order_added(2);

        let mut registry = OrderRegistry::with_sink(mock.clone());
        registry.add_order().unwrap();

        // The registry is dropped during unwinding and records Destroyed.
        mock.verify();
        drop(registry);
    }

    #[test]
    fn test_recording_survives_failed_verify() {
        let mut mock = MockSink::new();
        mock.expect_destroyed();
        let shared = mock.clone();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(result.is_err());

        shared.record(RegistryEvent::Destroyed);
        mock.verify();
    }
}
