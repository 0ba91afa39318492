//! Sequential order number issuance.
//!
//! [`OrderRegistry`] hands out `1, 2, 3, ...` and remembers every number it issued, in
//! issuance order. It tracks bare numbers only and never sees an
//! [`OrderRecord`](crate::model::OrderRecord); pairing the two is the job of
//! [`OrderLedger`](crate::ledger::OrderLedger).
//!
//! Every lifecycle step is reported to the registry's [`RegistrySink`]:
//!
//! ```text
//! Created -> OrderAdded(#1) -> OrderAdded(#2) -> ... -> Destroyed
//! ```

pub mod error;

pub use error::*;

use crate::diagnostics::{RegistryEvent, RegistrySink, TracingSink};
use crate::model::OrderNumber;
use tracing::warn;

/// Issues monotonically increasing order numbers and records them.
///
/// # Invariants
/// - The next number grows by exactly 1 per successful [`add_order`](Self::add_order).
/// - `issued().len() == next_number() - 1`.
/// - A number is never issued twice. When the counter cannot advance,
///   `add_order` fails with [`RegistryError::Exhausted`] and nothing changes.
///
/// `add_order` takes `&mut self`, so the increment and the append can never interleave
/// with another issuance on the same registry.
pub struct OrderRegistry<S: RegistrySink = TracingSink> {
    issued: Vec<OrderNumber>,
    next: u64,
    sink: S,
}

impl OrderRegistry<TracingSink> {
    /// Creates a registry that reports through `tracing`.
    pub fn new() -> Self {
        Self::with_sink(TracingSink)
    }
}

impl Default for OrderRegistry<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RegistrySink> OrderRegistry<S> {
    /// Creates a registry that reports to `sink`. The first number issued is 1.
    pub fn with_sink(sink: S) -> Self {
        sink.record(RegistryEvent::Created);
        Self {
            issued: Vec::new(),
            next: OrderNumber::FIRST.value(),
            sink,
        }
    }

    /// Issues the next order number.
    ///
    /// The number is appended to the history and reported to the sink before the
    /// counter advances.
    ///
    /// # Errors
    /// [`RegistryError::Exhausted`] once the counter reaches `u64::MAX`.
    pub fn add_order(&mut self) -> Result<OrderNumber, RegistryError> {
        let number = OrderNumber(self.next);
        let Some(next) = self.next.checked_add(1) else {
            let last = OrderNumber(self.next - 1);
            warn!(%last, "Order number counter exhausted");
            return Err(RegistryError::Exhausted { last });
        };

        self.issued.push(number);
        self.sink.record(RegistryEvent::OrderAdded(number));
        self.next = next;
        Ok(number)
    }

    /// Every number issued so far, oldest first.
    pub fn issued(&self) -> &[OrderNumber] {
        &self.issued
    }

    /// The number the next successful `add_order` will return.
    pub fn next_number(&self) -> OrderNumber {
        OrderNumber(self.next)
    }

    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[cfg(test)]
    pub(crate) fn with_next_number(sink: S, next: u64) -> Self {
        Self {
            issued: Vec::new(),
            next,
            sink,
        }
    }
}

impl<S: RegistrySink> Drop for OrderRegistry<S> {
    fn drop(&mut self) {
        self.sink.record(RegistryEvent::Destroyed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::mock::MockSink;

    #[test]
    fn test_fresh_registry() {
        let registry = OrderRegistry::with_sink(MockSink::new());

        assert!(registry.is_empty());
        assert_eq!(registry.issued(), &[] as &[OrderNumber]);
        assert_eq!(registry.next_number(), OrderNumber(1));
        assert_eq!(registry.sink().events(), vec![RegistryEvent::Created]);
    }

    #[test]
    fn test_three_orders_then_fourth() {
        let mut registry = OrderRegistry::with_sink(MockSink::new());
        for _ in 0..3 {
            registry.add_order().unwrap();
        }

        assert_eq!(registry.issued(), &[OrderNumber(1), OrderNumber(2), OrderNumber(3)]);
        assert_eq!(registry.add_order(), Ok(OrderNumber(4)));
    }

    #[test]
    fn test_len_tracks_next_number() {
        let mut registry = OrderRegistry::with_sink(MockSink::new());
        for n in 0..50u64 {
            assert_eq!(registry.len() as u64, registry.next_number().value() - 1);
            assert_eq!(registry.add_order(), Ok(OrderNumber(n + 1)));
        }
        assert_eq!(registry.len(), 50);
    }

    #[test]
    fn test_reported_number_matches_appended() {
        let mock = MockSink::new();
        let mut registry = OrderRegistry::with_sink(mock.clone());

        let first = registry.add_order().unwrap();
        let second = registry.add_order().unwrap();

        assert_eq!(mock.order_numbers(), vec![first, second]);
        assert_eq!(mock.order_numbers(), registry.issued().to_vec());
    }

    #[test]
    fn test_drop_reports_destroyed() {
        let mut mock = MockSink::new();
        mock.expect_created()
            .expect_order_added(1)
            .expect_order_added(2)
            .expect_destroyed();

        {
            let mut registry = OrderRegistry::with_sink(mock.clone());
            registry.add_order().unwrap();
            registry.add_order().unwrap();
        }

        mock.verify();
    }

    #[test]
    fn test_exhausted_counter_leaves_state_untouched() {
        let mock = MockSink::new();
        let mut registry = OrderRegistry::with_next_number(mock.clone(), u64::MAX - 1);

        assert_eq!(registry.add_order(), Ok(OrderNumber(u64::MAX - 1)));

        let err = registry.add_order().unwrap_err();
        assert_eq!(err, RegistryError::Exhausted { last: OrderNumber(u64::MAX - 1) });
        assert_eq!(registry.next_number(), OrderNumber(u64::MAX));
        assert_eq!(registry.issued(), &[OrderNumber(u64::MAX - 1)]);

        // Repeated calls keep failing without reusing anything.
        assert!(registry.add_order().is_err());
        assert_eq!(mock.order_numbers(), vec![OrderNumber(u64::MAX - 1)]);
    }

    #[test]
    fn test_default_registry_uses_tracing_sink() {
        let mut registry = OrderRegistry::default();
        assert_eq!(registry.add_order(), Ok(OrderNumber(1)));
    }
}
