#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Order Tracker
//!
//! > **Sequential order numbers and immutable order records.**
//!
//! This crate issues order numbers `1, 2, 3, ...`, keeps the history of what it issued,
//! and describes orders as values that never change once built.
//!
//! ## 🏗️ Design Notes
//!
//! ### 1. Numbers and records are separate
//! [`OrderRegistry`](registry::OrderRegistry) tracks bare numbers. It never receives an
//! [`OrderRecord`](model::OrderRecord). Callers that want the two joined use
//! [`OrderLedger`](ledger::OrderLedger), which issues a number and stores the record
//! built for it.
//!
//! ### 2. Output is injected
//! The registry reports `Created`, `OrderAdded(n)` and `Destroyed` to a
//! [`RegistrySink`](diagnostics::RegistrySink). The default sink forwards to `tracing`;
//! tests use [`MockSink`](diagnostics::mock::MockSink) and assert on the events instead
//! of captured text.
//!
//! ### 3. The counter is bounds-checked
//! Issuance uses a `u64` with checked arithmetic. Running out returns
//! [`RegistryError::Exhausted`](registry::RegistryError::Exhausted) instead of wrapping.
//!
//! ### 4. No validation
//! Any label and any `f64` is accepted as-is, including empty strings, negative and
//! non-finite values.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: [`OrderRecord`](model::OrderRecord), [`OrderNumber`](model::OrderNumber)
//!   and the [`OrderConfig`](model::OrderConfig) builder.
//! - [`registry`]: number issuance.
//! - [`ledger`]: the number/record association.
//! - [`diagnostics`]: sinks for registry events, including the mock.
//! - [`lifecycle`]: logging setup.
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use order_tracker::registry::OrderRegistry;
//!
//! let mut registry = OrderRegistry::new();
//! for _ in 0..3 {
//!     registry.add_order().unwrap();
//! }
//! assert_eq!(registry.add_order().unwrap().value(), 4);
//! ```
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod diagnostics;
pub mod ledger;
pub mod lifecycle;
pub mod model;
pub mod registry;
