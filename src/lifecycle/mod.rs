//! # Process Setup
//!
//! Wiring that sits outside the registry itself. For now that is the logging
//! subscriber: registries report through [`TracingSink`](crate::diagnostics::TracingSink)
//! by default, and nothing is printed until [`setup_tracing`] installs a subscriber.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Lifecycle and issuance events
//! RUST_LOG=debug cargo run     # Full order payloads as well
//! ```

pub mod tracing;

pub use self::tracing::*;
