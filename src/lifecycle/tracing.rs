//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! A compact format that hides the crate/module prefix (`with_target(false)`), filtered by
//! the `RUST_LOG` environment variable.
//!
//! ## What Gets Traced
//!
//! - **Registry Lifecycle**: creation and destruction (`info`)
//! - **Issuance**: every order number handed out (`info`, field `order_number`)
//! - **Ledger Operations**: placement with store size (`info`), lookups and full
//!   config payloads (`debug`)
//! - **Errors**: counter exhaustion (`warn`)
//!
//! ## Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Order registry created
//! INFO Order #1 added order_number=1
//! INFO Placed order_number=#1 size=1
//! INFO Order registry destroyed
//! ```
//!
//! **With `RUST_LOG=debug`**, placement also logs the payload once:
//!
//! ```text
//! DEBUG Place config=OrderConfig { asset_name: "Bitcoin", asset_type: "Crypto", ... }
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
