//! Pure data structures: the immutable [`OrderRecord`] and its [`OrderConfig`] payload.

pub mod config;
pub mod order;

pub use config::*;
pub use order::*;
