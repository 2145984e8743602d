//! Change notification infrastructure for the record store.
//!
//! - [`ChangeBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`. The store publishes a [`ChangeEvent`] after
//!   every committed create or update.
//! - [`ChangeLogger`] — background subscriber that turns change events into
//!   structured log entries. Purely observational: it has no side effects
//!   beyond logging and cannot affect the triggering write.

pub mod bus;
pub mod logger;

pub use bus::{ChangeBus, ChangeEvent};
pub use logger::ChangeLogger;
