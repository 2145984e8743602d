//! Domain types and pure logic for the generator service records system.
//!
//! This crate is HTTP- and storage-agnostic: it defines the
//! [`ServiceRecord`](record::ServiceRecord) entity, request payload types,
//! validation, service id generation, statistics, and the canonical seed
//! fixtures. The `genops-store` and `genops-api` crates build on top of it.

pub mod error;
pub mod id;
pub mod record;
pub mod request;
pub mod seed;
pub mod stats;
pub mod types;
pub mod validation;

pub use error::CoreError;
