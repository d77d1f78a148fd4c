//! Catalog service: validation, persistence and response shaping for records.
//!
//! [`CatalogService`] is transport-agnostic. It validates inbound payloads with
//! the core validation gate, talks to storage through the [`RecordStore`]
//! trait, and returns public views instead of raw rows.

pub mod error;
pub mod service;
pub mod store;

#[cfg(test)]
mod memory;

pub use error::CatalogError;
pub use service::{CatalogService, RecordUpdate};
pub use store::{PgRecordStore, RecordStore};
