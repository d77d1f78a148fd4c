//! Domain building blocks shared by the record-shop crates.
//!
//! Nothing in here touches the database or HTTP: the error taxonomy,
//! id/timestamp aliases, the injectable clock, and the record validation gate.

pub mod clock;
pub mod error;
pub mod types;
pub mod validation;
