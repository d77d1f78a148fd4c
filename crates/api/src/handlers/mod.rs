//! Request handlers.
//!
//! Handlers extract and check transport-level input, delegate to the catalog
//! service or a repository, and map errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod records;
