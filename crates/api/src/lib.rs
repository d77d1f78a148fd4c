//! Record shop API server library.
//!
//! Exposes config, state, error handling and routes so integration tests
//! and the binary entrypoints can share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod router;
pub mod routes;
pub mod seed;
pub mod state;
