//! Row models, DTOs and response views.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Input DTOs for inserts
//! - The public view returned to API callers, where it differs from the row

pub mod detail;
pub mod record;
pub mod user;
