//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod detail_repo;
pub mod record_repo;
pub mod user_repo;

pub use detail_repo::DetailRepo;
pub use record_repo::RecordRepo;
pub use user_repo::UserRepo;
