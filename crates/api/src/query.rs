//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Exact-match record lookup (`?title=` or `?artist=`).
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub title: Option<String>,
    pub artist: Option<String>,
}
