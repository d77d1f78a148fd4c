//! Route definitions for the `/records` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::records;
use crate::state::AppState;

/// Routes mounted at `/records`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create (requires auth)
/// GET    /search            -> search
/// GET    /detail/{title}    -> detail
/// PUT    /{id}              -> update (requires auth)
/// DELETE /{id}              -> delete (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(records::list).post(records::create))
        .route("/search", get(records::search))
        .route("/detail/{title}", get(records::detail))
        .route("/{id}", put(records::update).delete(records::delete))
}
