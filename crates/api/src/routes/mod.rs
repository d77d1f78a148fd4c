pub mod auth;
pub mod health;
pub mod records;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                     register (public)
/// /auth/login                      login (public)
///
/// /records                         list (public), create (auth)
/// /records/search?title=|artist=   exact-match lookup (public)
/// /records/detail/{title}          detail view with tracks (public)
/// /records/{id}                    replace, delete (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/records", records::router())
}
