//! Bearer-token guard for catalog mutations.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use recordshop_core::error::CoreError;
use recordshop_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The account behind a valid access token.
///
/// Create, update and delete handlers take this as a parameter, so a request
/// without a usable token is rejected with 401 before the catalog is touched.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).map_err(|reason| {
            tracing::debug!(path = %parts.uri.path(), reason, "Rejected catalog mutation");
            unauthorized(reason)
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(path = %parts.uri.path(), error = %e, "Rejected access token");
            unauthorized("Invalid or expired token")
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// The scheme is matched case-insensitively; surrounding whitespace around
/// the token is ignored.
fn bearer_token(headers: &HeaderMap) -> Result<&str, &'static str> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or("Missing Authorization header")?
        .to_str()
        .map_err(|_| "Authorization header is not valid text")?;

    let (scheme, token) = value
        .split_once(' ')
        .ok_or("Invalid Authorization format. Expected: Bearer <token>")?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err("Invalid Authorization format. Expected: Bearer <token>");
    }

    let token = token.trim();
    if token.is_empty() {
        return Err("Empty bearer token");
    }
    Ok(token)
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.to_string()))
}
