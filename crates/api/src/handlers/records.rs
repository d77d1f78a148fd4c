//! Handlers for the `/records` resource.
//!
//! Reads are public. Create, update and delete require an [`AuthUser`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use recordshop_catalog::RecordUpdate;
use recordshop_core::types::DbId;
use recordshop_core::validation::RecordInput;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::SearchParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `PUT /records/{id}`: the full record, optionally echoing its id.
#[derive(Debug, Deserialize)]
pub struct UpdateRecordRequest {
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(flatten)]
    pub record: RecordInput,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/records
///
/// List every record ordered by release year, artist, title.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = state.catalog.list().await?;
    Ok(Json(records))
}

/// POST /api/v1/records
///
/// Create a record. Every field violation is reported in one 400 response.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<RecordInput>,
) -> AppResult<impl IntoResponse> {
    let record = state.catalog.create(&input).await?;
    tracing::info!(user_id = user.user_id, record_id = record.id, "Record created via API");
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/records/detail/{title}
///
/// Detail view with the ordered track list. An unknown title returns an
/// empty view with 200.
pub async fn detail(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<impl IntoResponse> {
    let detail = state.catalog.get_detail(&title).await?;
    Ok(Json(detail))
}

/// GET /api/v1/records/search?title=... | ?artist=...
///
/// Exact-match lookup by exactly one of title or artist.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let records = match (params.title.as_deref(), params.artist.as_deref()) {
        (Some(title), None) => state.catalog.get_by_title(title).await?,
        (None, Some(artist)) => state.catalog.get_by_artist(artist).await?,
        _ => {
            return Err(AppError::BadRequest(
                "Provide exactly one of `title` or `artist`".into(),
            ))
        }
    };
    Ok(Json(records))
}

/// PUT /api/v1/records/{id}
///
/// Replace every mutable field of a record. Returns the updated row.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateRecordRequest>,
) -> AppResult<impl IntoResponse> {
    if let Some(body_id) = body.id {
        if body_id != id {
            return Err(AppError::BadRequest(format!(
                "Body id {body_id} does not match path id {id}"
            )));
        }
    }

    let update = RecordUpdate {
        id,
        input: body.record,
    };
    let record = state.catalog.update(&update).await?;
    tracing::info!(user_id = user.user_id, record_id = id, "Record updated via API");
    Ok(Json(record))
}

/// DELETE /api/v1/records/{id}
///
/// Delete a record. Its detail and tracks stay behind as orphans.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.catalog.delete(id).await?;
    tracing::info!(user_id = user.user_id, record_id = id, "Record deleted via API");
    Ok(StatusCode::NO_CONTENT)
}
