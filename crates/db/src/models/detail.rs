//! Detail and track models, plus the joined detail view.
//!
//! `details.record_id` and `tracks.detail_id` are nullable: deleting a record
//! leaves its detail and tracks in place with a NULL back-reference.

use recordshop_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `details` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Detail {
    pub id: DbId,
    pub record_id: Option<DbId>,
    pub album_image_url: String,
    pub youtube_title: String,
    pub youtube_video_id: String,
}

/// A row from the `tracks` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Track {
    pub id: DbId,
    pub detail_id: Option<DbId>,
    pub track_number: i32,
    pub track_title: String,
}

/// DTO for loading a detail together with its track listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewDetail {
    #[serde(default)]
    pub album_image_url: String,
    #[serde(default)]
    pub youtube_title: String,
    #[serde(default)]
    pub youtube_video_id: String,
    #[serde(default)]
    pub tracks: Vec<NewTrack>,
}

/// DTO for one track of a [`NewDetail`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewTrack {
    pub track_number: i32,
    pub track_title: String,
}

/// One `{number, title}` entry of a detail's track list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInfo {
    pub track_number: i32,
    pub track_title: String,
}

/// A record's media metadata and ordered track list.
///
/// The default value (all strings empty, no tracks) is what callers receive
/// when no record matches the requested title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailResponse {
    pub record_title: String,
    pub album_image_url: String,
    pub youtube_title: String,
    pub youtube_video_id: String,
    pub tracks: Vec<TrackInfo>,
}

/// One row of the `records LEFT JOIN details LEFT JOIN tracks` query.
#[derive(Debug, Clone, FromRow)]
pub struct DetailRow {
    pub record_title: String,
    pub detail_id: Option<DbId>,
    pub album_image_url: Option<String>,
    pub youtube_title: Option<String>,
    pub youtube_video_id: Option<String>,
    pub track_number: Option<i32>,
    pub track_title: Option<String>,
}

impl DetailResponse {
    /// Fold joined rows into a single view.
    ///
    /// Returns `None` for an empty row set (no record with that title).
    /// Titles are not unique, so the view is built from the first detail in
    /// row order: its header and only its tracks. Records sharing the title
    /// but carrying no detail contribute nothing beyond the title.
    pub fn from_rows(rows: Vec<DetailRow>) -> Option<Self> {
        let record_title = rows.first()?.record_title.clone();

        let Some(header) = rows.iter().find(|r| r.detail_id.is_some()) else {
            return Some(DetailResponse {
                record_title,
                ..DetailResponse::default()
            });
        };

        let tracks = rows
            .iter()
            .filter(|r| r.detail_id == header.detail_id)
            .filter_map(|r| match (r.track_number, &r.track_title) {
                (Some(track_number), Some(track_title)) => Some(TrackInfo {
                    track_number,
                    track_title: track_title.clone(),
                }),
                _ => None,
            })
            .collect();

        Some(DetailResponse {
            record_title,
            album_image_url: header.album_image_url.clone().unwrap_or_default(),
            youtube_title: header.youtube_title.clone().unwrap_or_default(),
            youtube_video_id: header.youtube_video_id.clone().unwrap_or_default(),
            tracks,
        })
    }
}
