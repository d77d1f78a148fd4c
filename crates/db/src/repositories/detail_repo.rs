//! Repository for the `details` and `tracks` tables.
//!
//! Details and tracks are written only by data-loading steps; the catalog
//! API reads them through [`RecordRepo::find_detail`](super::RecordRepo::find_detail).

use recordshop_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::detail::{Detail, NewDetail, NewTrack, Track};

/// Column list shared across detail queries to avoid repetition.
const DETAIL_COLUMNS: &str = "id, record_id, album_image_url, youtube_title, youtube_video_id";

/// Column list shared across track queries to avoid repetition.
const TRACK_COLUMNS: &str = "id, detail_id, track_number, track_title";

/// Provides inserts and lookups for details and their tracks.
pub struct DetailRepo;

impl DetailRepo {
    /// Insert a detail for `record_id` and all of its tracks in one transaction.
    pub async fn create_with_tracks(
        pool: &PgPool,
        record_id: DbId,
        input: &NewDetail,
    ) -> Result<Detail, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let detail = Self::insert_with_tracks(&mut tx, record_id, input).await?;
        tx.commit().await?;
        Ok(detail)
    }

    /// Insert a detail and its tracks inside a caller-owned transaction.
    ///
    /// Nothing is visible until the caller commits.
    pub async fn insert_with_tracks(
        tx: &mut Transaction<'_, Postgres>,
        record_id: DbId,
        input: &NewDetail,
    ) -> Result<Detail, sqlx::Error> {
        let insert_query = format!(
            "INSERT INTO details (record_id, album_image_url, youtube_title, youtube_video_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {DETAIL_COLUMNS}"
        );
        let detail = sqlx::query_as::<_, Detail>(&insert_query)
            .bind(record_id)
            .bind(&input.album_image_url)
            .bind(&input.youtube_title)
            .bind(&input.youtube_video_id)
            .fetch_one(&mut **tx)
            .await?;

        Self::insert_tracks_inner(tx, detail.id, &input.tracks).await?;

        tracing::debug!(
            detail_id = detail.id,
            record_id,
            tracks = input.tracks.len(),
            "Inserted detail with tracks"
        );
        Ok(detail)
    }

    /// Find a detail by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Detail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} FROM details WHERE id = $1");
        sqlx::query_as::<_, Detail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Details whose owning record has been deleted.
    pub async fn list_orphaned(pool: &PgPool) -> Result<Vec<Detail>, sqlx::Error> {
        let query =
            format!("SELECT {DETAIL_COLUMNS} FROM details WHERE record_id IS NULL ORDER BY id");
        sqlx::query_as::<_, Detail>(&query).fetch_all(pool).await
    }

    /// Tracks of `detail_id`, ordered by track number.
    pub async fn list_tracks(pool: &PgPool, detail_id: DbId) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!(
            "SELECT {TRACK_COLUMNS} FROM tracks WHERE detail_id = $1 ORDER BY track_number, id"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(detail_id)
            .fetch_all(pool)
            .await
    }

    async fn insert_tracks_inner(
        tx: &mut Transaction<'_, Postgres>,
        detail_id: DbId,
        tracks: &[NewTrack],
    ) -> Result<(), sqlx::Error> {
        for track in tracks {
            sqlx::query(
                "INSERT INTO tracks (detail_id, track_number, track_title) VALUES ($1, $2, $3)",
            )
            .bind(detail_id)
            .bind(track.track_number)
            .bind(&track.track_title)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}
