//! Repository for the `records` table and the record detail join.

use recordshop_core::types::DbId;
use recordshop_core::validation::ValidRecord;
use sqlx::{PgExecutor, PgPool};

use crate::models::detail::{DetailResponse, DetailRow};
use crate::models::record::Record;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, artist, genre, style, release_year, created_at, updated_at";

/// Catalog ordering: oldest release first, then artist, then title.
///
/// Text keys compare byte-wise so the order does not depend on the server locale.
const ORDER_BY: &str =
    "ORDER BY release_year ASC, artist COLLATE \"C\" ASC, title COLLATE \"C\" ASC, id ASC";

/// Provides CRUD operations for records.
pub struct RecordRepo;

impl RecordRepo {
    /// Insert a new record, returning the created row with its generated
    /// `id` and `created_at`.
    ///
    /// Accepts a pool or an open transaction.
    pub async fn create<'e, E>(executor: E, input: &ValidRecord) -> Result<Record, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO records (title, artist, genre, style, release_year) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Record>(&query)
            .bind(&input.title)
            .bind(&input.artist)
            .bind(&input.genre)
            .bind(&input.style)
            .bind(input.release_year)
            .fetch_one(executor)
            .await
    }

    /// Find a record by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Record>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM records WHERE id = $1");
        sqlx::query_as::<_, Record>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every record in catalog order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Record>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM records {ORDER_BY}");
        sqlx::query_as::<_, Record>(&query).fetch_all(pool).await
    }

    /// List records whose title equals `title` exactly, in catalog order.
    pub async fn list_by_title(pool: &PgPool, title: &str) -> Result<Vec<Record>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM records WHERE title = $1 {ORDER_BY}");
        sqlx::query_as::<_, Record>(&query)
            .bind(title)
            .fetch_all(pool)
            .await
    }

    /// List records whose artist equals `artist` exactly, in catalog order.
    pub async fn list_by_artist(pool: &PgPool, artist: &str) -> Result<Vec<Record>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM records WHERE artist = $1 {ORDER_BY}");
        sqlx::query_as::<_, Record>(&query)
            .bind(artist)
            .fetch_all(pool)
            .await
    }

    /// Number of records in the catalog.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM records")
            .fetch_one(pool)
            .await
    }

    /// Fetch the detail view for the record(s) titled `title`.
    ///
    /// Returns `None` when no record carries that title. A record without a
    /// detail or without tracks yields a view with an empty track list. When
    /// several records share the title, the first one owning a detail (by id)
    /// supplies the whole view.
    pub async fn find_detail(
        pool: &PgPool,
        title: &str,
    ) -> Result<Option<DetailResponse>, sqlx::Error> {
        let rows = sqlx::query_as::<_, DetailRow>(
            "SELECT r.title AS record_title, d.id AS detail_id, \
                    d.album_image_url, d.youtube_title, d.youtube_video_id, \
                    t.track_number, t.track_title \
             FROM records r \
             LEFT JOIN details d ON d.record_id = r.id \
             LEFT JOIN tracks t ON t.detail_id = d.id \
             WHERE r.title = $1 \
             ORDER BY r.id, d.id, t.track_number, t.id",
        )
        .bind(title)
        .fetch_all(pool)
        .await?;

        Ok(DetailResponse::from_rows(rows))
    }

    /// Overwrite every mutable column of record `id` and stamp `updated_at`.
    ///
    /// `created_at` is never touched. Returns `None` if no row with the given
    /// `id` exists; nothing is written in that case.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &ValidRecord,
    ) -> Result<Option<Record>, sqlx::Error> {
        let query = format!(
            "UPDATE records SET \
                title = $2, \
                artist = $3, \
                genre = $4, \
                style = $5, \
                release_year = $6, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Record>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.artist)
            .bind(&input.genre)
            .bind(&input.style)
            .bind(input.release_year)
            .fetch_optional(pool)
            .await
    }

    /// Delete record `id`. Details that referenced it keep their row with a
    /// NULL `record_id`.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM records WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
