//! Storage seam for the catalog service.

use async_trait::async_trait;
use recordshop_core::types::DbId;
use recordshop_core::validation::ValidRecord;
use recordshop_db::models::detail::DetailResponse;
use recordshop_db::models::record::Record;
use recordshop_db::repositories::RecordRepo;
use recordshop_db::DbPool;

/// Record persistence as the catalog service needs it.
///
/// Each method is a single statement; nothing spans calls. Lists come back in
/// catalog order (release year, artist, title).
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create(&self, input: &ValidRecord) -> Result<Record, sqlx::Error>;

    async fn list(&self) -> Result<Vec<Record>, sqlx::Error>;

    async fn list_by_title(&self, title: &str) -> Result<Vec<Record>, sqlx::Error>;

    async fn list_by_artist(&self, artist: &str) -> Result<Vec<Record>, sqlx::Error>;

    /// `None` when no record has this title.
    async fn find_detail(&self, title: &str) -> Result<Option<DetailResponse>, sqlx::Error>;

    /// `None` when no row matched `id`.
    async fn replace(&self, id: DbId, input: &ValidRecord)
        -> Result<Option<Record>, sqlx::Error>;

    /// `false` when no row matched `id`.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

/// [`RecordStore`] backed by Postgres through [`RecordRepo`].
#[derive(Debug, Clone)]
pub struct PgRecordStore {
    pool: DbPool,
}

impl PgRecordStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn create(&self, input: &ValidRecord) -> Result<Record, sqlx::Error> {
        RecordRepo::create(&self.pool, input).await
    }

    async fn list(&self) -> Result<Vec<Record>, sqlx::Error> {
        RecordRepo::list(&self.pool).await
    }

    async fn list_by_title(&self, title: &str) -> Result<Vec<Record>, sqlx::Error> {
        RecordRepo::list_by_title(&self.pool, title).await
    }

    async fn list_by_artist(&self, artist: &str) -> Result<Vec<Record>, sqlx::Error> {
        RecordRepo::list_by_artist(&self.pool, artist).await
    }

    async fn find_detail(&self, title: &str) -> Result<Option<DetailResponse>, sqlx::Error> {
        RecordRepo::find_detail(&self.pool, title).await
    }

    async fn replace(
        &self,
        id: DbId,
        input: &ValidRecord,
    ) -> Result<Option<Record>, sqlx::Error> {
        RecordRepo::replace(&self.pool, id, input).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        RecordRepo::delete(&self.pool, id).await
    }
}
