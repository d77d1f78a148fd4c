//! In-memory [`RecordStore`] used by the service tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use recordshop_core::types::DbId;
use recordshop_core::validation::ValidRecord;
use recordshop_db::models::detail::DetailResponse;
use recordshop_db::models::record::Record;

use crate::store::RecordStore;

#[derive(Default)]
struct Inner {
    next_id: DbId,
    records: Vec<Record>,
    details: HashMap<String, DetailResponse>,
}

/// Keeps rows in a `Vec` and mirrors the Postgres store's ordering and
/// affected-row semantics.
#[derive(Default)]
pub struct MemoryRecordStore {
    inner: Mutex<Inner>,
}

impl MemoryRecordStore {
    /// Register a detail view returned for its `record_title`.
    pub fn put_detail(&self, detail: DetailResponse) {
        let mut inner = self.inner.lock().unwrap();
        inner.details.insert(detail.record_title.clone(), detail);
    }

    fn sorted(&self, keep: impl Fn(&Record) -> bool) -> Vec<Record> {
        let inner = self.inner.lock().unwrap();
        let mut records: Vec<Record> = inner.records.iter().filter(|&r| keep(r)).cloned().collect();
        records.sort_by(|a, b| {
            (a.release_year, &a.artist, &a.title, a.id).cmp(&(
                b.release_year,
                &b.artist,
                &b.title,
                b.id,
            ))
        });
        records
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn create(&self, input: &ValidRecord) -> Result<Record, sqlx::Error> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let record = Record {
            id: inner.next_id,
            title: input.title.clone(),
            artist: input.artist.clone(),
            genre: input.genre.clone(),
            style: input.style.clone(),
            release_year: input.release_year,
            created_at: Utc::now(),
            updated_at: None,
        };
        inner.records.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Record>, sqlx::Error> {
        Ok(self.sorted(|_| true))
    }

    async fn list_by_title(&self, title: &str) -> Result<Vec<Record>, sqlx::Error> {
        Ok(self.sorted(|r| r.title == title))
    }

    async fn list_by_artist(&self, artist: &str) -> Result<Vec<Record>, sqlx::Error> {
        Ok(self.sorted(|r| r.artist == artist))
    }

    async fn find_detail(&self, title: &str) -> Result<Option<DetailResponse>, sqlx::Error> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.details.get(title).cloned())
    }

    async fn replace(
        &self,
        id: DbId,
        input: &ValidRecord,
    ) -> Result<Option<Record>, sqlx::Error> {
        let mut inner = self.inner.lock().unwrap();
        let Some(record) = inner.records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        record.title = input.title.clone();
        record.artist = input.artist.clone();
        record.genre = input.genre.clone();
        record.style = input.style.clone();
        record.release_year = input.release_year;
        record.updated_at = Some(Utc::now());
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.records.len();
        inner.records.retain(|r| r.id != id);
        Ok(inner.records.len() < before)
    }
}
