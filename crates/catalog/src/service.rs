//! Catalog operations: create, read, update and delete records.

use std::sync::Arc;

use recordshop_core::clock::Clock;
use recordshop_core::types::DbId;
use recordshop_core::validation::{validate_record, RecordInput, ValidRecord};
use recordshop_db::models::detail::DetailResponse;
use recordshop_db::models::record::{Record, RecordResponse};

use crate::error::CatalogError;
use crate::store::RecordStore;

/// A full replacement for an existing record.
///
/// Every mutable field is overwritten, so a blank field in `input` fails
/// validation rather than silently keeping the stored value.
#[derive(Debug, Clone)]
pub struct RecordUpdate {
    pub id: DbId,
    pub input: RecordInput,
}

/// Orchestrates validation, storage and response shaping for records.
pub struct CatalogService<S> {
    store: S,
    clock: Arc<dyn Clock>,
}

impl<S: Clone> Clone for CatalogService<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S: RecordStore> CatalogService<S> {
    pub fn new(store: S, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Validate and persist a new record.
    ///
    /// Only the mutable fields of `input` are used; id and timestamps are
    /// assigned by storage.
    pub async fn create(&self, input: &RecordInput) -> Result<RecordResponse, CatalogError> {
        let valid = self.validate(input)?;
        let record = self.store.create(&valid).await?;
        tracing::info!(record_id = record.id, title = %record.title, "Record created");
        Ok(record.into())
    }

    /// Every record in catalog order.
    pub async fn list(&self) -> Result<Vec<RecordResponse>, CatalogError> {
        let records = self.store.list().await?;
        tracing::debug!(count = records.len(), "Listed records");
        Ok(to_responses(records))
    }

    /// Records whose title matches exactly, in catalog order.
    pub async fn get_by_title(&self, title: &str) -> Result<Vec<RecordResponse>, CatalogError> {
        let records = self.store.list_by_title(title).await?;
        tracing::debug!(title, count = records.len(), "Looked up records by title");
        Ok(to_responses(records))
    }

    /// Records whose artist matches exactly, in catalog order.
    pub async fn get_by_artist(&self, artist: &str) -> Result<Vec<RecordResponse>, CatalogError> {
        let records = self.store.list_by_artist(artist).await?;
        tracing::debug!(artist, count = records.len(), "Looked up records by artist");
        Ok(to_responses(records))
    }

    /// Detail view for `title`.
    ///
    /// An unknown title yields an empty view rather than an error, so "no
    /// such record" and "record without tracks" look alike here. Use
    /// [`CatalogService::find_detail`] to tell them apart.
    pub async fn get_detail(&self, title: &str) -> Result<DetailResponse, CatalogError> {
        Ok(self.find_detail(title).await?.unwrap_or_default())
    }

    /// Detail view for `title`, or `None` when no record has that title.
    pub async fn find_detail(&self, title: &str) -> Result<Option<DetailResponse>, CatalogError> {
        let detail = self.store.find_detail(title).await?;
        match &detail {
            Some(d) => tracing::debug!(title, tracks = d.tracks.len(), "Fetched record detail"),
            None => tracing::debug!(title, "No record found for detail lookup"),
        }
        Ok(detail)
    }

    /// Validate and fully replace an existing record.
    pub async fn update(&self, update: &RecordUpdate) -> Result<RecordResponse, CatalogError> {
        let valid = self.validate(&update.input)?;
        let record = self
            .store
            .replace(update.id, &valid)
            .await?
            .ok_or(CatalogError::NotFound { id: update.id })?;
        tracing::info!(record_id = record.id, title = %record.title, "Record updated");
        Ok(record.into())
    }

    /// Delete record `id`. Its detail and tracks are kept as orphans.
    pub async fn delete(&self, id: DbId) -> Result<(), CatalogError> {
        if !self.store.delete(id).await? {
            return Err(CatalogError::NotFound { id });
        }
        tracing::info!(record_id = id, "Record deleted");
        Ok(())
    }

    fn validate(&self, input: &RecordInput) -> Result<ValidRecord, CatalogError> {
        validate_record(input, self.clock.as_ref()).map_err(|failure| {
            tracing::debug!(
                violations = failure.violations.len(),
                "Record rejected by validation"
            );
            CatalogError::Validation(failure)
        })
    }
}

fn to_responses(records: Vec<Record>) -> Vec<RecordResponse> {
    records.into_iter().map(RecordResponse::from).collect()
}
