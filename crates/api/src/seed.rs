//! Bulk loading of records with their details and tracks.
//!
//! Used by the `recordshop-seed` binary. The whole load runs in a single
//! transaction: either every entry lands or none does. Loading the same file
//! twice inserts every record twice, since titles are not unique.

use recordshop_core::validation::ValidRecord;
use recordshop_db::models::detail::NewDetail;
use recordshop_db::repositories::{DetailRepo, RecordRepo};
use recordshop_db::DbPool;

/// A validated record plus its optional detail, ready to insert.
pub type SeedEntry = (ValidRecord, Option<NewDetail>);

/// Row counts written by [`load_entries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub records: usize,
    pub details: usize,
    pub tracks: usize,
}

/// Insert every entry inside one transaction.
pub async fn load_entries(
    pool: &DbPool,
    entries: &[SeedEntry],
) -> Result<SeedSummary, sqlx::Error> {
    let mut summary = SeedSummary {
        records: 0,
        details: 0,
        tracks: 0,
    };
    let mut tx = pool.begin().await?;

    for (record, detail) in entries {
        let created = RecordRepo::create(&mut *tx, record).await?;
        summary.records += 1;

        if let Some(detail) = detail {
            DetailRepo::insert_with_tracks(&mut tx, created.id, detail).await?;
            summary.details += 1;
            summary.tracks += detail.tracks.len();
        }
    }

    tx.commit().await?;
    tracing::info!(
        records = summary.records,
        details = summary.details,
        tracks = summary.tracks,
        "Seed entries committed"
    );
    Ok(summary)
}
