//! Record entity model and its public view.

use recordshop_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `records` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Record {
    pub id: DbId,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub style: String,
    pub release_year: i32,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// What callers see of a record. The id is included because it is the
/// handle for subsequent update and delete calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordResponse {
    pub id: DbId,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub style: String,
    pub release_year: i32,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl From<Record> for RecordResponse {
    fn from(record: Record) -> Self {
        Self {
            id: record.id,
            title: record.title,
            artist: record.artist,
            genre: record.genre,
            style: record.style,
            release_year: record.release_year,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
