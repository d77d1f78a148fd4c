//! Load records, details and tracks from a JSON file.
//!
//! ```text
//! recordshop-seed [path/to/records.json]
//! ```
//!
//! The path falls back to `SEED_FILE`. The file holds an array of records,
//! each optionally carrying a `detail` with its `tracks`. Every record is
//! validated the same way the API validates it; the first invalid entry
//! aborts the run before anything is written. All inserts share one
//! transaction. The loader is not idempotent: a second run duplicates records.

use anyhow::Context;
use recordshop_api::seed::{load_entries, SeedEntry};
use recordshop_core::clock::SystemClock;
use recordshop_core::validation::{validate_record, RecordInput};
use recordshop_db::models::detail::NewDetail;
use recordshop_db::repositories::DetailRepo;
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// One entry of the seed file.
#[derive(Debug, Deserialize)]
struct SeedRecord {
    #[serde(flatten)]
    record: RecordInput,
    #[serde(default)]
    detail: Option<NewDetail>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recordshop_seed=info,recordshop_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SEED_FILE").ok())
        .context("usage: recordshop-seed <file> (or set SEED_FILE)")?;

    let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let entries = parse_seed(&raw)?;
    tracing::info!(path = %path, entries = entries.len(), "Seed file validated");

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = recordshop_db::create_pool(&database_url)
        .await
        .context("connecting to database")?;
    recordshop_db::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let summary = load_entries(&pool, &entries)
        .await
        .context("loading seed entries (nothing was committed)")?;

    let orphaned = DetailRepo::list_orphaned(&pool).await?.len();
    tracing::info!(
        records = summary.records,
        details = summary.details,
        tracks = summary.tracks,
        orphaned_details = orphaned,
        "Seeding complete"
    );
    pool.close().await;
    Ok(())
}

/// Parse and validate every entry of a seed document.
fn parse_seed(raw: &str) -> anyhow::Result<Vec<SeedEntry>> {
    let entries: Vec<SeedRecord> = serde_json::from_str(raw).context("parsing seed file")?;
    let clock = SystemClock;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let valid = validate_record(&entry.record, &clock)
                .with_context(|| format!("entry {index} ({:?}) is invalid", entry.record.title))?;
            Ok((valid, entry.detail))
        })
        .collect()
}
