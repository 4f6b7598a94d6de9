//! Bulk migration of one legacy export document into the relational
//! store. One call, one transaction: either the whole report is committed
//! or nothing from the run is persisted.

pub mod context;
pub mod engine;
pub mod loaders;
pub mod report;


use sqlx::PgPool;

pub use context::AuthorFallback;
pub use report::{MigratedCounts, MigrationReport};

use crate::legacy::LegacyDocument;
use crate::store::pg::PgStore;
use crate::store::StoreError;

/// Hard import failure. The transaction was rolled back and the store is
/// unchanged by this run.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    #[error("import failed: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MigrateOptions {
    pub author_fallback: AuthorFallback,
}

/// Run a full import inside one transaction. Commits only if every loader
/// completed; soft per-record errors are inside the returned report and do
/// not prevent the commit.
pub async fn migrate(
    pool: &PgPool,
    doc: &LegacyDocument,
    options: &MigrateOptions,
) -> Result<MigrationReport, MigrateError> {
    let tx = pool.begin().await.map_err(StoreError::from)?;
    let mut store = PgStore::new(tx);
    match engine::run(&mut store, doc, options).await {
        Ok(report) => {
            store.commit().await?;
            Ok(report)
        }
        Err(err) => {
            if let Err(rollback_err) = store.rollback().await {
                tracing::error!("rollback after failed import also failed: {rollback_err}");
            }
            Err(err.into())
        }
    }
}
