use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use pressroom_core::entities::EntityCounts;
use pressroom_core::legacy::LegacyDocument;
use pressroom_core::migrate::{self, MigrateOptions, MigrationReport};
use pressroom_core::store::pg;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Bulk import routes. Callers are expected to serialize import requests
/// externally; the server runs each one in a single transaction.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/import", post(run_import))
        .route("/v1/import/status", get(import_status))
}

/// Run a full legacy import. On commit the report lists committed counts
/// and skipped records; on a hard error the transaction was rolled back
/// and the store is unchanged.
async fn run_import(
    State(state): State<AppState>,
    Json(document): Json<LegacyDocument>,
) -> ApiResult<Json<MigrationReport>> {
    let options = MigrateOptions {
        author_fallback: state.config().author_fallback,
    };
    let report = migrate::migrate(state.pool(), &document, &options)
        .await
        .map_err(|e| {
            tracing::error!("import failed, transaction rolled back: {e}");
            ApiError::Internal(format!("{e}"))
        })?;
    Ok(Json(report))
}

/// Current row counts per entity type, for checking whether an import has
/// already populated the store.
async fn import_status(State(state): State<AppState>) -> ApiResult<Json<EntityCounts>> {
    let counts = pg::fetch_entity_counts(state.pool()).await?;
    Ok(Json(counts))
}
