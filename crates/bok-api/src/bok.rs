use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, info};

use bok_types::api::CreateBokRequest;
use bok_types::models::Bok;
use bok_types::validation::check_create_request;

use crate::AppState;
use crate::error::ApiError;

/// POST /api/bok — create one BoK record.
///
/// Validation runs before any storage access. The source URL is held to the
/// same rule the form applies, so a client that skips its own check still
/// can't persist a non-http(s) link.
pub async fn create_bok(
    State(state): State<AppState>,
    payload: Result<Json<CreateBokRequest>, JsonRejection>,
) -> Result<Json<Bok>, ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

    let new = check_create_request(req)?;
    debug!(
        title = %new.title,
        description = ?new.description,
        source_url = ?new.source_url,
        "Inserting bok"
    );

    // Run blocking DB insert off the async runtime
    let db = state.clone();
    let bok = tokio::task::spawn_blocking(move || db.store.insert_bok(&new))
        .await
        .map_err(|e| ApiError::Internal(format!("spawn_blocking join error: {}", e)))??;

    info!(id = %bok.id, "BoK created");
    Ok(Json(bok))
}

/// Any method other than POST on the create route.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
