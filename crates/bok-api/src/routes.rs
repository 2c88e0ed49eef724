use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;
use crate::bok;

/// All HTTP routes served by the BoK API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/bok",
            post(bok::create_bok).fallback(bok::method_not_allowed),
        )
        .route("/health", get(health))
        .with_state(state)
}

/// GET /health — liveness check.
pub async fn health() -> &'static str {
    "ok"
}
