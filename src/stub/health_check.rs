use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::{json, Value};
use crate::stub::state::StubState;

pub fn router(state: StubState) -> Router {
    Router::new()
        .route("/health", get(get_health_check))
        .route_layer(Extension(state))
}

/// Liveness plus a peek at how much the stand-in is holding.
async fn get_health_check(
    Extension(state): Extension<StubState>,
) -> Json<Value> {
    let database = state.lock();
    Json(json!({
        "status": "ok",
        "citizens": database.citizens.len(),
        "reservations": database.reservations.len(),
    }))
}
