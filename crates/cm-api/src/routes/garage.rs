//! Session garage endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::garage::GarageEntry;
use crate::routes::cars::car_not_found;
use crate::routes::chat::session_id;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GarageRequest {
    pub car_id: String,
}

#[derive(Debug, Serialize)]
pub struct GarageUpdate {
    pub car_id: String,
    pub saved: bool,
    pub items: Vec<GarageEntry>,
}

/// GET /api/v1/garage - saved vehicles for this session.
pub async fn list_garage(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<Vec<GarageEntry>> {
    Json(state.garage.list(&session_id(&headers)))
}

/// POST /api/v1/garage - save a vehicle (no-op if already saved).
pub async fn add_to_garage(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<GarageRequest>,
) -> ApiResult<Json<GarageUpdate>> {
    let session = session_id(&headers);
    let vehicle = state
        .catalog
        .find(&req.car_id)
        .ok_or_else(|| car_not_found(&req.car_id))?;

    let added = state.garage.add(&session, vehicle);
    tracing::info!(session = %session, car_id = %req.car_id, added, "garage add");

    Ok(Json(GarageUpdate {
        car_id: req.car_id,
        saved: true,
        items: state.garage.list(&session),
    }))
}

/// POST /api/v1/garage/toggle - save if absent, remove if present.
pub async fn toggle_garage(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<GarageRequest>,
) -> ApiResult<Json<GarageUpdate>> {
    let session = session_id(&headers);
    let vehicle = state
        .catalog
        .find(&req.car_id)
        .ok_or_else(|| car_not_found(&req.car_id))?;

    let saved = state.garage.toggle(&session, vehicle);
    Ok(Json(GarageUpdate {
        car_id: req.car_id,
        saved,
        items: state.garage.list(&session),
    }))
}

/// DELETE /api/v1/garage/{id}
pub async fn remove_from_garage(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(car_id): Path<String>,
) -> Json<GarageUpdate> {
    let session = session_id(&headers);
    state.garage.remove(&session, &car_id);
    Json(GarageUpdate {
        car_id,
        saved: false,
        items: state.garage.list(&session),
    })
}

/// DELETE /api/v1/garage - empty this session's garage.
pub async fn clear_garage(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    state.garage.clear(&session_id(&headers));
    StatusCode::NO_CONTENT
}
