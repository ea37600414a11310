//! Catalog query endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use cm_catalog::Page;
use cm_catalog::Vehicle;
use cm_catalog::catalog::{DrivetrainOption, VehicleSummary};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Raw pagination parameters. Kept as strings so bad values fall back
/// to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<String>,
    pub page: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub region: Option<String>,
    pub year: Option<String>,
}

/// GET /api/v1/cars - list vehicles, optionally paginated.
pub async fn list_cars(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Vehicle>> {
    let page = Page::from_query(
        query.limit.as_deref(),
        query.page.as_deref(),
        query.offset.as_deref(),
    );
    Json(state.catalog.paginate(page).to_vec())
}

/// GET /api/v1/cars/filter - exact region and/or year match.
///
/// The year is read like a leading integer ("2024", "2024abc"). A year
/// with no leading digits matches nothing.
pub async fn filter_cars(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Json<Vec<Vehicle>> {
    let region = query.region.as_deref().filter(|r| !r.is_empty());
    let year = match query.year.as_deref().filter(|y| !y.is_empty()) {
        Some(raw) => match leading_year(raw) {
            Some(year) => Some(year),
            None => return Json(Vec::new()),
        },
        None => None,
    };

    Json(
        state
            .catalog
            .filter_by(region, year)
            .into_iter()
            .cloned()
            .collect(),
    )
}

/// Leading optional sign and digits after whitespace, if they form a
/// valid model year.
fn leading_year(raw: &str) -> Option<u16> {
    let trimmed = raw.trim_start();
    let digits_end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '+' || c == '-'))))
        .map_or(trimmed.len(), |(i, _)| i);
    trimmed[..digits_end].parse::<u16>().ok()
}

/// GET /api/v1/cars/{id} - full vehicle record.
pub async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vehicle>> {
    state
        .catalog
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| car_not_found(&id))
}

/// GET /api/v1/cars/{id}/summary
pub async fn get_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<VehicleSummary>> {
    state
        .catalog
        .summary(&id)
        .map(Json)
        .ok_or_else(|| car_not_found(&id))
}

/// GET /api/v1/cars/{id}/drivetrain-options
pub async fn get_drivetrain_options(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<DrivetrainOption>>> {
    state
        .catalog
        .drivetrain_options(&id)
        .map(Json)
        .ok_or_else(|| car_not_found(&id))
}

pub(crate) fn car_not_found(id: &str) -> ApiError {
    ApiError::NotFound(format!("car '{id}' not found"))
}
