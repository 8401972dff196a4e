//! Handlers for the lookup tables that populate the filter dropdowns.
//! All return `{ "data": [{id, name}, ...] }` ordered by name.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use sillage_db::repositories::LookupRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/brands
pub async fn list_brands(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let brands = LookupRepo::list_brands(&state.pool).await?;
    Ok(Json(DataResponse { data: brands }))
}

/// GET /api/v1/families
pub async fn list_families(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let families = LookupRepo::list_families(&state.pool).await?;
    Ok(Json(DataResponse { data: families }))
}

/// GET /api/v1/types
pub async fn list_types(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let types = LookupRepo::list_types(&state.pool).await?;
    Ok(Json(DataResponse { data: types }))
}

/// GET /api/v1/concentrations
pub async fn list_concentrations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let concentrations = LookupRepo::list_concentrations(&state.pool).await?;
    Ok(Json(DataResponse {
        data: concentrations,
    }))
}

/// GET /api/v1/countries
pub async fn list_countries(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let countries = LookupRepo::list_countries(&state.pool).await?;
    Ok(Json(DataResponse { data: countries }))
}

/// GET /api/v1/perfumers
pub async fn list_perfumers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let perfumers = LookupRepo::list_perfumers(&state.pool).await?;
    Ok(Json(DataResponse { data: perfumers }))
}

/// GET /api/v1/moods
pub async fn list_moods(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let moods = LookupRepo::list_moods(&state.pool).await?;
    Ok(Json(DataResponse { data: moods }))
}

/// GET /api/v1/accords
pub async fn list_accords(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let accords = LookupRepo::list_main_accords(&state.pool).await?;
    Ok(Json(DataResponse { data: accords }))
}
