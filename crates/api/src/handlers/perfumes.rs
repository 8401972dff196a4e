//! Handlers for the perfume catalog: paginated list, text search, detail
//! fetch, and CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sillage_core::error::CoreError;
use sillage_core::search::ilike_pattern;
use sillage_core::types::DbId;
use sillage_db::models::perfume::{CreatePerfume, UpdatePerfume};
use sillage_db::repositories::PerfumeRepo;

use crate::error::{AppError, AppResult};
use crate::query::{PerfumeListParams, PerfumeSearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/perfumes
///
/// One page of the catalog plus the total count for the filter set.
pub async fn list_perfumes(
    State(state): State<AppState>,
    Query(params): Query<PerfumeListParams>,
) -> AppResult<impl IntoResponse> {
    let window = params.window()?;
    let predicates = params.filters().predicates()?;

    let page = PerfumeRepo::list_page(&state.pool, &predicates, window, None).await?;

    Ok(Json(page))
}

/// GET /api/v1/perfumes/search
///
/// Same shape as the list, with an additional case-insensitive substring
/// match on the name. An empty query degrades to the plain filtered list.
pub async fn search_perfumes(
    State(state): State<AppState>,
    Query(params): Query<PerfumeSearchParams>,
) -> AppResult<impl IntoResponse> {
    let window = params.window()?;
    let predicates = params.filters().predicates()?;
    let pattern = params.q.as_deref().and_then(ilike_pattern);

    let page =
        PerfumeRepo::list_page(&state.pool, &predicates, window, pattern.as_deref()).await?;

    Ok(Json(page))
}

/// GET /api/v1/perfumes/{id}
///
/// Fully denormalized detail, or 404 when the id does not exist.
pub async fn get_perfume(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = PerfumeRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Perfume",
            id,
        }))?;

    Ok(Json(DataResponse { data: detail }))
}

/// POST /api/v1/perfumes
pub async fn create_perfume(
    State(state): State<AppState>,
    Json(input): Json<CreatePerfume>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name must not be empty".to_string(),
        )));
    }

    let perfume = PerfumeRepo::create(&state.pool, &input).await?;

    tracing::info!(perfume_id = perfume.id, name = %perfume.name, "Perfume created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: perfume })))
}

/// PUT /api/v1/perfumes/{id}
///
/// Partial update: only fields present in the payload are applied.
pub async fn update_perfume(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePerfume>,
) -> AppResult<impl IntoResponse> {
    let perfume = PerfumeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Perfume",
            id,
        }))?;

    Ok(Json(DataResponse { data: perfume }))
}

/// DELETE /api/v1/perfumes/{id}
pub async fn delete_perfume(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PerfumeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Perfume",
            id,
        }));
    }

    tracing::info!(perfume_id = id, "Perfume deleted");

    Ok(StatusCode::NO_CONTENT)
}
