//! Handlers for notes: paginated list, typeahead search, detail fetch.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use sillage_core::error::CoreError;
use sillage_core::search::ilike_pattern;
use sillage_core::types::DbId;
use sillage_db::models::note::NoteFilters;
use sillage_db::repositories::note_repo::DEFAULT_TYPEAHEAD_LIMIT;
use sillage_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::query::{NoteListParams, NoteSearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/notes
pub async fn list_notes(
    State(state): State<AppState>,
    Query(params): Query<NoteListParams>,
) -> AppResult<impl IntoResponse> {
    let window = params.window()?;
    let filters = NoteFilters {
        family_id: params.family_id,
        mood_id: params.mood_id,
    };

    let page = NoteRepo::list_page(&state.pool, &filters, window).await?;

    Ok(Json(page))
}

/// GET /api/v1/notes/search
///
/// Name typeahead. An empty query returns no suggestions.
pub async fn search_notes(
    State(state): State<AppState>,
    Query(params): Query<NoteSearchParams>,
) -> AppResult<impl IntoResponse> {
    let notes = match params.q.as_deref().and_then(ilike_pattern) {
        Some(pattern) => {
            let limit = params.limit.unwrap_or(DEFAULT_TYPEAHEAD_LIMIT);
            NoteRepo::search(&state.pool, &pattern, limit).await?
        }
        None => Vec::new(),
    };

    Ok(Json(DataResponse { data: notes }))
}

/// GET /api/v1/notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = NoteRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Note", id }))?;

    Ok(Json(DataResponse { data: detail }))
}
