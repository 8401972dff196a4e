//! Route definitions for notes.

use axum::routing::get;
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes mounted at `/notes`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notes", get(notes::list_notes))
        .route("/notes/search", get(notes::search_notes))
        .route("/notes/{id}", get(notes::get_note))
}
