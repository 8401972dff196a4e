//! Route definitions for the perfume catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::perfumes;
use crate::state::AppState;

/// Perfume routes mounted at `/perfumes`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/perfumes",
            get(perfumes::list_perfumes).post(perfumes::create_perfume),
        )
        .route("/perfumes/search", get(perfumes::search_perfumes))
        .route(
            "/perfumes/{id}",
            get(perfumes::get_perfume)
                .put(perfumes::update_perfume)
                .delete(perfumes::delete_perfume),
        )
}
