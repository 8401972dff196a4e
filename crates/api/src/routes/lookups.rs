//! Route definitions for the filter-dropdown lookup lists.

use axum::routing::get;
use axum::Router;

use crate::handlers::lookups;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/brands", get(lookups::list_brands))
        .route("/families", get(lookups::list_families))
        .route("/types", get(lookups::list_types))
        .route("/concentrations", get(lookups::list_concentrations))
        .route("/countries", get(lookups::list_countries))
        .route("/perfumers", get(lookups::list_perfumers))
        .route("/moods", get(lookups::list_moods))
        .route("/accords", get(lookups::list_accords))
}
