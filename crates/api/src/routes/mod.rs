pub mod health;
pub mod lookups;
pub mod notes;
pub mod perfumes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /perfumes                 list, create
/// /perfumes/search          list + free-text query
/// /perfumes/{id}            detail, update, delete
/// /notes                    list
/// /notes/search             name typeahead
/// /notes/{id}               detail
/// /brands                   lookup list
/// /families                 lookup list
/// /types                    lookup list
/// /concentrations           lookup list
/// /countries                lookup list
/// /perfumers                lookup list
/// /moods                    lookup list
/// /accords                  lookup list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(perfumes::router())
        .merge(notes::router())
        .merge(lookups::router())
}
