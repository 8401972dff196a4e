//! Shared response envelope types for API handlers.
//!
//! Single-object responses use a `{ "data": ... }` envelope; list endpoints
//! return the `{ "data": [...], "count": n }` page envelope from
//! `sillage_db::models::Page` directly.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
