//! Query parameter types for list and search endpoints.
//!
//! All structs reject unrecognized keys (`deny_unknown_fields`): a typo'd
//! filter key is a 400, not a silently unfiltered list.

use serde::Deserialize;
use sillage_core::error::CoreError;
use sillage_core::filter::FilterSelection;
use sillage_core::page::{PageWindow, DEFAULT_PAGE_SIZE};
use sillage_core::types::DbId;

/// Parameters for `GET /perfumes`: pagination plus the recognized filter keys.
///
/// Filter values arrive as raw strings; `"all"` (or absence) means no
/// constraint for that key.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerfumeListParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub gender: Option<String>,
    pub brand_id: Option<String>,
    pub concentration_id: Option<String>,
    pub season: Option<String>,
    pub family_id: Option<String>,
}

impl PerfumeListParams {
    pub fn window(&self) -> Result<PageWindow, CoreError> {
        PageWindow::new(self.page.unwrap_or(1), self.size.unwrap_or(DEFAULT_PAGE_SIZE))
    }

    pub fn filters(&self) -> FilterSelection {
        FilterSelection {
            gender: self.gender.clone(),
            brand_id: self.brand_id.clone(),
            concentration_id: self.concentration_id.clone(),
            season: self.season.clone(),
            family_id: self.family_id.clone(),
        }
    }
}

/// Parameters for `GET /perfumes/search`: the list parameters plus a
/// free-text query. An empty or whitespace-only `q` applies no text
/// predicate.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerfumeSearchParams {
    pub q: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub gender: Option<String>,
    pub brand_id: Option<String>,
    pub concentration_id: Option<String>,
    pub season: Option<String>,
    pub family_id: Option<String>,
}

impl PerfumeSearchParams {
    pub fn window(&self) -> Result<PageWindow, CoreError> {
        PageWindow::new(self.page.unwrap_or(1), self.size.unwrap_or(DEFAULT_PAGE_SIZE))
    }

    pub fn filters(&self) -> FilterSelection {
        FilterSelection {
            gender: self.gender.clone(),
            brand_id: self.brand_id.clone(),
            concentration_id: self.concentration_id.clone(),
            season: self.season.clone(),
            family_id: self.family_id.clone(),
        }
    }
}

/// Parameters for `GET /notes`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoteListParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub family_id: Option<DbId>,
    pub mood_id: Option<DbId>,
}

impl NoteListParams {
    pub fn window(&self) -> Result<PageWindow, CoreError> {
        PageWindow::new(self.page.unwrap_or(1), self.size.unwrap_or(DEFAULT_PAGE_SIZE))
    }
}

/// Parameters for `GET /notes/search` (typeahead).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoteSearchParams {
    pub q: Option<String>,
    pub limit: Option<i64>,
}
