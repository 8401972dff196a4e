//! Note models and DTOs.

use serde::{Deserialize, Serialize};
use sillage_core::types::DbId;
use sqlx::FromRow;

use crate::models::lookup::LookupEntry;

/// Projection used in note lists and typeahead results.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NoteSummary {
    pub id: DbId,
    pub name: String,
    pub image_filename: Option<String>,
}

/// A full row from the `notes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Note {
    pub id: DbId,
    pub name: String,
    pub image_filename: Option<String>,
    pub description: Option<String>,
    pub source: Option<String>,
    pub cultural_significance: Option<String>,
    pub normalized_name: Option<String>,
    pub family_id: Option<DbId>,
}

/// A note with its relation references expanded inline.
#[derive(Debug, Clone, Serialize)]
pub struct NoteDetail {
    #[serde(flatten)]
    pub note: Note,
    pub family: Option<LookupEntry>,
    pub moods: Vec<LookupEntry>,
}

/// Optional filters for the paginated note list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteFilters {
    pub family_id: Option<DbId>,
    pub mood_id: Option<DbId>,
}
