//! Perfume models and DTOs.

use serde::{Deserialize, Serialize};
use sillage_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::lookup::LookupEntry;
use crate::models::note::NoteSummary;

/// A full row from the `perfumes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Perfume {
    pub id: DbId,
    pub name: String,
    pub local_image_path: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub inspiration: Option<String>,
    pub gender: Option<String>,
    pub longevity: Option<String>,
    pub sillage: Option<String>,
    pub release_year: Option<i32>,
    pub season: Vec<String>,
    pub occasion: Vec<String>,
    pub brand_id: Option<DbId>,
    pub family_id: Option<DbId>,
    pub type_id: Option<DbId>,
    pub concentration_id: Option<DbId>,
    pub country_id: Option<DbId>,
    pub perfumer_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// Projection used in the paginated catalog list: the card grid needs the
/// name, the image, and the resolved brand name only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PerfumeSummary {
    pub id: DbId,
    pub name: String,
    pub local_image_path: Option<String>,
    pub brand_id: Option<DbId>,
    pub brand_name: Option<String>,
}

/// A perfume with all relation references expanded inline: lookup entities
/// one level deep, notes and accords through their junction tables.
#[derive(Debug, Clone, Serialize)]
pub struct PerfumeDetail {
    #[serde(flatten)]
    pub perfume: Perfume,
    pub brand: Option<LookupEntry>,
    pub family: Option<LookupEntry>,
    #[serde(rename = "type")]
    pub kind: Option<LookupEntry>,
    pub concentration: Option<LookupEntry>,
    pub country: Option<LookupEntry>,
    pub perfumer: Option<LookupEntry>,
    pub notes: Vec<PerfumeNoteEntry>,
    pub accords: Vec<LookupEntry>,
}

/// A note attached to a perfume, tagged with its pyramid role.
#[derive(Debug, Clone, Serialize)]
pub struct PerfumeNoteEntry {
    pub note_type: String,
    pub note: NoteSummary,
}

/// Flat row shape for the perfume-note junction query.
#[derive(Debug, Clone, FromRow)]
pub struct PerfumeNoteRow {
    pub note_type: String,
    pub id: DbId,
    pub name: String,
    pub image_filename: Option<String>,
}

impl From<PerfumeNoteRow> for PerfumeNoteEntry {
    fn from(row: PerfumeNoteRow) -> Self {
        Self {
            note_type: row.note_type,
            note: NoteSummary {
                id: row.id,
                name: row.name,
                image_filename: row.image_filename,
            },
        }
    }
}

/// Flat row shape for the detail query: the perfume row joined with the
/// names of all its lookup references.
#[derive(Debug, Clone, FromRow)]
pub struct PerfumeDetailRow {
    pub id: DbId,
    pub name: String,
    pub local_image_path: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub inspiration: Option<String>,
    pub gender: Option<String>,
    pub longevity: Option<String>,
    pub sillage: Option<String>,
    pub release_year: Option<i32>,
    pub season: Vec<String>,
    pub occasion: Vec<String>,
    pub brand_id: Option<DbId>,
    pub family_id: Option<DbId>,
    pub type_id: Option<DbId>,
    pub concentration_id: Option<DbId>,
    pub country_id: Option<DbId>,
    pub perfumer_id: Option<DbId>,
    pub created_at: Timestamp,
    pub brand_name: Option<String>,
    pub family_name: Option<String>,
    pub type_name: Option<String>,
    pub concentration_name: Option<String>,
    pub country_name: Option<String>,
    pub perfumer_name: Option<String>,
}

/// Payload for registering a new perfume. Junction rows (notes, accords)
/// are managed separately.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePerfume {
    pub name: String,
    pub local_image_path: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub inspiration: Option<String>,
    pub gender: Option<String>,
    pub longevity: Option<String>,
    pub sillage: Option<String>,
    pub release_year: Option<i32>,
    pub season: Option<Vec<String>>,
    pub occasion: Option<Vec<String>>,
    pub brand_id: Option<DbId>,
    pub family_id: Option<DbId>,
    pub type_id: Option<DbId>,
    pub concentration_id: Option<DbId>,
    pub country_id: Option<DbId>,
    pub perfumer_id: Option<DbId>,
}

/// Partial update payload. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePerfume {
    pub name: Option<String>,
    pub local_image_path: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub inspiration: Option<String>,
    pub gender: Option<String>,
    pub longevity: Option<String>,
    pub sillage: Option<String>,
    pub release_year: Option<i32>,
    pub season: Option<Vec<String>>,
    pub occasion: Option<Vec<String>>,
    pub brand_id: Option<DbId>,
    pub family_id: Option<DbId>,
    pub type_id: Option<DbId>,
    pub concentration_id: Option<DbId>,
    pub country_id: Option<DbId>,
    pub perfumer_id: Option<DbId>,
}
