use serde::Serialize;
use sillage_core::types::DbId;
use sqlx::FromRow;

/// A row from any of the `{id, name}` lookup tables (brands, families,
/// types, concentrations, countries, perfumers, moods, main_accords).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct LookupEntry {
    pub id: DbId,
    pub name: String,
}
