//! Repository for the `{id, name}` lookup tables that populate the filter
//! dropdowns.

use sqlx::PgPool;

use crate::models::lookup::LookupEntry;

/// Read access to the lookup tables. Table names are fixed constants; no
/// caller input reaches the query text.
pub struct LookupRepo;

impl LookupRepo {
    async fn list(pool: &PgPool, table: &'static str) -> Result<Vec<LookupEntry>, sqlx::Error> {
        let query = format!("SELECT id, name FROM {table} ORDER BY name");
        sqlx::query_as::<_, LookupEntry>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn list_brands(pool: &PgPool) -> Result<Vec<LookupEntry>, sqlx::Error> {
        Self::list(pool, "brands").await
    }

    pub async fn list_families(pool: &PgPool) -> Result<Vec<LookupEntry>, sqlx::Error> {
        Self::list(pool, "families").await
    }

    pub async fn list_types(pool: &PgPool) -> Result<Vec<LookupEntry>, sqlx::Error> {
        Self::list(pool, "types").await
    }

    pub async fn list_concentrations(pool: &PgPool) -> Result<Vec<LookupEntry>, sqlx::Error> {
        Self::list(pool, "concentrations").await
    }

    pub async fn list_countries(pool: &PgPool) -> Result<Vec<LookupEntry>, sqlx::Error> {
        Self::list(pool, "countries").await
    }

    pub async fn list_perfumers(pool: &PgPool) -> Result<Vec<LookupEntry>, sqlx::Error> {
        Self::list(pool, "perfumers").await
    }

    pub async fn list_moods(pool: &PgPool) -> Result<Vec<LookupEntry>, sqlx::Error> {
        Self::list(pool, "moods").await
    }

    pub async fn list_main_accords(pool: &PgPool) -> Result<Vec<LookupEntry>, sqlx::Error> {
        Self::list(pool, "main_accords").await
    }
}
