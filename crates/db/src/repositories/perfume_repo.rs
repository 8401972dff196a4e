//! Repository for the `perfumes` table and its junction tables.
//!
//! List queries compose a dynamic WHERE clause from the typed predicate set
//! built by `sillage_core::filter`, then run the data query and the matching
//! count query as one combined fetch: both are launched together and joined,
//! and a failure of either aborts the whole operation.

use sillage_core::filter::{Predicate, Term};
use sillage_core::page::PageWindow;
use sillage_core::types::DbId;
use sqlx::PgPool;

use crate::models::lookup::LookupEntry;
use crate::models::perfume::{
    CreatePerfume, Perfume, PerfumeDetail, PerfumeDetailRow, PerfumeNoteRow, PerfumeSummary,
    UpdatePerfume,
};
use crate::models::Page;

/// Column list for `perfumes` queries.
const PERFUME_COLUMNS: &str = "\
    id, name, local_image_path, category, description, inspiration, \
    gender, longevity, sillage, release_year, season, occasion, \
    brand_id, family_id, type_id, concentration_id, country_id, perfumer_id, \
    created_at";

/// Provides catalog queries and CRUD for perfumes.
pub struct PerfumeRepo;

impl PerfumeRepo {
    // -----------------------------------------------------------------------
    // Paginated list / search
    // -----------------------------------------------------------------------

    /// Fetch one page of the catalog plus the total row count for the same
    /// predicate set.
    ///
    /// `name_pattern` is an optional pre-escaped ILIKE pattern; when present
    /// it is ANDed with the attribute predicates. Rows are ordered by id so
    /// page boundaries stay stable across requests.
    pub async fn list_page(
        pool: &PgPool,
        predicates: &[Predicate],
        window: PageWindow,
        name_pattern: Option<&str>,
    ) -> Result<Page<PerfumeSummary>, sqlx::Error> {
        // Build dynamic WHERE clauses. Column names come from the closed
        // predicate set, never from user input.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        for predicate in predicates {
            match predicate {
                Predicate::Eq { column, .. } => {
                    conditions.push(format!("p.{column} = ${bind_idx}"));
                }
                Predicate::Contains { column, .. } => {
                    conditions.push(format!("${bind_idx} = ANY(p.{column})"));
                }
            }
            bind_idx += 1;
        }
        if name_pattern.is_some() {
            conditions.push(format!("p.name ILIKE ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        tracing::debug!(
            predicates = predicates.len(),
            text_search = name_pattern.is_some(),
            limit = window.limit,
            offset = window.offset,
            "Listing perfumes"
        );

        let data_query = format!(
            "SELECT p.id, p.name, p.local_image_path, p.brand_id, b.name AS brand_name \
             FROM perfumes p \
             LEFT JOIN brands b ON b.id = p.brand_id \
             {where_clause} \
             ORDER BY p.id \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            where_clause = where_clause,
            bind_idx = bind_idx,
            next_idx = bind_idx + 1,
        );
        let count_query = format!("SELECT COUNT(*) FROM perfumes p {where_clause}");

        let mut data_q = sqlx::query_as::<_, PerfumeSummary>(&data_query);
        let mut count_q = sqlx::query_scalar::<_, i64>(&count_query);

        // Bind predicate values to both queries in the same order.
        for predicate in predicates {
            match predicate {
                Predicate::Eq {
                    value: Term::Id(id),
                    ..
                } => {
                    data_q = data_q.bind(*id);
                    count_q = count_q.bind(*id);
                }
                Predicate::Eq {
                    value: Term::Text(text),
                    ..
                } => {
                    data_q = data_q.bind(text.as_str());
                    count_q = count_q.bind(text.as_str());
                }
                Predicate::Contains { value, .. } => {
                    data_q = data_q.bind(value.as_str());
                    count_q = count_q.bind(value.as_str());
                }
            }
        }
        if let Some(pattern) = name_pattern {
            data_q = data_q.bind(pattern);
            count_q = count_q.bind(pattern);
        }
        data_q = data_q.bind(window.limit).bind(window.offset);

        // Launch both requests without waiting for one another; the count
        // may observe a different snapshot than the data page, which is
        // accepted.
        let (data, count) = tokio::try_join!(data_q.fetch_all(pool), count_q.fetch_one(pool))?;

        Ok(Page { data, count })
    }

    // -----------------------------------------------------------------------
    // Detail fetch
    // -----------------------------------------------------------------------

    /// Fetch a single perfume with all relation references expanded: lookup
    /// names joined inline, notes and accords via their junction tables.
    ///
    /// Returns `None` when no row matches. The id is the primary key, so at
    /// most one row can match.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<PerfumeDetail>, sqlx::Error> {
        let detail_query = "\
            SELECT p.id, p.name, p.local_image_path, p.category, p.description, \
                   p.inspiration, p.gender, p.longevity, p.sillage, p.release_year, \
                   p.season, p.occasion, \
                   p.brand_id, p.family_id, p.type_id, p.concentration_id, \
                   p.country_id, p.perfumer_id, p.created_at, \
                   b.name AS brand_name, f.name AS family_name, t.name AS type_name, \
                   c.name AS concentration_name, co.name AS country_name, \
                   pf.name AS perfumer_name \
            FROM perfumes p \
            LEFT JOIN brands b ON b.id = p.brand_id \
            LEFT JOIN families f ON f.id = p.family_id \
            LEFT JOIN types t ON t.id = p.type_id \
            LEFT JOIN concentrations c ON c.id = p.concentration_id \
            LEFT JOIN countries co ON co.id = p.country_id \
            LEFT JOIN perfumers pf ON pf.id = p.perfumer_id \
            WHERE p.id = $1";

        let row = sqlx::query_as::<_, PerfumeDetailRow>(detail_query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };

        let notes_q = sqlx::query_as::<_, PerfumeNoteRow>(
            "SELECT pn.note_type, n.id, n.name, n.image_filename \
             FROM perfume_notes pn \
             JOIN notes n ON n.id = pn.note_id \
             WHERE pn.perfume_id = $1 \
             ORDER BY pn.id",
        )
        .bind(id)
        .fetch_all(pool);

        let accords_q = sqlx::query_as::<_, LookupEntry>(
            "SELECT ma.id, ma.name \
             FROM perfume_accords pa \
             JOIN main_accords ma ON ma.id = pa.accord_id \
             WHERE pa.perfume_id = $1 \
             ORDER BY ma.name",
        )
        .bind(id)
        .fetch_all(pool);

        let (notes, accords) = tokio::try_join!(notes_q, accords_q)?;

        Ok(Some(assemble_detail(row, notes, accords)))
    }

    // -----------------------------------------------------------------------
    // CRUD
    // -----------------------------------------------------------------------

    /// Register a new perfume.
    pub async fn create(pool: &PgPool, input: &CreatePerfume) -> Result<Perfume, sqlx::Error> {
        let season = input.season.clone().unwrap_or_default();
        let occasion = input.occasion.clone().unwrap_or_default();

        let query = format!(
            "INSERT INTO perfumes (\
                name, local_image_path, category, description, inspiration, \
                gender, longevity, sillage, release_year, season, occasion, \
                brand_id, family_id, type_id, concentration_id, country_id, \
                perfumer_id\
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, \
                       $13, $14, $15, $16, $17) \
             RETURNING {PERFUME_COLUMNS}"
        );
        sqlx::query_as::<_, Perfume>(&query)
            .bind(&input.name)
            .bind(input.local_image_path.as_deref())
            .bind(input.category.as_deref())
            .bind(input.description.as_deref())
            .bind(input.inspiration.as_deref())
            .bind(input.gender.as_deref())
            .bind(input.longevity.as_deref())
            .bind(input.sillage.as_deref())
            .bind(input.release_year)
            .bind(&season)
            .bind(&occasion)
            .bind(input.brand_id)
            .bind(input.family_id)
            .bind(input.type_id)
            .bind(input.concentration_id)
            .bind(input.country_id)
            .bind(input.perfumer_id)
            .fetch_one(pool)
            .await
    }

    /// Update a perfume. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePerfume,
    ) -> Result<Option<Perfume>, sqlx::Error> {
        let query = format!(
            "UPDATE perfumes SET \
                name = COALESCE($2, name), \
                local_image_path = COALESCE($3, local_image_path), \
                category = COALESCE($4, category), \
                description = COALESCE($5, description), \
                inspiration = COALESCE($6, inspiration), \
                gender = COALESCE($7, gender), \
                longevity = COALESCE($8, longevity), \
                sillage = COALESCE($9, sillage), \
                release_year = COALESCE($10, release_year), \
                season = COALESCE($11, season), \
                occasion = COALESCE($12, occasion), \
                brand_id = COALESCE($13, brand_id), \
                family_id = COALESCE($14, family_id), \
                type_id = COALESCE($15, type_id), \
                concentration_id = COALESCE($16, concentration_id), \
                country_id = COALESCE($17, country_id), \
                perfumer_id = COALESCE($18, perfumer_id) \
             WHERE id = $1 \
             RETURNING {PERFUME_COLUMNS}"
        );
        sqlx::query_as::<_, Perfume>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.local_image_path.as_deref())
            .bind(input.category.as_deref())
            .bind(input.description.as_deref())
            .bind(input.inspiration.as_deref())
            .bind(input.gender.as_deref())
            .bind(input.longevity.as_deref())
            .bind(input.sillage.as_deref())
            .bind(input.release_year)
            .bind(input.season.as_ref())
            .bind(input.occasion.as_ref())
            .bind(input.brand_id)
            .bind(input.family_id)
            .bind(input.type_id)
            .bind(input.concentration_id)
            .bind(input.country_id)
            .bind(input.perfumer_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a perfume by ID. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM perfumes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Build a lookup reference from an optional FK id and its joined name.
fn lookup_ref(id: Option<DbId>, name: Option<String>) -> Option<LookupEntry> {
    match (id, name) {
        (Some(id), Some(name)) => Some(LookupEntry { id, name }),
        _ => None,
    }
}

fn assemble_detail(
    row: PerfumeDetailRow,
    notes: Vec<PerfumeNoteRow>,
    accords: Vec<LookupEntry>,
) -> PerfumeDetail {
    let brand = lookup_ref(row.brand_id, row.brand_name);
    let family = lookup_ref(row.family_id, row.family_name);
    let kind = lookup_ref(row.type_id, row.type_name);
    let concentration = lookup_ref(row.concentration_id, row.concentration_name);
    let country = lookup_ref(row.country_id, row.country_name);
    let perfumer = lookup_ref(row.perfumer_id, row.perfumer_name);

    PerfumeDetail {
        perfume: Perfume {
            id: row.id,
            name: row.name,
            local_image_path: row.local_image_path,
            category: row.category,
            description: row.description,
            inspiration: row.inspiration,
            gender: row.gender,
            longevity: row.longevity,
            sillage: row.sillage,
            release_year: row.release_year,
            season: row.season,
            occasion: row.occasion,
            brand_id: row.brand_id,
            family_id: row.family_id,
            type_id: row.type_id,
            concentration_id: row.concentration_id,
            country_id: row.country_id,
            perfumer_id: row.perfumer_id,
            created_at: row.created_at,
        },
        brand,
        family,
        kind,
        concentration,
        country,
        perfumer,
        notes: notes.into_iter().map(Into::into).collect(),
        accords,
    }
}
