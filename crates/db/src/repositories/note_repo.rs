//! Repository for the `notes` table and its mood junction.

use sillage_core::page::PageWindow;
use sillage_core::types::DbId;
use sqlx::PgPool;

use crate::models::lookup::LookupEntry;
use crate::models::note::{Note, NoteDetail, NoteFilters, NoteSummary};
use crate::models::Page;

/// Column list for `notes` queries.
const NOTE_COLUMNS: &str = "\
    id, name, image_filename, description, source, cultural_significance, \
    normalized_name, family_id";

/// Default number of typeahead suggestions.
pub const DEFAULT_TYPEAHEAD_LIMIT: i64 = 10;

/// Maximum number of typeahead suggestions.
pub const MAX_TYPEAHEAD_LIMIT: i64 = 25;

/// Provides list, search and detail queries for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Fetch one page of notes plus the total count for the same filters.
    ///
    /// The mood filter goes through the `note_moods` junction; both filters
    /// are conjunctive. Same combined-fetch contract as the perfume list.
    pub async fn list_page(
        pool: &PgPool,
        filters: &NoteFilters,
        window: PageWindow,
    ) -> Result<Page<NoteSummary>, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filters.family_id.is_some() {
            conditions.push(format!("n.family_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if filters.mood_id.is_some() {
            conditions.push(format!(
                "EXISTS (SELECT 1 FROM note_moods nm \
                 WHERE nm.note_id = n.id AND nm.mood_id = ${bind_idx})"
            ));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let data_query = format!(
            "SELECT n.id, n.name, n.image_filename \
             FROM notes n \
             {where_clause} \
             ORDER BY n.id \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            where_clause = where_clause,
            bind_idx = bind_idx,
            next_idx = bind_idx + 1,
        );
        let count_query = format!("SELECT COUNT(*) FROM notes n {where_clause}");

        let mut data_q = sqlx::query_as::<_, NoteSummary>(&data_query);
        let mut count_q = sqlx::query_scalar::<_, i64>(&count_query);

        if let Some(family_id) = filters.family_id {
            data_q = data_q.bind(family_id);
            count_q = count_q.bind(family_id);
        }
        if let Some(mood_id) = filters.mood_id {
            data_q = data_q.bind(mood_id);
            count_q = count_q.bind(mood_id);
        }
        data_q = data_q.bind(window.limit).bind(window.offset);

        let (data, count) = tokio::try_join!(data_q.fetch_all(pool), count_q.fetch_one(pool))?;

        Ok(Page { data, count })
    }

    /// Name typeahead: case-insensitive substring match, ordered by name.
    pub async fn search(
        pool: &PgPool,
        name_pattern: &str,
        limit: i64,
    ) -> Result<Vec<NoteSummary>, sqlx::Error> {
        sqlx::query_as::<_, NoteSummary>(
            "SELECT n.id, n.name, n.image_filename \
             FROM notes n \
             WHERE n.name ILIKE $1 \
             ORDER BY n.name \
             LIMIT $2",
        )
        .bind(name_pattern)
        .bind(limit.clamp(1, MAX_TYPEAHEAD_LIMIT))
        .fetch_all(pool)
        .await
    }

    /// Fetch a note with its family and moods expanded inline.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<NoteDetail>, sqlx::Error> {
        let query = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = $1");
        let note = sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        let Some(note) = note else {
            return Ok(None);
        };

        let moods = sqlx::query_as::<_, LookupEntry>(
            "SELECT m.id, m.name \
             FROM note_moods nm \
             JOIN moods m ON m.id = nm.mood_id \
             WHERE nm.note_id = $1 \
             ORDER BY m.name",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let family = match note.family_id {
            Some(family_id) => {
                sqlx::query_as::<_, LookupEntry>("SELECT id, name FROM families WHERE id = $1")
                    .bind(family_id)
                    .fetch_optional(pool)
                    .await?
            }
            None => None,
        };

        Ok(Some(NoteDetail {
            note,
            family,
            moods,
        }))
    }
}
