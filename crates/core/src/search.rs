//! Text search helpers for catalog queries.
//!
//! Catalog search uses case-insensitive substring matching (`ILIKE`) rather
//! than provider full-text search: results are a plain filtered set with no
//! ranking, which keeps search composable with the conjunctive attribute
//! filters and makes an empty query exactly equivalent to no text predicate.

/// Build an `ILIKE` pattern from raw user input.
///
/// Returns `None` for empty or whitespace-only input (no text predicate).
/// Otherwise escapes the LIKE metacharacters `%`, `_` and `\` and wraps the
/// term in `%...%` so it matches anywhere in the target column.
pub fn ilike_pattern(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut escaped = String::with_capacity(trimmed.len() + 2);
    escaped.push('%');
    for c in trimmed.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    Some(escaped)
}
